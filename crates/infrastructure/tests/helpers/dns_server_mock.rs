#![allow(dead_code)]
use std::net::SocketAddr;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// The answer address every successful mock reply carries.
pub const MOCK_ANSWER: [u8; 4] = [93, 184, 216, 34];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockReply {
    /// One A record pointing at `MOCK_ANSWER`, whatever the question type.
    Answer,
    NxDomain,
    ServFail,
    /// UDP reply with TC set and no answers; TCP on the same port answers fully.
    Truncated,
    /// Reply with a different message id.
    WrongId,
    /// Never replies.
    Silent,
}

pub struct MockDnsServer {
    addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let listener = TcpListener::bind(addr).await?;

        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            if reply == MockReply::Silent {
                                continue;
                            }
                            let response = Self::build_response(&buf[..len], reply);
                            let _ = socket.send_to(&response, peer).await;
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = Self::build_response(&query, MockReply::Answer);
                                let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    fn build_response(query: &[u8], reply: MockReply) -> Vec<u8> {
        if query.len() < 12 {
            return vec![];
        }

        let mut response = Vec::with_capacity(512);

        if reply == MockReply::WrongId {
            response.extend_from_slice(&[query[0] ^ 0xff, query[1]]);
        } else {
            response.extend_from_slice(&query[0..2]);
        }

        let (flags_hi, flags_lo) = match reply {
            MockReply::NxDomain => (0x81, 0x83),
            MockReply::ServFail => (0x81, 0x82),
            MockReply::Truncated => (0x83, 0x80),
            _ => (0x81, 0x80),
        };
        response.push(flags_hi);
        response.push(flags_lo);

        // QDCOUNT copied from the query
        response.extend_from_slice(&query[4..6]);

        let with_answer = matches!(reply, MockReply::Answer | MockReply::WrongId);
        response.extend_from_slice(if with_answer { &[0x00, 0x01] } else { &[0x00, 0x00] });

        // NSCOUNT, ARCOUNT
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);

        response.extend_from_slice(&query[12..]);

        if with_answer {
            response.extend_from_slice(&[
                0xc0, 0x0c, // pointer to the question name
                0x00, 0x01, // TYPE A
                0x00, 0x01, // CLASS IN
                0x00, 0x00, 0x00, 0x3c, // TTL 60
                0x00, 0x04,
            ]);
            response.extend_from_slice(&MOCK_ANSWER);
        }

        response
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
