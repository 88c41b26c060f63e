pub mod web;

pub use web::{bind_addr, start_web_server};
