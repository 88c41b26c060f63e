pub mod bgpview;

pub use bgpview::BgpViewAsnLookup;
