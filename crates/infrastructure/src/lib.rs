//! K-Resolver Infrastructure Layer
pub mod asn;
pub mod database;
pub mod dns;
pub mod repositories;
