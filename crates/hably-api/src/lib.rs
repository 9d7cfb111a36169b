// hably-api: Async Rust client for openHAB server connections (OH1 + OH2)

pub mod cloud;
pub mod connection;
pub mod demo;
pub mod error;
pub mod generation;
pub mod legacy;
pub mod rest;
pub mod transport;

pub use cloud::CloudConnection;
pub use connection::{Connection, ConnectionKind};
pub use error::Error;
pub use generation::ServerGeneration;
pub use transport::{TlsMode, TransportConfig};
