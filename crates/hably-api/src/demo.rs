// Demo server connection
//
// Demo mode points the client at the public demo server instead of a user
// configured one. No credentials are involved.

use crate::connection::{Connection, ConnectionKind};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Base URL of the public demo server.
pub const DEMO_BASE_URL: &str = "https://demo.openhab.org:8443/";

impl Connection {
    /// Connection to the public demo server.
    pub fn demo(transport: &TransportConfig) -> Result<Self, Error> {
        Self::new(ConnectionKind::Demo, DEMO_BASE_URL, None, None, transport)
    }
}
