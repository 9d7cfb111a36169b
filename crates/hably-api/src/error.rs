use thiserror::Error;

/// Top-level error type for the `hably-api` crate.
///
/// Covers transport, URL construction, and payload failures across both
/// wire surfaces. Probes (reachability, cloud capability) never surface
/// through this type -- they collapse failures into `false` / `None`.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configured credentials cannot be carried in an HTTP header.
    #[error("Invalid credentials: {0}")]
    Credentials(String),

    /// The server answered with a status outside the 2xx range.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body matched neither known schema, with the raw body
    /// retained for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// TLS setup or client construction error.
    #[error("TLS error: {0}")]
    Tls(String),
}
