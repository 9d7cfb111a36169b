// Shared transport configuration for building reqwest clients.
//
// A connection owns one async and one blocking client; both are built here
// so TLS, timeout, and auth settings never diverge between the pair.

use std::path::{Path, PathBuf};
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::Error;

const USER_AGENT: &str = concat!("hably/", env!("CARGO_PKG_VERSION"));

/// TLS verification mode.
#[derive(Debug, Clone, Default)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Use a custom CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (for self-signed local servers).
    DangerAcceptInvalid,
}

/// Shared transport configuration for building HTTP clients.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Duration::from_secs(30),
        }
    }
}

impl TransportConfig {
    /// Build the async `reqwest::Client` for a connection.
    pub(crate) fn build_async_client(
        &self,
        auth: Option<&HeaderValue>,
    ) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(default_headers(auth));

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                builder = builder.add_root_certificate(read_ca_cert(path)?);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }

    /// Build the blocking `reqwest::blocking::Client` paired with the async
    /// one. The blocking client drives its own worker thread; construction
    /// is safe anywhere, but its requests must stay off async threads.
    pub(crate) fn build_blocking_client(
        &self,
        auth: Option<&HeaderValue>,
    ) -> Result<reqwest::blocking::Client, Error> {
        let mut builder = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .default_headers(default_headers(auth));

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                builder = builder.add_root_certificate(read_ca_cert(path)?);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

fn default_headers(auth: Option<&HeaderValue>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(value) = auth {
        headers.insert(AUTHORIZATION, value.clone());
    }
    headers
}

fn read_ca_cert(path: &Path) -> Result<reqwest::Certificate, Error> {
    let cert_pem =
        std::fs::read(path).map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
    reqwest::Certificate::from_pem(&cert_pem)
        .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))
}

/// `Authorization: Basic ...` header value for the given credentials.
pub(crate) fn basic_auth_header(
    username: &str,
    password: &SecretString,
) -> Result<HeaderValue, Error> {
    let token = BASE64.encode(format!("{username}:{}", password.expose_secret()));
    let mut value = HeaderValue::from_str(&format!("Basic {token}"))
        .map_err(|e| Error::Credentials(e.to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn basic_auth_header_encodes_credentials() {
        let password: SecretString = "pass".to_string().into();
        let value = basic_auth_header("user", &password).unwrap();
        assert!(value.is_sensitive());
        // "user:pass" in base64
        assert_eq!(value.to_str().unwrap(), "Basic dXNlcjpwYXNz");
    }
}
