// Connection model
//
// A `Connection` describes one reachable openHAB endpoint: which base URL,
// credentials, and HTTP clients an operation should use. Specialized
// connections (cloud) derive from a base connection and share its clients.

use std::hash::{Hash, Hasher};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::{TransportConfig, basic_auth_header};

/// Socket connect timeout for the reachability probe.
const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(1);

/// Which role a connection plays for the current process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionKind {
    /// Server on the same network segment, usually a private address.
    Local,
    /// Server reachable across the internet, often behind a reverse proxy.
    Remote,
    /// Hosted relay service used for remote access and push notifications.
    Cloud,
    /// The public demo server.
    Demo,
}

/// A reachable openHAB endpoint plus the HTTP clients used to talk to it.
///
/// Both clients are built once at construction and reused for every call.
/// Basic-Auth credentials are attached to both when username and password
/// are both non-empty. A connection is immutable once built, so sharing it
/// across threads needs no locking; identity is defined by the
/// `(kind, base URL, username, password)` tuple.
#[derive(Debug, Clone)]
pub struct Connection {
    kind: ConnectionKind,
    base_url: Url,
    username: Option<String>,
    password: Option<SecretString>,
    http: reqwest::Client,
    blocking_http: reqwest::blocking::Client,
}

impl Connection {
    /// Create a connection to `base_url`, normalized to carry a trailing
    /// slash so REST paths resolve under it.
    pub fn new(
        kind: ConnectionKind,
        base_url: &str,
        username: Option<String>,
        password: Option<SecretString>,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let base_url = Url::parse(&normalize_url(base_url))?;

        let auth = match (&username, &password) {
            (Some(user), Some(pass))
                if !user.is_empty() && !pass.expose_secret().is_empty() =>
            {
                Some(basic_auth_header(user, pass)?)
            }
            _ => None,
        };

        let http = transport.build_async_client(auth.as_ref())?;
        let blocking_http = transport.build_blocking_client(auth.as_ref())?;

        Ok(Self {
            kind,
            base_url,
            username,
            password,
            http,
            blocking_http,
        })
    }

    /// Derive a connection of a different kind that shares this connection's
    /// URL, credentials, and HTTP clients.
    ///
    /// No new network clients are created, so connection pooling and auth
    /// state carry over to the derived connection.
    pub(crate) fn derive(&self, kind: ConnectionKind) -> Self {
        Self {
            kind,
            base_url: self.base_url.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            http: self.http.clone(),
            blocking_http: self.blocking_http.clone(),
        }
    }

    pub fn kind(&self) -> ConnectionKind {
        self.kind
    }

    /// The server base URL, absolute and ending in a slash.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&SecretString> {
        self.password.as_ref()
    }

    /// The async HTTP client, with auth already attached.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// The blocking HTTP client paired with [`http`](Self::http). Requests
    /// through it must not run on a latency-sensitive thread.
    pub fn blocking_http(&self) -> &reqwest::blocking::Client {
        &self.blocking_http
    }

    /// Resolve a REST path against the base URL.
    pub fn rest_url(&self, path: &str) -> Result<Url, Error> {
        self.base_url.join(path).map_err(Error::InvalidUrl)
    }

    /// Probe whether the configured host accepts TCP connections.
    ///
    /// Connects to the base URL's host and port (default 80 for `http`,
    /// 443 for `https`) with a one second timeout. Resolution failures,
    /// refusals, and timeouts all read as "not reachable". Blocking --
    /// callers dispatch this to a worker thread.
    pub fn check_reachability(&self) -> bool {
        debug!("checking reachability of {}", self.base_url);

        let Some(host) = self.base_url.host_str() else {
            return false;
        };
        let Some(port) = self.base_url.port_or_known_default() else {
            return false;
        };

        let Ok(mut addrs) = (host, port).to_socket_addrs() else {
            debug!("failed to resolve {host}");
            return false;
        };
        let Some(addr) = addrs.next() else {
            return false;
        };

        match TcpStream::connect_timeout(&addr, REACHABILITY_TIMEOUT) {
            Ok(_) => {
                debug!("socket connected to {addr}");
                true
            }
            Err(err) => {
                debug!("{addr} not reachable: {err}");
                false
            }
        }
    }
}

impl PartialEq for Connection {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.base_url == other.base_url
            && self.username == other.username
            && secret_eq(self.password.as_ref(), other.password.as_ref())
    }
}

impl Eq for Connection {}

impl Hash for Connection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.base_url.as_str().hash(state);
        self.username.hash(state);
        if let Some(password) = &self.password {
            password.expose_secret().hash(state);
        }
    }
}

fn secret_eq(a: Option<&SecretString>, b: Option<&SecretString>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.expose_secret() == b.expose_secret(),
        _ => false,
    }
}

/// Ensure a server URL ends with a trailing slash so relative REST paths
/// resolve under it rather than replacing its last path segment.
pub fn normalize_url(url: &str) -> String {
    if url.ends_with('/') {
        url.to_owned()
    } else {
        format!("{url}/")
    }
}

/// Shorten a value for logging: the first three characters stay readable,
/// the rest become `*`. Used for usernames in connection logs.
pub fn obfuscate(value: &str) -> String {
    obfuscate_keeping(value, 3)
}

fn obfuscate_keeping(value: &str, clear_chars: usize) -> String {
    let clear: String = value.chars().take(clear_chars).collect();
    let hidden = value.chars().count().saturating_sub(clear.chars().count());
    format!("{clear}{}", "*".repeat(hidden))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn normalize_url_appends_missing_slash() {
        assert_eq!(normalize_url("http://localhost/"), "http://localhost/");
        assert_eq!(normalize_url("http://localhost"), "http://localhost/");
        assert_eq!(normalize_url("https://127.0.0.1/"), "https://127.0.0.1/");
        assert_eq!(normalize_url("https://127.0.0.1"), "https://127.0.0.1/");
        assert_eq!(
            normalize_url("https://127.0.0.1/abc/"),
            "https://127.0.0.1/abc/"
        );
        assert_eq!(
            normalize_url("https://127.0.0.1/abc"),
            "https://127.0.0.1/abc/"
        );
        assert_eq!(
            normalize_url("https://127.0.0.1:81/abc"),
            "https://127.0.0.1:81/abc/"
        );
    }

    #[test]
    fn rest_paths_resolve_under_the_base_url() {
        let transport = TransportConfig::default();
        let connection = Connection::new(
            ConnectionKind::Local,
            "http://openhab.local:8080/basepath",
            None,
            None,
            &transport,
        )
        .unwrap();

        assert_eq!(
            connection.rest_url("rest/sitemaps").unwrap().as_str(),
            "http://openhab.local:8080/basepath/rest/sitemaps"
        );
    }

    #[test]
    fn obfuscate_keeps_three_clear_characters() {
        assert_eq!(obfuscate("abcdef"), "abc***");
        assert_eq!(obfuscate("abc"), "abc");
        assert_eq!(obfuscate_keeping("a", 10), "a");
        assert_eq!(obfuscate_keeping("abc", 1), "a**");
        assert_eq!(obfuscate_keeping("abc", 0), "***");
    }
}
