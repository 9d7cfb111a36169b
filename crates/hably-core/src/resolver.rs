// Connection selection
//
// Given the configured local/remote candidates and the current network,
// pick the single connection the process should use. Selection is blocking
// (the local candidate is probed for reachability) and belongs on a worker
// thread; the caller marshals the result back to wherever it is needed.

use secrecy::SecretString;
use tracing::debug;

use hably_api::connection::obfuscate;
use hably_api::{CloudConnection, Connection, ConnectionKind, TransportConfig};

use crate::error::CoreError;

/// One configured server endpoint.
#[derive(Debug, Clone)]
pub struct ServerCandidate {
    pub url: String,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

/// Everything the resolver needs to know about the user's setup.
///
/// Built by the caller from its own settings storage and handed in; this
/// crate never reads preferences itself.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub local: Option<ServerCandidate>,
    pub remote: Option<ServerCandidate>,
    pub demo_mode: bool,
}

/// The kind of network the device currently has, as detected by the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetworkKind {
    Wifi,
    Ethernet,
    Vpn,
    Mobile,
    Bluetooth,
    Unknown,
}

impl NetworkKind {
    /// Whether a server on the same network segment could be reached.
    fn local_capable(self) -> bool {
        matches!(self, Self::Wifi | Self::Ethernet | Self::Vpn)
    }
}

/// Select the connection to use under the current network conditions.
///
/// On local-capable networks the local candidate wins if it is configured
/// and answers the reachability probe, otherwise the remote candidate is
/// used. Mobile networks go straight to the remote candidate. Demo mode
/// short-circuits everything. Blocking -- do not call on a
/// latency-sensitive thread.
pub fn resolve(
    config: &ServerConfig,
    network: Option<NetworkKind>,
    transport: &TransportConfig,
) -> Result<Connection, CoreError> {
    if config.demo_mode {
        debug!("demo mode is set, using the demo server");
        return Ok(Connection::demo(transport)?);
    }

    let Some(network) = network else {
        return Err(CoreError::NetworkNotAvailable);
    };

    match network {
        NetworkKind::Mobile => {
            connect_candidate(config.remote.as_ref(), ConnectionKind::Remote, transport)?
                .ok_or(CoreError::NoUrlInformation)
        }
        kind if kind.local_capable() => {
            if let Some(local) =
                connect_candidate(config.local.as_ref(), ConnectionKind::Local, transport)?
            {
                if local.check_reachability() {
                    return Ok(local);
                }
                debug!("local server not reachable, trying the remote candidate");
            }
            connect_candidate(config.remote.as_ref(), ConnectionKind::Remote, transport)?
                .ok_or(CoreError::NoUrlInformation)
        }
        kind => Err(CoreError::NetworkNotSupported { kind }),
    }
}

/// Upgrade a resolved connection to a cloud connection, if the server
/// supports the notification settings endpoint.
///
/// The result is handed back to the caller instead of being parked in
/// process-wide state; absence means "stay non-cloud". Blocking, like the
/// probe it wraps.
pub fn resolve_cloud(connection: &Connection) -> Option<CloudConnection> {
    CloudConnection::from_connection(connection)
}

fn connect_candidate(
    candidate: Option<&ServerCandidate>,
    kind: ConnectionKind,
    transport: &TransportConfig,
) -> Result<Option<Connection>, CoreError> {
    let Some(candidate) = candidate else {
        return Ok(None);
    };
    if candidate.url.trim().is_empty() {
        return Ok(None);
    }

    if let Some(username) = &candidate.username {
        debug!("building {kind:?} connection as user {}", obfuscate(username));
    }

    let connection = Connection::new(
        kind,
        &candidate.url,
        candidate.username.clone(),
        candidate.password.clone(),
        transport,
    )?;
    Ok(Some(connection))
}
