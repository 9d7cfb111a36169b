// Cloud connection
//
// A cloud connection is derived from an existing connection once the server
// is known to expose the notification settings endpoint. It reuses the base
// connection's HTTP clients so pooling and auth state carry over.

use serde_json::Value;
use tracing::debug;

use crate::connection::{Connection, ConnectionKind};

/// Endpoint answering with the push-notification settings of a cloud
/// instance. Plain servers answer 404 here.
const NOTIFICATION_SETTINGS_PATH: &str = "api/v1/settings/notifications";

/// A connection to an openHAB cloud instance, carrying the messaging sender
/// id needed to register for push notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct CloudConnection {
    connection: Connection,
    sender_id: String,
}

impl CloudConnection {
    /// Derive a `CloudConnection` from an existing connection, if possible.
    ///
    /// Issues a blocking GET against the notification settings endpoint and
    /// reads the messaging sender id out of the response. Any transport
    /// failure or unexpected payload shape yields `None` and the caller
    /// falls back to non-cloud functionality. Blocking -- must not be
    /// called on a latency-sensitive thread.
    pub fn from_connection(base: &Connection) -> Option<Self> {
        let url = base.rest_url(NOTIFICATION_SETTINGS_PATH).ok()?;

        let response = match base.blocking_http().get(url).send() {
            Ok(response) => response,
            Err(err) => {
                debug!("error loading notification settings: {err}");
                return None;
            }
        };
        if !response.status().is_success() {
            debug!(
                "notification settings endpoint answered {}",
                response.status()
            );
            return None;
        }

        let body: Value = match response.json() {
            Ok(body) => body,
            Err(err) => {
                debug!("unable to parse notification settings: {err}");
                return None;
            }
        };
        let Some(sender_id) = body.pointer("/gcm/senderId").and_then(Value::as_str) else {
            debug!("notification settings carry no sender id");
            return None;
        };

        Some(Self {
            connection: base.derive(ConnectionKind::Cloud),
            sender_id: sender_id.to_owned(),
        })
    }

    /// The sender id to register with for push notifications.
    pub fn messaging_sender_id(&self) -> &str {
        &self.sender_id
    }

    /// The underlying connection (kind [`Cloud`](ConnectionKind::Cloud)).
    pub fn connection(&self) -> &Connection {
        &self.connection
    }
}
