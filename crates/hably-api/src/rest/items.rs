// Item endpoints
//
// State reads and command dispatch. Commands go to the item's absolute
// REST link as a `text/plain` body, matching what the server UIs send.

use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::connection::Connection;
use crate::error::Error;
use crate::rest::models::ItemResponse;

impl Connection {
    /// Fetch a single item by name.
    ///
    /// `GET rest/items/{name}`
    pub async fn item(&self, name: &str) -> Result<ItemResponse, Error> {
        let url = self.rest_url(&format!("rest/items/{name}"))?;
        debug!("GET {url}");

        let response = self.http().get(url).send().await.map_err(Error::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(Error::Transport)?;
        if !status.is_success() {
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// Send a command to an item.
    ///
    /// `link` is the item's absolute REST link as reported by the server;
    /// the command travels as the plain-text request body.
    pub async fn send_command(&self, link: &str, command: &str) -> Result<(), Error> {
        let url = Url::parse(link)?;
        debug!("POST {url} <- {command}");

        let response = self
            .http()
            .post(url)
            .header(CONTENT_TYPE, "text/plain;charset=UTF-8")
            .body(command.to_owned())
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(Error::UnexpectedStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}
