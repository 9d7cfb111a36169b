// OH2 sitemap list endpoint

use tracing::debug;

use crate::connection::Connection;
use crate::error::Error;
use crate::rest::models::SitemapResponse;

impl Connection {
    /// Fetch the sitemap list from a current server.
    ///
    /// `GET rest/sitemaps`, answered with a JSON array.
    pub async fn sitemap_list_v2(&self) -> Result<Vec<SitemapResponse>, Error> {
        let url = self.rest_url("rest/sitemaps")?;
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
}
