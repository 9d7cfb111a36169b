// OH2 JSON response types
//
// Field names use camelCase via `#[serde(rename_all = "camelCase")]`.
// Optional fields default to `None`; the server omits them freely across
// versions.

use serde::Deserialize;

/// Sitemap object from `GET rest/sitemaps`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapResponse {
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub homepage: Option<HomepageResponse>,
}

/// Nested homepage object of a sitemap.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomepageResponse {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub leaf: Option<bool>,
}

/// Item object from `GET rest/items/{name}` and embedded in page payloads.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
