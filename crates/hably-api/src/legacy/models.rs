// OH1 XML response types
//
// Deserialized with serde-xml-rs. Every child element is optional because
// legacy servers omit elements freely; child order does not matter.

use serde::Deserialize;

/// `<sitemaps>` document from `GET rest/sitemaps`.
#[derive(Debug, Default, Deserialize)]
pub struct SitemapListDocument {
    #[serde(rename = "sitemap", default)]
    pub sitemaps: Vec<SitemapDocument>,
}

/// One `<sitemap>` element.
#[derive(Debug, Deserialize)]
pub struct SitemapDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub homepage: Option<HomepageDocument>,
}

/// Nested `<homepage>` element of a sitemap.
#[derive(Debug, Deserialize)]
pub struct HomepageDocument {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub leaf: Option<bool>,
}

/// One `<item>` element, as embedded in page and widget responses.
#[derive(Debug, Deserialize)]
pub struct ItemDocument {
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    #[serde(rename = "groupType", default)]
    pub group_type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
