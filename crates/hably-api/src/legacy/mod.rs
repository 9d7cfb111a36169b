// OH1 wire surface
//
// Legacy servers answer REST calls with XML documents. Only the models and
// the sitemap list call live here; current-generation JSON endpoints are
// under `rest`.

pub mod models;
pub mod sitemaps;
