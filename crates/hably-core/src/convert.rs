// Wire-to-domain conversions
//
// Bridges the raw XML (OH1) and JSON (OH2) response types from `hably-api`
// into the domain model. State literals meaning "no state" are normalized
// here, once, so the model never sees them.

use serde_json::Value;

use hably_api::ServerGeneration;
use hably_api::legacy::models::{ItemDocument, SitemapDocument, SitemapListDocument};
use hably_api::rest::models::{ItemResponse, SitemapResponse};

use crate::error::CoreError;
use crate::model::{Item, ItemType, Sitemap};

/// Map the "no state" literals to `None`.
///
/// Servers report uninitialized items as `NULL`, `UNDEF`, `undefined`
/// (any case), or -- on old legacy servers -- the misspelled
/// `Unitialized`.
fn normalize_state(raw: Option<String>) -> Option<String> {
    let state = raw?;
    let no_state = state.is_empty()
        || state.eq_ignore_ascii_case("NULL")
        || state.eq_ignore_ascii_case("UNDEF")
        || state.eq_ignore_ascii_case("undefined")
        || state == "Unitialized";
    if no_state { None } else { Some(state) }
}

fn parse_group_type(raw: Option<&str>) -> Option<ItemType> {
    raw.map(|token| ItemType::parse(Some(token)))
}

// ── Items ───────────────────────────────────────────────────────────

/// Build an [`Item`] from one legacy `<item>` element.
pub fn item_from_xml(wire: ItemDocument) -> Item {
    Item::new(
        wire.name.unwrap_or_default(),
        ItemType::parse(wire.item_type.as_deref()),
        parse_group_type(wire.group_type.as_deref()),
        wire.link,
        normalize_state(wire.state),
    )
}

/// Build an [`Item`] from one JSON item object.
pub fn item_from_json(wire: ItemResponse) -> Item {
    Item::new(
        wire.name,
        ItemType::parse(wire.item_type.as_deref()),
        parse_group_type(wire.group_type.as_deref()),
        wire.link,
        normalize_state(wire.state),
    )
}

/// Build an [`Item`] from a loose JSON value, as found inside page and
/// widget payloads. A JSON `null` yields `None`, propagated rather than
/// treated as an error.
pub fn item_from_json_value(value: &Value) -> Option<Item> {
    if value.is_null() {
        return None;
    }
    serde_json::from_value::<ItemResponse>(value.clone())
        .ok()
        .map(item_from_json)
}

// ── Sitemaps ────────────────────────────────────────────────────────

/// Build a [`Sitemap`] from one `<sitemap>` element. Elements without a
/// name are dropped.
pub fn sitemap_from_xml(wire: SitemapDocument) -> Option<Sitemap> {
    let name = wire.name?;
    let homepage_link = wire.homepage.and_then(|homepage| homepage.link);
    Some(Sitemap::new(name, wire.label, wire.link, homepage_link))
}

/// Build a [`Sitemap`] from one JSON sitemap object.
pub fn sitemap_from_json(wire: SitemapResponse) -> Sitemap {
    let homepage_link = wire.homepage.and_then(|homepage| homepage.link);
    Sitemap::new(wire.name, wire.label, wire.link, homepage_link)
}

/// Convert a full legacy sitemap list document.
pub fn sitemap_list_from_xml(document: SitemapListDocument) -> Vec<Sitemap> {
    document
        .sitemaps
        .into_iter()
        .filter_map(sitemap_from_xml)
        .collect()
}

/// Convert a full JSON sitemap list.
pub fn sitemap_list_from_json(entries: Vec<SitemapResponse>) -> Vec<Sitemap> {
    entries.into_iter().map(sitemap_from_json).collect()
}

/// Parse a raw sitemap list response body in the given generation's
/// format.
///
/// A body matching neither schema surfaces as
/// [`CoreError::MalformedSitemapList`] carrying the parser's reason;
/// callers treat that as an empty list plus a message, never a crash.
pub fn parse_sitemap_list(
    generation: ServerGeneration,
    body: &str,
) -> Result<Vec<Sitemap>, CoreError> {
    match generation {
        ServerGeneration::V1 => {
            let document: SitemapListDocument = serde_xml_rs::from_str(body)
                .map_err(|e| CoreError::MalformedSitemapList {
                    reason: e.to_string(),
                })?;
            Ok(sitemap_list_from_xml(document))
        }
        ServerGeneration::V2 => {
            let entries: Vec<SitemapResponse> = serde_json::from_str(body)
                .map_err(|e| CoreError::MalformedSitemapList {
                    reason: e.to_string(),
                })?;
            Ok(sitemap_list_from_json(entries))
        }
    }
}
