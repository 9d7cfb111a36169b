// Sitemap list utilities
//
// Selection helpers over a parsed sitemap list. The server always
// advertises a synthetic `_default` sitemap alongside the user-defined
// ones; it is only worth selecting when nothing else exists.

use crate::model::Sitemap;

const DEFAULT_SITEMAP_NAME: &str = "_default";

fn selectable(list: &[Sitemap]) -> impl Iterator<Item = &Sitemap> {
    let only_entry = list.len() == 1;
    list.iter()
        .filter(move |sitemap| only_entry || sitemap.name() != DEFAULT_SITEMAP_NAME)
}

/// Whether a selectable sitemap with this exact name exists.
pub fn sitemap_exists(list: &[Sitemap], name: &str) -> bool {
    selectable(list).any(|sitemap| sitemap.name() == name)
}

/// Find a selectable sitemap by exact name.
pub fn sitemap_by_name<'a>(list: &'a [Sitemap], name: &str) -> Option<&'a Sitemap> {
    selectable(list).find(|sitemap| sitemap.name() == name)
}

/// Sort by label, case-insensitively, keeping equal labels in input
/// order; then move the entry named `preferred_name` (case-insensitive)
/// to the front, if present.
pub fn sort_sitemap_list(list: &mut [Sitemap], preferred_name: &str) {
    list.sort_by(|a, b| {
        a.label()
            .to_lowercase()
            .cmp(&b.label().to_lowercase())
    });

    if preferred_name.is_empty() {
        return;
    }
    if let Some(position) = list
        .iter()
        .position(|sitemap| sitemap.name().eq_ignore_ascii_case(preferred_name))
    {
        list[..=position].rotate_right(1);
    }
}
