// OH2 wire surface
//
// Current servers speak JSON on the same REST paths the legacy XML surface
// uses. Item endpoints only exist here; legacy item access goes through
// page documents, which belong to the rendering layer.

pub mod items;
pub mod models;
pub mod sitemaps;
