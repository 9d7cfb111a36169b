//! Domain model and connection selection for openHAB clients.
//!
//! `hably-api` owns the wire: HTTP clients, connection values, and the raw
//! XML/JSON response types. This crate owns everything above that:
//!
//! - **[`model`]** — [`Item`], [`Sitemap`], and the state parser: total
//!   functions turning a raw state string into boolean / float / color /
//!   brightness views.
//! - **[`convert`]** — bridges both wire generations (OH1 XML, OH2 JSON)
//!   into the domain model, normalizing "no state" literals on the way.
//! - **[`resolver`]** — picks the active [`Connection`] from the configured
//!   local/remote candidates and the current network, with an optional
//!   cloud upgrade.
//! - **[`sitemaps`]** — selection and ordering helpers over parsed sitemap
//!   lists.

pub mod convert;
pub mod error;
pub mod model;
pub mod resolver;
pub mod sitemaps;

pub use error::CoreError;
pub use model::{Item, ItemType, Sitemap};
pub use resolver::{NetworkKind, ServerCandidate, ServerConfig, resolve, resolve_cloud};

// Connection types are re-exported as-is: callers hold them, this crate
// only selects them.
pub use hably_api::{
    CloudConnection, Connection, ConnectionKind, ServerGeneration, TransportConfig,
};
