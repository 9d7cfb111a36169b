// Core error types
//
// User-facing failures from connection selection and list parsing.
// Transport-level errors surface through the `Api` variant; parse-shape
// mismatches inside the model never error at all (they collapse to
// documented defaults).

use thiserror::Error;

use crate::resolver::NetworkKind;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection selection ────────────────────────────────────────
    /// No active network; nothing can be reached.
    #[error("network is not available")]
    NetworkNotAvailable,

    /// The active network cannot carry server traffic.
    #[error("network type {kind:?} is not supported")]
    NetworkNotSupported { kind: NetworkKind },

    /// Neither a local nor a remote URL is configured for the current
    /// network.
    #[error("no server URL configured")]
    NoUrlInformation,

    // ── Payload errors ──────────────────────────────────────────────
    /// A sitemap list response matched neither known schema.
    #[error("malformed sitemap list: {reason}")]
    MalformedSitemapList { reason: String },

    // ── Transport (wrapped) ─────────────────────────────────────────
    #[error("API error: {0}")]
    Api(#[from] hably_api::Error),
}
