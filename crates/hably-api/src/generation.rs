/// Which protocol generation the server speaks.
///
/// Detected once by the caller (server probing lives outside this crate)
/// and passed in wherever the wire format matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerGeneration {
    /// Legacy servers -- the REST API answers with XML documents.
    V1,
    /// Current servers -- the REST API answers with JSON.
    V2,
}
