pub mod transform;

/// The result of one transform invocation.
///
/// This struct contains only presentation data — it carries no history
/// metadata (timestamps and input echoes live in retext-cli's `history`
/// module).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TransformResult {
    pub output: String,
    pub note: String,
}
