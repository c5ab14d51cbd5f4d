//! Renderer error types.

/// Error returned when a stored document cannot be decoded.
///
/// Rendering itself never fails; only turning raw JSON text into a tree can.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The stored document is not valid JSON.
    #[error("Invalid document JSON: {0}")]
    Json(#[from] serde_json::Error),
}
