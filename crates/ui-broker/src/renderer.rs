//! The [`UiRenderer`] capability.

use portable_json::{AccessError, PortableJson};
use thiserror::Error;

/// A renderer's own internal failure. "Not applicable" is never an error;
/// that is a valid `Ok(false)` from [`UiRenderer::render`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Access(#[from] AccessError),
    /// Failure crossing the host platform boundary (dialog, surface, ...).
    #[error("{0}")]
    Platform(String),
}

/// Consumes a rendering event and performs one platform-specific
/// presentation effect.
///
/// Implementations return `Ok(true)` when they considered themselves the
/// intended consumer and acted, `Ok(false)` when the content is not
/// actionable by them (a missing field is a valid `false`). They must not
/// mutate `content`, and must be safe under concurrent invocation.
pub trait UiRenderer: Send + Sync {
    fn render(&self, content: &PortableJson) -> Result<bool, RenderError>;
}
