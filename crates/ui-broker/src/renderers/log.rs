//! Structured-log renderer.

use portable_json::{stringify, PortableJson};
use tracing::info;

use crate::renderer::{RenderError, UiRenderer};
use crate::FIELD_DATA;

/// Writes every event's `data` object to the log and always claims it.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl LogRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl UiRenderer for LogRenderer {
    fn render(&self, content: &PortableJson) -> Result<bool, RenderError> {
        let data = content.get_object(FIELD_DATA)?;
        info!(content = %stringify(data), "render");
        Ok(true)
    }
}
