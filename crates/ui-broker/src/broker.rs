//! [`UiBroker`] — modality-based fan-out over the renderer registry.

use std::sync::Arc;

use indexmap::IndexMap;
use portable_json::{AccessError, PortableJson};
use thiserror::Error;
use tracing::debug;

use crate::renderer::{RenderError, UiRenderer};
use crate::{FIELD_DATA, FIELD_MODALITY};

#[derive(Debug, Error)]
pub enum BrokerError {
    /// The resolved target-name list was empty: nothing is registered and
    /// the event named no modality. A configuration defect, never silently
    /// swallowed.
    #[error("NO_RENDERERS")]
    NoRenderersAvailable,
    /// The event payload is malformed (missing `data`, non-string
    /// `modality`, ...).
    #[error(transparent)]
    Access(#[from] AccessError),
    /// A renderer failed internally; renderers after it in the target list
    /// were not invoked.
    #[error("renderer '{name}' failed")]
    Renderer {
        name: String,
        #[source]
        source: RenderError,
    },
}

/// Owns the name → renderer registry and dispatches rendering events.
///
/// The registry is fixed at construction and read-only during dispatch, so
/// repeated and concurrent `render` calls are safe as long as the
/// individual renderers are. Insertion order of the registry is the
/// broadcast order.
pub struct UiBroker {
    renderers: IndexMap<String, Arc<dyn UiRenderer>>,
}

impl UiBroker {
    pub fn new(renderers: impl IntoIterator<Item = (String, Arc<dyn UiRenderer>)>) -> Self {
        Self {
            renderers: renderers.into_iter().collect(),
        }
    }

    /// Dispatch one rendering event.
    ///
    /// The event's `data` object selects the targets: a `modality` key
    /// holds a comma-separated list of renderer names (duplicates invoke a
    /// renderer once per occurrence, unknown names are skipped); without
    /// one the event broadcasts to every registered renderer. Every target
    /// is invoked even after one has already rendered, because each may
    /// carry an independent required side effect. Returns `true` iff at
    /// least one invoked renderer rendered.
    pub fn render(&self, content: &PortableJson) -> Result<bool, BrokerError> {
        let data = content.get_object(FIELD_DATA)?;
        let names: Vec<&str> = if data.has_key(FIELD_MODALITY) {
            data.get_string(FIELD_MODALITY)?.split(',').collect()
        } else {
            self.renderers.keys().map(String::as_str).collect()
        };
        if names.is_empty() {
            return Err(BrokerError::NoRenderersAvailable);
        }
        debug!(targets = ?names, "dispatching render");

        let mut rendered = false;
        for name in names {
            if let Some(renderer) = self.renderers.get(name) {
                rendered |= renderer
                    .render(content)
                    .map_err(|source| BrokerError::Renderer {
                        name: name.to_string(),
                        source,
                    })?;
            }
        }
        Ok(rendered)
    }
}
