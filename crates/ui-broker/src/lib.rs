//! ui-broker — per-event dispatch of particle output to registered
//! renderers.
//!
//! A rendering event is a [`PortableJson`](portable_json::PortableJson)
//! object whose `data` object may carry a `template` (presentation content)
//! and a `modality` (comma-separated renderer names). The [`UiBroker`] owns
//! a name-keyed registry of [`UiRenderer`] capabilities, fixed at startup,
//! and fans each event out to the selected renderers, OR-ing their results.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ui_broker::{LogRenderer, UiBroker, UiRenderer};
//!
//! let broker = UiBroker::new([(
//!     "log".to_string(),
//!     Arc::new(LogRenderer::new()) as Arc<dyn UiRenderer>,
//! )]);
//! let event = portable_json::parse(r#"{"data": {"template": "Hello"}}"#).unwrap();
//! assert!(broker.render(&event).unwrap());
//! ```

pub mod broker;
pub mod renderer;
pub mod renderers;

pub use broker::{BrokerError, UiBroker};
pub use renderer::{RenderError, UiRenderer};
pub use renderers::{AlertRenderer, AlertService, LogRenderer};

/// Event payload field holding the renderable content.
pub const FIELD_DATA: &str = "data";
/// Comma-separated renderer names inside `data`; absent means broadcast.
pub const FIELD_MODALITY: &str = "modality";
/// Presentation content inside `data`; renderer-specific.
pub const FIELD_TEMPLATE: &str = "template";
