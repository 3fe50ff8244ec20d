//! Alert renderer backed by a host [`AlertService`].

use std::sync::Arc;

use portable_json::PortableJson;

use crate::renderer::{RenderError, UiRenderer};
use crate::{FIELD_DATA, FIELD_TEMPLATE};

/// Host-side alert surface (dialog, toast, ...). Implementations live
/// behind the platform boundary; the renderer holds the capability by
/// reference only.
pub trait AlertService: Send + Sync {
    fn alert(&self, message: &str);
}

/// Shows the event's `template` through the injected [`AlertService`].
/// An event without a `template` is not actionable by this renderer.
pub struct AlertRenderer {
    service: Arc<dyn AlertService>,
}

impl AlertRenderer {
    pub fn new(service: Arc<dyn AlertService>) -> Self {
        Self { service }
    }
}

impl UiRenderer for AlertRenderer {
    fn render(&self, content: &PortableJson) -> Result<bool, RenderError> {
        let data = content.get_object(FIELD_DATA)?;
        if !data.has_key(FIELD_TEMPLATE) {
            return Ok(false);
        }
        self.service.alert(data.get_string(FIELD_TEMPLATE)?);
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portable_json::parse;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingAlerts {
        messages: Mutex<Vec<String>>,
    }

    impl AlertService for RecordingAlerts {
        fn alert(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_alert_renderer_shows_template() {
        let alerts = Arc::new(RecordingAlerts::default());
        let renderer = AlertRenderer::new(alerts.clone());
        let content = parse(r#"{"data": {"template": "Hello, world!"}}"#).unwrap();
        assert_eq!(renderer.render(&content), Ok(true));
        assert_eq!(*alerts.messages.lock().unwrap(), ["Hello, world!"]);
    }

    #[test]
    fn test_alert_renderer_skips_without_template() {
        let alerts = Arc::new(RecordingAlerts::default());
        let renderer = AlertRenderer::new(alerts.clone());
        let content = parse(r#"{"data": {"modality": "alert"}}"#).unwrap();
        assert_eq!(renderer.render(&content), Ok(false));
        assert!(alerts.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn test_alert_renderer_rejects_non_string_template() {
        let alerts = Arc::new(RecordingAlerts::default());
        let renderer = AlertRenderer::new(alerts);
        let content = parse(r#"{"data": {"template": 5}}"#).unwrap();
        assert!(renderer.render(&content).is_err());
    }
}
