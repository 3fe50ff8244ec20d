//! `render-event` — dispatch one JSON rendering event from stdin.
//!
//! Usage:
//!   render-event < event.json
//!
//! The event follows the harness payload convention:
//!   {"data": {"template": "Hello", "modality": "log,alert"}}
//!
//! Alerts go to stdout; log-renderer output and diagnostics go through
//! `tracing` (RUST_LOG controls the filter).

use std::io::{self, Read};
use std::sync::Arc;

use tracing::warn;
use tracing_subscriber::EnvFilter;
use ui_broker::{AlertRenderer, AlertService, LogRenderer, UiBroker, UiRenderer};

struct StdoutAlert;

impl AlertService for StdoutAlert {
    fn alert(&self, message: &str) {
        println!("[alert] {message}");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut buf = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut buf) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    // A malformed event aborts this event only; the process reports and
    // exits rather than rendering anything.
    let content = match portable_json::parse(buf.trim()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("invalid event: {e}");
            std::process::exit(1);
        }
    };

    let broker = UiBroker::new([
        (
            "log".to_string(),
            Arc::new(LogRenderer::new()) as Arc<dyn UiRenderer>,
        ),
        (
            "alert".to_string(),
            Arc::new(AlertRenderer::new(Arc::new(StdoutAlert))) as Arc<dyn UiRenderer>,
        ),
    ]);

    match broker.render(&content) {
        Ok(true) => {}
        Ok(false) => {
            warn!(
                content = %portable_json::stringify(&content),
                "skipped rendering content"
            );
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
