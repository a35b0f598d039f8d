//! Submit sinks
//!
//! A `WorkshopSink` receives the draft once a submission resolves. It is the
//! seam where a persistence or API layer would plug in; the dashboard itself
//! only logs.

use crate::data::WorkshopDraft;

/// Receiver for resolved workshop submissions
pub trait WorkshopSink: Send + Sync {
    fn accept(&self, draft: WorkshopDraft);
}

impl<F> WorkshopSink for F
where
    F: Fn(WorkshopDraft) + Send + Sync,
{
    fn accept(&self, draft: WorkshopDraft) {
        self(draft)
    }
}

/// Sink that records the draft in the log and discards it
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl WorkshopSink for LoggingSink {
    fn accept(&self, draft: WorkshopDraft) {
        match serde_json::to_string(&draft) {
            Ok(json) => tracing::info!(workshop = %json, "Workshop submitted"),
            Err(e) => tracing::warn!(title = %draft.title, "Workshop submitted (unserializable: {})", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closure_sink() {
        let received = Mutex::new(Vec::new());
        let sink = |draft: WorkshopDraft| received.lock().unwrap().push(draft.title);

        sink.accept(WorkshopDraft {
            title: "Loom Basics".to_string(),
            ..Default::default()
        });

        assert_eq!(*received.lock().unwrap(), vec!["Loom Basics".to_string()]);
    }

    #[test]
    fn test_logging_sink_accepts() {
        LoggingSink.accept(WorkshopDraft::default());
    }
}
