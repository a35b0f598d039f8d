//! Cancellable form submissions on tokio
//!
//! A `FormSession` is the mounted lifetime of a workshop form. Each submit
//! spawns a task that waits out the simulated delay and then resolves the
//! form. The task is owned by a `SubmissionHandle`, which aborts it on drop,
//! so dropping the session guarantees the sink never fires for a form that no
//! longer exists.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use super::error::FormResult;
use super::notification::{Notification, NotificationId};
use super::sink::WorkshopSink;
use super::state::{PendingSubmission, WorkshopForm};

/// Default simulated submission delay
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_secs(1);

/// Owns one in-flight submission task; aborts it when dropped
pub struct SubmissionHandle {
    task: JoinHandle<()>,
}

impl SubmissionHandle {
    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SubmissionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Spawn the deferred resolution of `pending`
///
/// After `delay` the form is resolved, the sink receives the draft and the
/// success toast is sent on `notifications`.
pub fn spawn_submission(
    form: Arc<Mutex<WorkshopForm>>,
    pending: PendingSubmission,
    delay: Duration,
    sink: Arc<dyn WorkshopSink>,
    notifications: mpsc::UnboundedSender<Notification>,
) -> SubmissionHandle {
    let task = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let resolution = match form.lock().await.resolve(pending) {
            Ok(resolution) => resolution,
            Err(e) => {
                tracing::warn!("Submission could not resolve: {}", e);
                return;
            }
        };

        sink.accept(resolution.draft);

        if notifications.send(resolution.notification).is_err() {
            tracing::debug!("Notification receiver dropped before success toast");
        }
    });

    SubmissionHandle { task }
}

/// A mounted workshop form with its submission machinery
pub struct FormSession {
    form: Arc<Mutex<WorkshopForm>>,
    sink: Arc<dyn WorkshopSink>,
    delay: Duration,
    notifications: mpsc::UnboundedSender<Notification>,
    in_flight: Option<SubmissionHandle>,
}

impl FormSession {
    /// Mount `form`; toasts are delivered on the returned receiver
    pub fn new(
        form: WorkshopForm,
        sink: Arc<dyn WorkshopSink>,
        delay: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();

        let session = Self {
            form: Arc::new(Mutex::new(form)),
            sink,
            delay,
            notifications: tx,
            in_flight: None,
        };

        (session, rx)
    }

    /// Apply an edit to the form
    pub async fn edit<R>(&self, f: impl FnOnce(&mut WorkshopForm) -> R) -> R {
        let mut form = self.form.lock().await;
        f(&mut form)
    }

    /// Copy of the current form state
    pub async fn snapshot(&self) -> WorkshopForm {
        self.form.lock().await.clone()
    }

    /// Submit the form and schedule its resolution
    ///
    /// Returns the id of the loading toast, which the success toast will
    /// later replace.
    pub async fn submit(&mut self) -> FormResult<NotificationId> {
        let pending = self.form.lock().await.submit()?;
        let id = pending.notification.id;

        if self.notifications.send(pending.notification.clone()).is_err() {
            tracing::debug!("Notification receiver dropped before loading toast");
        }

        self.in_flight = Some(spawn_submission(
            Arc::clone(&self.form),
            pending,
            self.delay,
            Arc::clone(&self.sink),
            self.notifications.clone(),
        ));

        tracing::info!(delay_ms = self.delay.as_millis() as u64, "Workshop submission scheduled");
        Ok(id)
    }

    /// Whether a submission task is still waiting to resolve
    pub fn is_pending(&self) -> bool {
        self.in_flight
            .as_ref()
            .map(|h| !h.is_finished())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::WorkshopDraft;
    use crate::form::error::FormError;
    use crate::form::notification::NotificationKind;
    use crate::form::state::{FormField, FormPhase};

    fn filled_form() -> WorkshopForm {
        let mut form = WorkshopForm::new();
        form.set_field(FormField::Title, "Indigo Dyeing");
        form.set_field(FormField::Category, "Textiles");
        form.set_field(FormField::Summary, "Shibori folding and vat dyeing.");
        form.set_field(FormField::Instructor, "Imani Njoroge");
        form
    }

    fn recording_sink() -> (Arc<dyn WorkshopSink>, Arc<std::sync::Mutex<Vec<WorkshopDraft>>>) {
        let received = Arc::new(std::sync::Mutex::new(Vec::new()));
        let store = Arc::clone(&received);
        let sink = move |draft: WorkshopDraft| store.lock().unwrap().push(draft);
        (Arc::new(sink), received)
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_resolves_after_delay() {
        let (sink, received) = recording_sink();
        let (mut session, mut rx) = FormSession::new(filled_form(), sink, DEFAULT_SUBMIT_DELAY);

        let id = session.submit().await.unwrap();
        let loading = rx.recv().await.unwrap();
        assert_eq!(loading.id, id);
        assert_eq!(loading.kind, NotificationKind::Loading);
        assert!(session.is_pending());

        tokio::time::sleep(Duration::from_millis(900)).await;
        assert!(received.lock().unwrap().is_empty());

        let success = rx.recv().await.unwrap();
        assert_eq!(success.id, id);
        assert_eq!(success.kind, NotificationKind::Success);

        let drafts = received.lock().unwrap().clone();
        assert_eq!(drafts.len(), 1);
        assert_eq!(drafts[0].title, "Indigo Dyeing");
        assert_eq!(session.snapshot().await.phase(), FormPhase::Resolved);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropping_session_cancels_submission() {
        let (sink, received) = recording_sink();
        let (mut session, mut rx) = FormSession::new(filled_form(), sink, DEFAULT_SUBMIT_DELAY);

        session.submit().await.unwrap();
        drop(session);

        tokio::time::sleep(Duration::from_secs(5)).await;

        assert!(received.lock().unwrap().is_empty());
        assert!(rx.recv().await.unwrap().is_loading());
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_form_never_schedules() {
        let (sink, received) = recording_sink();
        let (mut session, _rx) = FormSession::new(WorkshopForm::new(), sink, DEFAULT_SUBMIT_DELAY);

        let err = session.submit().await.unwrap_err();
        assert_eq!(err, FormError::MissingField(FormField::Title));
        assert!(!session.is_pending());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(received.lock().unwrap().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sink_sees_values_at_submit() {
        let (sink, received) = recording_sink();
        let (mut session, mut rx) = FormSession::new(filled_form(), sink, DEFAULT_SUBMIT_DELAY);

        session
            .edit(|form| {
                form.set_paid(true);
                form.set_price(180);
            })
            .await;
        session.submit().await.unwrap();

        rx.recv().await.unwrap();
        rx.recv().await.unwrap();

        let drafts = received.lock().unwrap().clone();
        assert_eq!(drafts.len(), 1);
        assert!(drafts[0].is_paid);
        assert_eq!(drafts[0].price, 180);
    }
}
