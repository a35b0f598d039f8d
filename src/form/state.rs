//! Workshop form state machine
//!
//! ```text
//!   Editing ──submit()──▶ Submitting ──resolve()──▶ Resolved
//!      ▲                                               │
//!      └───────────────── any field edit ──────────────┘
//! ```
//!
//! `submit` snapshots the fields into a `PendingSubmission` and shows a
//! loading toast. After the simulated delay the owner calls `resolve`, which
//! swaps the toast for a success message and hands back the draft for the
//! submit sink. Resolution never fails.

use serde::{Deserialize, Serialize};

use super::error::{FormError, FormResult};
use super::notification::{Notification, NotificationId};
use crate::data::{Workshop, WorkshopDraft};

pub const PENDING_MESSAGE: &str = "Processing your request...";

/// Text inputs of the form, in display order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    Title,
    Category,
    Summary,
    Instructor,
    LiveSessionLink,
    VideoUrl,
}

/// Kind of input element a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    TextArea,
    Url,
}

impl InputKind {
    /// HTML `type` attribute for `<input>` based kinds
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text | InputKind::TextArea => "text",
            InputKind::Url => "url",
        }
    }
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Title,
        FormField::Category,
        FormField::Summary,
        FormField::Instructor,
        FormField::LiveSessionLink,
        FormField::VideoUrl,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Category => "Category",
            FormField::Summary => "Summary",
            FormField::Instructor => "Instructor",
            FormField::LiveSessionLink => "Live Session Link",
            FormField::VideoUrl => "Video URL",
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self {
            FormField::Summary => InputKind::TextArea,
            FormField::LiveSessionLink | FormField::VideoUrl => InputKind::Url,
            _ => InputKind::Text,
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::Title | FormField::Category | FormField::Summary | FormField::Instructor
        )
    }

    fn value<'a>(&self, draft: &'a WorkshopDraft) -> &'a str {
        match self {
            FormField::Title => &draft.title,
            FormField::Category => &draft.category,
            FormField::Summary => &draft.summary,
            FormField::Instructor => &draft.instructor,
            FormField::LiveSessionLink => &draft.live_session_link,
            FormField::VideoUrl => &draft.video_url,
        }
    }

    fn value_mut<'a>(&self, draft: &'a mut WorkshopDraft) -> &'a mut String {
        match self {
            FormField::Title => &mut draft.title,
            FormField::Category => &mut draft.category,
            FormField::Summary => &mut draft.summary,
            FormField::Instructor => &mut draft.instructor,
            FormField::LiveSessionLink => &mut draft.live_session_link,
            FormField::VideoUrl => &mut draft.video_url,
        }
    }
}

/// Whether the form creates a new workshop or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Workshop",
            FormMode::Update => "Update Workshop",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            FormMode::Create => "Workshop created successfully!",
            FormMode::Update => "Workshop updated successfully!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting { notification: NotificationId },
    Resolved,
}

/// A submission waiting for its simulated delay to elapse
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    /// Field values at the moment of submit
    pub draft: WorkshopDraft,
    /// The loading toast to show while pending
    pub notification: Notification,
}

/// Outcome of a resolved submission
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub draft: WorkshopDraft,
    /// Success toast replacing the loading one
    pub notification: Notification,
}

/// Controlled-field workshop form
#[derive(Debug, Clone)]
pub struct WorkshopForm {
    draft: WorkshopDraft,
    mode: FormMode,
    phase: FormPhase,
    focused: Option<FormField>,
}

impl Default for WorkshopForm {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkshopForm {
    /// Empty form for a new workshop
    pub fn new() -> Self {
        Self {
            draft: WorkshopDraft::default(),
            mode: FormMode::Create,
            phase: FormPhase::Editing,
            focused: None,
        }
    }

    /// Form pre-filled from an existing workshop
    pub fn edit(workshop: &Workshop) -> Self {
        Self {
            draft: WorkshopDraft::from(workshop),
            mode: FormMode::Update,
            phase: FormPhase::Editing,
            focused: None,
        }
    }

    pub fn draft(&self) -> &WorkshopDraft {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, FormPhase::Submitting { .. })
    }

    pub fn field(&self, field: FormField) -> &str {
        field.value(&self.draft)
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        *field.value_mut(&mut self.draft) = value.into();
        self.touch();
    }

    /// Toggle the paid flag; the price is kept either way
    pub fn set_paid(&mut self, is_paid: bool) {
        self.draft.is_paid = is_paid;
        self.touch();
    }

    pub fn set_price(&mut self, price: u32) {
        self.draft.price = price;
        self.touch();
    }

    /// The price input only shows for paid workshops
    pub fn price_visible(&self) -> bool {
        self.draft.is_paid
    }

    pub fn focus(&mut self, field: FormField) {
        self.focused = Some(field);
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focused
    }

    /// Check required fields, reporting the first empty one
    pub fn validate(&self) -> FormResult<()> {
        match FormField::ALL
            .iter()
            .find(|f| f.is_required() && f.value(&self.draft).is_empty())
        {
            Some(field) => Err(FormError::MissingField(*field)),
            None => Ok(()),
        }
    }

    /// Begin a submission
    pub fn submit(&mut self) -> FormResult<PendingSubmission> {
        if self.is_submitting() {
            return Err(FormError::AlreadySubmitting);
        }
        self.validate()?;

        let notification = Notification::loading(PENDING_MESSAGE);
        self.phase = FormPhase::Submitting {
            notification: notification.id,
        };

        tracing::debug!(title = %self.draft.title, mode = ?self.mode, "Workshop submission started");

        Ok(PendingSubmission {
            draft: self.draft.clone(),
            notification,
        })
    }

    /// Complete the pending submission
    pub fn resolve(&mut self, pending: PendingSubmission) -> FormResult<Resolution> {
        let FormPhase::Submitting { notification } = self.phase else {
            return Err(FormError::NotSubmitting);
        };

        self.phase = FormPhase::Resolved;

        Ok(Resolution {
            draft: pending.draft,
            notification: Notification::success(notification, self.mode.success_message()),
        })
    }

    fn touch(&mut self) {
        if self.phase == FormPhase::Resolved {
            self.phase = FormPhase::Editing;
        }
    }
}
