//! Workshop Form
//!
//! - **state**: Field state and the editing → submitting → resolved machine
//! - **notification**: Loading and success toasts
//! - **sink**: Where resolved drafts go
//! - **session**: Cancellable tokio submission task (`runtime` feature)
//! - **error**: Error types

pub mod error;
pub mod notification;
#[cfg(feature = "runtime")]
pub mod session;
pub mod sink;
pub mod state;

pub use error::{FormError, FormResult};
pub use notification::{upsert, Notification, NotificationId, NotificationKind};
#[cfg(feature = "runtime")]
pub use session::{spawn_submission, FormSession, SubmissionHandle, DEFAULT_SUBMIT_DELAY};
pub use sink::{LoggingSink, WorkshopSink};
pub use state::{
    FormField, FormMode, FormPhase, InputKind, PendingSubmission, Resolution, WorkshopForm,
    PENDING_MESSAGE,
};
