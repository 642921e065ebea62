use async_trait::async_trait;
use leptos::prelude::ServerFnError;
use thiserror::Error;

use super::form::{ContactParams, ErrorSlot, Field, FormData, FormErrors, SubmissionStatus};
use super::validate;

pub const FIX_ERRORS_NOTICE: &str = "Please fix the errors in the form";
pub const SUCCESS_NOTICE: &str = "Message sent! I'll get back to you soon.";
pub const FAILURE_NOTICE: &str = "Couldn't send the message. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The provider answered with an explanation.
    #[error("{0}")]
    Rejected(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Errors that come back through the contact server function.
impl From<ServerFnError> for SubmitError {
    fn from(err: ServerFnError) -> Self {
        match err {
            ServerFnError::ServerError(message) => SubmitError::Rejected(message),
            ServerFnError::Deserialization(message) => SubmitError::Decode(message),
            other => SubmitError::Transport(other.to_string()),
        }
    }
}

/// Delivers one contact message. Exactly one attempt per call.
#[async_trait(?Send)]
pub trait Mailer {
    async fn send(&self, params: &ContactParams) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Success(s) | Notice::Error(s) => s,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

/// Transient toast surface.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// State of one contact-form session: field values, the errors of the last
/// validation or submission, and where the submission lifecycle stands.
#[derive(Debug, Clone)]
pub struct ContactForm<N> {
    data: FormData,
    errors: FormErrors,
    status: SubmissionStatus,
    notifier: N,
}

impl<N: Notifier> ContactForm<N> {
    pub fn new(notifier: N) -> Self {
        Self {
            data: FormData::default(),
            errors: FormErrors::new(),
            status: SubmissionStatus::Idle,
            notifier,
        }
    }

    pub fn data(&self) -> &FormData {
        &self.data
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Replaces a field value. Existing errors stay until the next
    /// validation pass.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        self.data.set(field, value.into());
    }

    pub fn validate(&mut self) -> bool {
        self.errors = validate::validate(&self.data);
        self.errors.is_empty()
    }

    /// First half of a submission. Returns the parameters to deliver, or
    /// `None` when validation failed and nothing should be sent.
    pub fn begin_submit(&mut self) -> Option<ContactParams> {
        if !self.validate() {
            log::debug!("contact form has {} validation errors", self.errors.len());
            self.notifier
                .notify(Notice::Error(FIX_ERRORS_NOTICE.to_string()));
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.errors.clear();
        Some(ContactParams::from(&self.data))
    }

    /// Second half of a submission: applies the mailer's verdict.
    pub fn complete_submit(&mut self, result: Result<(), SubmitError>) -> SubmissionStatus {
        match result {
            Ok(()) => {
                log::info!("contact message delivered");
                self.status = SubmissionStatus::Success;
                self.data.clear();
                self.errors.clear();
                self.notifier
                    .notify(Notice::Success(SUCCESS_NOTICE.to_string()));
            }
            Err(e) => {
                log::error!("contact message failed: {e}");
                self.status = SubmissionStatus::Error;
                self.errors.clear();
                self.errors
                    .insert(ErrorSlot::General, format!("Error sending the message: {e}"));
                self.notifier
                    .notify(Notice::Error(FAILURE_NOTICE.to_string()));
            }
        }
        self.status
    }

    pub async fn submit<M: Mailer + ?Sized>(&mut self, mailer: &M) -> SubmissionStatus {
        let Some(params) = self.begin_submit() else {
            return self.status;
        };
        let result = mailer.send(&params).await;
        self.complete_submit(result)
    }
}
