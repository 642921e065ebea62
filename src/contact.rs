//! Contact form: field state, validation rules, and the submission
//! lifecycle against a pluggable [`Mailer`].

pub mod brevo;
mod controller;
mod form;
pub mod validate;

pub use controller::{
    ContactForm, Mailer, Notice, Notifier, SubmitError, FAILURE_NOTICE, FIX_ERRORS_NOTICE,
    SUCCESS_NOTICE,
};
pub use form::{
    ContactParams, ErrorSlot, Field, FormData, FormErrors, SubmissionStatus, PHONE_PLACEHOLDER,
};
