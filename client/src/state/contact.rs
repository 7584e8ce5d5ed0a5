//! Contact form state and submit flow.
//!
//! DESIGN
//! ======
//! The component only wires DOM events to this model; validation, the
//! pending flag, and the success/failure transitions live here so they can be
//! tested without a browser.
//!
//! ERROR HANDLING
//! ==============
//! A submission is attempted at most once per click. Relay failures leave
//! the fields untouched and surface a single error toast; there is no retry.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use crate::net::types::ContactRequest;
use crate::state::toast::{ToastKind, ToastState};

pub const SUCCESS_TITLE: &str = "Message Sent!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon!";
pub const FAILURE_TITLE: &str = "Error";
pub const FAILURE_DESCRIPTION: &str = "Something went wrong. Please try again later.";

/// Form fields in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }

    /// Value of the input's `name`/`id` attribute.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("{} is required", .0.label())]
    MissingField(ContactField),
    #[error("enter a valid email address")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySending,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        ContactField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Check required-field presence and email shape, then build the request.
    ///
    /// Values are forwarded verbatim; trimming is only used for the
    /// presence check.
    ///
    /// # Errors
    ///
    /// Returns the first missing field in display order, or `InvalidEmail`.
    pub fn validate(&self) -> Result<ContactRequest, ContactFormError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ContactFormError::MissingField(field));
        }
        if !looks_like_email(&self.email) {
            return Err(ContactFormError::InvalidEmail);
        }
        Ok(ContactRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        })
    }
}

/// The same loose shape check a browser applies to `type=email` inputs.
#[must_use]
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty() && !domain.is_empty() && !value.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

/// Submission phase of the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
}

/// Outcome of a relay attempt as seen by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(String),
}

/// Form fields plus the pending flag, provided to the contact section as one
/// signal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFlow {
    pub form: ContactForm,
    pub phase: SubmitPhase,
}

impl ContactFlow {
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.phase == SubmitPhase::Sending
    }

    /// Validate and enter `Sending`. The returned request is what must be
    /// sent to the relay; on error nothing should be sent.
    ///
    /// # Errors
    ///
    /// Returns a validation error, or `AlreadySending` while a previous
    /// submission is pending.
    pub fn begin_submit(&mut self) -> Result<ContactRequest, ContactFormError> {
        if self.is_sending() {
            return Err(ContactFormError::AlreadySending);
        }
        let request = self.form.validate()?;
        self.phase = SubmitPhase::Sending;
        Ok(request)
    }

    /// Apply the relay outcome: clear on success, keep input on failure, and
    /// push exactly one toast either way.
    pub fn finish(&mut self, outcome: &SubmitOutcome, toasts: &mut ToastState) {
        self.phase = SubmitPhase::Idle;
        match outcome {
            SubmitOutcome::Delivered => {
                self.form.clear();
                toasts.push(ToastKind::Success, SUCCESS_TITLE, SUCCESS_DESCRIPTION);
            }
            SubmitOutcome::Failed(_) => {
                toasts.push(ToastKind::Error, FAILURE_TITLE, FAILURE_DESCRIPTION);
            }
        }
    }

    /// Label of the submit button for the current phase.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.is_sending() { "Sending..." } else { "Send Message" }
    }
}

impl From<Result<crate::net::types::ContactResponse, String>> for SubmitOutcome {
    fn from(result: Result<crate::net::types::ContactResponse, String>) -> Self {
        match result {
            Ok(_) => Self::Delivered,
            Err(e) => Self::Failed(e),
        }
    }
}
