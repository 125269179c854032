//! Contact form: field state, the submitting flag and the relay round trip.

pub mod relay;

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::notify::Notification;
use relay::{ContactMessage, ContactRelay};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

/// The four form fields, exactly as the user typed them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Names of required fields that are blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }

    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

/// One contact page's form state.
///
/// `submitting` is raised by [`begin`](Self::begin) and lowered by
/// [`finish`](Self::finish); while raised the submit control is disabled and
/// further submissions are ignored.
#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    form: ContactForm,
    submitting: bool,
    notification: Option<Notification>,
}

impl ContactSession {
    pub fn new(form: ContactForm) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    /// Starts a submission. Returns `None` when one is already in flight or
    /// when required fields are blank (the latter sets an error notification).
    pub fn begin(&mut self) -> Option<ContactMessage> {
        if self.submitting {
            return None;
        }
        let missing = self.form.missing_fields();
        if !missing.is_empty() {
            self.notification = Some(Notification::error(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
            return None;
        }
        self.submitting = true;
        self.notification = None;
        Some(self.form.to_message())
    }

    /// Applies the relay outcome. Success clears the form; failure keeps it
    /// for resubmission.
    pub fn finish(&mut self, outcome: Result<(), relay::RelayError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                info!("Contact message relayed");
                self.form = ContactForm::default();
                self.notification = Some(Notification::success(SUCCESS_MESSAGE));
            }
            Err(relay::RelayError::Rejected { status, message }) => {
                warn!(status, %message, "Relay rejected contact message");
                self.notification = Some(Notification::error(FAILURE_MESSAGE));
            }
            Err(e) => {
                error!("Error sending contact message: {e}");
                self.notification = Some(Notification::error(FAILURE_MESSAGE));
            }
        }
    }

    /// Runs a full submission against `relay`.
    pub async fn submit(&mut self, relay: &dyn ContactRelay) {
        let Some(message) = self.begin() else {
            return;
        };
        let outcome = relay.send(&message).await;
        self.finish(outcome);
    }
}
