use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const SIMULATED_DELAY: Duration = Duration::from_millis(1500);
pub const RESTORE_DELAY: Duration = Duration::from_millis(2000);

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("a submission is already in flight")]
    Busy,
    #[error("delivery failed: {0}")]
    Transport(String),
}

impl ContactMessage {
    pub fn validate(name: &str, email: &str, message: &str) -> Result<Self, ContactError> {
        let fields = [("name", name), ("email", email), ("message", message)];
        if let Some((field, _)) = fields.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ContactError::MissingField(*field));
        }

        Ok(Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        })
    }
}

/// Where submissions go. Without a configured endpoint the page only simulates delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactTransport {
    Simulated { delay: Duration },
    Endpoint(Url),
}

impl Default for ContactTransport {
    fn default() -> Self {
        Self::Simulated {
            delay: SIMULATED_DELAY,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Invalid,
    Failed,
}

impl ButtonPhase {
    pub fn label(self, idle: &str) -> String {
        match self {
            Self::Idle => idle.to_string(),
            Self::Sending => "Sending...".to_string(),
            Self::Sent => "Message Sent!".to_string(),
            Self::Invalid => "Please fill all fields".to_string(),
            Self::Failed => "Error Sending".to_string(),
        }
    }

    pub fn disabled(self) -> bool {
        matches!(self, Self::Sending)
    }

    /// Styling hook for the button background.
    pub fn tone(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("is-success"),
            Self::Invalid | Self::Failed => Some("is-error"),
            Self::Idle | Self::Sending => None,
        }
    }

    pub fn needs_restore(self) -> bool {
        matches!(self, Self::Sent | Self::Invalid | Self::Failed)
    }
}

/// Submit button lifecycle for the contact form.
///
/// Each accepted or rejected attempt starts a new generation. Delayed
/// completions carry the generation they were started for and are dropped
/// once a newer attempt has begun.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    phase: ButtonPhase,
    generation: u64,
}

impl ContactSubmission {
    pub fn phase(&self) -> ButtonPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn begin(
        &mut self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, ContactError> {
        if self.phase == ButtonPhase::Sending {
            return Err(ContactError::Busy);
        }

        self.generation = self.generation.wrapping_add(1);
        match ContactMessage::validate(name, email, message) {
            Ok(message) => {
                self.phase = ButtonPhase::Sending;
                Ok(message)
            }
            Err(error) => {
                self.phase = ButtonPhase::Invalid;
                Err(error)
            }
        }
    }

    /// Records the delivery outcome; returns `true` when the form should be cleared.
    pub fn finish(&mut self, generation: u64, outcome: &Result<(), ContactError>) -> bool {
        if generation != self.generation || self.phase != ButtonPhase::Sending {
            return false;
        }

        self.phase = if outcome.is_ok() {
            ButtonPhase::Sent
        } else {
            ButtonPhase::Failed
        };
        outcome.is_ok()
    }

    pub fn restore(&mut self, generation: u64) {
        if generation == self.generation && self.phase.needs_restore() {
            self.phase = ButtonPhase::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_are_rejected_in_order() {
        assert_eq!(
            ContactMessage::validate(" ", "a@b.c", "hi"),
            Err(ContactError::MissingField("name"))
        );
        assert_eq!(
            ContactMessage::validate("Ana", "", ""),
            Err(ContactError::MissingField("email"))
        );
        assert_eq!(
            ContactMessage::validate("Ana", "a@b.c", "\n"),
            Err(ContactError::MissingField("message"))
        );
    }

    #[test]
    fn valid_message_is_trimmed() {
        let message = ContactMessage::validate(" Ana ", "ana@example.com", " Hello ").expect("valid");

        assert_eq!(message.name, "Ana");
        assert_eq!(message.message, "Hello");
    }

    #[test]
    fn successful_submission_clears_form_then_restores() {
        let mut submission = ContactSubmission::default();

        submission.begin("Ana", "ana@example.com", "Hello").expect("valid");
        let generation = submission.generation();
        assert_eq!(submission.phase(), ButtonPhase::Sending);
        assert!(submission.phase().disabled());

        assert!(submission.finish(generation, &Ok(())));
        assert_eq!(submission.phase().label("Send"), "Message Sent!");
        assert_eq!(submission.phase().tone(), Some("is-success"));

        submission.restore(generation);
        assert_eq!(submission.phase(), ButtonPhase::Idle);
        assert_eq!(submission.phase().label("Send"), "Send");
    }

    #[test]
    fn failed_delivery_keeps_form_contents() {
        let mut submission = ContactSubmission::default();
        submission.begin("Ana", "ana@example.com", "Hello").expect("valid");
        let generation = submission.generation();

        let cleared = submission.finish(generation, &Err(ContactError::Transport("offline".to_string())));

        assert!(!cleared);
        assert_eq!(submission.phase(), ButtonPhase::Failed);
        assert_eq!(submission.phase().tone(), Some("is-error"));
    }

    #[test]
    fn invalid_submission_shows_prompt_without_sending() {
        let mut submission = ContactSubmission::default();

        assert!(submission.begin("", "", "").is_err());
        assert_eq!(submission.phase().label("Send"), "Please fill all fields");
        assert!(!submission.finish(submission.generation(), &Ok(())));
    }

    #[test]
    fn double_submit_while_sending_is_refused() {
        let mut submission = ContactSubmission::default();
        submission.begin("Ana", "ana@example.com", "Hello").expect("valid");

        assert_eq!(
            submission.begin("Ana", "ana@example.com", "Hello"),
            Err(ContactError::Busy)
        );
        assert_eq!(submission.phase(), ButtonPhase::Sending);
    }

    #[test]
    fn restore_does_not_interrupt_sending() {
        let mut submission = ContactSubmission::default();
        submission.begin("Ana", "ana@example.com", "Hello").expect("valid");

        submission.restore(submission.generation());

        assert_eq!(submission.phase(), ButtonPhase::Sending);
    }

    #[test]
    fn stale_restore_after_invalid_attempt_keeps_sending() {
        let mut submission = ContactSubmission::default();
        assert!(submission.begin("", "", "").is_err());
        let rejected = submission.generation();

        submission.begin("Ana", "ana@example.com", "Hello").expect("valid");
        submission.restore(rejected);

        assert_eq!(submission.phase(), ButtonPhase::Sending);
        assert_eq!(
            submission.begin("Ana", "ana@example.com", "Hello"),
            Err(ContactError::Busy)
        );
    }

    #[test]
    fn stale_restore_leaves_newer_outcome_visible() {
        let mut submission = ContactSubmission::default();
        submission.begin("Ana", "ana@example.com", "Hello").expect("valid");
        let first = submission.generation();
        submission.finish(first, &Ok(()));

        assert!(submission.begin("", "", "").is_err());
        submission.restore(first);
        assert_eq!(submission.phase(), ButtonPhase::Invalid);

        submission.restore(submission.generation());
        assert_eq!(submission.phase(), ButtonPhase::Idle);
    }

    #[test]
    fn stale_delivery_outcome_is_ignored() {
        let mut submission = ContactSubmission::default();
        submission.begin("Ana", "ana@example.com", "Hello").expect("valid");
        let first = submission.generation();
        submission.finish(first, &Err(ContactError::Transport("offline".to_string())));
        submission.restore(first);

        submission.begin("Ana", "ana@example.com", "Again").expect("valid");
        assert!(!submission.finish(first, &Ok(())));
        assert_eq!(submission.phase(), ButtonPhase::Sending);
    }

    #[test]
    fn default_transport_is_simulated() {
        assert_eq!(
            ContactTransport::default(),
            ContactTransport::Simulated {
                delay: SIMULATED_DELAY
            }
        );
    }
}
