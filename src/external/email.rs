//! Email collaborator

use regex::Regex;
use std::sync::LazyLock;

/// OWASP-style email shape check, shared by the mock service and the
/// guest-inquiry input validation
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("^[a-zA-Z0-9_+&*-]+(?:\\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\\.)+[a-zA-Z]{2,7}$")
        .expect("Failed to compile email pattern")
});

/// Whether an address looks like a deliverable email
#[must_use]
pub fn is_valid_email(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}

/// Delivery status reported by the email collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailStatus {
    /// The email was accepted for delivery
    Success,
    /// The sender address is malformed
    InvalidSenderEmail,
    /// The recipient address is malformed
    InvalidRecipientEmail,
}

impl EmailStatus {
    /// Numeric status code, shown to the user when a send fails
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::InvalidSenderEmail => 1,
            Self::InvalidRecipientEmail => 2,
        }
    }

    /// Whether the email was accepted
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

/// Boundary contract for sending notification emails.
/// Sends are fire-and-forget: a failure becomes a warning, never an abort.
pub trait EmailService {
    /// Send an email and report its delivery status. A malformed sender is
    /// reported before a malformed recipient.
    fn send_email(&self, from: &str, to: &str, subject: &str, body: &str) -> EmailStatus;
}

/// Stand-in email service: validates both addresses and logs the send
#[derive(Debug, Clone, Copy, Default)]
pub struct MockEmailService;

impl EmailService for MockEmailService {
    fn send_email(&self, from: &str, to: &str, subject: &str, _body: &str) -> EmailStatus {
        if !is_valid_email(from) {
            return EmailStatus::InvalidSenderEmail;
        }
        if !is_valid_email(to) {
            return EmailStatus::InvalidRecipientEmail;
        }
        logger::debug!("email sent from {from} to {to}: {subject}");
        EmailStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_with_valid_addresses() {
        let service = MockEmailService;
        let status = service.send_email(
            "noreply@hindeburg.ac.nz",
            "student1@hindeburg.ac.uk",
            "Course Created - COM1001",
            "A course has been provided with the following details:",
        );
        assert!(status.is_success());
        assert_eq!(status.code(), 0);
    }

    #[test]
    fn test_invalid_sender_reported_before_recipient() {
        let service = MockEmailService;
        let status = service.send_email("not-an-email", "also-not-an-email", "s", "b");
        assert_eq!(status, EmailStatus::InvalidSenderEmail);
    }

    #[test]
    fn test_invalid_recipient() {
        let service = MockEmailService;
        let status = service.send_email("noreply@hindeburg.ac.nz", "missing-domain@", "s", "b");
        assert_eq!(status, EmailStatus::InvalidRecipientEmail);
        assert_eq!(status.code(), 2);
    }

    #[test]
    fn test_address_shapes() {
        assert!(is_valid_email("first.last-name+tag_123@hindeburg.ac.uk"));
        assert!(is_valid_email("admin1@hindeburg.ac.uk"));
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("user@no-tld"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_empty_subject_and_body_are_accepted() {
        let service = MockEmailService;
        let status = service.send_email("a@hindeburg.ac.nz", "b@hindeburg.ac.nz", "", "");
        assert!(status.is_success());
    }
}
