//! Contact-form validation and the submit/status lifecycle. Each rule is
//! applied independently per field; the form is valid exactly when no field
//! produced an error message.

use std::time::{Duration, Instant};

use crate::timer::OneShot;

/// How long the "message sent" banner stays up before reverting to idle.
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success,
    Error,
}

/// Form fields plus the submit/status lifecycle around them. Owned by the
/// page that renders the form; the status-reset deadline dies with it.
#[derive(Debug, Clone, Default)]
pub struct FormSession {
    pub form: ContactForm,
    pub errors: FieldErrors,
    pub status: FormStatus,
    status_reset: OneShot,
}

impl FormSession {
    /// Validate and submit. Valid: clear all fields, show the success banner
    /// and arm its reset. Invalid: keep the fields, surface the errors.
    pub fn submit(&mut self) {
        let errors = validate(&self.form);
        if errors.is_empty() {
            self.form = ContactForm::default();
            self.errors = FieldErrors::default();
            self.status = FormStatus::Success;
            self.status_reset.start_in(SUCCESS_BANNER_DURATION);
        } else {
            self.errors = errors;
            self.status = FormStatus::Error;
        }
    }

    /// Poll the banner-reset deadline; reverts Success to Idle once it fires.
    pub fn tick(&mut self, now: Instant) {
        if self.status_reset.fired(now) {
            self.status = FormStatus::Idle;
        }
    }

    pub fn reset_pending(&self) -> bool {
        self.status_reset.is_pending()
    }
}

pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Name is required".to_string());
    }

    if form.email.trim().is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !email_shape_ok(&form.email) {
        errors.email = Some("Email is invalid".to_string());
    }

    if form.message.trim().is_empty() {
        errors.message = Some("Message is required".to_string());
    }

    errors
}

/// Coarse shape check: the input must contain a contiguous whitespace-free
/// run of the form `local@host.tld` (non-empty on all three sides). This is
/// an unanchored search, not an RFC-compliant parse: "x a@b.c" passes,
/// "a @b.c" does not.
fn email_shape_ok(input: &str) -> bool {
    input.split_whitespace().any(|token| {
        token.char_indices().any(|(at, ch)| {
            if ch != '@' || at == 0 {
                return false;
            }
            let after = &token[at + 1..];
            // Need a dot with at least one character on either side of it.
            after
                .char_indices()
                .any(|(dot, d)| d == '.' && dot >= 1 && dot + 1 < after.len())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        let errors = validate(&form("Ada", "ada@example.com", "Hello there"));
        assert!(errors.is_empty());
    }

    #[test]
    fn empty_name_is_rejected() {
        let errors = validate(&form("", "a@b.com", "hi"));
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
        assert!(!errors.is_empty());
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let errors = validate(&form("   ", "a@b.com", "\t\n"));
        assert_eq!(errors.name.as_deref(), Some("Name is required"));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let errors = validate(&form("A", "not-an-email", "hi"));
        assert_eq!(errors.email.as_deref(), Some("Email is invalid"));
    }

    #[test]
    fn empty_email_reports_required_not_invalid() {
        let errors = validate(&form("A", "  ", "hi"));
        assert_eq!(errors.email.as_deref(), Some("Email is required"));
    }

    #[test]
    fn empty_message_is_rejected() {
        let errors = validate(&form("A", "a@b.com", ""));
        assert_eq!(errors.message.as_deref(), Some("Message is required"));
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(email_shape_ok("a@b.c"));
        assert!(email_shape_ok("first.last@sub.domain.org"));
        // Unanchored: a valid run anywhere in the string is enough.
        assert!(email_shape_ok("reach me at a@b.co thanks"));
        // The run must be contiguous non-whitespace.
        assert!(!email_shape_ok("a @b.c"));
        assert!(!email_shape_ok("a@b .c"));
        // Missing pieces.
        assert!(!email_shape_ok("@b.c"));
        assert!(!email_shape_ok("a@.c"));
        assert!(!email_shape_ok("a@b."));
        assert!(!email_shape_ok("a@b"));
        assert!(!email_shape_ok("plain"));
    }

    #[test]
    fn all_fields_invalid_reports_all_three() {
        let errors = validate(&form("", "", ""));
        assert!(errors.name.is_some());
        assert!(errors.email.is_some());
        assert!(errors.message.is_some());
    }

    #[test]
    fn valid_submit_clears_fields_and_arms_the_reset() {
        let mut session = FormSession::default();
        session.form = form("Ada", "ada@example.com", "Hello there");
        session.submit();

        assert_eq!(session.form, ContactForm::default());
        assert!(session.errors.is_empty());
        assert_eq!(session.status, FormStatus::Success);
        assert!(session.reset_pending());
    }

    #[test]
    fn success_banner_reverts_to_idle_after_the_delay() {
        let mut session = FormSession::default();
        session.form = form("Ada", "ada@example.com", "Hello there");
        session.submit();

        let now = Instant::now();
        session.tick(now);
        assert_eq!(session.status, FormStatus::Success);

        session.tick(now + SUCCESS_BANNER_DURATION + Duration::from_millis(1));
        assert_eq!(session.status, FormStatus::Idle);
        assert!(!session.reset_pending());
    }

    #[test]
    fn invalid_submit_keeps_fields_and_reports_error() {
        let mut session = FormSession::default();
        session.form = form("", "not-an-email", "");
        session.submit();

        assert_eq!(session.form.email, "not-an-email");
        assert_eq!(session.status, FormStatus::Error);
        assert_eq!(session.errors.name.as_deref(), Some("Name is required"));
        assert_eq!(session.errors.email.as_deref(), Some("Email is invalid"));
        assert_eq!(session.errors.message.as_deref(), Some("Message is required"));
        assert!(!session.reset_pending());
    }

    #[test]
    fn spent_reset_cannot_flip_a_later_error_back_to_idle() {
        let mut session = FormSession::default();
        session.form = form("Ada", "ada@example.com", "Hello there");
        session.submit();

        let now = Instant::now();
        session.tick(now + SUCCESS_BANNER_DURATION + Duration::from_millis(1));
        assert_eq!(session.status, FormStatus::Idle);

        session.submit(); // empty fields again, so this one fails
        assert_eq!(session.status, FormStatus::Error);
        session.tick(now + SUCCESS_BANNER_DURATION * 10);
        assert_eq!(session.status, FormStatus::Error);
    }
}
