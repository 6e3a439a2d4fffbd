//! User form validation.
//!
//! Field-level checks producing either a sanitized [`FormPayload`] or
//! per-field messages. First violation wins per field; a failed validation
//! never reaches the store.

use thiserror::Error;

use crate::domain::FormPayload;

pub const NAME_REQUIRED: &str = "Name is required";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email address";

/// Raw form input as entered, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: String,
    pub email: String,
}

impl FormInput {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Per-field validation messages. A `None` field passed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("Invalid form input")]
pub struct FieldErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
}

/// Validates the form, trimming both fields.
///
/// Name: required, at least 2 characters. Email: required, syntactically
/// valid. Entered input is left untouched on failure so the form can be
/// corrected rather than retyped.
pub fn validate(input: &FormInput) -> Result<FormPayload, FieldErrors> {
    let name = input.name.trim();
    let email = input.email.trim();

    let errors = FieldErrors {
        name: if name.is_empty() {
            Some(NAME_REQUIRED)
        } else if name.chars().count() < 2 {
            Some(NAME_TOO_SHORT)
        } else {
            None
        },
        email: if email.is_empty() {
            Some(EMAIL_REQUIRED)
        } else if !is_valid_email(email) {
            Some(EMAIL_INVALID)
        } else {
            None
        },
    };

    if errors.name.is_some() || errors.email.is_some() {
        return Err(errors);
    }

    Ok(FormPayload {
        name: name.to_string(),
        email: email.to_string(),
    })
}

/// Syntactic email check: one `@`, non-empty local part, and a domain
/// containing an interior dot. No attempt at full RFC coverage.
fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Guards against re-entrant submission while one is in flight.
#[derive(Debug, Default)]
pub struct SubmitGuard {
    in_flight: bool,
}

impl SubmitGuard {
    /// Claims the guard; returns `false` when a submit is already running.
    pub fn try_begin(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    pub fn finish(&mut self) {
        self.in_flight = false;
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_input_and_trims() {
        let payload = validate(&FormInput::new("  Ada Lovelace ", " ada@example.com ")).unwrap();
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn rejects_short_name_without_touching_email() {
        let errors = validate(&FormInput::new("A", "x@y.com")).unwrap_err();
        assert_eq!(errors.name, Some(NAME_TOO_SHORT));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn first_violation_wins_per_field() {
        let errors = validate(&FormInput::new("", "")).unwrap_err();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
        assert_eq!(errors.email, Some(EMAIL_REQUIRED));

        let errors = validate(&FormInput::new("Ada", "not-an-email")).unwrap_err();
        assert_eq!(errors.name, None);
        assert_eq!(errors.email, Some(EMAIL_INVALID));
    }

    #[test]
    fn whitespace_only_name_counts_as_empty() {
        let errors = validate(&FormInput::new("   ", "ada@example.com")).unwrap_err();
        assert_eq!(errors.name, Some(NAME_REQUIRED));
    }

    #[test]
    fn email_syntax_edges() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.org"));
        assert!(!is_valid_email("ada"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada@example.com."));
        assert!(!is_valid_email("ada lovelace@example.com"));
        assert!(!is_valid_email("ada@ex@ample.com"));
    }

    #[test]
    fn submit_guard_blocks_reentry() {
        let mut guard = SubmitGuard::default();
        assert!(guard.try_begin());
        assert!(guard.is_in_flight());
        assert!(!guard.try_begin());
        guard.finish();
        assert!(guard.try_begin());
    }
}
