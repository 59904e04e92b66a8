use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once, shared by every request.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    // Simplified RFC 5322 shape; requires a dot-separated domain.
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$"
    ).unwrap()
});

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap());

/// Format checks for user-supplied registration fields.
pub struct Validator;

impl Validator {
    /// Returns `true` when `email` looks like a deliverable address.
    pub fn validate_email(email: &str) -> bool {
        if email.is_empty() || email.len() > 255 {
            return false;
        }

        // Consecutive dots pass the regex but are not valid addresses.
        if email.contains("..") {
            return false;
        }

        EMAIL_REGEX.is_match(email)
    }

    /// Returns `true` for 3 to 32 characters of alphanumerics, underscore
    /// or hyphen.
    pub fn validate_username(username: &str) -> bool {
        if username.len() < 3 || username.len() > 32 {
            return false;
        }

        USERNAME_REGEX.is_match(username)
    }

    /// Length checks for a new password.
    ///
    /// Returns the list of violations so callers can surface every problem
    /// at once.
    pub fn validate_password(password: &str) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if password.len() < 8 {
            errors.push("Password must be at least 8 characters long".to_string());
        }

        if password.len() > 128 {
            errors.push("Password must not exceed 128 characters".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
