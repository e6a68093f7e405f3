//! Local checks run by the profile flows before any request goes out. These
//! mirror what the backend validates anyway; they only save a round trip.

/// Shortest password the change-password flow accepts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Name and email must both be non-blank before a profile update is issued.
pub fn validate_profile(name: &str, email: &str) -> Result<(), String> {
    if name.trim().is_empty() || email.trim().is_empty() {
        return Err("Name and email are required.".to_string());
    }
    Ok(())
}

/// All three fields present, confirmation matching, minimum length met.
pub fn validate_password_change(
    current: &str,
    next: &str,
    confirm: &str,
) -> Result<(), String> {
    if current.trim().is_empty() || next.trim().is_empty() || confirm.trim().is_empty() {
        return Err("All password fields are required.".to_string());
    }
    if next != confirm {
        return Err("New password and confirm password do not match.".to_string());
    }
    if next.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long."
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{validate_password_change, validate_profile};

    #[test]
    fn profile_requires_both_fields() {
        assert!(validate_profile("Ada", "ada@example.com").is_ok());
        assert!(validate_profile("  ", "ada@example.com").is_err());
        assert!(validate_profile("Ada", "").is_err());
    }

    #[test]
    fn password_change_checks_presence_match_and_length() {
        assert!(validate_password_change("old-pw", "new-password", "new-password").is_ok());
        assert!(validate_password_change("", "new-password", "new-password").is_err());
        assert!(validate_password_change("old-pw", "new-password", "other").is_err());
        assert!(validate_password_change("old-pw", "short", "short").is_err());
    }
}
