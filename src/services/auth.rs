use leptos::prelude::*;

use crate::common::ValidationError;
use crate::types::SessionUser;

pub const MIN_PASSWORD_LEN: usize = 4;

/// Client-side session handed to pages through context.
#[derive(Clone, Copy)]
pub struct AuthSession {
    user: RwSignal<Option<SessionUser>>,
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthSession {
    pub fn new() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }

    pub fn user(&self) -> Option<SessionUser> {
        self.user.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.with(Option::is_some)
    }

    pub fn login(&self, user: SessionUser) {
        tracing::info!(email = %user.email, "signed in");
        self.user.set(Some(user));
    }

    pub fn logout(&self) {
        self.user.set(None);
    }
}

pub fn use_session() -> AuthSession {
    use_context::<AuthSession>().unwrap_or_default()
}

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ValidationError> {
    validate_email(email)?;
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_needs_both_halves() {
        assert!(validate_email("ada@example.com").is_ok());
        assert_eq!(validate_email("ada"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("@example.com"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("ada@"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn password_length_is_checked_after_email() {
        assert_eq!(
            validate_credentials("ada@example.com", "abc"),
            Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN))
        );
        assert_eq!(
            validate_credentials("ada", "abc"),
            Err(ValidationError::InvalidEmail)
        );
        assert!(validate_credentials("ada@example.com", "abcd").is_ok());
    }
}
