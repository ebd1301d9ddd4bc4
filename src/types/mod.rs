use serde::{Deserialize, Serialize};

/// The signed-in visitor (safe to expose to frontend)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionUser {
    pub name: Option<String>,
    pub email: String,
}

impl SessionUser {
    pub const FALLBACK_NAME: &'static str = "CodeCraft User";

    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(Self::FALLBACK_NAME)
    }

    /// Avatar initials: first letter of each name part, else the first two
    /// characters of the email, else `U`.
    pub fn initials(&self) -> String {
        if let Some(name) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return name
                .split_whitespace()
                .filter_map(|part| part.chars().next())
                .collect::<String>()
                .to_uppercase();
        }

        let from_email: String = self.email.chars().take(2).collect();
        if from_email.is_empty() {
            "U".to_string()
        } else {
            from_email.to_uppercase()
        }
    }
}

/// Newsletter subscription confirmation
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SubscribeResponse {
    pub email: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, email: &str) -> SessionUser {
        SessionUser {
            name: name.map(Into::into),
            email: email.into(),
        }
    }

    #[test]
    fn initials_prefer_name() {
        assert_eq!(user(Some("Ada Lovelace"), "ada@example.com").initials(), "AL");
        assert_eq!(user(Some("grace  brewster hopper"), "g@x.io").initials(), "GBH");
    }

    #[test]
    fn initials_fall_back_to_email() {
        assert_eq!(user(None, "sam@example.com").initials(), "SA");
        assert_eq!(user(Some("   "), "jo@example.com").initials(), "JO");
        assert_eq!(user(None, "").initials(), "U");
    }

    #[test]
    fn display_name_falls_back() {
        assert_eq!(user(None, "a@b.c").display_name(), "CodeCraft User");
        assert_eq!(user(Some("Kim"), "a@b.c").display_name(), "Kim");
    }
}
