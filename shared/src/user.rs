//! Display-only record of the signed-in user.
//!
//! Stored under the `user` localStorage key at login and used to render the
//! avatar initials and greeting. Not authoritative: the backend profile is.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUser {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl StoredUser {
    /// Up to two uppercase initials for the avatar badge, `U` when nothing
    /// usable is stored.
    pub fn initials(&self) -> String {
        let mut out = String::new();
        for name in [&self.first_name, &self.last_name] {
            if let Some(ch) = name.as_deref().and_then(|n| n.trim().chars().next()) {
                out.extend(ch.to_uppercase());
            }
        }
        if out.is_empty() {
            "U".to_string()
        } else {
            out
        }
    }

    /// Name to greet the user with: full name, else the email local part,
    /// else a generic fallback.
    pub fn display_name(&self) -> String {
        let full = [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|n| n.as_deref())
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !full.is_empty() {
            return full;
        }
        if let Some(local) = self
            .email
            .as_deref()
            .and_then(|e| e.split('@').next())
            .filter(|l| !l.is_empty())
        {
            return local.to_string();
        }
        "Student".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(first: Option<&str>, last: Option<&str>, email: Option<&str>) -> StoredUser {
        StoredUser {
            user_id: None,
            first_name: first.map(Into::into),
            last_name: last.map(Into::into),
            email: email.map(Into::into),
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(user(Some("Ada"), Some("Lovelace"), None).initials(), "AL");
        assert_eq!(user(Some("ada"), None, None).initials(), "A");
        assert_eq!(user(None, Some("lovelace"), None).initials(), "L");
        assert_eq!(user(None, None, Some("a@b.c")).initials(), "U");
        assert_eq!(StoredUser::default().initials(), "U");
    }

    #[test]
    fn test_display_name_fallback_chain() {
        assert_eq!(
            user(Some("Ada"), Some("Lovelace"), Some("ada@example.com")).display_name(),
            "Ada Lovelace"
        );
        assert_eq!(user(Some("Ada"), None, None).display_name(), "Ada");
        assert_eq!(
            user(None, None, Some("ada@example.com")).display_name(),
            "ada"
        );
        assert_eq!(StoredUser::default().display_name(), "Student");
        // Whitespace-only names fall through to the email.
        assert_eq!(
            user(Some("  "), None, Some("ada@example.com")).display_name(),
            "ada"
        );
    }

    #[test]
    fn test_stored_record_wire_names() {
        let parsed: StoredUser = serde_json::from_str(
            r#"{"userId":"6dd50c89-6f8e-4a6e-9b8e-1df6fbd06a2f","firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(parsed.first_name.as_deref(), Some("Ada"));
        assert!(parsed.user_id.is_some());
    }
}
