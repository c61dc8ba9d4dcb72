//! # Domain models for users and projects
//!
//! Defines the data structures that cross the boundary between the external HTTP
//! collaborators (sign-in endpoint, project list endpoint), the persisted session and
//! the UI. All types are `Serialize + Deserialize` so they can be written to the
//! session backend and decoded straight from JSON responses.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`UserRecord`] | The signed-in user as returned by the sign-in endpoint (or synthesized locally). Known fields are typed; unknown fields are kept in `extra` and written back untouched. |
//! | [`ProjectRecord`] | A single construction project shown in the catalog. |
//! | [`ProjectStatus`] | Lifecycle stage of a project. Unknown labels are preserved as [`ProjectStatus::Other`]. |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A user record stored in the session.
///
/// Servers disagree about the shape of a user object, so nothing is required.
/// A known field that is `null` reads as absent; one with an unexpected type reads
/// as absent and its raw value stays in `extra`. Everything the client doesn't
/// model lands in `extra` and is written back untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Server identifier. Numeric ids are normalised to their decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Set on sessions synthesized without reaching the server.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    /// Create a record with just a username.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Username, or the email when the server omitted a username.
    pub fn display_name(&self) -> &str {
        if self.username.is_empty() {
            self.email.as_deref().unwrap_or_default()
        } else {
            &self.username
        }
    }

    /// Replace the username, dropping any raw value kept for it in `extra`.
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.extra.remove("username");
        self.username = username.into();
    }
}

impl<'de> Deserialize<'de> for UserRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut extra = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self {
            id: take_field(&mut extra, "id", |value| match value {
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            }),
            username: take_field(&mut extra, "username", as_string).unwrap_or_default(),
            email: take_field(&mut extra, "email", as_string),
            role: take_field(&mut extra, "role", as_string),
            fallback: take_field(&mut extra, "fallback", Value::as_bool).unwrap_or(false),
            created_at: take_field(&mut extra, "createdAt", as_string),
            extra,
        })
    }
}

fn as_string(value: &Value) -> Option<String> {
    value.as_str().map(String::from)
}

/// Remove `key` from `fields` and convert it. `null` is dropped; a value that
/// doesn't convert is put back.
fn take_field<T>(
    fields: &mut Map<String, Value>,
    key: &str,
    convert: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    let value = fields.remove(key)?;
    if value.is_null() {
        return None;
    }
    let typed = convert(&value);
    if typed.is_none() {
        fields.insert(key.to_string(), value);
    }
    typed
}

/// Lifecycle stage of a project.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planning,
    Other(String),
}

impl ProjectStatus {
    pub fn label(&self) -> &str {
        match self {
            ProjectStatus::Completed => "Completed",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Planning => "Planning",
            ProjectStatus::Other(label) => label,
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Completed" => ProjectStatus::Completed,
            "In Progress" => ProjectStatus::InProgress,
            "Planning" => ProjectStatus::Planning,
            _ => ProjectStatus::Other(s),
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        status.label().to_string()
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A construction project shown in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub title: String,
    pub category: String,
    /// Cover image URL
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub status: ProjectStatus,
    /// Completion year, e.g. "2026"
    pub completion: String,
    /// Percent complete, 0..=100
    #[serde(default)]
    pub progress: u8,
    /// Budget as displayed, e.g. "$250M"
    #[serde(default)]
    pub investment: String,
    /// Average rating, 0.0..=5.0
    #[serde(default)]
    pub rating: f32,
}

impl ProjectRecord {
    /// Progress clamped to 100 for progress bars.
    pub fn progress_percent(&self) -> u8 {
        self.progress.min(100)
    }

    /// Completion year as a number, if it parses.
    pub fn completion_year(&self) -> Option<u32> {
        self.completion.trim().parse().ok()
    }

    /// Investment amount in whole currency units.
    ///
    /// Understands a leading currency symbol, thousands separators and
    /// `K`/`M`/`B` suffixes: `"$250M"` → `250_000_000.0`.
    pub fn investment_amount(&self) -> Option<f64> {
        parse_amount(&self.investment)
    }
}

fn parse_amount(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '.')
        .collect();
    let (number, multiplier) = match cleaned.chars().last()? {
        'K' | 'k' => (&cleaned[..cleaned.len() - 1], 1e3),
        'M' | 'm' => (&cleaned[..cleaned.len() - 1], 1e6),
        'B' | 'b' => (&cleaned[..cleaned.len() - 1], 1e9),
        _ => (cleaned.as_str(), 1.0),
    };
    number.parse::<f64>().ok().map(|n| n * multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_record_keeps_unknown_fields() {
        let json = r#"{"id":42,"username":"alice","email":"a@example.com","team":"site-ops","badges":[1,2]}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id.as_deref(), Some("42"));
        assert_eq!(user.username, "alice");
        assert_eq!(user.extra.get("team"), Some(&Value::from("site-ops")));

        let back: Value = serde_json::to_value(&user).unwrap();
        assert_eq!(back["badges"], serde_json::json!([1, 2]));
        assert!(back.get("fallback").is_none());
    }

    #[test]
    fn test_user_record_missing_username_defaults_empty() {
        let user: UserRecord = serde_json::from_str(r#"{"email":"bob@example.com"}"#).unwrap();
        assert_eq!(user.username, "");
        assert_eq!(user.display_name(), "bob@example.com");
    }

    #[test]
    fn test_user_record_tolerates_unexpected_types() {
        let json = r#"{"id":true,"username":null,"role":{"name":"Admin"},"fallback":"yes","createdAt":1700000000,"email":null}"#;
        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, None);
        assert_eq!(user.username, "");
        assert_eq!(user.role, None);
        assert!(!user.fallback);
        assert_eq!(user.created_at, None);
        assert_eq!(user.email, None);
        assert_eq!(user.extra.get("role"), Some(&serde_json::json!({"name": "Admin"})));
        assert_eq!(user.extra.get("createdAt"), Some(&Value::from(1700000000)));
        assert_eq!(user.extra.get("id"), Some(&Value::Bool(true)));
        assert!(!user.extra.contains_key("username"));
        assert!(!user.extra.contains_key("email"));

        let back: Value = serde_json::to_value(&user).unwrap();
        assert_eq!(back["role"], serde_json::json!({"name": "Admin"}));
        assert_eq!(back["fallback"], Value::from("yes"));
        assert_eq!(back["createdAt"], Value::from(1700000000));
    }

    #[test]
    fn test_set_username_replaces_raw_value() {
        let mut user: UserRecord = serde_json::from_str(r#"{"username":7}"#).unwrap();
        assert_eq!(user.extra.get("username"), Some(&Value::from(7)));
        user.set_username("alice");
        let back: UserRecord = serde_json::from_value(serde_json::to_value(&user).unwrap()).unwrap();
        assert_eq!(back.username, "alice");
        assert!(back.extra.is_empty());
    }

    #[test]
    fn test_project_status_labels() {
        let status: ProjectStatus = serde_json::from_str(r#""In Progress""#).unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        let other: ProjectStatus = serde_json::from_str(r#""On Hold""#).unwrap();
        assert_eq!(other, ProjectStatus::Other("On Hold".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), r#""On Hold""#);
    }

    #[test]
    fn test_investment_amount() {
        assert_eq!(parse_amount("$250M"), Some(250_000_000.0));
        assert_eq!(parse_amount("$1.2B"), Some(1_200_000_000.0));
        assert_eq!(parse_amount("$800K"), Some(800_000.0));
        assert_eq!(parse_amount("$12,500"), Some(12_500.0));
        assert_eq!(parse_amount("TBD"), None);
        assert_eq!(parse_amount(""), None);
    }
}
