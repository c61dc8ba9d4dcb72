//! Interpreting sign-in responses.
//!
//! Sign-in servers disagree on field names, so extraction tries each known name in
//! turn and synthesizes what is missing:
//!
//! | Field | Looked up as | Fallback |
//! |-------|--------------|----------|
//! | token | `token`, `accessToken`, `authToken` | `fallback-token-<millis>` |
//! | user | `user`, `data` (objects only) | built from the submitted username plus top-level `email`, `role`, `id` |

use serde_json::Value;
use store::UserRecord;

use super::SignInReply;

const TOKEN_FIELDS: [&str; 3] = ["token", "accessToken", "authToken"];
const USER_FIELDS: [&str; 2] = ["user", "data"];

/// Token from a successful response, or a placeholder.
pub fn extract_token(body: &Value, now_millis: i64) -> String {
    TOKEN_FIELDS
        .iter()
        .filter_map(|field| body.get(field)?.as_str())
        .find(|token| !token.is_empty())
        .map(String::from)
        .unwrap_or_else(|| format!("fallback-token-{now_millis}"))
}

/// User record from a successful response, or one built from the form input.
pub fn extract_user(body: &Value, username: &str, now_millis: i64) -> UserRecord {
    let embedded = USER_FIELDS
        .iter()
        .filter_map(|field| body.get(field))
        .filter(|value| value.is_object())
        .find_map(|value| match serde_json::from_value::<UserRecord>(value.clone()) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring malformed user object in sign-in response: {}", e);
                None
            }
        });

    let mut user = embedded.unwrap_or_else(|| UserRecord {
        id: Some(
            top_level_string(body, "id").unwrap_or_else(|| format!("user_{now_millis}")),
        ),
        email: Some(
            top_level_string(body, "email").unwrap_or_else(|| format!("{username}@example.com")),
        ),
        role: Some(top_level_string(body, "role").unwrap_or_else(|| "Client".to_string())),
        ..UserRecord::new(username)
    });
    if user.username.is_empty() {
        user.set_username(username);
    }
    user
}

/// Banner text for a response that did not sign the user in.
pub fn rejection_message(reply: &SignInReply) -> String {
    if reply.status == 401 {
        return "Invalid username or password. Please try again.".to_string();
    }
    match reply.body.get("message").and_then(Value::as_str) {
        Some(message) if !message.is_empty() => message.to_string(),
        _ => format!("Sign-in failed with status {}", reply.status),
    }
}

fn top_level_string(body: &Value, field: &str) -> Option<String> {
    match body.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_token_field_precedence() {
        assert_eq!(extract_token(&json!({"token": "a", "accessToken": "b"}), 1), "a");
        assert_eq!(extract_token(&json!({"accessToken": "b", "authToken": "c"}), 1), "b");
        assert_eq!(extract_token(&json!({"token": "", "authToken": "c"}), 1), "c");
        assert_eq!(extract_token(&json!({"token": 42}), 7), "fallback-token-7");
        assert_eq!(extract_token(&Value::Null, 7), "fallback-token-7");
    }

    #[test]
    fn test_embedded_user_is_used() {
        let body = json!({"token": "abc", "user": {"username": "alice", "plan": "gold"}});
        let user = extract_user(&body, "typed-name", 1);
        assert_eq!(user.username, "alice");
        assert_eq!(user.extra.get("plan"), Some(&json!("gold")));
        assert!(user.email.is_none());
    }

    #[test]
    fn test_data_field_and_missing_username() {
        let body = json!({"data": {"id": 9, "email": "bob@example.com"}});
        let user = extract_user(&body, "bob", 1);
        assert_eq!(user.id.as_deref(), Some("9"));
        assert_eq!(user.username, "bob");
    }

    #[test]
    fn test_embedded_user_with_object_role_is_kept() {
        let body = json!({"user": {"id": 7, "username": "alice", "role": {"name": "Admin"}}});
        let user = extract_user(&body, "alice", 55);
        assert_eq!(user.id.as_deref(), Some("7"));
        assert_eq!(user.role, None);
        assert_eq!(user.extra.get("role"), Some(&json!({"name": "Admin"})));
    }

    #[test]
    fn test_embedded_user_with_numeric_created_at_is_kept() {
        let body = json!({"user": {"id": "u-1", "username": "alice", "createdAt": 1700000000}});
        let user = extract_user(&body, "alice", 55);
        assert_eq!(user.id.as_deref(), Some("u-1"));
        assert_eq!(user.created_at, None);
        assert_eq!(user.extra.get("createdAt"), Some(&json!(1700000000)));
    }

    #[test]
    fn test_embedded_user_with_null_fields_is_kept() {
        let body = json!({"data": {"id": 3, "username": null, "fallback": null, "team": "ops"}});
        let user = extract_user(&body, "carol", 55);
        assert_eq!(user.id.as_deref(), Some("3"));
        assert_eq!(user.username, "carol");
        assert!(!user.fallback);
        assert_eq!(user.extra.get("team"), Some(&json!("ops")));

        let stored: UserRecord = serde_json::from_value(serde_json::to_value(&user).unwrap()).unwrap();
        assert_eq!(stored, user);
    }

    #[test]
    fn test_synthesized_user_uses_top_level_fields() {
        let body = json!({"token": "abc", "email": "carol@site.lk", "id": 12});
        let user = extract_user(&body, "carol", 55);
        assert_eq!(user.username, "carol");
        assert_eq!(user.email.as_deref(), Some("carol@site.lk"));
        assert_eq!(user.role.as_deref(), Some("Client"));
        assert_eq!(user.id.as_deref(), Some("12"));
        assert!(!user.fallback);

        let bare = extract_user(&json!({}), "dave", 55);
        assert_eq!(bare.email.as_deref(), Some("dave@example.com"));
        assert_eq!(bare.id.as_deref(), Some("user_55"));
    }

    #[test]
    fn test_rejection_messages() {
        let unauthorized = SignInReply {
            status: 401,
            body: json!({"message": "bad creds"}),
        };
        assert_eq!(
            rejection_message(&unauthorized),
            "Invalid username or password. Please try again."
        );

        let locked = SignInReply {
            status: 423,
            body: json!({"message": "Account locked"}),
        };
        assert_eq!(rejection_message(&locked), "Account locked");

        let broken = SignInReply {
            status: 500,
            body: Value::Null,
        };
        assert_eq!(rejection_message(&broken), "Sign-in failed with status 500");
    }
}
