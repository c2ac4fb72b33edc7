//! User info entity

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Profile of the authenticated user, as returned by the service
///
/// Only `username` is guaranteed; any other fields are kept verbatim so
/// they can be shown in JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub username: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserInfo {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            extra: Map::new(),
        }
    }

    /// Look up an extra field returned by the service (e.g. `email`)
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_extra_fields() {
        let info: UserInfo = serde_json::from_str(
            r#"{"username": "alice", "email": "alice@example.com", "disabled": false}"#,
        )
        .unwrap();
        assert_eq!(info.username, "alice");
        assert_eq!(
            info.field("email").and_then(Value::as_str),
            Some("alice@example.com")
        );
        assert_eq!(info.field("disabled"), Some(&Value::Bool(false)));
    }

    #[test]
    fn test_deserialize_requires_username() {
        let result: Result<UserInfo, _> = serde_json::from_str(r#"{"email": "x@y.z"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_flattens_extra() {
        let mut info = UserInfo::new("bob");
        info.extra
            .insert("full_name".to_string(), Value::String("Bob B".to_string()));
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["username"], "bob");
        assert_eq!(json["full_name"], "Bob B");
    }
}
