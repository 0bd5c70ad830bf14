//! Session token claims.

use serde::{Deserialize, Serialize};
use staffdesk_core::Role;
use utoipa::ToSchema;

/// Claims carried by a session token.
///
/// The role is kept as the raw string that was signed. Resolving it through
/// [`Claims::role`] yields `None` for a string that names no known role, and
/// every permission query then denies.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Display name of the user
    pub name: String,
    /// Role slug, e.g. `chief_instructor`
    pub role: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}

impl Claims {
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_with_role(role: &str) -> Claims {
        Claims {
            sub: "user-id-123".to_string(),
            name: "Test User".to_string(),
            role: role.to_string(),
            exp: 1234567890,
            iat: 1234567800,
        }
    }

    #[test]
    fn test_claims_serialize() {
        let serialized = serde_json::to_string(&claims_with_role("principal")).unwrap();
        assert!(serialized.contains(r#""sub":"user-id-123""#));
        assert!(serialized.contains(r#""role":"principal""#));
    }

    #[test]
    fn test_claims_deserialize() {
        let json = r#"{"sub":"user-id-456","name":"Rahim","role":"instructor","exp":9999999999,"iat":9999999900}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.sub, "user-id-456");
        assert_eq!(claims.role(), Some(Role::Instructor));
        assert_eq!(claims.exp, 9999999999);
    }

    #[test]
    fn test_unknown_role_resolves_to_none() {
        assert_eq!(claims_with_role("janitor").role(), None);
        assert_eq!(claims_with_role("").role(), None);
    }
}
