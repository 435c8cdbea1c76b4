use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of an authentication attempt, as handed over by whatever performed
/// the authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AuthenticationOutcome {
    /// Unauthenticated visitor.
    Anonymous,
    /// Successfully authenticated session.
    Authenticated {
        username: String,
        #[serde(default)]
        is_admin: bool,
    },
    /// Failed attempt, carrying an HTTP-style status code.
    AuthError { error_code: i32 },
}

impl AuthenticationOutcome {
    pub fn authenticated(username: impl Into<String>, is_admin: bool) -> Self {
        Self::Authenticated {
            username: username.into(),
            is_admin,
        }
    }

    pub fn auth_error(error_code: i32) -> Self {
        Self::AuthError { error_code }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Anonymous => "anonymous",
            Self::Authenticated { .. } => "authenticated",
            Self::AuthError { .. } => "auth_error",
        }
    }
}

impl fmt::Display for AuthenticationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::greeting::greet(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tagged_json() {
        let outcome: AuthenticationOutcome =
            serde_json::from_str(r#"{"kind":"authenticated","username":"alice","is_admin":true}"#)
                .expect("authenticated");
        assert_eq!(outcome, AuthenticationOutcome::authenticated("alice", true));

        let outcome: AuthenticationOutcome =
            serde_json::from_str(r#"{"kind":"auth_error","error_code":503}"#).expect("error");
        assert_eq!(outcome, AuthenticationOutcome::auth_error(503));

        let outcome: AuthenticationOutcome =
            serde_json::from_str(r#"{"kind":"anonymous"}"#).expect("anonymous");
        assert_eq!(outcome, AuthenticationOutcome::Anonymous);
    }

    #[test]
    fn admin_flag_defaults_to_false() {
        let outcome: AuthenticationOutcome =
            serde_json::from_str(r#"{"kind":"authenticated","username":"root"}"#)
                .expect("authenticated");
        assert_eq!(outcome, AuthenticationOutcome::authenticated("root", false));
    }

    #[test]
    fn rejects_unknown_kind_and_missing_fields() {
        assert!(serde_json::from_str::<AuthenticationOutcome>(r#"{"kind":"guest"}"#).is_err());
        assert!(
            serde_json::from_str::<AuthenticationOutcome>(r#"{"kind":"authenticated"}"#).is_err()
        );
        assert!(serde_json::from_str::<AuthenticationOutcome>(r#"{"kind":"auth_error"}"#).is_err());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(AuthenticationOutcome::auth_error(401)).expect("json");
        assert_eq!(json, serde_json::json!({"kind": "auth_error", "error_code": 401}));
    }

    #[test]
    fn display_matches_greeting() {
        let outcome = AuthenticationOutcome::authenticated("dany", true);
        assert_eq!(outcome.to_string(), "Hi dany!");
        assert_eq!(outcome.kind(), "authenticated");
    }
}
