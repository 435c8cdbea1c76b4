//! Rendering of authentication outcomes into display greetings.
//!
//! Everything here is pure: the same outcome always yields the same text and
//! nothing is logged or stored.

use crate::outcome::AuthenticationOutcome;

const ROOT_USERNAME: &str = "root";

const UNKNOWN_ERROR: &str = "An unknown error happened.";

/// Status codes with a dedicated message. Anything else maps to
/// [`UNKNOWN_ERROR`].
const ERROR_MESSAGES: &[(i32, &str)] = &[
    (401, "Oops, couldn't log you in (reason: bad credentials)."),
    (403, "Sorry, your account has been disabled."),
    (404, "Sorry, this account has been deleted or doesn't exist."),
    (503, "Impossible to connect to the authentication server."),
];

/// Returns the greeting shown for `outcome`.
pub fn greet(outcome: &AuthenticationOutcome) -> String {
    match outcome {
        AuthenticationOutcome::Anonymous => "Welcome guest!".to_string(),
        AuthenticationOutcome::Authenticated { username, is_admin } => {
            // Checked before the generic admin branch.
            if *is_admin && username == ROOT_USERNAME {
                return "Greetings grand master!".to_string();
            }
            let prefix = if *is_admin { "Hi" } else { "Hello" };
            format!("{} {}!", prefix, username)
        }
        AuthenticationOutcome::AuthError { error_code } => error_message(*error_code).to_string(),
    }
}

/// Message for a failed authentication with the given status code.
pub fn error_message(code: i32) -> &'static str {
    ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .unwrap_or(UNKNOWN_ERROR)
}
