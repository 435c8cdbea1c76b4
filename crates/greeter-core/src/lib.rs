//! Core functionality shared across the greeter components.
//!
//! The heart of the crate is [`greeting::greet`], which turns an
//! [`AuthenticationOutcome`] into the message shown to the user. The `config`
//! module loads named outcomes from a TOML scenario file for batch rendering.

pub mod config;
pub mod error;
pub mod greeting;
pub mod outcome;
pub mod test_support;

pub use greeting::{error_message, greet};
pub use outcome::AuthenticationOutcome;
