//! Configuration validation
//!
//! Cross-field sanity checks on an already-loaded configuration.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ConfigWarning;
pub use validator::validate_config;
