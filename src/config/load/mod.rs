//! Configuration loading
//!
//! Parses a YAML document, walks it against the fixed schema and materializes
//! an immutable [`RootConfig`](crate::config::RootConfig). Loading is
//! all-or-nothing: the first violation is returned with its field path.

mod loader;
pub(crate) mod ranges;
mod section;
mod source;

pub use loader::{load_config, load_from_reader, load_from_str, REQUIRED_SECTIONS};
pub use source::{load_source, resolve_source, ConfigSource};

#[cfg(test)]
mod proptests;
