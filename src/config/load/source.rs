//! Resolution of a config argument to a file or a bundled preset

use super::loader::{load_config, load_from_str};
use crate::config::error::Result;
use crate::config::presets;
use crate::config::schema::RootConfig;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where a configuration document comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// A file on disk
    File(PathBuf),
    /// A preset compiled into the binary
    Preset {
        name: String,
        text: &'static str,
    },
}

impl ConfigSource {
    /// Load and validate the document
    pub fn load(&self) -> Result<RootConfig> {
        match self {
            Self::File(path) => load_config(path),
            Self::Preset { name, text } => {
                debug!(preset = %name, "Loading bundled preset");
                load_from_str(text)
            }
        }
    }
}

/// Resolve a config argument.
///
/// An existing file wins; otherwise a preset with that name is used. Anything
/// else is kept as a path so the eventual load reports the I/O error.
pub fn resolve_source(name_or_path: impl AsRef<Path>) -> ConfigSource {
    let path = name_or_path.as_ref();
    if path.is_file() {
        return ConfigSource::File(path.to_path_buf());
    }

    let preset = path
        .to_str()
        .and_then(|name| presets::get(name).map(|text| (name, text)));
    match preset {
        Some((name, text)) => ConfigSource::Preset {
            name: name.to_string(),
            text,
        },
        None => ConfigSource::File(path.to_path_buf()),
    }
}

/// Resolve and load in one step
pub fn load_source(name_or_path: impl AsRef<Path>) -> Result<RootConfig> {
    resolve_source(name_or_path).load()
}
