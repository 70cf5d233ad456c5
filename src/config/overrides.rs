//! Command-line overrides
//!
//! Overrides never mutate a loaded configuration: applying them yields a new
//! [`RootConfig`] whose overridden values pass the same range checks as loaded
//! ones.

use crate::config::error::SchemaError;
use crate::config::load::ranges::{check_non_empty, check_positive_float};
use crate::config::schema::{DeviceType, RootConfig};
use std::path::PathBuf;
use tracing::debug;

/// Values that replace their counterparts in a loaded configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    /// Replaces `device.type`
    pub device: Option<DeviceType>,
    /// Replaces `data.dataset.filepath`
    pub dataset_path: Option<PathBuf>,
    /// Replaces `data.dataset.size`
    pub dataset_size: Option<u64>,
    /// Replaces `train.optimizer.parameters.lr`
    pub lr: Option<f64>,
    /// `Some(false)` drops `train.lr_scheduler`; `Some(true)` keeps it
    pub schedule_lr: Option<bool>,
    /// Replaces `train.resume`
    pub resume: Option<bool>,
    /// Replaces `train.max_epochs`
    pub max_epochs: Option<u64>,
    /// Replaces `train.max_iterations`
    pub max_iterations: Option<u64>,
    /// Replaces `model.ckpt_file`
    pub ckpt_file: Option<PathBuf>,
    /// Replaces `logger.dir_name`
    pub logdir: Option<String>,
}

impl ConfigOverrides {
    /// True when no override is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn positive(path: &str, value: u64) -> Result<u64, SchemaError> {
    if value == 0 {
        return Err(SchemaError::OutOfRange {
            path: path.to_string(),
            value: value.to_string(),
            constraint: ">= 1".to_string(),
        });
    }
    Ok(value)
}

fn non_empty_path(path: &str, value: &std::path::Path) -> Result<PathBuf, SchemaError> {
    check_non_empty(path, value.to_string_lossy().into_owned()).map(PathBuf::from)
}

impl RootConfig {
    /// Build a new configuration with `overrides` applied
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Result<RootConfig, SchemaError> {
        let mut config = self.clone();

        if let Some(device) = overrides.device {
            config.device.device_type = device;
        }
        if let Some(path) = &overrides.dataset_path {
            config.data.dataset.filepath = non_empty_path("data.dataset.filepath", path)?;
        }
        if let Some(size) = overrides.dataset_size {
            config.data.dataset.size = positive("data.dataset.size", size)?;
        }
        if let Some(lr) = overrides.lr {
            let lr = check_positive_float("train.optimizer.parameters.lr", lr)?;
            config.train.optimizer.parameters.insert("lr".to_string(), lr);
        }
        if overrides.schedule_lr == Some(false) && config.train.lr_scheduler.take().is_some() {
            debug!("Learning rate scheduler disabled by override");
        }
        if let Some(resume) = overrides.resume {
            config.train.resume = resume;
        }
        if let Some(max_epochs) = overrides.max_epochs {
            config.train.max_epochs = positive("train.max_epochs", max_epochs)?;
        }
        if let Some(max_iterations) = overrides.max_iterations {
            config.train.max_iterations =
                Some(positive("train.max_iterations", max_iterations)?);
        }
        if let Some(ckpt_file) = &overrides.ckpt_file {
            config.model.ckpt_file = Some(non_empty_path("model.ckpt_file", ckpt_file)?);
        }
        if let Some(logdir) = &overrides.logdir {
            config.logger.dir_name = check_non_empty("logger.dir_name", logdir.clone())?;
        }

        Ok(config)
    }
}
