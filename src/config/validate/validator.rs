//! Cross-field sanity checks
//!
//! Never fails: every finding is returned as a [`ConfigWarning`] for the
//! caller to log.

use super::error::ConfigWarning;
use crate::config::resume::ResumePoint;
use crate::config::schema::{DeviceType, RootConfig};

/// Validate a loaded configuration
///
/// Checks:
/// - Batch size against dataset and training-split size
/// - Checkpoint cadence against run length
/// - Resume settings against the checkpoint file name
/// - Device and loader memory settings
pub fn validate_config(config: &RootConfig) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    check_batching(config, &mut warnings);
    check_checkpoints(config, &mut warnings);
    check_resume(config, &mut warnings);
    check_device(config, &mut warnings);
    warnings
}

fn check_batching(config: &RootConfig, warnings: &mut Vec<ConfigWarning>) {
    let batch_size = config.data.loader.batch_size;
    let dataset_size = config.data.dataset.size;

    if batch_size > dataset_size {
        warnings.push(ConfigWarning::BatchLargerThanDataset {
            batch_size,
            dataset_size,
        });
    }

    let (train_size, _) = config.train.split_sizes(dataset_size);
    if config.data.loader.drop_last && train_size < batch_size {
        warnings.push(ConfigWarning::EmptyEpoch {
            train_size,
            batch_size,
        });
    }

    if config.train.validation_split == 0.0 {
        warnings.push(ConfigWarning::NoValidationData);
    }
}

fn check_checkpoints(config: &RootConfig, warnings: &mut Vec<ConfigWarning>) {
    let train = &config.train;
    if train.save_every_epochs > train.max_epochs {
        warnings.push(ConfigWarning::SaveIntervalExceedsEpochs {
            save_every_epochs: train.save_every_epochs,
            max_epochs: train.max_epochs,
        });
    }

    if let (Some(save_every_iterations), Some(max_iterations)) =
        (train.save_every_iterations, train.max_iterations)
    {
        if save_every_iterations > max_iterations {
            warnings.push(ConfigWarning::SaveIntervalExceedsIterations {
                save_every_iterations,
                max_iterations,
            });
        }
    }
}

fn check_resume(config: &RootConfig, warnings: &mut Vec<ConfigWarning>) {
    if !config.train.resume {
        return;
    }
    match &config.model.ckpt_file {
        None => warnings.push(ConfigWarning::ResumeWithoutCheckpoint),
        Some(path) if ResumePoint::from_checkpoint(path).is_none() => {
            warnings.push(ConfigWarning::UnparsableCheckpointName { path: path.clone() });
        }
        Some(_) => {}
    }
}

fn check_device(config: &RootConfig, warnings: &mut Vec<ConfigWarning>) {
    if config.device.device_type == DeviceType::Cuda && !config.data.loader.pin_memory {
        warnings.push(ConfigWarning::CudaWithoutPinnedMemory);
    }
}
