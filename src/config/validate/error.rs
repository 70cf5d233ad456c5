//! Validation warning types
//!
//! Warnings flag likely misconfiguration that is still loadable.

use std::path::PathBuf;

/// Non-fatal cross-field issue
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigWarning {
    #[error("data.loader.batch_size ({batch_size}) is larger than data.dataset.size ({dataset_size})")]
    BatchLargerThanDataset { batch_size: u64, dataset_size: u64 },

    #[error("Training split has {train_size} events, fewer than one batch of {batch_size} with drop_last set: every epoch would be empty")]
    EmptyEpoch { train_size: u64, batch_size: u64 },

    #[error("train.validation_split is 0: the validation loader will be empty")]
    NoValidationData,

    #[error("train.save_every_epochs ({save_every_epochs}) is larger than train.max_epochs ({max_epochs}): no epoch checkpoint will be written")]
    SaveIntervalExceedsEpochs {
        save_every_epochs: u64,
        max_epochs: u64,
    },

    #[error("train.save_every_iterations ({save_every_iterations}) is larger than train.max_iterations ({max_iterations}): no iteration checkpoint will be written")]
    SaveIntervalExceedsIterations {
        save_every_iterations: u64,
        max_iterations: u64,
    },

    #[error("train.resume is set but model.ckpt_file is empty: training starts from scratch")]
    ResumeWithoutCheckpoint,

    #[error("Checkpoint {} does not match iteration-<N>-epoch-<M>.ckpt: counters restart at zero", path.display())]
    UnparsableCheckpointName { path: PathBuf },

    #[error("device.type is cuda but data.loader.pin_memory is false: host-to-device copies will not use pinned memory")]
    CudaWithoutPinnedMemory,
}
