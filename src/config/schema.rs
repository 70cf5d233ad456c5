//! Typed schema for photon library training configuration
//!
//! Every struct here is an immutable value produced by the loader in
//! [`crate::config::load`]. Serialization mirrors the YAML layout exactly, so a
//! serialized [`RootConfig`] loads back to an equal value.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Fraction of the dataset held out for validation when `train.validation_split` is omitted.
pub const DEFAULT_VALIDATION_SPLIT: f64 = 0.1;

/// Seed for the dataset split generator when `train.seed` is omitted.
pub const DEFAULT_SEED: i64 = 0;

/// Root of the configuration tree handed to the training driver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootConfig {
    /// Photon library lookup table
    pub photonlib: PhotonLibConfig,

    /// Dataset and data-loader settings
    pub data: DataConfig,

    /// Compute device selection
    pub device: DeviceConfig,

    /// Training log output
    pub logger: LoggerConfig,

    /// Network architecture and checkpoint
    pub model: ModelConfig,

    /// Training hyperparameters
    pub train: TrainConfig,

    /// Visibility transform used for plotting
    pub transform_vis: TransformVisConfig,
}

/// Photon library reference
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotonLibConfig {
    /// Path to the lookup table file (existence is checked by the consumer)
    pub filepath: PathBuf,
}

/// Data configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataConfig {
    pub dataset: DatasetConfig,
    pub loader: LoaderConfig,
}

/// Track dataset on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetConfig {
    /// Dataset file path
    pub filepath: PathBuf,

    /// Number of events to use from the dataset
    pub size: u64,
}

/// Data-loader parameters
///
/// Omitted flags fall back to the usual loader defaults: no shuffling, no
/// pinned memory, no dropped tail batch and loading on the main worker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoaderConfig {
    pub batch_size: u64,
    pub drop_last: bool,
    pub num_workers: u64,
    pub pin_memory: bool,
    pub shuffle: bool,
}

/// Compute device kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Cpu,
    Cuda,
}

impl DeviceType {
    /// Every accepted spelling, in schema order
    pub const ALLOWED: [&'static str; 2] = ["cpu", "cuda"];

    /// Parse a device name as written in the config file
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "cpu" => Some(Self::Cpu),
            "cuda" => Some(Self::Cuda),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Cuda => "cuda",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(&s.to_lowercase()).ok_or_else(|| {
            format!(
                "Unknown device type: {s}. Valid types: {}",
                Self::ALLOWED.join(", ")
            )
        })
    }
}

/// Device selection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceConfig {
    #[serde(rename = "type")]
    pub device_type: DeviceType,
}

/// Training log output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoggerConfig {
    /// Metric name to optional formatting hint; the consumer interprets the hint
    pub analysis: BTreeMap<String, Option<String>>,

    /// Directory for logs and checkpoints
    pub dir_name: String,

    /// CSV file name inside `dir_name`
    pub file_name: String,

    /// Log cadence in optimizer steps
    pub log_every_nsteps: u64,
}

/// Network layer sizes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkConfig {
    pub hidden_features: u64,
    pub hidden_layers: u64,
    pub in_features: u64,
    pub out_features: u64,
}

/// Output scaling
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputScaleConfig {
    /// Freeze the output scale parameters
    pub fix: bool,
}

/// Model configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelConfig {
    /// Checkpoint to initialize from, if any
    pub ckpt_file: Option<PathBuf>,
    pub network: NetworkConfig,
    pub output_scale: OutputScaleConfig,
}

/// Optimizer name and hyperparameters
///
/// The parameter set is open-ended: the consumer's optimizer registry decides
/// which keys are meaningful for `name`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizerConfig {
    /// Optimizer name (e.g. "Adam")
    pub name: String,

    /// Optimizer keyword arguments (lr, weight_decay, ...)
    pub parameters: BTreeMap<String, f64>,
}

impl OptimizerConfig {
    /// Learning rate, when given
    pub fn lr(&self) -> Option<f64> {
        self.parameters.get("lr").copied()
    }
}

/// Scalar value of a scheduler keyword argument
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// Learning rate scheduler name and parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LRSchedulerConfig {
    /// Scheduler name (e.g. "ReduceLROnPlateau")
    pub name: String,

    /// Scheduler keyword arguments
    pub parameters: BTreeMap<String, ParamValue>,
}

/// Training hyperparameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainConfig {
    /// Fraction of the dataset used for validation, in [0, 1)
    pub validation_split: f64,

    /// Seed for the train/validation split
    pub seed: i64,

    pub max_epochs: u64,

    /// Stop after this many optimizer steps, regardless of epochs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<u64>,

    /// Validation cadence in steps; the consumer validates once per epoch when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validate_every_iterations: Option<u64>,

    pub save_every_epochs: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_every_iterations: Option<u64>,

    /// Resume counters from `model.ckpt_file`
    pub resume: bool,

    pub optimizer: OptimizerConfig,

    /// Scheduler, if the run uses one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lr_scheduler: Option<LRSchedulerConfig>,
}

impl TrainConfig {
    /// Train and validation sizes for a dataset of `dataset_size` events.
    ///
    /// Each part gets the floor of its fraction; leftover events are handed
    /// out one at a time starting with the training part.
    pub fn split_sizes(&self, dataset_size: u64) -> (u64, u64) {
        let total = dataset_size as f64;
        let mut sizes = [
            (total * (1.0 - self.validation_split)).floor() as u64,
            (total * self.validation_split).floor() as u64,
        ];
        let assigned = sizes[0].saturating_add(sizes[1]);
        for i in 0..dataset_size.saturating_sub(assigned) {
            sizes[(i % 2) as usize] += 1;
        }
        (sizes[0], sizes[1])
    }
}

/// Visibility transform parameters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformVisConfig {
    /// Offset added before the log transform
    pub eps: f64,

    /// Apply a sine activation to the network output
    pub sin_out: bool,

    /// Visibility at which the transform saturates
    pub vmax: f64,
}
