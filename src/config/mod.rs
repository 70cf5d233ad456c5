//! Training configuration
//!
//! Loads the YAML document that drives photon library surrogate training,
//! checks it against a fixed schema and exposes it as an immutable typed tree.
//!
//! # Components
//!
//! - [`load`] - YAML parsing and schema walk
//! - [`validate`] - Cross-field warnings on a loaded configuration
//! - [`overrides`] - Command-line overrides producing a new configuration
//! - [`resume`] - Resume counters encoded in checkpoint names
//! - [`presets`] - Bundled configuration documents
//! - [`cli`] - Command-line argument types

pub mod cli;
mod error;
pub mod load;
pub mod overrides;
pub mod presets;
pub mod resume;
pub mod schema;
pub mod validate;

pub use cli::{
    parse_args, Cli, Command, InfoArgs, InitArgs, OutputFormat, ResolveArgs, ValidateArgs,
};
pub use error::{ConfigError, ParseError, Result, SchemaError};
pub use load::{
    load_config, load_from_reader, load_from_str, load_source, resolve_source, ConfigSource,
    REQUIRED_SECTIONS,
};
pub use overrides::ConfigOverrides;
pub use resume::ResumePoint;
pub use schema::{
    DataConfig, DatasetConfig, DeviceConfig, DeviceType, LRSchedulerConfig, LoaderConfig,
    LoggerConfig, ModelConfig, NetworkConfig, OptimizerConfig, OutputScaleConfig, ParamValue,
    PhotonLibConfig, RootConfig, TrainConfig, TransformVisConfig, DEFAULT_SEED,
    DEFAULT_VALIDATION_SPLIT,
};
pub use validate::{validate_config, ConfigWarning};
