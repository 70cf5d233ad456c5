//! Schema walk: YAML value tree → [`RootConfig`]

use super::ranges::{check_positive_float, check_split_fraction};
use super::section::{join_path, Section};
use crate::config::error::{ConfigError, ParseError, Result, SchemaError};
use crate::config::schema::{
    DataConfig, DatasetConfig, DeviceConfig, DeviceType, LRSchedulerConfig, LoaderConfig,
    LoggerConfig, ModelConfig, NetworkConfig, OptimizerConfig, OutputScaleConfig,
    PhotonLibConfig, RootConfig, TrainConfig, TransformVisConfig, DEFAULT_SEED,
    DEFAULT_VALIDATION_SPLIT,
};
use serde_yaml::Value;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Required top-level sections, in the order they are checked
pub const REQUIRED_SECTIONS: [&str; 7] = [
    "photonlib",
    "data",
    "device",
    "logger",
    "model",
    "train",
    "transform_vis",
];

/// Load and validate a configuration file
///
/// # Example
///
/// ```no_run
/// use photonlib_config::config::load_config;
///
/// let config = load_config("configs/icarus_siren.yaml")?;
/// println!("batch size: {}", config.data.loader.batch_size);
/// # Ok::<(), photonlib_config::config::ConfigError>(())
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<RootConfig> {
    let path = config_path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = load_from_str(&text)?;
    info!(path = %path.display(), "Config loaded and validated");
    Ok(config)
}

/// Load and validate a configuration from an already-open reader
pub fn load_from_reader<R: Read>(mut reader: R) -> Result<RootConfig> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| ConfigError::Io {
            path: PathBuf::from("<reader>"),
            source,
        })?;
    load_from_str(&text)
}

/// Load and validate a configuration from YAML text
pub fn load_from_str(text: &str) -> Result<RootConfig> {
    if text.trim().is_empty() {
        return Err(SchemaError::Missing {
            path: REQUIRED_SECTIONS[0].to_string(),
        }
        .into());
    }
    let mut document: Value = serde_yaml::from_str(text).map_err(ParseError::from)?;
    document.apply_merge().map_err(ParseError::from)?;
    Ok(build_root(&document)?)
}

fn section_at<'a>(
    parent: &Section<'a>,
    path: &'a str,
    key: &str,
) -> std::result::Result<Section<'a>, SchemaError> {
    Section::at(path, parent.require(key, "mapping")?)
}

fn log_unknown_keys(section: &Section<'_>, known: &[&str]) {
    for key in section.unknown_keys(known) {
        debug!(section = section.path(), key = %key, "Ignoring unrecognized key");
    }
}

/// Walk the document against the schema
pub(crate) fn build_root(document: &Value) -> std::result::Result<RootConfig, SchemaError> {
    if document.is_null() {
        return Err(SchemaError::Missing {
            path: REQUIRED_SECTIONS[0].to_string(),
        });
    }
    let root = Section::root(document)?;

    if let Some(missing) = REQUIRED_SECTIONS.iter().find(|key| !root.contains(key)) {
        return Err(SchemaError::Missing {
            path: (*missing).to_string(),
        });
    }
    log_unknown_keys(&root, &REQUIRED_SECTIONS);

    let photonlib_path = root.field("photonlib");
    let data_path = root.field("data");
    let device_path = root.field("device");
    let logger_path = root.field("logger");
    let model_path = root.field("model");
    let train_path = root.field("train");
    let vis_path = root.field("transform_vis");

    Ok(RootConfig {
        photonlib: build_photonlib(&section_at(&root, &photonlib_path, "photonlib")?)?,
        data: build_data(&section_at(&root, &data_path, "data")?)?,
        device: build_device(&section_at(&root, &device_path, "device")?)?,
        logger: build_logger(&section_at(&root, &logger_path, "logger")?)?,
        model: build_model(&section_at(&root, &model_path, "model")?)?,
        train: build_train(&section_at(&root, &train_path, "train")?)?,
        transform_vis: build_transform_vis(&section_at(&root, &vis_path, "transform_vis")?)?,
    })
}

fn build_photonlib(section: &Section<'_>) -> std::result::Result<PhotonLibConfig, SchemaError> {
    log_unknown_keys(section, &["filepath"]);
    Ok(PhotonLibConfig {
        filepath: section.path_buf("filepath")?,
    })
}

fn build_data(section: &Section<'_>) -> std::result::Result<DataConfig, SchemaError> {
    log_unknown_keys(section, &["dataset", "loader"]);

    let dataset_path = section.field("dataset");
    let dataset = section_at(section, &dataset_path, "dataset")?;
    log_unknown_keys(&dataset, &["filepath", "size"]);

    let loader_path = section.field("loader");
    let loader = section_at(section, &loader_path, "loader")?;
    log_unknown_keys(
        &loader,
        &["batch_size", "drop_last", "num_workers", "pin_memory", "shuffle"],
    );

    Ok(DataConfig {
        dataset: DatasetConfig {
            filepath: dataset.path_buf("filepath")?,
            size: dataset.positive_int("size")?,
        },
        loader: LoaderConfig {
            batch_size: loader.positive_int("batch_size")?,
            drop_last: loader.bool_or("drop_last", false)?,
            num_workers: loader.non_negative_int_or("num_workers", 0)?,
            pin_memory: loader.bool_or("pin_memory", false)?,
            shuffle: loader.bool_or("shuffle", false)?,
        },
    })
}

fn build_device(section: &Section<'_>) -> std::result::Result<DeviceConfig, SchemaError> {
    log_unknown_keys(section, &["type"]);
    let path = section.field("type");
    let name = section.string("type")?;
    let device_type = DeviceType::parse(&name).ok_or_else(|| SchemaError::NotAllowed {
        path,
        value: name.clone(),
        allowed: DeviceType::ALLOWED.iter().map(ToString::to_string).collect(),
    })?;
    Ok(DeviceConfig { device_type })
}

fn build_logger(section: &Section<'_>) -> std::result::Result<LoggerConfig, SchemaError> {
    log_unknown_keys(
        section,
        &["analysis", "dir_name", "file_name", "log_every_nsteps"],
    );
    let analysis = section.optional_string_map("analysis")?;
    if analysis.is_empty() {
        debug!("logger.analysis not set, no analysis metrics");
    }
    Ok(LoggerConfig {
        analysis,
        dir_name: section.string("dir_name")?,
        file_name: section.string("file_name")?,
        log_every_nsteps: section.positive_int("log_every_nsteps")?,
    })
}

fn build_model(section: &Section<'_>) -> std::result::Result<ModelConfig, SchemaError> {
    log_unknown_keys(section, &["ckpt_file", "network", "output_scale"]);

    let network_path = section.field("network");
    let network = section_at(section, &network_path, "network")?;
    log_unknown_keys(
        &network,
        &["hidden_features", "hidden_layers", "in_features", "out_features"],
    );

    let scale_path = section.field("output_scale");
    let output_scale = section_at(section, &scale_path, "output_scale")?;
    log_unknown_keys(&output_scale, &["fix"]);

    Ok(ModelConfig {
        ckpt_file: section.optional_path_buf("ckpt_file")?,
        network: NetworkConfig {
            hidden_features: network.positive_int("hidden_features")?,
            hidden_layers: network.positive_int("hidden_layers")?,
            in_features: network.positive_int("in_features")?,
            out_features: network.positive_int("out_features")?,
        },
        output_scale: OutputScaleConfig {
            fix: output_scale.bool("fix")?,
        },
    })
}

fn build_optimizer(section: &Section<'_>) -> std::result::Result<OptimizerConfig, SchemaError> {
    log_unknown_keys(section, &["name", "parameters"]);
    let parameters = section.float_map("parameters")?;
    if let Some(&lr) = parameters.get("lr") {
        check_positive_float(&join_path(&section.field("parameters"), "lr"), lr)?;
    }
    Ok(OptimizerConfig {
        name: section.string("name")?,
        parameters,
    })
}

fn build_lr_scheduler(
    section: &Section<'_>,
) -> std::result::Result<LRSchedulerConfig, SchemaError> {
    log_unknown_keys(section, &["name", "parameters"]);
    Ok(LRSchedulerConfig {
        name: section.string("name")?,
        parameters: section.param_map("parameters")?,
    })
}

fn build_train(section: &Section<'_>) -> std::result::Result<TrainConfig, SchemaError> {
    log_unknown_keys(
        section,
        &[
            "validation_split",
            "seed",
            "max_epochs",
            "max_iterations",
            "validate_every_iterations",
            "save_every_epochs",
            "save_every_iterations",
            "resume",
            "optimizer",
            "lr_scheduler",
        ],
    );

    let split_path = section.field("validation_split");
    let validation_split = check_split_fraction(
        &split_path,
        section.float_or("validation_split", DEFAULT_VALIDATION_SPLIT)?,
    )?;

    let optimizer_path = section.field("optimizer");
    let optimizer = build_optimizer(&section_at(section, &optimizer_path, "optimizer")?)?;

    let scheduler_path = section.field("lr_scheduler");
    let lr_scheduler = match section.get("lr_scheduler") {
        Some(value) => Some(build_lr_scheduler(&Section::at(&scheduler_path, value)?)?),
        None => {
            debug!("train.lr_scheduler not set, running without a scheduler");
            None
        }
    };

    Ok(TrainConfig {
        validation_split,
        seed: section.int_or("seed", DEFAULT_SEED)?,
        max_epochs: section.positive_int("max_epochs")?,
        max_iterations: section.optional_positive_int("max_iterations")?,
        validate_every_iterations: section.optional_positive_int("validate_every_iterations")?,
        save_every_epochs: section.positive_int("save_every_epochs")?,
        save_every_iterations: section.optional_positive_int("save_every_iterations")?,
        resume: section.bool_or("resume", false)?,
        optimizer,
        lr_scheduler,
    })
}

fn build_transform_vis(
    section: &Section<'_>,
) -> std::result::Result<TransformVisConfig, SchemaError> {
    log_unknown_keys(section, &["eps", "sin_out", "vmax"]);
    let eps_path = section.field("eps");
    Ok(TransformVisConfig {
        eps: check_positive_float(&eps_path, section.float("eps")?)?,
        sin_out: section.bool("sin_out")?,
        vmax: section.float("vmax")?,
    })
}
