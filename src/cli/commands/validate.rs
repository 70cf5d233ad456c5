//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_source, validate_config, RootConfig, ValidateArgs};
use tracing::warn;

/// Format photon library and dataset information as a string
pub fn format_data_info(config: &RootConfig) -> String {
    let loader = &config.data.loader;
    let (train, val) = config.train.split_sizes(config.data.dataset.size);
    [
        format!("  Photon library: {}", config.photonlib.filepath.display()),
        format!("  Dataset: {}", config.data.dataset.filepath.display()),
        format!("  Dataset size: {} ({train} train / {val} validation)", config.data.dataset.size),
        format!("  Batch size: {}", loader.batch_size),
        format!(
            "  Loader: shuffle={} drop_last={} workers={} pin_memory={}",
            loader.shuffle, loader.drop_last, loader.num_workers, loader.pin_memory
        ),
    ]
    .join("\n")
}

/// Format network configuration as a string
pub fn format_model_info(config: &RootConfig) -> String {
    let network = &config.model.network;
    let mut lines = vec![
        format!(
            "  Network: {} -> {}x{} -> {}",
            network.in_features,
            network.hidden_layers,
            network.hidden_features,
            network.out_features
        ),
        format!("  Fixed output scale: {}", config.model.output_scale.fix),
    ];
    if let Some(ckpt) = &config.model.ckpt_file {
        lines.push(format!("  Checkpoint: {}", ckpt.display()));
    }
    lines.join("\n")
}

/// Format optimizer and scheduler configuration as a string
pub fn format_optimizer_info(config: &RootConfig) -> String {
    let optimizer = &config.train.optimizer;
    let mut lines = vec![format!("  Optimizer: {}", optimizer.name)];
    for (key, value) in &optimizer.parameters {
        lines.push(format!("    {key}: {value}"));
    }
    match &config.train.lr_scheduler {
        Some(scheduler) => {
            lines.push(format!("  LR scheduler: {}", scheduler.name));
            for (key, value) in &scheduler.parameters {
                lines.push(format!("    {key}: {value}"));
            }
        }
        None => lines.push("  LR scheduler: none".to_string()),
    }
    lines.join("\n")
}

/// Format training loop configuration as a string
pub fn format_training_info(config: &RootConfig) -> String {
    let train = &config.train;
    let mut lines = vec![
        format!("  Device: {}", config.device.device_type),
        format!("  Epochs: {}", train.max_epochs),
    ];
    if let Some(max_iterations) = train.max_iterations {
        lines.push(format!("  Max iterations: {max_iterations}"));
    }
    lines.push(format!("  Validation split: {}", train.validation_split));
    lines.push(format!("  Seed: {}", train.seed));
    lines.push(format!("  Save every {} epochs", train.save_every_epochs));
    if let Some(point) = config.resume_point() {
        lines.push(format!(
            "  Resume from iteration {} epoch {}",
            point.iteration, point.epoch
        ));
    }
    lines.push(format!(
        "  Log dir: {} (every {} steps)",
        config.logger.dir_name, config.logger.log_every_nsteps
    ));
    lines.join("\n")
}

/// Print detailed configuration summary
pub fn print_detailed_summary(config: &RootConfig) {
    println!();
    println!("Configuration Summary:");
    println!("{}", format_data_info(config));
    println!();
    println!("{}", format_model_info(config));
    println!();
    println!("{}", format_optimizer_info(config));
    println!();
    println!("{}", format_training_info(config));
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<(), String> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let config = load_source(&args.config).map_err(|e| format!("Config error: {e}"))?;

    let warnings = validate_config(&config);
    for warning in &warnings {
        warn!("{warning}");
    }

    if warnings.is_empty() {
        log(level, LogLevel::Normal, "Configuration is valid");
    } else {
        log(
            level,
            LogLevel::Normal,
            &format!("Configuration is valid with {} warning(s)", warnings.len()),
        );
    }

    if args.detailed {
        print_detailed_summary(&config);
    }

    Ok(())
}
