//! Info command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_source, InfoArgs, OutputFormat, RootConfig};

/// Render a configuration in the requested format
pub fn render_config(config: &RootConfig, format: OutputFormat) -> Result<String, String> {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![
                format!("Photon library: {}", config.photonlib.filepath.display()),
                format!(
                    "Dataset: {} ({} events)",
                    config.data.dataset.filepath.display(),
                    config.data.dataset.size
                ),
                format!("Device: {}", config.device.device_type),
                format!(
                    "Network: {} hidden layers x {} features",
                    config.model.network.hidden_layers, config.model.network.hidden_features
                ),
            ];
            match config.train.optimizer.lr() {
                Some(lr) => lines.push(format!(
                    "Optimizer: {} (lr={lr})",
                    config.train.optimizer.name
                )),
                None => lines.push(format!("Optimizer: {}", config.train.optimizer.name)),
            }
            lines.push(format!("Epochs: {}", config.train.max_epochs));
            lines.push(format!("Batch size: {}", config.data.loader.batch_size));
            if let Some(scheduler) = &config.train.lr_scheduler {
                lines.push(format!("LR scheduler: {}", scheduler.name));
            }
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| format!("JSON serialization error: {e}")),
        OutputFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|e| format!("YAML serialization error: {e}"))
        }
    }
}

pub fn run_info(args: InfoArgs, level: LogLevel) -> Result<(), String> {
    let config = load_source(&args.config).map_err(|e| format!("Config error: {e}"))?;

    if args.format == OutputFormat::Text {
        log(level, LogLevel::Normal, "Configuration Info:");
        println!();
    }
    println!("{}", render_config(&config, args.format)?);

    Ok(())
}
