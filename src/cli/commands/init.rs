//! Init command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{presets, InitArgs};

pub fn run_init(args: InitArgs, level: LogLevel) -> Result<(), String> {
    let text = presets::get(&args.preset).ok_or_else(|| {
        format!(
            "Unknown preset: {}. Available presets: {}",
            args.preset,
            presets::names().join(", ")
        )
    })?;

    match &args.output {
        Some(path) => {
            if path.exists() && !args.force {
                return Err(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
            std::fs::write(path, text)
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
            log(
                level,
                LogLevel::Normal,
                &format!("Wrote preset {} to {}", args.preset, path.display()),
            );
        }
        None => print!("{text}"),
    }

    Ok(())
}
