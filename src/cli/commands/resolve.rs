//! Resolve command implementation
//!
//! Prints the configuration a training run would actually use once the
//! command-line overrides are applied.

use super::info::render_config;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{
    load_source, validate_config, ConfigOverrides, OutputFormat, ResolveArgs, RootConfig,
};
use tracing::{info, warn};

/// Describe what resolution changed, one line per note
pub fn resolution_notes(overrides: &ConfigOverrides, resolved: &RootConfig) -> Vec<String> {
    let mut notes = Vec::new();
    if !overrides.is_empty() {
        notes.push(format!("Overrides: {overrides:?}"));
    }
    if overrides.schedule_lr == Some(false) {
        notes.push("Learning rate scheduler disabled".to_string());
    }
    if let Some(point) = resolved.resume_point() {
        notes.push(format!(
            "Resuming from iteration {} epoch {}",
            point.iteration, point.epoch
        ));
    }
    notes
}

pub fn run_resolve(args: ResolveArgs, level: LogLevel) -> Result<(), String> {
    let config = load_source(&args.config).map_err(|e| format!("Config error: {e}"))?;

    let overrides = args.overrides();
    let resolved = config
        .with_overrides(&overrides)
        .map_err(|e| format!("Override error: {e}"))?;
    if !overrides.is_empty() {
        info!(?overrides, "Applied command-line overrides");
    }

    for warning in validate_config(&resolved) {
        warn!("{warning}");
    }
    if let Some(point) = resolved.resume_point() {
        info!(
            iteration = point.iteration,
            epoch = point.epoch,
            "Resuming from checkpoint"
        );
    }

    // Structured output stays parseable on stdout
    if args.format == OutputFormat::Text {
        log(level, LogLevel::Normal, "Resolved Configuration:");
        for note in resolution_notes(&overrides, &resolved) {
            log(level, LogLevel::Verbose, &note);
        }
        log(level, LogLevel::Normal, "");
    }
    println!("{}", render_config(&resolved, args.format)?);
    Ok(())
}
