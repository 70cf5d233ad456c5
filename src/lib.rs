//! Configuration layer for photon library surrogate training
//!
//! A single YAML document describes the photon library, the toy Monte Carlo
//! dataset, the Siren network and the optimizer schedule. This crate parses
//! that document into a strongly-typed [`config::RootConfig`], reporting the
//! first schema violation with its dotted field path.
//!
//! # Example
//!
//! ```no_run
//! use photonlib_config::config::{load_config, validate_config};
//!
//! let config = load_config("configs/icarus_siren.yaml")?;
//! for warning in validate_config(&config) {
//!     eprintln!("warning: {warning}");
//! }
//! println!("lr = {:?}", config.train.optimizer.lr());
//! # Ok::<(), photonlib_config::config::ConfigError>(())
//! ```

pub mod cli;
pub mod config;
