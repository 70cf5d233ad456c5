//! photonlib-config CLI
//!
//! Validates and inspects photon library training configurations.
//!
//! # Usage
//!
//! ```bash
//! # Validate config
//! photonlib-config validate configs/icarus_siren.yaml
//!
//! # Show config info
//! photonlib-config info icarus_siren --format json
//!
//! # Write the bundled preset
//! photonlib-config init --output config.yaml
//!
//! # Print the effective config after overrides
//! photonlib-config resolve config.yaml --device cpu --lr 0.001
//! ```

use clap::Parser;
use photonlib_config::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
