//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! photonlib-config validate config.yaml
//! photonlib-config info icarus_siren --format json
//! photonlib-config init --output my_config.yaml
//! photonlib-config resolve config.yaml --device cpu --max-epochs 10
//! ```

mod core;
mod types;

pub use core::{parse_args, Cli, Command, InfoArgs, InitArgs, ResolveArgs, ValidateArgs};
pub use types::OutputFormat;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceType;
    use std::path::PathBuf;

    #[test]
    fn test_parse_validate_command() {
        let cli = parse_args(["photonlib-config", "validate", "config.yaml"]).unwrap();
        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.config, PathBuf::from("config.yaml"));
                assert!(!args.detailed);
            }
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_parse_validate_detailed() {
        let cli = parse_args(["photonlib-config", "validate", "config.yaml", "--detailed"]).unwrap();
        match cli.command {
            Command::Validate(args) => assert!(args.detailed),
            _ => panic!("Expected Validate command"),
        }
    }

    #[test]
    fn test_parse_info_format() {
        let cli = parse_args(["photonlib-config", "info", "icarus_siren", "--format", "json"])
            .unwrap();
        match cli.command {
            Command::Info(args) => {
                assert_eq!(args.config, PathBuf::from("icarus_siren"));
                assert_eq!(args.format, OutputFormat::Json);
            }
            _ => panic!("Expected Info command"),
        }
    }

    #[test]
    fn test_parse_init_defaults() {
        let cli = parse_args(["photonlib-config", "init"]).unwrap();
        match cli.command {
            Command::Init(args) => {
                assert_eq!(args.preset, "icarus_siren");
                assert!(args.output.is_none());
                assert!(!args.force);
            }
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_parse_resolve_overrides() {
        let cli = parse_args([
            "photonlib-config",
            "resolve",
            "config.yaml",
            "--device",
            "cpu",
            "--lr",
            "0.001",
            "--schedule-lr",
            "false",
            "--resume",
            "--max-epochs",
            "10",
            "--logdir",
            "runs/a",
        ])
        .unwrap();

        match cli.command {
            Command::Resolve(args) => {
                let overrides = args.overrides();
                assert_eq!(overrides.device, Some(DeviceType::Cpu));
                assert!((overrides.lr.unwrap() - 0.001).abs() < 1e-12);
                assert_eq!(overrides.schedule_lr, Some(false));
                assert_eq!(overrides.resume, Some(true));
                assert_eq!(overrides.max_epochs, Some(10));
                assert_eq!(overrides.logdir.as_deref(), Some("runs/a"));
                assert!(overrides.dataset_path.is_none());
                assert_eq!(args.format, OutputFormat::Yaml);
            }
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_parse_resolve_without_flags_has_no_overrides() {
        let cli = parse_args(["photonlib-config", "resolve", "config.yaml"]).unwrap();
        match cli.command {
            Command::Resolve(args) => assert!(args.overrides().is_empty()),
            _ => panic!("Expected Resolve command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_device() {
        let result = parse_args(["photonlib-config", "resolve", "c.yaml", "--device", "tpu"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["photonlib-config", "validate", "c.yaml", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);

        let cli = parse_args(["photonlib-config", "-q", "info", "c.yaml"]).unwrap();
        assert!(cli.quiet);
    }
}
