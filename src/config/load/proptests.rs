//! Property-based tests for configuration loading

use super::load_from_str;
use crate::config::error::{ConfigError, SchemaError};
use crate::config::schema::*;
use proptest::prelude::*;
use std::collections::BTreeMap;
use std::path::PathBuf;

fn arb_device() -> impl Strategy<Value = DeviceType> {
    prop_oneof![Just(DeviceType::Cpu), Just(DeviceType::Cuda)]
}

fn arb_param_value() -> impl Strategy<Value = ParamValue> {
    prop_oneof![
        any::<bool>().prop_map(ParamValue::Bool),
        (-1000i64..1000).prop_map(ParamValue::Int),
        (-10.0f64..10.0).prop_map(ParamValue::Float),
        "[a-z]{1,8}".prop_map(ParamValue::Str),
    ]
}

fn arb_valid_config() -> impl Strategy<Value = RootConfig> {
    (
        (1u64..1_000_000, 1u64..4096, 0u64..16, any::<bool>(), arb_device()),
        (1u64..2048, 1u64..16, 1u64..8, 1u64..512),
        (0.0f64..0.99, any::<i32>(), 1u64..5000, 1u64..100),
        (1e-9f64..1.0, proptest::option::of(1u64..1_000_000)),
        proptest::collection::btree_map("[a-z_]{1,10}", arb_param_value(), 0..4),
        proptest::option::of("[a-z]{1,8}\\.ckpt"),
    )
        .prop_map(
            |(
                (size, batch_size, num_workers, flag, device_type),
                (hidden_features, hidden_layers, in_features, out_features),
                (validation_split, seed, max_epochs, save_every_epochs),
                (lr, max_iterations),
                scheduler_params,
                ckpt_file,
            )| RootConfig {
                photonlib: PhotonLibConfig { filepath: PathBuf::from("plib.h5") },
                data: DataConfig {
                    dataset: DatasetConfig { filepath: PathBuf::from("tracks.h5"), size },
                    loader: LoaderConfig {
                        batch_size,
                        drop_last: flag,
                        num_workers,
                        pin_memory: !flag,
                        shuffle: flag,
                    },
                },
                device: DeviceConfig { device_type },
                logger: LoggerConfig {
                    analysis: BTreeMap::from([("abs_bias".to_string(), None)]),
                    dir_name: "logs".to_string(),
                    file_name: "log.csv".to_string(),
                    log_every_nsteps: 10,
                },
                model: ModelConfig {
                    ckpt_file: ckpt_file.map(PathBuf::from),
                    network: NetworkConfig {
                        hidden_features,
                        hidden_layers,
                        in_features,
                        out_features,
                    },
                    output_scale: OutputScaleConfig { fix: flag },
                },
                train: TrainConfig {
                    validation_split,
                    seed: i64::from(seed),
                    max_epochs,
                    max_iterations,
                    validate_every_iterations: None,
                    save_every_epochs,
                    save_every_iterations: None,
                    resume: flag,
                    optimizer: OptimizerConfig {
                        name: "Adam".to_string(),
                        parameters: BTreeMap::from([("lr".to_string(), lr)]),
                    },
                    lr_scheduler: Some(LRSchedulerConfig {
                        name: "StepLR".to_string(),
                        parameters: scheduler_params,
                    }),
                },
                transform_vis: TransformVisConfig { eps: 1e-7, sin_out: !flag, vmax: 1.0 },
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_serialized_config_reloads_equal(config in arb_valid_config()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let reloaded = load_from_str(&yaml).unwrap();
        prop_assert_eq!(config, reloaded);
    }

    #[test]
    fn prop_split_at_or_above_one_fails(config in arb_valid_config(), split in 1.0f64..100.0) {
        let mut doc = serde_yaml::to_value(&config).unwrap();
        doc["train"]["validation_split"] = serde_yaml::Value::from(split);
        let result = load_from_str(&serde_yaml::to_string(&doc).unwrap());
        prop_assert!(matches!(
            result,
            Err(ConfigError::Schema(SchemaError::OutOfRange { ref path, .. }))
                if path == "train.validation_split"
        ), "expected OutOfRange at train.validation_split, got {:?}", result);
    }

    #[test]
    fn prop_non_positive_batch_size_fails(config in arb_valid_config(), batch in -100i64..=0) {
        let mut doc = serde_yaml::to_value(&config).unwrap();
        doc["data"]["loader"]["batch_size"] = serde_yaml::Value::from(batch);
        let result = load_from_str(&serde_yaml::to_string(&doc).unwrap());
        prop_assert!(matches!(
            result,
            Err(ConfigError::Schema(SchemaError::OutOfRange { ref path, .. }))
                if path == "data.loader.batch_size"
        ), "expected OutOfRange at data.loader.batch_size, got {:?}", result);
    }

    #[test]
    fn prop_unknown_device_fails(config in arb_valid_config(), name in "[a-z]{2,6}") {
        prop_assume!(DeviceType::parse(&name).is_none());
        let mut doc = serde_yaml::to_value(&config).unwrap();
        doc["device"]["type"] = serde_yaml::Value::from(name);
        let result = load_from_str(&serde_yaml::to_string(&doc).unwrap());
        prop_assert!(matches!(
            result,
            Err(ConfigError::Schema(SchemaError::NotAllowed { .. }))
        ), "expected NotAllowed at device.type, got {:?}", result);
    }
}
