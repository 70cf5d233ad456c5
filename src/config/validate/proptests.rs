//! Property-based tests for configuration validation

use super::error::ConfigWarning;
use super::validator::validate_config;
use crate::config::schema::RootConfig;
use crate::config::{load_from_str, presets};
use proptest::prelude::*;

fn base_config() -> RootConfig {
    load_from_str(presets::get("icarus_siren").unwrap()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_batch_warning_iff_batch_exceeds_dataset(
        batch_size in 1u64..10_000,
        dataset_size in 1u64..10_000,
    ) {
        let mut config = base_config();
        config.data.loader.batch_size = batch_size;
        config.data.dataset.size = dataset_size;
        let warned = validate_config(&config)
            .iter()
            .any(|w| matches!(w, ConfigWarning::BatchLargerThanDataset { .. }));
        prop_assert_eq!(warned, batch_size > dataset_size);
    }

    #[test]
    fn prop_split_sizes_cover_dataset(split in 0.0f64..0.99, size in 0u64..1_000_000) {
        let mut config = base_config();
        config.train.validation_split = split;
        let (train, val) = config.train.split_sizes(size);
        prop_assert_eq!(train + val, size);
    }

    #[test]
    fn prop_save_interval_warning_iff_exceeds_epochs(
        save_every_epochs in 1u64..2000,
        max_epochs in 1u64..2000,
    ) {
        let mut config = base_config();
        config.train.save_every_epochs = save_every_epochs;
        config.train.max_epochs = max_epochs;
        let warned = validate_config(&config)
            .iter()
            .any(|w| matches!(w, ConfigWarning::SaveIntervalExceedsEpochs { .. }));
        prop_assert_eq!(warned, save_every_epochs > max_epochs);
    }
}
