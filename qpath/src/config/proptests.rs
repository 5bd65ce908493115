//! Property-based tests for the configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use super::validator::ConfigValidator;
use crate::render::{EncoderKind, NamespaceRegistry};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn encoder_strategy() -> impl Strategy<Value = EncoderKind> {
    prop_oneof![
        Just(EncoderKind::Jsr283),
        Just(EncoderKind::Url),
        Just(EncoderKind::None),
    ]
}

fn namespaces_strategy() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("[a-z]{1,6}", "[a-z]{1,8}", 0..5).prop_map(|map| {
        map.into_iter()
            .map(|(prefix, tail)| {
                let uri = format!("urn:{prefix}:{tail}");
                (prefix, uri)
            })
            .collect()
    })
}

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(namespaces_strategy()),
        prop::option::of(encoder_strategy()),
        prop::option::of(any::<bool>()),
        prop::option::of(prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]),
    )
        .prop_map(|(namespaces, encoder, encode_delimiter, output_format)| Config {
            namespaces,
            encoder,
            encode_delimiter,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // Merging with an empty config changes nothing
    #[test]
    fn merge_with_default_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Merging a config into itself changes nothing
    #[test]
    fn merge_is_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Set scalar fields in the higher-precedence source always win
    #[test]
    fn source_scalars_win(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert_eq!(merged.encoder, high.encoder.or(low.encoder));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Generated namespaces validate and appear in the registry
    #[test]
    fn valid_namespaces_register(config in config_strategy()) {
        prop_assert!(ConfigValidator::validate(&config).is_ok());
        let registry = config.namespace_registry();
        for (prefix, uri) in config.namespaces.iter().flatten() {
            prop_assert_eq!(registry.namespace_for(prefix), Some(uri.clone()));
        }
    }

    // YAML round trip preserves the config
    #[test]
    fn yaml_round_trip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let back: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, config);
    }
}
