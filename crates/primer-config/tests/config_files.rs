//! File-based configuration tests.

use std::io::Write;

use approx::assert_relative_eq;
use primer_config::{ConfigError, PrimerConfig, Validate};
use tempfile::NamedTempFile;

fn write_config(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
        [credit]
        pd_floor = 1.0
        pd_cap = 25.0

        [[credit.anchors]]
        score = 400.0
        pd = 30.0

        [[credit.anchors]]
        score = 800.0
        pd = 2.0

        [rates]
        current_rate = 5.0
        "#,
    );

    let config = PrimerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.credit.anchors.len(), 2);
    assert_eq!(config.rates.current_rate, 5.0);

    let curve = config.default_curve().unwrap();
    assert_relative_eq!(curve.probability_of_default(600.0), 16.0, epsilon = 1e-12);
    assert_eq!(curve.probability_of_default(200.0), 25.0);
    assert_eq!(curve.probability_of_default(900.0), 1.0);
}

#[test]
fn test_missing_file() {
    let err = PrimerConfig::from_file("/definitely/not/here/primer.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("primer.toml"));
}

#[test]
fn test_invalid_file_reports_validation() {
    let file = write_config("[frontier]\nslope = -1.0\n");
    let err = PrimerConfig::from_file(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "frontier.slope"));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("primer.toml");

    let mut config = PrimerConfig::default();
    config.var.volatility = 2.5;
    config.save(&path).unwrap();

    let loaded = PrimerConfig::from_file(&path).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.is_valid());
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

mod properties {
    use primer_config::{CreditConfig, PrimerConfig, Validate};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_configured_bounds_hold(
            floor in 0.0f64..50.0,
            width in 0.1f64..50.0,
            score in 0.0f64..1000.0,
        ) {
            let config = PrimerConfig {
                credit: CreditConfig {
                    pd_floor: floor,
                    pd_cap: floor + width,
                    ..CreditConfig::default()
                },
                ..PrimerConfig::default()
            };
            prop_assert!(config.is_valid());

            let text = config.to_toml_string().unwrap();
            let reloaded = PrimerConfig::from_toml_str(&text).unwrap();
            let pd = reloaded.default_curve().unwrap().probability_of_default(score);
            prop_assert!(pd >= floor - 1e-9 && pd <= floor + width + 1e-9);
        }

        #[test]
        fn prop_inverted_bounds_rejected(floor in 1.0f64..100.0, gap in 0.0f64..1.0) {
            let credit = CreditConfig {
                pd_floor: floor,
                pd_cap: floor - gap,
                ..CreditConfig::default()
            };
            prop_assert!(!credit.is_valid());
        }
    }
}
