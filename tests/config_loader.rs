mod common;

use chrono::NaiveDate;
use common::temp_config;
use fundr::api::types::{Period, ALL_ACCOUNTS};
use fundr::config::{Config, ConfigError};

/// Test that Config::default() matches the built-in dataset.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.api.delay_ms, 300);
    assert_eq!(config.api.page_size, 6);
    assert!(!config.api.apply_filters);

    assert_eq!(config.dashboard.default_period, Period::Last7Days);

    assert_eq!(
        config.transactions.accounts,
        [ALL_ACCOUNTS, "Sterling Bank", "Other Bank"]
    );
    assert_eq!(config.transactions.default_account, ALL_ACCOUNTS);
    assert_eq!(
        config.transactions.default_from,
        NaiveDate::from_ymd_opt(2023, 6, 6).unwrap()
    );
    assert_eq!(
        config.transactions.default_to,
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    );

    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.copy_feedback_ms, 2000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("fundr/config.toml"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.api.page_size, 6);
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[api]
delay_ms = 0
apply_filters = true

[dashboard]
default_period = "today"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.api.delay_ms, 0);
    assert!(config.api.apply_filters);
    assert_eq!(config.api.page_size, 6);
    assert_eq!(config.dashboard.default_period, Period::Today);
    assert_eq!(config.ui.copy_feedback_ms, 2000);
}

#[test]
fn test_dates_parse_from_iso_strings() {
    let (_dir, path) = temp_config(
        r#"
[transactions]
default_from = "2023-01-01"
default_to = "2023-01-31"
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(
        config.transactions.default_to,
        NaiveDate::from_ymd_opt(2023, 1, 31).unwrap()
    );
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[api\ndelay_ms = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_page_size_rejected() {
    let (_dir, path) = temp_config("[api]\npage_size = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_unknown_default_account_rejected() {
    let (_dir, path) = temp_config(
        r#"
[transactions]
default_account = "Moon Bank"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Moon Bank"));
}

#[test]
fn test_inverted_range_rejected() {
    let (_dir, path) = temp_config(
        r#"
[transactions]
default_from = "2023-06-15"
default_to = "2023-06-06"
"#,
    );
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}
