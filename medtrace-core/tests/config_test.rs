use medtrace_core::config::*;
use medtrace_core::errors::{ConfigError, MedtraceError};

#[test]
fn config_loads_from_empty_toml_with_all_defaults() {
    let config = MedtraceConfig::from_toml("").unwrap();

    // Trust defaults
    assert_eq!(config.trust.rejected_penalty, 20);
    assert_eq!(config.trust.warning_penalty, 8);
    assert_eq!(config.trust.flag_penalty, 2);
    assert_eq!(config.trust.fake_penalty, 25);
    assert_eq!(config.trust.safe_threshold, 80);
    assert_eq!(config.trust.moderate_threshold, 60);
    assert_eq!(config.trust.bottom_n, 5);

    // Zone defaults
    assert_eq!(config.zones.top_n, 10);
    assert_eq!(config.zones.unknown_zone_label, "Unknown Zone");

    // Priority defaults
    assert_eq!(config.priority.use_immediately_days, 7);
    assert_eq!(config.priority.use_soon_days, 30);
    assert_eq!(config.priority.hold_days, 60);
    assert_eq!(config.priority.quantity_divisor, 5);
    assert_eq!(config.priority.score_ceiling, 100);

    // Dashboard defaults
    assert_eq!(config.dashboard.near_expiry_window_days, 30);

    // Risk map defaults
    assert_eq!(config.risk_map.rejected_penalty, 5);
    assert_eq!(config.risk_map.fake_penalty, 10);
    assert_eq!(config.risk_map.flagged_penalty, 3);
    assert_eq!(config.risk_map.blacklist_penalty, 20);
    assert_eq!(config.risk_map.red_threshold, 40);
    assert_eq!(config.risk_map.yellow_threshold, 20);

    // Corruption defaults
    assert_eq!(config.corruption.favoritism_min_approvals, 20);
    assert_eq!(config.corruption.repeated_batch_threshold, 5);
    assert_eq!(config.corruption.targeted_rejection_rate_pct, 80);

    // Observability defaults
    assert_eq!(config.observability.log_level, "info");
    assert!(config.observability.json);
}

#[test]
fn config_loads_partial_toml_with_overrides() {
    let toml = r#"
[trust]
fake_penalty = 40
bottom_n = 3

[priority]
risk_flag_weight = 15
"#;
    let config = MedtraceConfig::from_toml(toml).unwrap();
    assert_eq!(config.trust.fake_penalty, 40);
    assert_eq!(config.trust.bottom_n, 3);
    // Non-overridden fields keep defaults
    assert_eq!(config.trust.rejected_penalty, 20);
    assert_eq!(config.priority.risk_flag_weight, 15);
    assert_eq!(config.priority.expiry_weight, 2);
}

#[test]
fn config_round_trips_through_toml() {
    let config = MedtraceConfig::default();
    let text = config.to_toml().unwrap();
    let parsed = MedtraceConfig::from_toml(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = MedtraceConfig::from_toml("[trust\nbottom_n = ").unwrap_err();
    assert!(matches!(err, MedtraceError::ConfigError(ConfigError::Parse(_))));
}

#[test]
fn inverted_trust_bands_are_rejected() {
    let err = MedtraceConfig::from_toml("[trust]\nsafe_threshold = 50\nmoderate_threshold = 70\n")
        .unwrap_err();
    assert!(matches!(
        err,
        MedtraceError::ConfigError(ConfigError::InvalidThreshold { .. })
    ));
}

#[test]
fn safe_threshold_above_max_score_is_rejected() {
    let config = TrustConfig {
        safe_threshold: 101,
        ..TrustConfig::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn zero_quantity_divisor_is_rejected() {
    let config = PriorityConfig {
        quantity_divisor: 0,
        ..PriorityConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("quantity_divisor"));
}

#[test]
fn unordered_priority_bands_are_rejected() {
    let config = PriorityConfig {
        use_soon_days: 90,
        hold_days: 60,
        ..PriorityConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidThreshold { .. })
    ));
}

#[test]
fn risk_map_and_corruption_sections_override() {
    let toml = r#"
[risk_map]
blacklist_penalty = 50
red_threshold = 60

[corruption]
repeated_batch_threshold = 2
"#;
    let config = MedtraceConfig::from_toml(toml).unwrap();
    assert_eq!(config.risk_map.blacklist_penalty, 50);
    assert_eq!(config.risk_map.red_threshold, 60);
    assert_eq!(config.risk_map.yellow_threshold, 20);
    assert_eq!(config.corruption.repeated_batch_threshold, 2);
    assert_eq!(config.corruption.bias_min_decisions, 10);
}

#[test]
fn inverted_risk_map_zones_are_rejected() {
    let err = MedtraceConfig::from_toml("[risk_map]\nred_threshold = 10\nyellow_threshold = 30\n")
        .unwrap_err();
    assert!(err.to_string().contains("risk_map.yellow_threshold"));
}
