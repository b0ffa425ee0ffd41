use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_groups_follow_markup_contract() {
    let config = EnhanceConfig::default();
    let selectors: Vec<&str> = config.groups.iter().map(|g| g.selector.as_str()).collect();
    assert_eq!(selectors, vec![".reveal", ".progress-fill", ".bar-fill", ".line-point", ".stat-number"]);
}

#[test]
fn default_thresholds_match_call_sites() {
    let config = EnhanceConfig::default();
    let thresholds: Vec<f64> = config.groups.iter().map(|g| g.threshold).collect();
    assert_eq!(thresholds, vec![0.1, 0.5, 0.3, 0.3, 0.5]);
}

#[test]
fn reveal_group_adds_both_markers_without_delay() {
    let group = RevealGroupConfig::reveal();
    assert_eq!(group.markers, vec!["is-visible", "active"]);
    assert_eq!(group.root_margin, "0px 0px -50px 0px");
    assert_eq!(group.activation_delay_ms, 0);
    assert!(group.dimension.is_none());
}

#[test]
fn viz_groups_write_dimensions_after_delay() {
    assert_eq!(RevealGroupConfig::progress_bars().dimension, Some(DimensionProperty::Width));
    assert_eq!(RevealGroupConfig::bar_charts().dimension, Some(DimensionProperty::Width));
    assert_eq!(RevealGroupConfig::line_points().dimension, Some(DimensionProperty::Height));
    assert_eq!(RevealGroupConfig::line_points().activation_delay_ms, 200);
}

#[test]
fn stat_numbers_count_up_immediately() {
    let group = RevealGroupConfig::stat_numbers();
    assert!(group.count_up);
    assert_eq!(group.activation_delay_ms, 0);
    assert_eq!(group.markers, vec!["animate"]);
}

#[test]
fn dimension_property_names() {
    assert_eq!(DimensionProperty::Width.css_property(), "width");
    assert_eq!(DimensionProperty::Height.data_attribute(), "data-height");
}

#[test]
fn default_config_is_valid() {
    assert!(EnhanceConfig::default().validate().is_ok());
}

// =============================================================
// JSON overrides
// =============================================================

#[test]
fn empty_object_yields_defaults() {
    let config = EnhanceConfig::from_json("{}").expect("empty config parses");
    assert_eq!(config, EnhanceConfig::default());
}

#[test]
fn partial_override_keeps_other_fields() {
    let raw = r#"{ "stagger": { "containers": [".timeline"] }, "theme": { "storageKey": "site-theme" } }"#;
    let config = EnhanceConfig::from_json(raw).expect("override parses");
    assert_eq!(config.stagger.containers, vec![".timeline"]);
    assert_eq!(config.stagger.cycle, 4);
    assert_eq!(config.theme.storage_key, "site-theme");
    assert_eq!(config.theme.attribute, "data-theme");
    assert_eq!(config.groups.len(), 5);
}

#[test]
fn group_override_fills_missing_fields_from_reveal_defaults() {
    let raw = r#"{ "groups": [ { "selector": ".fade", "threshold": 0.12 } ] }"#;
    let config = EnhanceConfig::from_json(raw).expect("group parses");
    assert_eq!(config.groups.len(), 1);
    assert_eq!(config.groups[0].selector, ".fade");
    assert_eq!(config.groups[0].threshold, 0.12);
    assert_eq!(config.groups[0].markers, vec!["is-visible", "active"]);
}

#[test]
fn dimension_deserializes_lowercase() {
    let raw = r#"{ "groups": [ { "selector": ".meter", "dimension": "height" } ] }"#;
    let config = EnhanceConfig::from_json(raw).expect("dimension parses");
    assert_eq!(config.groups[0].dimension, Some(DimensionProperty::Height));
}

#[test]
fn malformed_json_is_parse_error() {
    let err = EnhanceConfig::from_json("{ groups: }").expect_err("must fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn threshold_above_one_is_rejected() {
    let raw = r#"{ "groups": [ { "selector": ".x", "threshold": 1.2 } ] }"#;
    let err = EnhanceConfig::from_json(raw).expect_err("must fail");
    assert!(matches!(err, ConfigError::InvalidThreshold { ref selector, .. } if selector == ".x"));
}

#[test]
fn empty_markers_are_rejected() {
    let raw = r#"{ "groups": [ { "selector": ".x", "markers": [] } ] }"#;
    let err = EnhanceConfig::from_json(raw).expect_err("must fail");
    assert!(matches!(err, ConfigError::NoMarkers { .. }));
}

#[test]
fn zero_stagger_cycle_is_rejected() {
    let err = EnhanceConfig::from_json(r#"{ "stagger": { "cycle": 0 } }"#).expect_err("must fail");
    assert!(matches!(err, ConfigError::ZeroStaggerCycle));
}
