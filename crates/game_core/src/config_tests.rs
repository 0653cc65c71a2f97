use super::*;

#[test]
fn test_default_schedule_lookup() {
    let allocation = TimeAllocation::default();
    assert_eq!(allocation.budget_for(20), Duration::from_secs(12));
    assert_eq!(allocation.budget_for(11), Duration::from_secs(96));
    assert_eq!(allocation.budget_for(1), Duration::from_secs(3));
    // Out-of-schedule counts fall back to the default
    assert_eq!(allocation.budget_for(99), Duration::from_secs(3));
    assert_eq!(allocation.budget_for(0), Duration::from_secs(3));
}

#[test]
fn test_move_budget_subtracts_reserve() {
    let config = EngineConfig::default();
    assert_eq!(config.move_budget(20), Duration::from_millis(11_500));
}

#[test]
fn test_move_budget_saturates_at_zero() {
    let config = EngineConfig {
        reserve_millis: 10_000,
        ..Default::default()
    };
    assert_eq!(config.move_budget(1), Duration::ZERO);
}

#[test]
fn test_config_toml_round_trip() {
    let config = EngineConfig {
        max_depth: 12,
        depth_step: 1,
        ..Default::default()
    };
    let text = toml::to_string_pretty(&config).unwrap();
    let parsed = EngineConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed.max_depth, 12);
    assert_eq!(parsed.depth_step, 1);
    assert_eq!(parsed.move_budget(20), config.move_budget(20));
}

#[test]
fn test_config_defaults_for_missing_fields() {
    let parsed = EngineConfig::from_toml_str("max_depth = 6\n").unwrap();
    assert_eq!(parsed.max_depth, 6);
    assert_eq!(parsed.depth_step, 2);
    assert_eq!(parsed.start_moves, 20);
}
