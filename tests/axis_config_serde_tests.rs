use axis_rs::api::{AxisEngineConfig, AxisScaleKind, OverlapPolicy};
use axis_rs::core::{RangeMode, Side};

#[test]
fn config_round_trips_through_json() {
    let config = AxisEngineConfig {
        side: Side::Left,
        scale_kind: AxisScaleKind::Logarithmic,
        range_mode: RangeMode::AutoGrow,
        min: 0.5,
        max: 1.5e6,
        auto_range_padding: 0.05,
        auto_range_rounding: true,
        overlap_policy: OverlapPolicy::NarrowFont,
        name: "dose rate".to_owned(),
        unit: Some("Sv/h".to_owned()),
        ..AxisEngineConfig::default()
    };

    let json = serde_json::to_string(&config).expect("serialize");
    let decoded: AxisEngineConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, config);
}

#[test]
fn default_config_is_auto_ranging_bottom_axis() {
    let config = AxisEngineConfig::default();
    assert_eq!(config.side, Side::Bottom);
    assert_eq!(config.range_mode, RangeMode::Auto);
    assert_eq!(config.scale_kind, AxisScaleKind::Linear);
    assert_eq!(config.minor_tick_count, 10);
    assert_eq!(config.max_major_tick_count, 20);
}
