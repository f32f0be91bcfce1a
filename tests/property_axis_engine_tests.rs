use axis_rs::api::{AxisEngine, AxisEngineConfig, AxisScaleKind, CharCellMeasurer};
use axis_rs::core::ticks::{major_tick_values, preferred_tick_unit};
use axis_rs::core::{RangeMode, Side};
use proptest::prelude::*;

proptest! {
    #[test]
    fn tick_count_is_monotonic_in_axis_length(
        short_length in 50.0f64..1_000.0,
        extra_length in 0.0f64..2_000.0,
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6
    ) {
        let max = min + span;
        let long_length = short_length + extra_length;

        let short_unit = preferred_tick_unit(short_length, min, max, 12.0, 20);
        let long_unit = preferred_tick_unit(long_length, min, max, 12.0, 20);
        let short_count = major_tick_values(min, max, short_unit, 20).len();
        let long_count = major_tick_values(min, max, long_unit, 20).len();

        prop_assert!(short_count <= long_count,
            "count fell from {short_count} to {long_count} as length grew");
    }

    #[test]
    fn auto_range_always_covers_the_data(
        samples in proptest::collection::vec(-1.0e6f64..1.0e6, 1..64),
        padding in 0.0f64..0.5
    ) {
        let mut engine = AxisEngine::with_defaults();
        engine.set_dimensions(500.0, 50.0).expect("dimensions");
        engine.set_auto_range_padding(padding).expect("padding");
        engine.observe(&samples);
        engine.recompute_ticks();

        let data_min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = engine.range();
        prop_assert!(range.is_defined());
        prop_assert!(range.min <= data_min);
        prop_assert!(range.max >= data_max);
    }

    #[test]
    fn auto_grow_range_is_monotone_under_new_data(
        first_batch in proptest::collection::vec(-1.0e5f64..1.0e5, 1..32),
        second_batch in proptest::collection::vec(-1.0e5f64..1.0e5, 1..32)
    ) {
        let mut engine = AxisEngine::with_defaults();
        engine.set_dimensions(500.0, 50.0).expect("dimensions");
        engine.set_range_mode(RangeMode::AutoGrow);

        engine.observe(&first_batch);
        engine.recompute_ticks();
        let after_first = engine.range();

        engine.observe(&second_batch);
        engine.recompute_ticks();
        let after_second = engine.range();

        prop_assert!(after_second.min <= after_first.min);
        prop_assert!(after_second.max >= after_first.max);
    }

    #[test]
    fn display_mapping_round_trips_inside_the_range(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        fraction in 0.0f64..1.0
    ) {
        let max = min + span;
        let config = AxisEngineConfig::new(Side::Bottom, AxisScaleKind::Linear)
            .with_range(min, max);
        let mut engine = AxisEngine::new(CharCellMeasurer::default(), config)
            .expect("engine init");
        engine.set_dimensions(800.0, 50.0).expect("dimensions");
        engine.recompute_ticks();

        let value = min + span * fraction;
        let pixel = engine.display_position(value);
        let recovered = engine.value_for_display(pixel);
        // absolute error is bounded by the ulp of the bounds, not the span
        let tolerance = (min.abs().max(max.abs()) + span) * 1e-12 + span * 1e-9;
        prop_assert!((recovered - value).abs() <= tolerance,
            "value {value} -> {pixel}px -> {recovered}");
    }

    #[test]
    fn degenerate_inputs_never_panic_and_never_lie(
        min in prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            -1.0e9f64..1.0e9
        ],
        max in prop_oneof![
            Just(f64::NAN),
            Just(f64::INFINITY),
            Just(f64::NEG_INFINITY),
            -1.0e9f64..1.0e9
        ],
        width in prop_oneof![Just(0.0f64), Just(f64::NAN), 0.0f64..2_000.0]
    ) {
        let config = AxisEngineConfig::new(Side::Bottom, AxisScaleKind::Linear)
            .with_range(min, max);
        let mut engine = AxisEngine::new(CharCellMeasurer::default(), config)
            .expect("engine init");
        engine.set_dimensions(width, 50.0).expect("dimensions");
        engine.recompute_ticks();

        // fixed mode normalizes swapped bounds, so only equal or non-finite
        // bounds (or a missing length) are truly degenerate
        let usable = min.is_finite() && max.is_finite() && min != max
            && width.is_finite() && width > 0.0;
        if !usable {
            prop_assert!(engine.major_tick_marks().len() <= 1,
                "degenerate input produced {} ticks", engine.major_tick_marks().len());
        }
        for mark in engine.major_tick_marks() {
            prop_assert!(mark.value.is_finite());
        }
    }

    #[test]
    fn major_marks_stay_sorted_and_inside_the_resolved_range(
        min in -1.0e6f64..1.0e6,
        span in 1.0e-3f64..1.0e6,
        length in 50.0f64..2_000.0
    ) {
        let max = min + span;
        let config = AxisEngineConfig::new(Side::Bottom, AxisScaleKind::Linear)
            .with_range(min, max);
        let mut engine = AxisEngine::new(CharCellMeasurer::default(), config)
            .expect("engine init");
        engine.set_dimensions(length, 50.0).expect("dimensions");
        engine.recompute_ticks();

        let range = engine.range();
        let marks = engine.major_tick_marks();
        let slack = range.tick_unit * 1e-6;
        for pair in marks.windows(2) {
            prop_assert!(pair[0].value < pair[1].value);
        }
        for mark in marks {
            prop_assert!(mark.value >= range.min - slack);
            prop_assert!(mark.value <= range.max + slack);
        }
    }
}
