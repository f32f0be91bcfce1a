use axis_rs::core::range::{RangeRequest, pixel_scale, resolve_range};
use axis_rs::core::{DataRange, RangeMode, Side};

fn base_request(mode: RangeMode) -> RangeRequest {
    RangeRequest {
        mode,
        requested_min: -1.0,
        requested_max: 1.0,
        observed: DataRange::new(),
        previous_min: f64::NAN,
        previous_max: f64::NAN,
        padding: 0.0,
        rounding: false,
        axis_length: 400.0,
        label_size: 12.0,
        max_major_count: 20,
        minor_divisions: 10,
        log_scale: false,
        tick_unit_hint: f64::NAN,
    }
}

fn observed(values: &[f64]) -> DataRange {
    let mut range = DataRange::new();
    range.add_all(values);
    range
}

#[test]
fn fixed_mode_passes_user_range_through_verbatim() {
    let mut request = base_request(RangeMode::Fixed);
    request.requested_min = 2.5;
    request.requested_max = 7.5;
    request.padding = 0.2;
    request.rounding = true;

    let range = resolve_range(&request, Side::Bottom);
    assert_eq!(range.min, 2.5);
    assert_eq!(range.max, 7.5);
}

#[test]
fn fixed_mode_honors_tick_unit_hint() {
    let mut request = base_request(RangeMode::Fixed);
    request.requested_min = 0.0;
    request.requested_max = 10.0;
    request.tick_unit_hint = 2.5;

    let range = resolve_range(&request, Side::Bottom);
    assert_eq!(range.tick_unit, 2.5);
}

#[test]
fn auto_mode_covers_observed_data_with_padding() {
    let mut request = base_request(RangeMode::Auto);
    request.observed = observed(&[0.0, 100.0]);
    request.padding = 0.1;

    let range = resolve_range(&request, Side::Bottom);
    assert!(range.min <= 0.0);
    assert!(range.max >= 100.0);
    assert!((range.span() - 120.0).abs() < 1e-9);
}

#[test]
fn auto_mode_rounding_snaps_outward_only() {
    let mut request = base_request(RangeMode::Auto);
    request.observed = observed(&[0.3, 9.7]);
    request.rounding = true;

    let range = resolve_range(&request, Side::Bottom);
    assert!(range.min <= 0.3);
    assert!(range.max >= 9.7);
    // bounds sit on multiples of the recomputed unit
    let min_steps = range.min / range.tick_unit;
    let max_steps = range.max / range.tick_unit;
    assert!((min_steps - min_steps.round()).abs() < 1e-9);
    assert!((max_steps - max_steps.round()).abs() < 1e-9);
}

#[test]
fn auto_mode_flat_data_substitutes_nominal_span() {
    let mut request = base_request(RangeMode::Auto);
    request.observed = observed(&[42.0]);

    let range = resolve_range(&request, Side::Bottom);
    assert!(range.is_defined());
    assert!(range.min < 42.0);
    assert!(range.max > 42.0);
}

#[test]
fn auto_mode_without_observations_falls_back_to_requested() {
    let request = base_request(RangeMode::Auto);
    let range = resolve_range(&request, Side::Bottom);
    assert_eq!(range.min, -1.0);
    assert_eq!(range.max, 1.0);
}

#[test]
fn auto_grow_unions_with_previous_range() {
    let mut request = base_request(RangeMode::AutoGrow);
    request.observed = observed(&[4.0, 6.0]);
    request.previous_min = 0.0;
    request.previous_max = 10.0;

    let range = resolve_range(&request, Side::Bottom);
    assert_eq!(range.min, 0.0);
    assert_eq!(range.max, 10.0);
}

#[test]
fn auto_grow_expands_beyond_previous_range() {
    let mut request = base_request(RangeMode::AutoGrow);
    request.observed = observed(&[-5.0, 20.0]);
    request.previous_min = 0.0;
    request.previous_max = 10.0;

    let range = resolve_range(&request, Side::Bottom);
    assert_eq!(range.min, -5.0);
    assert_eq!(range.max, 20.0);
}

#[test]
fn auto_grow_rounding_uses_recomputed_unit() {
    // previous pass resolved [0, 1] with a 0.1-grade unit; after observing
    // 98 the grown range must round on the new coarse grid, not the old one
    let mut request = base_request(RangeMode::AutoGrow);
    request.observed = observed(&[0.0, 98.0]);
    request.previous_min = 0.0;
    request.previous_max = 1.0;
    request.rounding = true;

    let range = resolve_range(&request, Side::Bottom);
    assert!(range.tick_unit >= 5.0, "unit {} too fine", range.tick_unit);
    assert_eq!(range.max, (98.0 / range.tick_unit).ceil() * range.tick_unit);
}

#[test]
fn log_scale_clamps_non_positive_bounds() {
    let mut request = base_request(RangeMode::Fixed);
    request.log_scale = true;
    request.requested_min = -5.0;
    request.requested_max = 100.0;

    let range = resolve_range(&request, Side::Bottom);
    assert!((range.min - 100.0 / 1.0e6).abs() < 1e-15);
    assert_eq!(range.max, 100.0);
}

#[test]
fn log_scale_with_no_usable_bound_resolves_undefined() {
    let mut request = base_request(RangeMode::Fixed);
    request.log_scale = true;
    request.requested_min = -5.0;
    request.requested_max = -1.0;

    let range = resolve_range(&request, Side::Bottom);
    assert!(!range.is_defined());
}

#[test]
fn undefined_inputs_resolve_undefined_instead_of_panicking() {
    let mut request = base_request(RangeMode::Fixed);
    request.requested_min = f64::NAN;
    request.requested_max = 10.0;

    let range = resolve_range(&request, Side::Bottom);
    assert!(!range.is_defined());
}

#[test]
fn pixel_scale_is_negative_for_vertical_sides() {
    assert_eq!(pixel_scale(400.0, 0.0, 10.0, Side::Bottom), 40.0);
    assert_eq!(pixel_scale(400.0, 0.0, 10.0, Side::Left), -40.0);
    // zero span degrades to the axis length, never zero
    assert_eq!(pixel_scale(400.0, 5.0, 5.0, Side::Bottom), 400.0);
    assert_eq!(pixel_scale(0.0, 0.0, 10.0, Side::Bottom), -1.0);
}

#[test]
fn data_range_accumulates_and_skips_non_finite() {
    let mut range = DataRange::new();
    assert!(!range.is_defined());

    assert!(range.add(3.0));
    assert!(range.add(-2.0));
    assert!(!range.add(f64::NAN));
    assert!(!range.add(f64::INFINITY));
    assert!(!range.add(0.0));

    assert!(range.is_defined());
    assert_eq!(range.min(), -2.0);
    assert_eq!(range.max(), 3.0);
    assert!(range.contains(0.0));
    assert!(!range.contains(4.0));

    range.clear();
    assert!(!range.is_defined());
}
