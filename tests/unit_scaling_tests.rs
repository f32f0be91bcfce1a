use axis_rs::core::MetricPrefix;
use axis_rs::core::units::axis_label;

#[test]
fn prefix_selection_follows_engineering_brackets() {
    assert_eq!(MetricPrefix::for_magnitude(2.5e6), MetricPrefix::Mega);
    assert_eq!(MetricPrefix::for_magnitude(999.0), MetricPrefix::None);
    assert_eq!(MetricPrefix::for_magnitude(1_000.0), MetricPrefix::Kilo);
    assert_eq!(MetricPrefix::for_magnitude(4.2e-5), MetricPrefix::Micro);
    assert_eq!(MetricPrefix::for_magnitude(3.0e-10), MetricPrefix::Pico);
    assert_eq!(MetricPrefix::for_magnitude(1.0e30), MetricPrefix::Yotta);
    assert_eq!(MetricPrefix::for_magnitude(1.0e-30), MetricPrefix::Yocto);
}

#[test]
fn prefix_selection_tolerates_degenerate_magnitudes() {
    assert_eq!(MetricPrefix::for_magnitude(0.0), MetricPrefix::None);
    assert_eq!(MetricPrefix::for_magnitude(f64::NAN), MetricPrefix::None);
    assert_eq!(MetricPrefix::for_magnitude(f64::INFINITY), MetricPrefix::None);
}

#[test]
fn prefix_scaling_matches_power() {
    assert_eq!(MetricPrefix::Kilo.scaling(), 1.0e3);
    assert_eq!(MetricPrefix::Milli.scaling(), 1.0e-3);
    assert_eq!(MetricPrefix::None.scaling(), 1.0);
}

#[test]
fn axis_label_composes_name_unit_and_prefix() {
    assert_eq!(
        axis_label("current", Some("A"), MetricPrefix::Milli),
        "current (mA)"
    );
    assert_eq!(
        axis_label("current", Some("A"), MetricPrefix::None),
        "current (A)"
    );
    assert_eq!(axis_label("intensity", None, MetricPrefix::Mega), "intensity (x10^6)");
    assert_eq!(axis_label("intensity", None, MetricPrefix::None), "intensity");
    assert_eq!(axis_label("time", Some(""), MetricPrefix::Kilo), "time (x10^3)");
}
