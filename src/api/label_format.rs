use chrono::{DateTime, Utc};

use super::axis_config::AxisScaleKind;

/// Calendar pattern picked from the visible span (wide spans drop the
/// time-of-day component, narrow spans gain seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TimeLabelPattern {
    Date,
    DateMinute,
    DateSecond,
}

/// Formatter resolved from the axis scale kind for one recompute pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ResolvedFormatter {
    Numeric { decimals: usize },
    Log,
    Time { pattern: TimeLabelPattern },
}

pub(crate) fn resolve_formatter(
    kind: AxisScaleKind,
    tick_unit: f64,
    visible_span_abs: f64,
) -> ResolvedFormatter {
    match kind {
        AxisScaleKind::Linear => ResolvedFormatter::Numeric {
            decimals: decimals_from_unit(tick_unit),
        },
        AxisScaleKind::Logarithmic => ResolvedFormatter::Log,
        AxisScaleKind::Time => {
            let pattern = if visible_span_abs <= 600.0 {
                TimeLabelPattern::DateSecond
            } else if visible_span_abs <= 172_800.0 {
                TimeLabelPattern::DateMinute
            } else {
                TimeLabelPattern::Date
            };
            ResolvedFormatter::Time { pattern }
        }
    }
}

pub(crate) fn format_tick_label(value: f64, formatter: ResolvedFormatter) -> String {
    if !value.is_finite() {
        return "nan".to_owned();
    }

    match formatter {
        ResolvedFormatter::Numeric { decimals } => format_decimal(value, decimals),
        ResolvedFormatter::Log => format_log(value),
        ResolvedFormatter::Time { pattern } => format_time(value, pattern),
    }
}

/// Decimal places needed so consecutive ticks spaced `tick_unit` apart stay
/// distinguishable.
pub(crate) fn decimals_from_unit(tick_unit: f64) -> usize {
    if !tick_unit.is_finite() || tick_unit <= 0.0 {
        return 2;
    }
    let log_unit = tick_unit.log10();
    if log_unit >= 0.0 {
        0
    } else {
        ((-log_unit).ceil() as usize).min(12)
    }
}

fn format_decimal(value: f64, decimals: usize) -> String {
    // collapse negative zero so "-0" never reaches a label
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value:.decimals$}")
}

fn format_log(value: f64) -> String {
    if value > 0.0 {
        let exponent = value.log10();
        let rounded = exponent.round();
        if (exponent - rounded).abs() <= 1e-9 {
            return format!("10^{}", rounded as i64);
        }
    }

    let decimals = if value.abs() >= 1.0 || value == 0.0 {
        0
    } else {
        decimals_from_unit(value.abs())
    };
    format_decimal(value, decimals)
}

fn format_time(value: f64, pattern: TimeLabelPattern) -> String {
    let seconds = value.round() as i64;
    let Some(datetime) = DateTime::<Utc>::from_timestamp(seconds, 0) else {
        return format_decimal(value, 2);
    };

    let pattern = match pattern {
        TimeLabelPattern::Date => "%Y-%m-%d",
        TimeLabelPattern::DateMinute => "%Y-%m-%d %H:%M",
        TimeLabelPattern::DateSecond => "%Y-%m-%d %H:%M:%S",
    };
    datetime.format(pattern).to_string()
}
