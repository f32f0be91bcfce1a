use smallvec::SmallVec;
use tracing::debug;

/// Upper bound on generated major tick values per axis.
pub const MAX_TICK_COUNT: usize = 20;

/// Default number of minor subdivisions per major interval.
pub const DEFAULT_MINOR_TICK_COUNT: usize = 10;

/// Multiple of the label footprint reserved per major tick slot.
///
/// One label width alone packs labels edge to edge; doubling it keeps the
/// default density readable before the overlap resolver has to act.
const LABEL_SLOT_FACTOR: f64 = 2.0;

const TICK_MULTIPLIERS: [f64; 3] = [1.0, 2.0, 5.0];

/// Snaps a raw spacing up to the nearest `{1, 2, 5} * 10^n` value.
///
/// Returns `NaN` for non-positive or non-finite input; callers treat that as
/// "no ticks can be generated".
#[must_use]
pub fn nice_tick_unit(raw_unit: f64) -> f64 {
    if !raw_unit.is_finite() || raw_unit <= 0.0 {
        return f64::NAN;
    }

    let exponent = raw_unit.log10().floor();
    let power = 10_f64.powf(exponent);
    let factor = raw_unit / power;
    let multiplier = TICK_MULTIPLIERS
        .iter()
        .copied()
        .find(|candidate| factor <= candidate * (1.0 + 1e-9))
        .unwrap_or(10.0);
    multiplier * power
}

/// Computes the preferred spacing between major ticks for a given axis
/// length, range, and approximate label footprint along the axis.
///
/// The projected tick count is monotonic in `axis_length`: a longer axis
/// never yields fewer ticks for the same range.
#[must_use]
pub fn preferred_tick_unit(
    axis_length: f64,
    min: f64,
    max: f64,
    label_size: f64,
    max_major_count: usize,
) -> f64 {
    let span = max - min;
    if !axis_length.is_finite()
        || axis_length <= 0.0
        || !span.is_finite()
        || span <= 0.0
        || !label_size.is_finite()
        || label_size <= 0.0
    {
        return f64::NAN;
    }

    let slots = (axis_length / (label_size * LABEL_SLOT_FACTOR)).floor() as usize;
    let count = slots.min(max_major_count.max(2)).max(2);
    nice_tick_unit(span / count as f64)
}

/// Ascending multiples of `tick_unit` inside `[min, max]`.
///
/// A finite zero-width range yields the singleton `[min]`; anything
/// non-finite or a non-positive unit yields an empty sequence. Values are
/// produced by index multiplication so long runs carry no additive drift.
#[must_use]
pub fn major_tick_values(min: f64, max: f64, tick_unit: f64, max_count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min > max {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }
    if !tick_unit.is_finite() || tick_unit <= 0.0 {
        debug!(tick_unit, "degenerate tick unit, producing no major ticks");
        return Vec::new();
    }

    let first_index = (min / tick_unit).ceil();
    if !first_index.is_finite() {
        return Vec::new();
    }

    let tolerance = tick_unit * 1e-9;
    let mut values = Vec::new();
    for step in 0.. {
        let value = (first_index + step as f64) * tick_unit;
        if value > max + tolerance {
            break;
        }
        values.push(value);
        if values.len() > max_count {
            break;
        }
    }
    values
}

/// Minor tick values: `minor_count` subdivisions per major interval,
/// strictly between majors and clipped to `[min, max]`.
///
/// The partial intervals before the first and after the last major tick are
/// covered as well.
#[must_use]
pub fn minor_tick_values(min: f64, max: f64, tick_unit: f64, minor_count: usize) -> Vec<f64> {
    if minor_count < 2
        || !min.is_finite()
        || !max.is_finite()
        || min >= max
        || !tick_unit.is_finite()
        || tick_unit <= 0.0
    {
        return Vec::new();
    }

    let minor_unit = tick_unit / minor_count as f64;
    let first_major_index = (min / tick_unit).ceil();
    if !first_major_index.is_finite() {
        return Vec::new();
    }

    let mut values = Vec::new();
    // start one interval early to cover the stretch below the first major
    let mut interval = -1_i64;
    loop {
        let base = (first_major_index + interval as f64) * tick_unit;
        if base > max {
            break;
        }

        let mut segment: SmallVec<[f64; 16]> = SmallVec::new();
        for sub in 1..minor_count {
            let value = base + sub as f64 * minor_unit;
            if value >= min && value <= max {
                segment.push(value);
            }
        }
        values.extend_from_slice(&segment);

        interval += 1;
        if interval > (MAX_TICK_COUNT * 2) as i64 {
            break;
        }
    }
    values
}

/// Major tick values for a logarithmic axis: one tick per decade inside
/// `[min, max]`.
///
/// Bounds must already be clamped positive. Ranges narrower than a full
/// decade fall back to linear "nice" ticks so short zoomed-in spans still
/// produce a usable ladder. When the decade count exceeds `max_count`, only
/// every n-th decade is kept.
#[must_use]
pub fn log_major_tick_values(min: f64, max: f64, max_count: usize) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min <= 0.0 || min > max {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }

    // epsilon guards keep exact decades on the ladder despite log10 rounding
    let min_exp = (min.log10() - 1e-9).ceil() as i32;
    let max_exp = (max.log10() + 1e-9).floor() as i32;
    if max_exp < min_exp {
        // sub-decade span: behave like a linear axis over the visible window
        let unit = nice_tick_unit((max - min) / 4.0);
        return major_tick_values(min, max, unit, max_count);
    }

    let decades = (max_exp - min_exp + 1) as usize;
    let stride = decades.div_ceil(max_count.max(2)).max(1) as i32;

    let mut values = Vec::new();
    let mut exp = min_exp;
    while exp <= max_exp {
        values.push(10_f64.powi(exp));
        exp += stride;
    }
    values
}

/// Minor tick values for a logarithmic axis: the `2..=9` multiples of each
/// decade overlapping `[min, max]`, excluding the decades themselves.
#[must_use]
pub fn log_minor_tick_values(min: f64, max: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || min <= 0.0 || min >= max {
        return Vec::new();
    }

    let min_exp = min.log10().floor() as i32;
    let max_exp = max.log10().ceil() as i32;

    let mut values = Vec::new();
    for exp in min_exp..=max_exp {
        let decade = 10_f64.powi(exp);
        for multiplier in 2..=9 {
            let value = decade * f64::from(multiplier);
            if value >= min && value <= max {
                values.push(value);
            }
        }
    }
    values
}
