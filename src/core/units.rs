use serde::{Deserialize, Serialize};

/// Engineering metric prefix applied to tick label values.
///
/// Scaling divides raw axis values before formatting, so a range of
/// `[0, 2.5e6]` with `Mega` renders labels `0 .. 2.5` under a `(M<unit>)`
/// axis label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MetricPrefix {
    Yotta,
    Zetta,
    Exa,
    Peta,
    Tera,
    Giga,
    Mega,
    Kilo,
    #[default]
    None,
    Milli,
    Micro,
    Nano,
    Pico,
    Femto,
    Atto,
    Zepto,
    Yocto,
}

impl MetricPrefix {
    #[must_use]
    pub const fn power(self) -> i32 {
        match self {
            Self::Yotta => 24,
            Self::Zetta => 21,
            Self::Exa => 18,
            Self::Peta => 15,
            Self::Tera => 12,
            Self::Giga => 9,
            Self::Mega => 6,
            Self::Kilo => 3,
            Self::None => 0,
            Self::Milli => -3,
            Self::Micro => -6,
            Self::Nano => -9,
            Self::Pico => -12,
            Self::Femto => -15,
            Self::Atto => -18,
            Self::Zepto => -21,
            Self::Yocto => -24,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Yotta => "Y",
            Self::Zetta => "Z",
            Self::Exa => "E",
            Self::Peta => "P",
            Self::Tera => "T",
            Self::Giga => "G",
            Self::Mega => "M",
            Self::Kilo => "k",
            Self::None => "",
            Self::Milli => "m",
            Self::Micro => "u",
            Self::Nano => "n",
            Self::Pico => "p",
            Self::Femto => "f",
            Self::Atto => "a",
            Self::Zepto => "z",
            Self::Yocto => "y",
        }
    }

    /// Divisor applied to raw values before label formatting.
    #[must_use]
    pub fn scaling(self) -> f64 {
        10_f64.powi(self.power())
    }

    /// Picks the prefix whose power-of-three bracket contains `magnitude`.
    ///
    /// Non-finite or zero magnitudes resolve to `None`.
    #[must_use]
    pub fn for_magnitude(magnitude: f64) -> Self {
        if !magnitude.is_finite() || magnitude == 0.0 {
            return Self::None;
        }

        let power = magnitude.abs().log10().floor();
        let power3 = ((power / 3.0).floor() * 3.0).clamp(-24.0, 24.0) as i32;
        match power3 {
            24 => Self::Yotta,
            21 => Self::Zetta,
            18 => Self::Exa,
            15 => Self::Peta,
            12 => Self::Tera,
            9 => Self::Giga,
            6 => Self::Mega,
            3 => Self::Kilo,
            -3 => Self::Milli,
            -6 => Self::Micro,
            -9 => Self::Nano,
            -12 => Self::Pico,
            -15 => Self::Femto,
            -18 => Self::Atto,
            -21 => Self::Zepto,
            -24 => Self::Yocto,
            _ => Self::None,
        }
    }
}

/// Composes the axis title from its name, unit, and active metric prefix.
///
/// With a unit the prefix symbol is folded into the bracket (`"current (mA)"`);
/// without one a non-unity scaling is spelled out as a power of ten.
#[must_use]
pub fn axis_label(name: &str, unit: Option<&str>, prefix: MetricPrefix) -> String {
    match unit {
        Some(unit) if !unit.is_empty() => format!("{name} ({}{unit})", prefix.symbol()),
        _ if prefix != MetricPrefix::None => format!("{name} (x10^{})", prefix.power()),
        _ => name.to_owned(),
    }
}
