use serde::{Deserialize, Serialize};

/// Edge of the plot area an axis is rendered against.
///
/// The two `Center*` variants place the axis inside the plot area (through
/// the origin); they orient exactly like `Bottom` and `Left` respectively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Side {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
    CenterHorizontal,
    CenterVertical,
}

impl Side {
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom | Self::CenterHorizontal)
    }

    #[must_use]
    pub const fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }
}
