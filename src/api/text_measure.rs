/// Pixel extent of one rendered tick label.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelExtent {
    pub width: f64,
    pub height: f64,
}

/// Host-supplied text metrics.
///
/// Label measurement is the one dependency the engine cannot supply itself;
/// a real host wires its font stack in here. Non-finite results are treated
/// as a zero footprint by the engine, never as an error.
pub trait LabelMeasurer {
    fn measure(&self, label: &str) -> LabelExtent;
}

/// Fixed-cell measurer approximating a monospace font.
///
/// Good enough for tests and headless use; pixel-accurate hosts should
/// provide their own implementation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharCellMeasurer {
    pub char_width: f64,
    pub line_height: f64,
}

impl Default for CharCellMeasurer {
    fn default() -> Self {
        Self {
            char_width: 7.0,
            line_height: 14.0,
        }
    }
}

impl LabelMeasurer for CharCellMeasurer {
    fn measure(&self, label: &str) -> LabelExtent {
        LabelExtent {
            width: label.chars().count() as f64 * self.char_width,
            height: self.line_height,
        }
    }
}
