use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::Side;

/// One rendered graduation mark on an axis.
///
/// `width`/`height` hold the measured label footprint in pixels; `shift` is
/// a perpendicular displacement applied by the shift overlap policies.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    pub value: f64,
    pub position: f64,
    pub rotation: f64,
    pub label: String,
    pub visible: bool,
    pub width: f64,
    pub height: f64,
    pub shift: f64,
}

impl TickMark {
    #[must_use]
    pub fn new(value: f64, position: f64, rotation: f64, label: String) -> Self {
        Self {
            value,
            position,
            rotation,
            label,
            visible: true,
            width: 0.0,
            height: 0.0,
            shift: 0.0,
        }
    }

    /// Label extent along the axis direction.
    #[must_use]
    pub fn footprint(&self, side: Side) -> f64 {
        if side.is_horizontal() {
            self.width
        } else {
            self.height
        }
    }
}

/// Runtime metrics exposed by the tick-mark caches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickMarkCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub size: usize,
}

/// Cache for labeled (major) tick marks, keyed by the exact formatted label.
///
/// A hit hands the stored mark back for in-place reuse so the label is not
/// re-measured; eviction is oldest-first and only ever costs a re-creation.
#[derive(Debug, Default)]
pub(crate) struct LabelTickCache {
    entries: IndexMap<String, TickMark>,
    hits: u64,
    misses: u64,
}

impl LabelTickCache {
    const MAX_ENTRIES: usize = 64;

    pub(crate) fn take(&mut self, label: &str) -> Option<TickMark> {
        match self.entries.shift_remove(label) {
            Some(mark) => {
                self.hits = self.hits.saturating_add(1);
                Some(mark)
            }
            None => {
                self.misses = self.misses.saturating_add(1);
                None
            }
        }
    }

    pub(crate) fn put(&mut self, mark: TickMark) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(mark.label.clone(), mark);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn stats(&self) -> TickMarkCacheStats {
        TickMarkCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}

/// Cache for unlabeled (minor) tick marks, keyed by the exact numeric value.
#[derive(Debug, Default)]
pub(crate) struct ValueTickCache {
    entries: IndexMap<OrderedFloat<f64>, TickMark>,
    hits: u64,
    misses: u64,
}

impl ValueTickCache {
    const MAX_ENTRIES: usize = 512;

    pub(crate) fn take(&mut self, value: f64) -> Option<TickMark> {
        match self.entries.shift_remove(&OrderedFloat(value)) {
            Some(mark) => {
                self.hits = self.hits.saturating_add(1);
                Some(mark)
            }
            None => {
                self.misses = self.misses.saturating_add(1);
                None
            }
        }
    }

    pub(crate) fn put(&mut self, mark: TickMark) {
        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.shift_remove_index(0);
        }
        self.entries.insert(OrderedFloat(mark.value), mark);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn stats(&self) -> TickMarkCacheStats {
        TickMarkCacheStats {
            hits: self.hits,
            misses: self.misses,
            size: self.entries.len(),
        }
    }
}
