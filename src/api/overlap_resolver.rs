use serde::{Deserialize, Serialize};

use super::tick_mark::TickMark;
use crate::core::Side;

pub(crate) const MIN_NARROW_FONT_SCALE: f64 = 0.7;
pub(crate) const MAX_NARROW_FONT_SCALE: f64 = 1.0;

/// Strategy used to keep adjacent tick labels from visually colliding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OverlapPolicy {
    /// Leave every label visible, collisions included.
    DoNothing,
    /// Hide every n-th label until the remainder fit.
    #[default]
    SkipAlternate,
    /// Displace alternate labels perpendicular to the axis, but only when a
    /// collision was actually detected; residual collisions are hidden.
    ShiftAlternate,
    /// Always displace alternate labels, collision or not.
    ForcedShiftAlternate,
    /// Squeeze label width by up to 30%; beyond that fall back to skipping.
    NarrowFont,
}

/// Result of one overlap-resolution pass over the major tick marks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct OverlapOutcome {
    pub label_overlap: bool,
    pub font_scale: f64,
}

/// Mutates tick visibility (and perpendicular shift for the shift policies)
/// so that the surviving labels fit along `axis_length`.
pub(crate) fn resolve_overlap(
    marks: &mut [TickMark],
    side: Side,
    axis_length: f64,
    gap: f64,
    inverted: bool,
    policy: OverlapPolicy,
) -> OverlapOutcome {
    let mut outcome = OverlapOutcome {
        label_overlap: false,
        font_scale: 1.0,
    };
    if marks.is_empty() || !axis_length.is_finite() || axis_length <= 0.0 {
        return outcome;
    }

    let mut total_labels_size = 0.0;
    let mut max_label_size = 0.0_f64;
    for mark in marks.iter() {
        let size = mark.footprint(side) + 2.0 * gap;
        total_labels_size += size;
        max_label_size = max_label_size.max(size.round());
    }
    // '+1' because the first and last label sit half outside the axis length
    let projected_length = (marks.len() + 1) as f64 * max_label_size;

    let mut skip_pass = policy == OverlapPolicy::SkipAlternate;
    if policy == OverlapPolicy::NarrowFont {
        let scale = axis_length / projected_length;
        if (MIN_NARROW_FONT_SCALE..=MAX_NARROW_FONT_SCALE).contains(&scale) {
            outcome.font_scale = scale;
        } else {
            outcome.font_scale = scale.clamp(MIN_NARROW_FONT_SCALE, MAX_NARROW_FONT_SCALE);
            // squeezing alone cannot resolve the collision
            skip_pass = true;
        }
    }

    if skip_pass && max_label_size > 0.0 && axis_length < total_labels_size {
        outcome.label_overlap = true;
        let stride = (projected_length / axis_length) as usize;
        if stride > 0 {
            let mut tick_index = 0_usize;
            for mark in marks.iter_mut() {
                if mark.visible {
                    mark.visible = tick_index % stride == 0;
                    tick_index += 1;
                }
            }
        }
    }

    match policy {
        OverlapPolicy::ShiftAlternate => {
            let collides = scan_overlapping(marks, 0, 1, side, gap, inverted, false);
            if collides {
                outcome.label_overlap = true;
                apply_alternate_shift(marks, gap);
                scan_overlapping(marks, 0, 2, side, gap, inverted, true);
                scan_overlapping(marks, 1, 2, side, gap, inverted, true);
            }
        }
        OverlapPolicy::ForcedShiftAlternate => {
            outcome.label_overlap = true;
            apply_alternate_shift(marks, gap);
            scan_overlapping(marks, 0, 2, side, gap, inverted, true);
            scan_overlapping(marks, 1, 2, side, gap, inverted, true);
        }
        OverlapPolicy::DoNothing => {}
        OverlapPolicy::SkipAlternate | OverlapPolicy::NarrowFont => {
            // hide whatever the stride pass left colliding
            outcome.label_overlap |= scan_overlapping(marks, 0, 1, side, gap, inverted, true);
        }
    }

    outcome
}

/// Walks every `stride`-th mark from `start` and reports whether any two
/// consecutive visible labels collide; with `hide` set the trailing label of
/// each colliding pair is made invisible.
fn scan_overlapping(
    marks: &mut [TickMark],
    start: usize,
    stride: usize,
    side: Side,
    gap: f64,
    inverted: bool,
    hide: bool,
) -> bool {
    let mut any_overlap = false;
    let mut last_visible: Option<usize> = None;
    let mut index = start;
    while index < marks.len() {
        if marks[index].visible {
            match last_visible {
                Some(previous) if labels_overlap(side, inverted, &marks[previous], &marks[index], gap) => {
                    any_overlap = true;
                    if hide {
                        marks[index].visible = false;
                    }
                }
                _ => last_visible = Some(index),
            }
        }
        index += stride;
    }
    any_overlap
}

/// Displaces every second mark perpendicular to the axis by one label height
/// plus the label gap.
fn apply_alternate_shift(marks: &mut [TickMark], gap: f64) {
    for (index, mark) in marks.iter_mut().enumerate() {
        mark.shift = if index % 2 == 1 {
            mark.height + gap
        } else {
            0.0
        };
    }
}

/// Overlap test between two consecutive visible tick labels.
///
/// Footprints are half-extended around each position along the axis
/// direction; the pair collides when the signed gap between the facing edges
/// is at most `gap`. Axis inversion flips which edge leads.
fn labels_overlap(side: Side, inverted: bool, first: &TickMark, second: &TickMark, gap: f64) -> bool {
    let first_half = first.footprint(side) / 2.0;
    let second_half = second.footprint(side) / 2.0;

    // horizontal axes order positions ascending; vertical axes descending
    // (pixel 0 at the top), unless inverted
    let ascending = if side.is_vertical() {
        inverted
    } else {
        !inverted
    };
    let edge_gap = if ascending {
        (second.position - second_half) - (first.position + first_half)
    } else {
        (first.position - first_half) - (second.position + second_half)
    };
    edge_gap <= gap
}
