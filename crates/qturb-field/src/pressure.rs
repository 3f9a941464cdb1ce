//! Pressure points and array-style box bounds.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// A fixed location that injects `intensity × t` into the cells around it.
///
/// Coordinates are plain integers and may lie outside the grid; see
/// [`PressurePoint::box_ranges`] for how they are clipped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PressurePoint {
    /// X index.
    pub x: i64,
    /// Y index.
    pub y: i64,
    /// Z index.
    pub z: i64,
    /// Perturbation strength per unit time.
    pub intensity: f64,
}

impl PressurePoint {
    /// Create a pressure point.
    pub const fn new(x: i64, y: i64, z: i64, intensity: f64) -> Self {
        Self { x, y, z, intensity }
    }

    /// Cell ranges `[c-1, c+1)` per axis, clipped to a grid of side `size`.
    pub fn box_ranges(&self, size: usize) -> [Range<usize>; 3] {
        [self.x, self.y, self.z]
            .map(|c| slice_range(c.saturating_sub(1), c.saturating_add(1), size))
    }

    /// Number of grid cells the box covers.
    pub fn box_volume(&self, size: usize) -> usize {
        self.box_ranges(size).iter().map(ExactSizeIterator::len).product()
    }
}

impl From<(i64, i64, i64, f64)> for PressurePoint {
    fn from((x, y, z, intensity): (i64, i64, i64, f64)) -> Self {
        Self::new(x, y, z, intensity)
    }
}

/// Resolve the half-open slice `start..stop` against an axis of length `len`.
///
/// A negative bound counts from the end of the axis, bounds are clamped to
/// `[0, len]`, and a start at or past the stop gives an empty range.
pub fn slice_range(start: i64, stop: i64, len: usize) -> Range<usize> {
    let resolve = |i: i64| -> usize {
        let len = len as i64;
        let i = if i < 0 { (i + len).max(0) } else { i.min(len) };
        i as usize
    };
    let (start, stop) = (resolve(start), resolve(stop));
    if start >= stop { start..start } else { start..stop }
}
