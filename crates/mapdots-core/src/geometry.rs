//! Normalized coordinates
//!
//! Dots are positioned in percentages of the map image's current on-screen
//! bounding box, which keeps them independent of the image's rendered size.
//! Hosts report pointer positions and the box in device pixels; this module
//! converts between the two.

use serde::{Deserialize, Serialize};

/// Lower bound of a normalized coordinate
pub const MIN_PERCENT: f64 = 0.0;

/// Upper bound of a normalized coordinate
pub const MAX_PERCENT: f64 = 100.0;

/// Clamp a percentage into `0..=100`. NaN maps to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        MIN_PERCENT
    } else {
        value.clamp(MIN_PERCENT, MAX_PERCENT)
    }
}

/// A pointer position in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pixel delta from `earlier` to `self`
    pub fn delta_from(&self, earlier: Pointer) -> (f64, f64) {
        (self.x - earlier.x, self.y - earlier.y)
    }
}

/// The map image container's on-screen bounding rectangle, in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the rectangle can map pixels to percentages
    ///
    /// An image that has not laid out yet reports a zero-sized box.
    pub fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Convert an absolute pointer position to unclamped percentages
    pub fn to_percent(&self, pointer: Pointer) -> Option<(f64, f64)> {
        if !self.is_usable() {
            return None;
        }
        Some((
            (pointer.x - self.left) / self.width * 100.0,
            (pointer.y - self.top) / self.height * 100.0,
        ))
    }

    /// Convert a pixel delta to a percentage delta
    pub fn delta_to_percent(&self, dx: f64, dy: f64) -> Option<(f64, f64)> {
        if !self.is_usable() {
            return None;
        }
        Some((dx / self.width * 100.0, dy / self.height * 100.0))
    }
}
