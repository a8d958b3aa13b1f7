//! Utility functions for layout geometry, arrowheads, and image fitting.
//!
//! This module provides:
//! - [`Rect`], the inclusive pixel bounding box used by every card and badge
//! - Arrowhead geometry calculations
//! - Aspect-preserving fit calculations for pasted images

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned pixel box with inclusive corners, matching how layouts are
/// written down: `Rect::new(40, 95, 560, 310)` covers x 40..=560.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Creates a box from its top-left and bottom-right corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Covered width in pixels (corners inclusive).
    pub fn width(&self) -> i32 {
        (self.x1 - self.x0 + 1).max(0)
    }

    /// Covered height in pixels (corners inclusive).
    pub fn height(&self) -> i32 {
        (self.y1 - self.y0 + 1).max(0)
    }

    /// Returns true if the box covers at least one pixel.
    pub fn is_valid(&self) -> bool {
        self.x1 >= self.x0 && self.y1 >= self.y0
    }
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates a filled triangular arrowhead at the end of a line.
///
/// The tip sits on `(x2, y2)`; the base is centred `size` pixels back along
/// the line and is `size` pixels wide.
///
/// # Returns
/// `[tip, left, right]`, or `None` when the line has zero length and no
/// direction can be derived.
pub fn arrowhead_triangle(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    size: f64,
) -> Option<[(f64, f64); 3]> {
    let dx = x2 - x1;
    let dy = y2 - y1;
    let length = (dx * dx + dy * dy).sqrt();

    if length <= 0.0 {
        return None;
    }

    let ux = dx / length;
    let uy = dy / length;

    // Base centre and the perpendicular half-width offset
    let px = x2 - ux * size;
    let py = y2 - uy * size;
    let lx = -uy * size * 0.5;
    let ly = ux * size * 0.5;

    Some([(x2, y2), (px + lx, py + ly), (px - lx, py - ly)])
}

// ============================================================================
// Image Fitting
// ============================================================================

/// Scales `(width, height)` to fit inside `(box_width, box_height)` while
/// preserving aspect ratio.
///
/// The scale factor is `min(box_width / width, box_height / height)` and the
/// result is truncated to whole pixels. Smaller sources are scaled up.
/// Degenerate inputs yield `(0, 0)`.
pub fn fit_dimensions(width: i32, height: i32, box_width: i32, box_height: i32) -> (i32, i32) {
    if width <= 0 || height <= 0 || box_width <= 0 || box_height <= 0 {
        return (0, 0);
    }

    let ratio = (box_width as f64 / width as f64).min(box_height as f64 / height as f64);
    (
        (width as f64 * ratio) as i32,
        (height as f64 * ratio) as i32,
    )
}
