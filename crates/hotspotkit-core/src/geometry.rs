//! Geometry model for hotspots.
//!
//! Hotspot geometry is persisted in percentage space: positions and sizes
//! are fractions (0..=100) of the container's current pixel dimensions,
//! which keeps saved questions resolution independent. Pixel space only
//! exists while a gesture is in flight.
//!
//! ```text
//! percent = pixels * 100 / container
//! pixels  = percent * container / 100
//! ```
//!
//! Every conversion checks the container first so that a zero-sized
//! container is reported as [`GeometryError::DegenerateContainer`]
//! instead of producing infinities.

use serde::{Deserialize, Serialize};

use crate::constants::{PERCENT_MAX, PERCENT_MIN};
use crate::error::{GeometryError, GeometryResult};

/// A point in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension cannot be used as a divisor.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// An axis-aligned rectangle in pixel space, origin at the top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Top-left position of a hotspot, in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentPoint {
    pub x: f64,
    pub y: f64,
}

impl PercentPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite and inside `[0, 100]`.
    pub fn is_in_range(&self) -> bool {
        in_percent_range(self.x) && in_percent_range(self.y)
    }
}

/// Width and height of a hotspot, in percent of the container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentSize {
    pub width: f64,
    pub height: f64,
}

impl PercentSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Position and size of a hotspot in percentage space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PercentRect {
    pub position: PercentPoint,
    pub size: PercentSize,
}

impl PercentRect {
    pub fn new(position: PercentPoint, size: PercentSize) -> Self {
        Self { position, size }
    }

    /// Approximate equality, used to check the round-trip law.
    pub fn approx_eq(&self, other: &PercentRect, epsilon: f64) -> bool {
        (self.position.x - other.position.x).abs() <= epsilon
            && (self.position.y - other.position.y).abs() <= epsilon
            && (self.size.width - other.size.width).abs() <= epsilon
            && (self.size.height - other.size.height).abs() <= epsilon
    }
}

fn in_percent_range(value: f64) -> bool {
    value.is_finite() && (PERCENT_MIN..=PERCENT_MAX).contains(&value)
}

fn check_container(container: Size) -> GeometryResult<()> {
    if container.is_degenerate() {
        return Err(GeometryError::DegenerateContainer {
            width: container.width,
            height: container.height,
        });
    }
    Ok(())
}

/// Clamps a single percentage into `[0, 100]`. NaN collapses to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() {
        return PERCENT_MIN;
    }
    value.clamp(PERCENT_MIN, PERCENT_MAX)
}

/// Clamps a position into `[0, 100] x [0, 100]`. Never fails.
pub fn clamp_position(x: f64, y: f64) -> PercentPoint {
    PercentPoint::new(clamp_percent(x), clamp_percent(y))
}

/// Converts a pixel point into percentage space without clamping.
pub fn point_from_pixels(x: f64, y: f64, container: Size) -> GeometryResult<PercentPoint> {
    check_container(container)?;
    Ok(PercentPoint::new(
        x * PERCENT_MAX / container.width,
        y * PERCENT_MAX / container.height,
    ))
}

/// Converts percentage-space geometry into a pixel rectangle.
pub fn to_pixels(rect: &PercentRect, container: Size) -> GeometryResult<PixelRect> {
    check_container(container)?;
    Ok(PixelRect::new(
        rect.position.x * container.width / PERCENT_MAX,
        rect.position.y * container.height / PERCENT_MAX,
        rect.size.width * container.width / PERCENT_MAX,
        rect.size.height * container.height / PERCENT_MAX,
    ))
}

/// Converts a pixel rectangle into percentage space without clamping.
///
/// `from_pixels(&to_pixels(r, c)?, c)` equals `r` up to floating point
/// error for every container with positive dimensions.
pub fn from_pixels(rect: &PixelRect, container: Size) -> GeometryResult<PercentRect> {
    check_container(container)?;
    Ok(PercentRect::new(
        PercentPoint::new(
            rect.x * PERCENT_MAX / container.width,
            rect.y * PERCENT_MAX / container.height,
        ),
        PercentSize::new(
            rect.width * PERCENT_MAX / container.width,
            rect.height * PERCENT_MAX / container.height,
        ),
    ))
}

/// Converts a size measured in font-relative units into percentage space.
///
/// The gesture library reports resized dimensions relative to the
/// container's font size, so `unit_px` (the font size in pixels) scales
/// them back to pixels before dividing by the container.
pub fn size_from_units(
    width: f64,
    height: f64,
    unit_px: f64,
    container: Size,
) -> GeometryResult<PercentSize> {
    check_container(container)?;
    Ok(PercentSize::new(
        (width * unit_px) / (container.width / PERCENT_MAX),
        (height * unit_px) / (container.height / PERCENT_MAX),
    ))
}

/// Percentage size of a square pixel footprint in the given container.
///
/// The result depends on the container at creation time; once stored it
/// no longer changes when the container is resized.
pub fn default_size(footprint_px: f64, container: Size) -> GeometryResult<PercentSize> {
    check_container(container)?;
    Ok(PercentSize::new(
        footprint_px * PERCENT_MAX / container.width,
        footprint_px * PERCENT_MAX / container.height,
    ))
}
