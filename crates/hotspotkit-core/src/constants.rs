//! Shared constants for the hotspot editor.

/// Upper bound of percentage space.
pub const PERCENT_MAX: f64 = 100.0;

/// Lower bound of percentage space.
pub const PERCENT_MIN: f64 = 0.0;

/// Pixel footprint (width and height) of a freshly created hotspot.
pub const DEFAULT_FOOTPRINT_PX: f64 = 40.0;

/// Initial horizontal position of a new hotspot, in percent.
pub const DEFAULT_POSITION_X: f64 = 50.0;

/// Initial vertical position of a new hotspot, in percent.
pub const DEFAULT_POSITION_Y: f64 = 50.0;

/// Buffer kept between the editing dialog and the edge it is placed against.
pub const DIALOG_MARGIN: f64 = 20.0;

/// Font size the surface reports when none is configured.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Tolerance for comparing percentages after a pixel round trip.
pub const GEOMETRY_EPSILON: f64 = 1e-9;
