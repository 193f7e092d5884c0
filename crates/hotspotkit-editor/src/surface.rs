//! Manipulation surface interface.
//!
//! The drag/resize gesture library lives outside this crate. It is seen
//! through [`ManipulationSurface`]: the editor attaches one visual element
//! per hotspot, tells the surface which collection index each element
//! currently stands for, and receives settled gestures back as
//! [`SurfaceEvent`]s in pixel space.

use hotspotkit_core::constants::DEFAULT_FONT_SIZE;
use hotspotkit_core::{FigureKind, PercentRect, Size};
use uuid::Uuid;

/// Opaque handle of a visual element on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(Uuid);

impl ElementHandle {
    /// Create a new unique element handle
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "El({})", &self.0.to_string()[..8])
    }
}

/// Live measurements of the surface the hotspots are drawn on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceMetrics {
    /// Pixel size of the image area hotspots are positioned in.
    pub container: Size,
    /// Computed font size of the container, the unit resize gestures
    /// report in.
    pub font_size: f64,
}

impl SurfaceMetrics {
    pub fn new(container: Size, font_size: f64) -> Self {
        Self {
            container,
            font_size,
        }
    }
}

impl Default for SurfaceMetrics {
    fn default() -> Self {
        Self {
            container: Size::default(),
            font_size: DEFAULT_FONT_SIZE,
        }
    }
}

/// A settled gesture reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SurfaceEvent {
    /// The element was dropped with its top-left corner at `(x, y)` pixels.
    MoveSettled { element: ElementHandle, x: f64, y: f64 },
    /// The element was resized to `width` x `height` font-relative units.
    ResizeSettled {
        element: ElementHandle,
        width: f64,
        height: f64,
    },
    /// The pointer was released after placing a freshly created element.
    ReleaseAfterCreate { element: ElementHandle },
}

impl SurfaceEvent {
    pub fn element(&self) -> ElementHandle {
        match self {
            Self::MoveSettled { element, .. }
            | Self::ResizeSettled { element, .. }
            | Self::ReleaseAfterCreate { element } => *element,
        }
    }
}

/// The external drag/resize surface.
pub trait ManipulationSurface {
    /// Current container measurements.
    fn metrics(&self) -> SurfaceMetrics;

    /// Registers a visual element for the hotspot at `index`.
    fn attach(&mut self, element: ElementHandle, index: usize, figure: FigureKind, rect: PercentRect);

    /// Unregisters and removes a visual element.
    fn detach(&mut self, element: ElementHandle);

    /// Updates the index an element reports itself as.
    fn rebind(&mut self, element: ElementHandle, index: usize);

    /// Number of elements currently registered.
    fn attached_count(&self) -> usize;
}
