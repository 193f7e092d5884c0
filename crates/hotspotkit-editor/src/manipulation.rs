//! Manipulation adapter.
//!
//! Bridges pixel-space gestures from the surface into percentage-space
//! updates of the collection. Moves are clamped, resizes that would make
//! a hotspot vanish are ignored, and the release that ends the placement
//! of a new hotspot produces an [`OpenRequest`] carrying the geometry that
//! was already committed, so the dialog never reads stale coordinates.

use hotspotkit_core::{
    clamp_position, point_from_pixels, size_from_units, to_pixels, CollectionError, Point,
    PixelRect, Result,
};

use crate::collection::HotspotCollection;
use crate::surface::{ElementHandle, SurfaceEvent, SurfaceMetrics};

/// Request to open the editing dialog for a hotspot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OpenRequest {
    pub index: usize,
    /// Settled pixel bounds of the hotspot inside the image region.
    pub hotspot: PixelRect,
    /// Dialog anchor, measured from the hotspot centre.
    pub anchor: Point,
}

/// Translates surface gestures into collection updates.
#[derive(Debug, Clone, Default)]
pub struct ManipulationAdapter {
    pending: Option<ElementHandle>,
}

impl ManipulationAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `element` as a freshly created hotspot still being placed.
    pub fn begin_placement(&mut self, element: ElementHandle) {
        self.pending = Some(element);
    }

    pub fn pending_placement(&self) -> Option<ElementHandle> {
        self.pending
    }

    pub fn cancel_placement(&mut self) {
        self.pending = None;
    }

    /// Applies a settled move of the hotspot at `index` to pixel `(x, y)`.
    pub fn on_move(
        &self,
        collection: &mut HotspotCollection,
        index: usize,
        x: f64,
        y: f64,
        metrics: SurfaceMetrics,
    ) -> Result<()> {
        let count = collection.count();
        let record = collection
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, count })?;

        let raw = point_from_pixels(x, y, metrics.container)?;
        let clamped = clamp_position(raw.x, raw.y);
        if clamped != raw {
            tracing::debug!("Clamped hotspot {} move from {:?} to {:?}", index, raw, clamped);
        }
        record.set_position(clamped);
        Ok(())
    }

    /// Applies a settled resize, given in font-relative units.
    ///
    /// Returns `false` when the resulting size is not positive; the
    /// previous size is kept in that case.
    pub fn on_resize(
        &self,
        collection: &mut HotspotCollection,
        index: usize,
        width: f64,
        height: f64,
        metrics: SurfaceMetrics,
    ) -> Result<bool> {
        let count = collection.count();
        let record = collection
            .get_mut(index)
            .ok_or(CollectionError::IndexOutOfRange { index, count })?;

        let size = size_from_units(width, height, metrics.font_size, metrics.container)?;
        let applied = record.set_size(size);
        if !applied {
            tracing::warn!(
                "Ignoring resize of hotspot {} to {}x{}, keeping {:?}",
                index,
                width,
                height,
                record.size()
            );
        }
        Ok(applied)
    }

    /// Ends the placement gesture of `element`.
    ///
    /// Only the element registered with [`begin_placement`] yields a
    /// request; any other release is an ordinary drop.
    ///
    /// [`begin_placement`]: ManipulationAdapter::begin_placement
    pub fn on_create_released(
        &mut self,
        collection: &HotspotCollection,
        element: ElementHandle,
        metrics: SurfaceMetrics,
    ) -> Result<Option<OpenRequest>> {
        if self.pending != Some(element) {
            return Ok(None);
        }
        self.pending = None;

        let request = Self::open_request(collection, element, Point::ZERO, metrics)?;
        if request.is_none() {
            tracing::warn!("Placement released for detached element {}", element);
        }
        Ok(request)
    }

    /// Builds a request from the geometry `element` holds right now.
    ///
    /// Returns `None` when the element is no longer bound.
    pub fn open_request(
        collection: &HotspotCollection,
        element: ElementHandle,
        anchor: Point,
        metrics: SurfaceMetrics,
    ) -> Result<Option<OpenRequest>> {
        let Some(index) = collection.index_of(element) else {
            return Ok(None);
        };
        let count = collection.count();
        let record = collection
            .get(index)
            .ok_or(CollectionError::IndexOutOfRange { index, count })?;
        let hotspot = to_pixels(&record.geometry(), metrics.container)?;

        Ok(Some(OpenRequest {
            index,
            hotspot,
            anchor,
        }))
    }

    /// Routes a surface event to the matching operation.
    ///
    /// Events for elements that are no longer bound are dropped.
    pub fn dispatch(
        &mut self,
        collection: &mut HotspotCollection,
        event: SurfaceEvent,
        metrics: SurfaceMetrics,
    ) -> Result<Option<OpenRequest>> {
        let element = event.element();
        let Some(index) = collection.index_of(element) else {
            tracing::warn!("Dropping {:?} for unknown element {}", event, element);
            return Ok(None);
        };

        match event {
            SurfaceEvent::MoveSettled { x, y, .. } => {
                self.on_move(collection, index, x, y, metrics)?;
                Ok(None)
            }
            SurfaceEvent::ResizeSettled { width, height, .. } => {
                self.on_resize(collection, index, width, height, metrics)?;
                Ok(None)
            }
            SurfaceEvent::ReleaseAfterCreate { element } => {
                self.on_create_released(collection, element, metrics)
            }
        }
    }
}
