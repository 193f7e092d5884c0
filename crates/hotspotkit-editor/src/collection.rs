//! Hotspot collection.
//!
//! Owns the dense list of hotspot records and, in parallel, the binding
//! of each record to its visual element on the surface. The position in
//! the list is the hotspot's identity; after a removal every survivor is
//! renumbered and its element re-bound so the surface always reports the
//! right index.
//!
//! # Invariants
//!
//! - `records.len() == bindings.len() == surface.attached_count()`
//! - `bindings[i].index() == i` for every `i`
//! - a record is stored before its element is attached

use hotspotkit_core::{CollectionError, CollectionResult, HotspotRecord};

use crate::surface::{ElementHandle, ManipulationSurface};

/// Link between a record slot and its visual element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementBinding {
    element: ElementHandle,
    index: usize,
}

impl ElementBinding {
    pub fn element(&self) -> ElementHandle {
        self.element
    }

    /// Index the element currently reports itself as.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Ordered hotspots and their element bindings.
#[derive(Debug, Clone, Default)]
pub struct HotspotCollection {
    records: Vec<HotspotRecord>,
    bindings: Vec<ElementBinding>,
}

impl HotspotCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from saved records, attaching one element each.
    pub fn hydrate<S>(records: Vec<HotspotRecord>, surface: &mut S) -> Self
    where
        S: ManipulationSurface + ?Sized,
    {
        let mut collection = Self::new();
        for record in records {
            collection.append(record, surface);
        }
        tracing::debug!("Hydrated {} hotspots", collection.count());
        collection
    }

    /// Appends a complete record and attaches its element.
    ///
    /// Returns the new index, which is the length before the append.
    pub fn append<S>(&mut self, record: HotspotRecord, surface: &mut S) -> usize
    where
        S: ManipulationSurface + ?Sized,
    {
        let index = self.records.len();
        let figure = record.figure();
        let rect = record.geometry();
        self.records.push(record);

        let element = ElementHandle::new();
        self.bindings.push(ElementBinding { element, index });
        surface.attach(element, index, figure, rect);

        tracing::debug!("Appended {} hotspot {} as {}", figure, index, element);
        self.debug_check(surface);
        index
    }

    /// Removes the hotspot at `index`, detaches its element and renumbers
    /// every later hotspot.
    ///
    /// Fails with [`CollectionError::IndexOutOfRange`] and leaves the
    /// collection untouched when `index >= count()`.
    pub fn remove_at<S>(&mut self, index: usize, surface: &mut S) -> CollectionResult<HotspotRecord>
    where
        S: ManipulationSurface + ?Sized,
    {
        let count = self.records.len();
        if index >= count {
            tracing::error!("Refusing to remove hotspot {} of {}", index, count);
            return Err(CollectionError::IndexOutOfRange { index, count });
        }

        let record = self.records.remove(index);
        let binding = self.bindings.remove(index);
        surface.detach(binding.element);

        for (new_index, binding) in self.bindings.iter_mut().enumerate().skip(index) {
            binding.index = new_index;
            surface.rebind(binding.element, new_index);
        }

        tracing::debug!("Removed hotspot {} ({} left)", index, self.records.len());
        self.debug_check(surface);
        Ok(record)
    }

    /// Removes every hotspot and detaches all elements.
    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: ManipulationSurface + ?Sized,
    {
        for binding in self.bindings.drain(..) {
            surface.detach(binding.element);
        }
        let removed = self.records.len();
        self.records.clear();
        tracing::debug!("Cleared {} hotspots", removed);
    }

    pub fn get(&self, index: usize) -> Option<&HotspotRecord> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut HotspotRecord> {
        self.records.get_mut(index)
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[HotspotRecord] {
        &self.records
    }

    pub fn bindings(&self) -> &[ElementBinding] {
        &self.bindings
    }

    /// Index of the hotspot shown by `element`.
    pub fn index_of(&self, element: ElementHandle) -> Option<usize> {
        self.bindings
            .iter()
            .find(|binding| binding.element == element)
            .map(|binding| binding.index)
    }

    /// Element showing the hotspot at `index`.
    pub fn handle_of(&self, index: usize) -> Option<ElementHandle> {
        self.bindings.get(index).map(|binding| binding.element)
    }

    /// Checks the record/binding/surface invariants.
    pub fn is_consistent<S>(&self, surface: &S) -> bool
    where
        S: ManipulationSurface + ?Sized,
    {
        self.records.len() == self.bindings.len()
            && self.bindings.len() == surface.attached_count()
            && self
                .bindings
                .iter()
                .enumerate()
                .all(|(i, binding)| binding.index == i)
    }

    fn debug_check<S>(&self, surface: &S)
    where
        S: ManipulationSurface + ?Sized,
    {
        debug_assert!(
            self.is_consistent(surface),
            "hotspot collection out of sync: {} records, {} bindings, {} attached",
            self.records.len(),
            self.bindings.len(),
            surface.attached_count()
        );
    }
}
