//! Headless collaborators.
//!
//! In-memory implementations of the surface, dialog host and form engine
//! with fixed measurements. They record what the editor asks of them,
//! which makes them suitable for batch tools and for tests.

use std::collections::HashMap;

use hotspotkit_core::{FigureKind, HotspotSettings, PercentRect, Size};

use crate::dialog::DialogHost;
use crate::placement::DialogPlacement;
use crate::subform::{FieldCheck, FieldSchema, Subform, SubformRenderer};
use crate::surface::{ElementHandle, ManipulationSurface, SurfaceMetrics};

/// An element registered on a [`HeadlessSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttachedElement {
    pub index: usize,
    pub figure: FigureKind,
    pub rect: PercentRect,
}

/// Surface with fixed metrics that keeps track of attached elements.
#[derive(Debug, Clone, Default)]
pub struct HeadlessSurface {
    metrics: SurfaceMetrics,
    elements: HashMap<ElementHandle, AttachedElement>,
}

impl HeadlessSurface {
    pub fn new(metrics: SurfaceMetrics) -> Self {
        Self {
            metrics,
            elements: HashMap::new(),
        }
    }

    pub fn set_metrics(&mut self, metrics: SurfaceMetrics) {
        self.metrics = metrics;
    }

    pub fn element(&self, element: ElementHandle) -> Option<&AttachedElement> {
        self.elements.get(&element)
    }

    /// Indices reported by the attached elements, sorted.
    pub fn reported_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.elements.values().map(|e| e.index).collect();
        indices.sort_unstable();
        indices
    }
}

impl ManipulationSurface for HeadlessSurface {
    fn metrics(&self) -> SurfaceMetrics {
        self.metrics
    }

    fn attach(&mut self, element: ElementHandle, index: usize, figure: FigureKind, rect: PercentRect) {
        self.elements.insert(
            element,
            AttachedElement {
                index,
                figure,
                rect,
            },
        );
    }

    fn detach(&mut self, element: ElementHandle) {
        self.elements.remove(&element);
    }

    fn rebind(&mut self, element: ElementHandle, index: usize) {
        if let Some(attached) = self.elements.get_mut(&element) {
            attached.index = index;
        }
    }

    fn attached_count(&self) -> usize {
        self.elements.len()
    }
}

/// Dialog host with fixed layout measurements.
#[derive(Debug, Clone)]
pub struct HeadlessDialogHost {
    pub container_width: f64,
    pub image_region: Size,
    pub dialog_size: Size,
    shown: Option<DialogPlacement>,
    show_count: usize,
}

impl HeadlessDialogHost {
    pub fn new(container_width: f64, image_region: Size, dialog_size: Size) -> Self {
        Self {
            container_width,
            image_region,
            dialog_size,
            shown: None,
            show_count: 0,
        }
    }

    /// Placement of the dialog while it is visible.
    pub fn shown(&self) -> Option<&DialogPlacement> {
        self.shown.as_ref()
    }

    /// How many times the dialog has been shown.
    pub fn show_count(&self) -> usize {
        self.show_count
    }
}

impl DialogHost for HeadlessDialogHost {
    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn image_region(&self) -> Size {
        self.image_region
    }

    fn measure_dialog(&mut self, _form: &dyn Subform) -> Size {
        self.dialog_size
    }

    fn show(&mut self, placement: &DialogPlacement) {
        self.shown = Some(*placement);
        self.show_count += 1;
    }

    fn hide(&mut self) {
        self.shown = None;
    }
}

/// Form engine whose forms echo their initial value and always validate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRenderer;

struct PassthroughForm {
    draft: HotspotSettings,
}

impl Subform for PassthroughForm {
    fn validate(&mut self) -> Vec<FieldCheck> {
        vec![FieldCheck::valid("correct"), FieldCheck::valid("feedbackText")]
    }

    fn draft(&self) -> HotspotSettings {
        self.draft.clone()
    }

    fn remove_children(&mut self) {}
}

impl SubformRenderer for PassthroughRenderer {
    fn render(&mut self, _schema: &FieldSchema, initial: &HotspotSettings) -> Box<dyn Subform> {
        Box::new(PassthroughForm {
            draft: initial.clone(),
        })
    }
}
