//! Hotspot question editor.
//!
//! Wires the collection, the manipulation adapter and the edit session
//! to the external collaborators (surface, form engine, dialog host and
//! image field) and owns the question parameters being edited.
//!
//! Gesture handling runs on the caller's thread. Two things are deferred
//! to [`HotspotEditor::pump`], which the host calls once per turn of its
//! event loop:
//!
//! - opening the dialog after a new hotspot has been placed. Only the
//!   element is queued; its geometry is read when the dialog opens, so
//!   every move/resize of that gesture is written first, whichever order
//!   the surface reports them in;
//! - background image changes, which may be published from anywhere.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

use hotspotkit_core::constants::{DEFAULT_FOOTPRINT_PX, DEFAULT_POSITION_X, DEFAULT_POSITION_Y};
use hotspotkit_core::{
    DocumentResult, FigureKind, HotspotRecord, PercentPoint, Point, QuestionParams, Result,
};

use crate::collection::HotspotCollection;
use crate::dialog::DialogHost;
use crate::image_field::{ImageEvent, ImageField, ImageParams, SubscriptionId};
use crate::manipulation::ManipulationAdapter;
use crate::session::{CloseReason, CommitOutcome, EditSession, OpenOutcome};
use crate::subform::{FieldSchema, SubformRenderer};
use crate::surface::{ElementHandle, ManipulationSurface, SurfaceEvent};

/// Persistent message shown instead of the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorNotice {
    /// No background image has been chosen; the editor is inert.
    NoBackgroundImage,
}

/// Tunables of the editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorOptions {
    /// Pixel width and height of a new hotspot.
    pub footprint_px: f64,
    /// Where a new hotspot is dropped, in percent.
    pub initial_position: PercentPoint,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            footprint_px: DEFAULT_FOOTPRINT_PX,
            initial_position: PercentPoint::new(DEFAULT_POSITION_X, DEFAULT_POSITION_Y),
        }
    }
}

/// External collaborators of the editor.
pub struct Collaborators<S, R, H> {
    pub surface: S,
    pub renderer: R,
    pub host: H,
    pub image_field: Arc<ImageField>,
}

/// The hotspot question editor.
pub struct HotspotEditor<S, R, H>
where
    S: ManipulationSurface,
    R: SubformRenderer,
    H: DialogHost,
{
    params: QuestionParams,
    collection: HotspotCollection,
    adapter: ManipulationAdapter,
    session: EditSession,
    element_fields: FieldSchema,
    options: EditorOptions,
    surface: S,
    renderer: R,
    host: H,
    image_field: Arc<ImageField>,
    subscription: Option<SubscriptionId>,
    inbox: Arc<Mutex<VecDeque<ImageEvent>>>,
    deferred: VecDeque<ElementHandle>,
    notice: Option<EditorNotice>,
}

impl<S, R, H> HotspotEditor<S, R, H>
where
    S: ManipulationSurface,
    R: SubformRenderer,
    H: DialogHost,
{
    /// Creates the editor for `params`, or for empty default parameters
    /// when the question has none yet.
    pub fn new(
        params: Option<QuestionParams>,
        element_fields: FieldSchema,
        collaborators: Collaborators<S, R, H>,
        options: EditorOptions,
    ) -> Self {
        let Collaborators {
            mut surface,
            renderer,
            host,
            image_field,
        } = collaborators;

        let mut params = params.unwrap_or_else(|| {
            tracing::debug!("No saved parameters, starting from defaults");
            QuestionParams::default()
        });
        let records = std::mem::take(&mut params.hotspot);
        let collection = HotspotCollection::hydrate(records, &mut surface);

        let inbox: Arc<Mutex<VecDeque<ImageEvent>>> = Arc::new(Mutex::new(VecDeque::new()));
        let sink = inbox.clone();
        let subscription = image_field.subscribe(move |event| {
            sink.lock().push_back(event.clone());
        });

        let notice = match image_field.image() {
            Some(_) => None,
            None => Some(EditorNotice::NoBackgroundImage),
        };

        tracing::info!("Hotspot editor ready with {} hotspots", collection.count());
        Self {
            params,
            collection,
            adapter: ManipulationAdapter::new(),
            session: EditSession::new(),
            element_fields,
            options,
            surface,
            renderer,
            host,
            image_field,
            subscription: Some(subscription),
            inbox,
            deferred: VecDeque::new(),
            notice,
        }
    }

    /// Toolbar action: adds a default hotspot and starts its placement.
    ///
    /// Returns the new index, or `None` when the editor is inert or a
    /// dialog is open.
    pub fn create_hotspot(&mut self, figure: FigureKind) -> Result<Option<usize>> {
        if self.is_inert() {
            tracing::debug!("Ignoring {} creation without a background image", figure);
            return Ok(None);
        }
        if self.session.is_open() {
            tracing::debug!("Ignoring {} creation while the dialog is open", figure);
            return Ok(None);
        }

        let container = self.surface.metrics().container;
        let mut record = HotspotRecord::new_default(figure, container, self.options.footprint_px)?;
        record.set_position(self.options.initial_position);
        let index = self.collection.append(record, &mut self.surface);
        if let Some(element) = self.collection.handle_of(index) {
            self.adapter.begin_placement(element);
        }
        tracing::info!("Created {} hotspot {}", figure, index);
        Ok(Some(index))
    }

    /// Applies a settled gesture from the surface.
    ///
    /// A release that completes a new hotspot's placement queues the
    /// dialog opening for the next [`pump`](HotspotEditor::pump).
    ///
    /// Image changes are only applied by `pump`, so until then gestures
    /// act on the hotspots of the previous image.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) -> Result<()> {
        if self.session.is_open() {
            tracing::debug!("Ignoring {:?} while the dialog is open", event);
            return Ok(());
        }
        let metrics = self.surface.metrics();
        if let Some(request) = self
            .adapter
            .dispatch(&mut self.collection, event, metrics)?
        {
            tracing::debug!("Deferring dialog for hotspot {}", request.index);
            self.deferred.push_back(event.element());
        }
        Ok(())
    }

    /// Opens the dialog for `element`, anchored at `offset` pixels from
    /// the element's top-left corner.
    pub fn double_click(
        &mut self,
        element: ElementHandle,
        offset: Point,
    ) -> Result<Option<OpenOutcome>> {
        if self.is_inert() {
            return Ok(None);
        }
        let metrics = self.surface.metrics();
        let Some(mut request) =
            ManipulationAdapter::open_request(&self.collection, element, Point::ZERO, metrics)?
        else {
            tracing::warn!("Double click on unknown element {}", element);
            return Ok(None);
        };
        request.anchor = Point::new(
            offset.x - request.hotspot.width / 2.0,
            offset.y - request.hotspot.height / 2.0,
        );

        Ok(Some(self.session.open(
            &request,
            &self.collection,
            &self.element_fields,
            &mut self.renderer,
            &mut self.host,
        )))
    }

    /// Processes image changes and deferred dialog openings, in that
    /// order. Returns the number of items handled.
    ///
    /// A deferred opening replaces any dialog open at that point; its
    /// draft is discarded, as when a new hotspot is placed while editing.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;

        let events: Vec<ImageEvent> = self.inbox.lock().drain(..).collect();
        for event in events {
            match event {
                ImageEvent::Changed { image } => self.on_image_changed(image),
            }
            handled += 1;
        }

        while let Some(element) = self.deferred.pop_front() {
            handled += 1;
            let metrics = self.surface.metrics();
            let request = match ManipulationAdapter::open_request(
                &self.collection,
                element,
                Point::ZERO,
                metrics,
            ) {
                Ok(Some(request)) => request,
                Ok(None) => {
                    tracing::debug!("Dropping deferred dialog for detached element {}", element);
                    continue;
                }
                Err(err) => {
                    tracing::warn!("Cannot open deferred dialog for {}: {}", element, err);
                    continue;
                }
            };
            self.session.close(CloseReason::Replaced, &mut self.host);
            self.session.open(
                &request,
                &self.collection,
                &self.element_fields,
                &mut self.renderer,
                &mut self.host,
            );
        }

        handled
    }

    /// Dialog "done" button.
    ///
    /// Until the next [`pump`](HotspotEditor::pump) this commits into the
    /// hotspots of the previous image, even after the image changed.
    pub fn done(&mut self) -> CommitOutcome {
        self.session.commit(&mut self.collection, &mut self.host)
    }

    /// Dialog "remove" button.
    pub fn remove(&mut self) -> Result<Option<HotspotRecord>> {
        let removed = self
            .session
            .remove(&mut self.collection, &mut self.surface, &mut self.host)?;
        Ok(removed)
    }

    /// Called when the editor's tab becomes active.
    pub fn set_active(&mut self) {
        self.notice = match self.image_field.image() {
            Some(image) => {
                tracing::debug!("Editing over {} ({}x{})", image.path, image.width, image.height);
                None
            }
            None => {
                tracing::info!("No background image chosen");
                Some(EditorNotice::NoBackgroundImage)
            }
        };
    }

    /// Called when the editor's tab is switched away from.
    pub fn deactivate(&mut self) {
        self.session.close(CloseReason::Deactivated, &mut self.host);
    }

    /// Discards any open draft and stops listening to the image field.
    pub fn shutdown(&mut self) {
        self.session.close(CloseReason::EditorClosed, &mut self.host);
        self.deferred.clear();
        if let Some(id) = self.subscription.take() {
            self.image_field.unsubscribe(id);
        }
    }

    fn on_image_changed(&mut self, image: Option<ImageParams>) {
        self.session.close(CloseReason::ImageChanged, &mut self.host);
        self.collection.clear(&mut self.surface);
        self.adapter.cancel_placement();
        self.deferred.clear();
        self.notice = image.is_none().then_some(EditorNotice::NoBackgroundImage);
        tracing::info!("Background image changed, hotspots cleared");
    }

    /// Current question parameters, hotspots included.
    pub fn params(&self) -> QuestionParams {
        let mut params = self.params.clone();
        params.hotspot = self.collection.records().to_vec();
        params
    }

    pub fn to_json(&self) -> DocumentResult<String> {
        self.params().to_json_pretty()
    }

    /// Widget validation hook; hotspot settings are validated by the
    /// dialog, so the question itself is always valid.
    pub fn validate(&self) -> bool {
        true
    }

    pub fn task_description(&self) -> &str {
        &self.params.task_description
    }

    pub fn set_task_description(&mut self, text: impl Into<String>) {
        self.params.task_description = text.into();
    }

    pub fn none_selected_feedback(&self) -> &str {
        &self.params.none_selected_feedback
    }

    pub fn set_none_selected_feedback(&mut self, text: impl Into<String>) {
        self.params.none_selected_feedback = text.into();
    }

    pub fn notice(&self) -> Option<EditorNotice> {
        self.notice
    }

    pub fn is_inert(&self) -> bool {
        self.notice == Some(EditorNotice::NoBackgroundImage)
    }

    pub fn collection(&self) -> &HotspotCollection {
        &self.collection
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

impl<S, R, H> Drop for HotspotEditor<S, R, H>
where
    S: ManipulationSurface,
    R: SubformRenderer,
    H: DialogHost,
{
    fn drop(&mut self) {
        self.shutdown();
    }
}
