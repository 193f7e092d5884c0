//! Edit session state machine.
//!
//! ```text
//!            open(index)
//!  Closed ----------------> Open(index)
//!    ^                          |
//!    |  commit (all valid)      |
//!    |  remove                  |
//!    |  close(reason)           |
//!    +--------------------------+
//! ```
//!
//! At most one session is open. Opening while open is ignored, not
//! queued. A commit with any invalid field keeps the session open and
//! leaves the hotspot's metadata untouched.

use hotspotkit_core::{CollectionResult, HotspotRecord, Size};

use crate::collection::HotspotCollection;
use crate::dialog::DialogHost;
use crate::manipulation::OpenRequest;
use crate::placement::{place_dialog, DialogPlacement, PlacementInput};
use crate::subform::{FieldSchema, Subform, SubformRenderer};
use crate::surface::ManipulationSurface;

/// Why a session was closed without committing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The background image was replaced; every hotspot is dropped too.
    ImageChanged,
    /// The editor tab was switched away from.
    Deactivated,
    /// The editor itself is being torn down.
    EditorClosed,
    /// A newly placed hotspot takes over the dialog.
    Replaced,
}

/// Result of [`EditSession::open`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpenOutcome {
    Opened(DialogPlacement),
    /// A dialog was already open; nothing changed.
    AlreadyOpen { index: usize },
    /// The requested hotspot does not exist.
    UnknownHotspot { index: usize },
}

/// Result of [`EditSession::commit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed { index: usize },
    /// At least one field failed validation; the dialog stays open.
    Rejected { index: usize, failed: Vec<String> },
    NotOpen,
}

/// State of an open dialog.
pub struct OpenSession {
    index: usize,
    form: Box<dyn Subform>,
    placement: DialogPlacement,
}

impl OpenSession {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn placement(&self) -> &DialogPlacement {
        &self.placement
    }

    /// The draft currently held by the form.
    pub fn draft(&self) -> hotspotkit_core::HotspotSettings {
        self.form.draft()
    }
}

impl std::fmt::Debug for OpenSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenSession")
            .field("index", &self.index)
            .field("placement", &self.placement)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Closed,
    Open(OpenSession),
}

/// The single editing dialog of the editor.
#[derive(Debug, Default)]
pub struct EditSession {
    state: SessionState,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, SessionState::Open(_))
    }

    /// Index of the hotspot being edited.
    pub fn open_index(&self) -> Option<usize> {
        self.current().map(OpenSession::index)
    }

    pub fn current(&self) -> Option<&OpenSession> {
        match &self.state {
            SessionState::Open(session) => Some(session),
            SessionState::Closed => None,
        }
    }

    /// Opens the dialog for `request.index`.
    ///
    /// Renders a form over a draft of the hotspot's settings, measures
    /// the dialog, places it and shows it.
    pub fn open<R, H>(
        &mut self,
        request: &OpenRequest,
        collection: &HotspotCollection,
        schema: &FieldSchema,
        renderer: &mut R,
        host: &mut H,
    ) -> OpenOutcome
    where
        R: SubformRenderer + ?Sized,
        H: DialogHost + ?Sized,
    {
        if let Some(index) = self.open_index() {
            tracing::debug!(
                "Dialog already open for hotspot {}, ignoring open for {}",
                index,
                request.index
            );
            return OpenOutcome::AlreadyOpen { index };
        }

        let Some(record) = collection.get(request.index) else {
            tracing::warn!("Cannot open dialog for missing hotspot {}", request.index);
            return OpenOutcome::UnknownHotspot {
                index: request.index,
            };
        };

        let form = renderer.render(schema, record.metadata());
        let dialog: Size = host.measure_dialog(form.as_ref());
        let placement = place_dialog(&PlacementInput {
            container_width: host.container_width(),
            image_region: host.image_region(),
            dialog,
            hotspot: request.hotspot,
            anchor: request.anchor,
        });
        host.show(&placement);

        tracing::info!(
            "Opened dialog for hotspot {} ({:?} at {}, {})",
            request.index,
            placement.mode,
            placement.x,
            placement.y
        );
        self.state = SessionState::Open(OpenSession {
            index: request.index,
            form,
            placement,
        });
        OpenOutcome::Opened(placement)
    }

    /// Validates every field and, when all pass, writes the draft back.
    pub fn commit<H>(&mut self, collection: &mut HotspotCollection, host: &mut H) -> CommitOutcome
    where
        H: DialogHost + ?Sized,
    {
        let SessionState::Open(session) = &mut self.state else {
            return CommitOutcome::NotOpen;
        };
        let index = session.index;

        let failed: Vec<String> = session
            .form
            .validate()
            .into_iter()
            .filter(|check| !check.valid)
            .map(|check| check.field)
            .collect();
        if !failed.is_empty() {
            tracing::debug!("Hotspot {} has invalid fields: {:?}", index, failed);
            return CommitOutcome::Rejected { index, failed };
        }

        let draft = session.form.draft();
        match collection.get_mut(index) {
            Some(record) => record.set_metadata(draft),
            None => tracing::error!("Hotspot {} vanished while its dialog was open", index),
        }

        self.finish(host);
        tracing::info!("Committed settings of hotspot {}", index);
        CommitOutcome::Committed { index }
    }

    /// Discards the draft and removes the hotspot being edited.
    ///
    /// Returns the removed record, or `None` when no dialog was open.
    pub fn remove<S, H>(
        &mut self,
        collection: &mut HotspotCollection,
        surface: &mut S,
        host: &mut H,
    ) -> CollectionResult<Option<HotspotRecord>>
    where
        S: ManipulationSurface + ?Sized,
        H: DialogHost + ?Sized,
    {
        let Some(index) = self.finish(host) else {
            return Ok(None);
        };
        let record = collection.remove_at(index, surface)?;
        tracing::info!("Removed hotspot {} from its dialog", index);
        Ok(Some(record))
    }

    /// Discards the draft without committing. Returns whether a dialog
    /// was open.
    pub fn close<H>(&mut self, reason: CloseReason, host: &mut H) -> bool
    where
        H: DialogHost + ?Sized,
    {
        match self.finish(host) {
            Some(index) => {
                tracing::debug!("Closed dialog for hotspot {} ({:?})", index, reason);
                true
            }
            None => false,
        }
    }

    fn finish<H>(&mut self, host: &mut H) -> Option<usize>
    where
        H: DialogHost + ?Sized,
    {
        match std::mem::take(&mut self.state) {
            SessionState::Open(mut session) => {
                session.form.remove_children();
                host.hide();
                Some(session.index)
            }
            SessionState::Closed => None,
        }
    }
}
