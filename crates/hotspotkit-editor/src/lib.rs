//! # HotspotKit Editor
//!
//! Interaction model of the image hotspot question editor: authors drop
//! rectangles and circles on a background image, drag and resize them,
//! and edit each hotspot's settings in a dialog placed next to, below or
//! on top of the image.
//!
//! ## Architecture
//!
//! ```text
//! HotspotEditor (public API)
//!   ├── HotspotCollection   (records + element bindings, dense indices)
//!   ├── ManipulationAdapter (pixel gestures -> percentage geometry)
//!   ├── EditSession         (Closed | Open(index) state machine)
//!   │     └── place_dialog  (side / underneath / inside)
//!   └── ImageField          (background image change notifications)
//! ```
//!
//! The gesture library, the form engine and the dialog's drawing are
//! external and reached through the [`ManipulationSurface`],
//! [`SubformRenderer`] and [`DialogHost`] traits. The [`headless`]
//! module provides in-memory implementations.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut editor = HotspotEditor::new(saved, schema, collaborators, EditorOptions::default());
//! editor.set_active();
//! editor.create_hotspot(FigureKind::Circle)?;
//! editor.handle_surface_event(SurfaceEvent::ReleaseAfterCreate { element })?;
//! editor.pump(); // opens the dialog
//! editor.done();
//! let json = editor.to_json()?;
//! ```

pub mod collection;
pub mod dialog;
pub mod editor;
pub mod headless;
pub mod image_field;
pub mod manipulation;
pub mod placement;
pub mod session;
pub mod subform;
pub mod surface;

pub use collection::{ElementBinding, HotspotCollection};
pub use dialog::DialogHost;
pub use editor::{Collaborators, EditorNotice, EditorOptions, HotspotEditor};
pub use image_field::{ImageEvent, ImageField, ImageParams, SubscriptionId};
pub use manipulation::{ManipulationAdapter, OpenRequest};
pub use placement::{place_dialog, DialogPlacement, PlacementInput, PlacementMode};
pub use session::{CloseReason, CommitOutcome, EditSession, OpenOutcome, OpenSession};
pub use subform::{FieldCheck, FieldSchema, Subform, SubformRenderer};
pub use surface::{ElementHandle, ManipulationSurface, SurfaceEvent, SurfaceMetrics};
