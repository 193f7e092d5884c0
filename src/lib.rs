//! # HotspotKit
//!
//! Editor model for image hotspot questions. Authors place rectangles and
//! circles over a background image, move and resize them, and attach a
//! "correct" flag and feedback text to each one through a dialog.
//!
//! ## Architecture
//!
//! HotspotKit is organized as a workspace with multiple crates:
//!
//! 1. **hotspotkit-core** - Geometry in percentage space, hotspot records, persisted layout
//! 2. **hotspotkit-editor** - Collection, gesture adapter, dialog placement, edit session
//! 3. **hotspotkit-settings** - Configuration files and validation
//! 4. **hotspotkit** - Logging setup and the command line tool
//!
//! The editor talks to its gesture surface, form engine and dialog host
//! through traits, so the same model drives a UI or a headless batch run.

pub use hotspotkit_core::{
    FigureKind, HotspotError, HotspotRecord, HotspotSettings, PercentPoint, PercentRect,
    PercentSize, QuestionParams, Result,
};
pub use hotspotkit_editor::{
    CloseReason, Collaborators, CommitOutcome, EditSession, EditorNotice, EditorOptions,
    HotspotCollection, HotspotEditor, ImageField, ImageParams, OpenOutcome, PlacementMode,
    SurfaceEvent, SurfaceMetrics,
};
pub use hotspotkit_settings::{Config, EditorSettings, LoggingSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Editor options derived from the configuration file.
pub fn editor_options(settings: &EditorSettings) -> EditorOptions {
    EditorOptions {
        footprint_px: settings.default_footprint_px,
        initial_position: PercentPoint::new(settings.initial_x, settings.initial_y),
    }
}

/// Initialize logging from the logging settings
///
/// Sets up structured logging with:
/// - Output on stderr, pretty or JSON lines
/// - RUST_LOG environment variable support, falling back to `settings.level`
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))?;

    if settings.json {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .json();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_thread_ids(true)
            .with_thread_names(true)
            .with_line_number(true)
            .pretty();

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
