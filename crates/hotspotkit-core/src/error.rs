//! Error handling for HotspotKit
//!
//! Provides the error types shared by the geometry model, the hotspot
//! collection and the persisted question document:
//! - Geometry errors (pixel/percentage conversion)
//! - Collection errors (index bookkeeping)
//! - Document errors (loading and saving question parameters)
//!
//! User-data problems (a sub-form field failing validation) and the
//! missing background image are not errors; they are reported as values
//! by the editor.

use thiserror::Error;

/// Geometry error type
///
/// Raised by conversions between pixel space and percentage space.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The container has a zero (or otherwise unusable) dimension, so no
    /// percentage can be derived from it.
    #[error("Degenerate container: {width}x{height}")]
    DegenerateContainer {
        /// Container width in pixels.
        width: f64,
        /// Container height in pixels.
        height: f64,
    },
}

/// Collection error type
///
/// Represents violations of the dense index contract of the hotspot
/// collection. These indicate an internal inconsistency rather than a
/// user mistake.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// The index does not address an existing hotspot.
    #[error("Hotspot index out of range: {index} (count: {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of hotspots at the time of the request.
        count: usize,
    },
}

/// Document error type
///
/// Represents failures while reading or writing the persisted question
/// parameters.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The JSON could not be parsed or produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored hotspot violates the geometry invariants.
    #[error("Invalid hotspot {index}: {reason}")]
    InvalidRecord {
        /// Position of the offending hotspot in the saved list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },
}

/// Main error type for HotspotKit
#[derive(Error, Debug)]
pub enum HotspotError {
    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Collection error
    #[error(transparent)]
    Collection(#[from] CollectionError),

    /// Document error
    #[error(transparent)]
    Document(#[from] DocumentError),
}

/// Result type alias for HotspotKit operations.
pub type Result<T> = std::result::Result<T, HotspotError>;

/// Result type alias for geometry conversions.
pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

/// Result type alias for collection operations.
pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// Result type alias for document operations.
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;
