//! # HotspotKit Core
//!
//! Core types for the hotspot question editor: the percentage-space
//! geometry model, hotspot records and the persisted question layout,
//! plus the error taxonomy shared by the other crates.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod hotspot;

pub use error::{
    CollectionError, CollectionResult, DocumentError, DocumentResult, GeometryError,
    GeometryResult, HotspotError, Result,
};

pub use geometry::{
    clamp_percent, clamp_position, default_size, from_pixels, point_from_pixels,
    size_from_units, to_pixels, PercentPoint, PercentRect, PercentSize, PixelRect, Point, Size,
};

pub use hotspot::{FigureKind, HotspotRecord, HotspotSettings, QuestionParams};
