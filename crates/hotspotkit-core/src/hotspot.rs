//! Hotspot records and the persisted question parameters.
//!
//! The saved layout mirrors what the question player consumes:
//!
//! ```json
//! {
//!   "taskDescription": "",
//!   "hotspot": [
//!     {
//!       "userSettings": { "correct": false, "feedbackText": "" },
//!       "computedSettings": { "x": 50, "y": 50, "width": 10, "height": 20, "figure": "circle" }
//!     }
//!   ],
//!   "noneSelectedFeedback": ""
//! }
//! ```
//!
//! Keys this crate does not know about are carried through untouched so
//! that loading and saving an unedited question yields the same value.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::{DEFAULT_POSITION_X, DEFAULT_POSITION_Y};
use crate::error::{DocumentError, DocumentResult, GeometryResult};
use crate::geometry::{self, PercentPoint, PercentRect, PercentSize, Size};

/// Shape of a hotspot. Fixed when the hotspot is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    Rectangle,
    Circle,
}

impl FigureKind {
    /// Figures offered by the toolbar, in button order.
    pub const ALL: [FigureKind; 2] = [FigureKind::Circle, FigureKind::Rectangle];
}

impl std::fmt::Display for FigureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rectangle => write!(f, "rectangle"),
            Self::Circle => write!(f, "circle"),
        }
    }
}

/// Author-defined metadata of a hotspot.
///
/// Produced and validated by the sub-form engine; the editor only moves
/// it between the record and the draft.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotSettings {
    /// Whether selecting this hotspot is a correct answer.
    #[serde(default)]
    pub correct: bool,
    /// Feedback shown when the hotspot is selected.
    #[serde(default)]
    pub feedback_text: String,
    /// Any further fields the form schema defines.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl HotspotSettings {
    pub fn new(correct: bool, feedback_text: impl Into<String>) -> Self {
        Self {
            correct,
            feedback_text: feedback_text.into(),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ComputedSettings {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    figure: FigureKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecordWire {
    user_settings: HotspotSettings,
    computed_settings: ComputedSettings,
}

/// A single hotspot: shape, percentage-space geometry and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecordWire", into = "RecordWire")]
pub struct HotspotRecord {
    figure: FigureKind,
    position: PercentPoint,
    size: PercentSize,
    metadata: HotspotSettings,
}

impl From<RecordWire> for HotspotRecord {
    fn from(wire: RecordWire) -> Self {
        let c = wire.computed_settings;
        Self {
            figure: c.figure,
            position: PercentPoint::new(c.x, c.y),
            size: PercentSize::new(c.width, c.height),
            metadata: wire.user_settings,
        }
    }
}

impl From<HotspotRecord> for RecordWire {
    fn from(record: HotspotRecord) -> Self {
        Self {
            user_settings: record.metadata,
            computed_settings: ComputedSettings {
                x: record.position.x,
                y: record.position.y,
                width: record.size.width,
                height: record.size.height,
                figure: record.figure,
            },
        }
    }
}

impl HotspotRecord {
    /// Creates a record, clamping the position into percentage space.
    pub fn new(
        figure: FigureKind,
        position: PercentPoint,
        size: PercentSize,
        metadata: HotspotSettings,
    ) -> Self {
        Self {
            figure,
            position: geometry::clamp_position(position.x, position.y),
            size,
            metadata,
        }
    }

    /// Creates the record a toolbar button pushes: centred at 50%/50%,
    /// sized to `footprint_px` square pixels of the current container,
    /// not correct and without feedback.
    pub fn new_default(
        figure: FigureKind,
        container: Size,
        footprint_px: f64,
    ) -> GeometryResult<Self> {
        let size = geometry::default_size(footprint_px, container)?;
        Ok(Self::new(
            figure,
            PercentPoint::new(DEFAULT_POSITION_X, DEFAULT_POSITION_Y),
            size,
            HotspotSettings::default(),
        ))
    }

    pub fn figure(&self) -> FigureKind {
        self.figure
    }

    pub fn position(&self) -> PercentPoint {
        self.position
    }

    pub fn size(&self) -> PercentSize {
        self.size
    }

    pub fn geometry(&self) -> PercentRect {
        PercentRect::new(self.position, self.size)
    }

    pub fn metadata(&self) -> &HotspotSettings {
        &self.metadata
    }

    /// Moves the hotspot; the position is clamped into `[0, 100]`.
    pub fn set_position(&mut self, position: PercentPoint) {
        self.position = geometry::clamp_position(position.x, position.y);
    }

    /// Resizes the hotspot. Non-positive sizes are refused and the
    /// previous size is kept; returns whether the size was applied.
    pub fn set_size(&mut self, size: PercentSize) -> bool {
        if !size.is_positive() {
            return false;
        }
        self.size = size;
        true
    }

    pub fn set_metadata(&mut self, metadata: HotspotSettings) {
        self.metadata = metadata;
    }

    /// Checks the geometry invariants of a record read from storage.
    pub fn check(&self) -> std::result::Result<(), String> {
        if !self.position.is_in_range() {
            return Err(format!(
                "position ({}, {}) is outside 0..=100",
                self.position.x, self.position.y
            ));
        }
        if !self.size.is_positive() {
            return Err(format!(
                "size {}x{} must be positive",
                self.size.width, self.size.height
            ));
        }
        Ok(())
    }
}

/// The complete question parameters edited by the hotspot editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionParams {
    #[serde(default)]
    pub task_description: String,
    #[serde(default)]
    pub hotspot: Vec<HotspotRecord>,
    #[serde(default)]
    pub none_selected_feedback: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl QuestionParams {
    /// Parses and validates saved parameters.
    pub fn from_json(json: &str) -> DocumentResult<Self> {
        let params: QuestionParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Parses and validates saved parameters from a JSON value.
    pub fn from_value(value: Value) -> DocumentResult<Self> {
        let params: QuestionParams = serde_json::from_value(value)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks every hotspot against the geometry invariants.
    pub fn validate(&self) -> DocumentResult<()> {
        for (index, record) in self.hotspot.iter().enumerate() {
            record.check().map_err(|reason| {
                tracing::warn!("Rejecting saved hotspot {}: {}", index, reason);
                DocumentError::InvalidRecord { index, reason }
            })?;
        }
        Ok(())
    }

    pub fn to_value(&self) -> DocumentResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_pretty(&self) -> DocumentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
