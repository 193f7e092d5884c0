//! Sub-form interface.
//!
//! The form engine that turns a field schema into controls is external.
//! The editor only needs to render a form for a hotspot's settings, ask
//! each field whether it is valid, read the edited draft back and tear
//! the form down again.

use hotspotkit_core::HotspotSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Field schema handed to the form engine, opaque to the editor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSchema(pub Value);

impl FieldSchema {
    pub fn new(value: Value) -> Self {
        Self(value)
    }
}

/// Result of validating one field of a sub-form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCheck {
    pub field: String,
    pub valid: bool,
}

impl FieldCheck {
    pub fn valid(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            valid: true,
        }
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            valid: false,
        }
    }
}

/// A rendered form bound to a mutable draft of hotspot settings.
pub trait Subform {
    /// Validates every field and reports each one. Implementations must
    /// visit all fields so that each can show its own message.
    fn validate(&mut self) -> Vec<FieldCheck>;

    /// The current draft.
    fn draft(&self) -> HotspotSettings;

    /// Removes the form's controls; the draft is discarded.
    fn remove_children(&mut self);
}

/// Factory for sub-forms.
pub trait SubformRenderer {
    fn render(&mut self, schema: &FieldSchema, initial: &HotspotSettings) -> Box<dyn Subform>;
}
