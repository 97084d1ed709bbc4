//! Exported schema document.
//!
//! Field names follow the schema import format of the downstream tool verbatim
//! (`canvasPosition`, `startLabel`, `endId`, ...), hence the camelCase renames.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::types::TargetType;

pub const DEFAULT_ICON: &str = "mdi-circle-outline";
pub const DEFAULT_COLOR: &str = "#aaa";

/// Position of a class on the target tool's canvas. Purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasPosition {
    pub x: i32,
    pub y: i32,
}

impl CanvasPosition {
    pub const X_RANGE: RangeInclusive<i32> = 100..=1200;
    pub const Y_RANGE: RangeInclusive<i32> = 50..=800;

    /// Pick a random position inside the canvas bounding box.
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self {
            x: rng.gen_range(Self::X_RANGE),
            y: rng.gen_range(Self::Y_RANGE),
        }
    }

    pub fn is_within_bounds(&self) -> bool {
        Self::X_RANGE.contains(&self.x) && Self::Y_RANGE.contains(&self.y)
    }
}

/// One property observed on instances of a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub label: String,
    #[serde(rename = "type")]
    pub data_type: TargetType,
}

/// One node label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub label: String,
    pub canvas_position: CanvasPosition,
    pub icon: String,
    pub color: String,
    pub uuid: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl Class {
    pub fn new(label: impl Into<String>, uuid: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            canvas_position: CanvasPosition::random(),
            icon: DEFAULT_ICON.to_string(),
            color: DEFAULT_COLOR.to_string(),
            uuid: uuid.into(),
            attributes: Vec::new(),
        }
    }
}

/// One relationship type between two classes.
///
/// `start`/`endId` hold class uuids; the labels are denormalized copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub uuid: String,
    pub start: String,
    pub start_label: String,
    pub end_label: String,
    pub end_id: String,
    pub label: String,
}

/// Root of the exported file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    pub classes: Vec<Class>,
    pub relationships: Vec<Relationship>,
}

impl SchemaDocument {
    pub fn attribute_count(&self) -> usize {
        self.classes.iter().map(|c| c.attributes.len()).sum()
    }

    pub fn class(&self, label: &str) -> Option<&Class> {
        self.classes.iter().find(|c| c.label == label)
    }

    pub fn relationship(&self, label: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.label == label)
    }
}
