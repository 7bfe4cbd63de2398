use serde::Serialize;

use crate::shared::bounding_box::BoundingBox;

use super::skin_condition::class_name;

/// One box as emitted by a detector, before its class is named.
#[derive(Clone, Debug, PartialEq)]
pub struct RawDetection {
    pub class_id: i64,
    pub confidence: f32,
    pub bbox: BoundingBox,
}

/// A named detection, ready to be drawn and reported.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Detection {
    pub class_id: i64,
    pub class_name: String,
    pub confidence: f32,
    #[serde(rename = "box")]
    pub bbox: BoundingBox,
}

impl Detection {
    pub fn from_raw(raw: &RawDetection) -> Self {
        Self {
            class_id: raw.class_id,
            class_name: class_name(raw.class_id).to_string(),
            confidence: raw.confidence,
            bbox: raw.bbox,
        }
    }

    /// Overlay text, e.g. `acne (0.87)`.
    pub fn label(&self) -> String {
        format!("{} ({:.2})", self.class_name, self.confidence)
    }
}
