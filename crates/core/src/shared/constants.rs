/// Weights file looked up relative to the working directory when no
/// explicit path is configured.
pub const DEFAULT_MODEL_PATH: &str = "skincond.onnx";

/// Accepted upload formats.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Minimum class score for a candidate box to be kept.
pub const DEFAULT_CONFIDENCE: f32 = 0.25;

/// IoU above which a lower-scoring box of the same class is suppressed.
pub const NMS_IOU_THRESHOLD: f64 = 0.45;

/// Label name used for class ids outside the known enumeration.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Upper bound on boxes kept per image after NMS.
pub const MAX_DETECTIONS: usize = 300;
