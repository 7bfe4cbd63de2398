use crate::shared::frame::Frame;

use super::detection::RawDetection;

/// Domain interface for skin condition detection.
///
/// `&mut self` because ONNX sessions need exclusive access to run.
pub trait ConditionDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<RawDetection>, Box<dyn std::error::Error>>;
}
