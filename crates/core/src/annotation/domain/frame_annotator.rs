use crate::detection::domain::detection::Detection;
use crate::shared::frame::Frame;

/// Domain interface for drawing detections onto a frame.
///
/// Implementations modify the frame in-place.
pub trait FrameAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        detections: &[Detection],
    ) -> Result<(), Box<dyn std::error::Error>>;
}
