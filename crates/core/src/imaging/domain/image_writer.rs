use std::path::Path;

use crate::shared::frame::Frame;

/// Writes a single frame to an image file.
pub trait ImageWriter {
    /// Encodes `frame` in the format implied by the path's extension.
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>>;
}
