use std::path::Path;

use crate::imaging::domain::image_writer::ImageWriter;
use crate::shared::frame::Frame;

/// Writes frames to disk using the `image` crate.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        frame.clone().into_rgb_image().save(path)?;
        log::debug!("Wrote {}x{} image to {}", frame.width(), frame.height(), path.display());
        Ok(())
    }
}
