use std::path::{Path, PathBuf};

use crate::detection::domain::condition_detector::ConditionDetector;
use crate::shared::error::AnalysisError;

use super::onnx_yolo_detector::OnnxYoloDetector;

/// Builds a detector from a weights file that is known to exist.
pub type DetectorFactory =
    Box<dyn Fn(&Path) -> Result<Box<dyn ConditionDetector>, Box<dyn std::error::Error>>>;

/// Lazily loads one detector and keeps it for the loader's lifetime.
///
/// Owned by the caller instead of living in a global. A missing weights
/// file fails only the current call: nothing is cached, so the next call
/// looks for the file again.
pub struct ModelLoader {
    model_path: PathBuf,
    factory: DetectorFactory,
    detector: Option<Box<dyn ConditionDetector>>,
}

impl ModelLoader {
    pub fn new(model_path: impl Into<PathBuf>, factory: DetectorFactory) -> Self {
        Self {
            model_path: model_path.into(),
            factory,
            detector: None,
        }
    }

    /// Loader backed by [`OnnxYoloDetector`].
    pub fn onnx(model_path: impl Into<PathBuf>, confidence: f32) -> Self {
        Self::new(
            model_path,
            Box::new(move |path| {
                let detector = OnnxYoloDetector::new(path, confidence)?;
                Ok(Box::new(detector) as Box<dyn ConditionDetector>)
            }),
        )
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn is_loaded(&self) -> bool {
        self.detector.is_some()
    }

    /// Returns the cached detector, building it on first use.
    pub fn load(&mut self) -> Result<&mut dyn ConditionDetector, AnalysisError> {
        let detector = match self.detector.take() {
            Some(detector) => detector,
            None => {
                if !self.model_path.is_file() {
                    log::debug!("Model file not found: {}", self.model_path.display());
                    return Err(AnalysisError::ModelFileMissing {
                        path: self.model_path.clone(),
                    });
                }
                log::info!("Loading model: {}", self.model_path.display());
                (self.factory)(&self.model_path)
                    .map_err(|e| AnalysisError::ModelLoad(e.to_string()))?
            }
        };
        Ok(self.detector.insert(detector).as_mut())
    }
}
