use serde::Serialize;

use crate::advice::domain::advice_table::{advice_for, ConditionAdvice};
use crate::detection::domain::detection::Detection;
use crate::detection::infrastructure::model_loader::ModelLoader;
use crate::imaging::infrastructure::image_decoder::decode_image;
use crate::shared::error::AnalysisError;
use crate::shared::frame::Frame;

use super::frame_processor::FrameProcessor;

/// Advice for one detected condition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConditionFinding {
    pub condition: String,
    #[serde(flatten)]
    pub advice: ConditionAdvice,
}

/// Everything the presentation layer shows for one upload.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    pub original: Frame,
    pub annotated: Frame,
    pub detections: Vec<Detection>,
    pub findings: Vec<ConditionFinding>,
    /// User-facing problems that did not stop processing.
    pub notices: Vec<String>,
}

/// Pixel-free view of a report for machine-readable output.
#[derive(Debug, Serialize)]
pub struct AnalysisSummary<'a> {
    pub width: u32,
    pub height: u32,
    pub detections: &'a [Detection],
    pub findings: &'a [ConditionFinding],
    pub notices: &'a [String],
}

impl AnalysisReport {
    pub fn summary(&self) -> AnalysisSummary<'_> {
        AnalysisSummary {
            width: self.original.width(),
            height: self.original.height(),
            detections: &self.detections,
            findings: &self.findings,
            notices: &self.notices,
        }
    }
}

/// Single-upload pipeline: decode → load model → detect/annotate → advice.
pub struct AnalyzeImageUseCase {
    loader: ModelLoader,
    processor: FrameProcessor,
}

impl AnalyzeImageUseCase {
    pub fn new(loader: ModelLoader, processor: FrameProcessor) -> Self {
        Self { loader, processor }
    }

    /// A missing weights file becomes a notice and an empty result; decode,
    /// load and inference failures are returned as errors.
    pub fn execute(&mut self, bytes: &[u8]) -> Result<AnalysisReport, AnalysisError> {
        let original = decode_image(bytes)?;
        let mut notices = Vec::new();

        let detector = match self.loader.load() {
            Ok(detector) => Some(detector),
            Err(e) if e.is_recoverable() => {
                notices.push(e.to_string());
                None
            }
            Err(e) => return Err(e),
        };

        let processed = self.processor.process(detector, original.clone())?;

        let findings = processed
            .conditions
            .iter()
            .map(|name| ConditionFinding {
                condition: name.clone(),
                advice: advice_for(name),
            })
            .collect();

        Ok(AnalysisReport {
            original,
            annotated: processed.annotated,
            detections: processed.detections,
            findings,
            notices,
        })
    }
}
