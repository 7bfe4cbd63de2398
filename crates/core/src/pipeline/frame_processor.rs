use std::collections::BTreeSet;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::condition_detector::ConditionDetector;
use crate::detection::domain::detection::Detection;
use crate::shared::error::AnalysisError;
use crate::shared::frame::Frame;

/// Output of one [`FrameProcessor::process`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct ProcessedFrame {
    pub annotated: Frame,
    pub detections: Vec<Detection>,
    /// Distinct resolved names, sorted.
    pub conditions: Vec<String>,
}

/// Runs detection on a frame, draws the results and collects the
/// distinct condition names.
pub struct FrameProcessor {
    annotator: Box<dyn FrameAnnotator>,
}

impl FrameProcessor {
    pub fn new(annotator: Box<dyn FrameAnnotator>) -> Self {
        Self { annotator }
    }

    /// Without a detector the frame comes back unchanged with no conditions.
    pub fn process(
        &self,
        detector: Option<&mut dyn ConditionDetector>,
        mut frame: Frame,
    ) -> Result<ProcessedFrame, AnalysisError> {
        let Some(detector) = detector else {
            return Ok(ProcessedFrame {
                annotated: frame,
                detections: Vec::new(),
                conditions: Vec::new(),
            });
        };

        let raw = detector
            .detect(&frame)
            .map_err(|e| AnalysisError::Inference(e.to_string()))?;

        let detections: Vec<Detection> = raw.iter().map(Detection::from_raw).collect();
        for d in &detections {
            log::debug!("Detected {} at {:?}", d.label(), d.bbox);
        }

        self.annotator
            .annotate(&mut frame, &detections)
            .map_err(|e| AnalysisError::Inference(format!("annotation failed: {e}")))?;

        let conditions: BTreeSet<String> =
            detections.iter().map(|d| d.class_name.clone()).collect();
        log::info!(
            "{} detections, {} distinct conditions",
            detections.len(),
            conditions.len()
        );

        Ok(ProcessedFrame {
            annotated: frame,
            detections,
            conditions: conditions.into_iter().collect(),
        })
    }
}
