/// Multi-class YOLO skin condition detector using ONNX Runtime via `ort`.
///
/// Handles letterbox preprocessing, inference, per-class NMS and mapping of
/// boxes back into source pixel coordinates.
use std::path::Path;

use crate::detection::domain::condition_detector::ConditionDetector;
use crate::detection::domain::detection::RawDetection;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::{MAX_DETECTIONS, NMS_IOU_THRESHOLD};
use crate::shared::frame::Frame;

use super::execution_provider::preferred_execution_providers;

/// Fallback YOLO model input resolution when the model doesn't specify dimensions.
const DEFAULT_INPUT_SIZE: u32 = 640;

/// Letterbox padding value (YOLO convention).
const PAD_VALUE: f32 = 114.0 / 255.0;

/// Values per candidate before the class scores: cx, cy, w, h.
const BOX_VALUES: usize = 4;

/// YOLO detector backed by an ONNX Runtime session.
pub struct OnnxYoloDetector {
    session: ort::session::Session,
    confidence: f32,
    input_size: u32,
}

impl OnnxYoloDetector {
    /// Load a YOLO ONNX model exported from the skin condition weights.
    ///
    /// The input resolution is read from the model's input shape (expecting NCHW).
    /// Falls back to 640 if the shape is dynamic or unreadable.
    pub fn new(model_path: &Path, confidence: f32) -> Result<Self, Box<dyn std::error::Error>> {
        let session = ort::session::Session::builder()?
            .with_execution_providers(preferred_execution_providers())?
            .commit_from_file(model_path)?;

        let input_size = session
            .inputs()
            .first()
            .and_then(|input| {
                if let ort::value::ValueType::Tensor { ref shape, .. } = input.dtype() {
                    if shape.len() >= 4 && shape[2] > 0 {
                        Some(shape[2] as u32)
                    } else {
                        None
                    }
                } else {
                    None
                }
            })
            .unwrap_or(DEFAULT_INPUT_SIZE);

        log::info!(
            "Loaded detector from {} (input {input_size}x{input_size})",
            model_path.display()
        );

        Ok(Self {
            session,
            confidence,
            input_size,
        })
    }
}

impl ConditionDetector for OnnxYoloDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<RawDetection>, Box<dyn std::error::Error>> {
        if frame.width() == 0 || frame.height() == 0 {
            return Ok(Vec::new());
        }

        let (input_tensor, transform) = letterbox(frame, self.input_size);

        let input_value = ort::value::Tensor::from_array(input_tensor)?;
        let outputs = self.session.run(ort::inputs![input_value])?;
        if outputs.len() == 0 {
            return Err("YOLO model produced no outputs".into());
        }
        let tensor = outputs[0].try_extract_array::<f32>()?;
        let shape = tensor.shape().to_vec();
        let data = tensor.as_slice().ok_or("Cannot get tensor slice")?;

        let mut candidates = parse_candidates(data, &shape, self.confidence)?;
        let kept = nms(&mut candidates, NMS_IOU_THRESHOLD, MAX_DETECTIONS);

        let detections: Vec<RawDetection> = kept
            .iter()
            .filter_map(|c| {
                let bbox = transform
                    .to_frame_box(c)
                    .clamp_to(frame.width(), frame.height())?;
                Some(RawDetection {
                    class_id: c.class_id as i64,
                    confidence: c.score,
                    bbox,
                })
            })
            .collect();

        log::debug!("{} candidates, {} after NMS", candidates.len(), detections.len());
        Ok(detections)
    }
}

// ---------------------------------------------------------------------------
// Preprocessing
// ---------------------------------------------------------------------------

/// Scale and padding applied by [`letterbox`].
#[derive(Clone, Copy, Debug)]
struct LetterboxTransform {
    scale: f64,
    pad_x: u32,
    pad_y: u32,
}

impl LetterboxTransform {
    fn to_frame_box(&self, c: &Candidate) -> BoundingBox {
        let px = self.pad_x as f64;
        let py = self.pad_y as f64;
        BoundingBox::from_corners(
            (c.x1 - px) / self.scale,
            (c.y1 - py) / self.scale,
            (c.x2 - px) / self.scale,
            (c.y2 - py) / self.scale,
        )
    }
}

/// Letterbox-resize a frame to `target_size` x `target_size` as NCHW float32.
fn letterbox(frame: &Frame, target_size: u32) -> (ndarray::Array4<f32>, LetterboxTransform) {
    let fw = frame.width() as f64;
    let fh = frame.height() as f64;
    let target = target_size as f64;

    let scale = (target / fw).min(target / fh);
    let new_w = ((fw * scale).round() as u32).min(target_size);
    let new_h = ((fh * scale).round() as u32).min(target_size);
    let pad_x = (target_size - new_w) / 2;
    let pad_y = (target_size - new_h) / 2;

    let mut tensor = ndarray::Array4::<f32>::from_elem(
        (1, 3, target_size as usize, target_size as usize),
        PAD_VALUE,
    );

    let src = frame.as_ndarray();
    let src_h = frame.height() as usize;
    let src_w = frame.width() as usize;

    // Nearest-neighbor resize into the padded region
    for y in 0..new_h as usize {
        let src_y = ((y as f64 / scale) as usize).min(src_h - 1);
        for x in 0..new_w as usize {
            let src_x = ((x as f64 / scale) as usize).min(src_w - 1);
            let ty = pad_y as usize + y;
            let tx = pad_x as usize + x;
            for c in 0..3 {
                tensor[[0, c, ty, tx]] = src[[src_y, src_x, c]] as f32 / 255.0;
            }
        }
    }

    (
        tensor,
        LetterboxTransform {
            scale,
            pad_x,
            pad_y,
        },
    )
}

// ---------------------------------------------------------------------------
// Output decoding
// ---------------------------------------------------------------------------

/// A scored box in letterbox coordinates.
#[derive(Clone, Debug)]
struct Candidate {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    class_id: usize,
    score: f32,
}

/// Decodes a `[1, 4 + classes, N]` (or transposed `[1, N, 4 + classes]`)
/// output into candidates scoring above `confidence`.
fn parse_candidates(
    data: &[f32],
    shape: &[usize],
    confidence: f32,
) -> Result<Vec<Candidate>, Box<dyn std::error::Error>> {
    if shape.len() != 3 {
        return Err(format!("Unexpected YOLO output shape: {shape:?}").into());
    }
    // Candidates always outnumber features, which tells the layouts apart.
    let transposed = shape[1] < shape[2];
    let (num_dets, num_feats) = if transposed {
        (shape[2], shape[1])
    } else {
        (shape[1], shape[2])
    };
    if num_feats <= BOX_VALUES {
        return Err(format!("YOLO output has no class scores: {shape:?}").into());
    }
    if data.len() < num_dets * num_feats {
        return Err(format!(
            "YOLO output holds {} values, expected {}",
            data.len(),
            num_dets * num_feats
        )
        .into());
    }

    let value = |det: usize, feat: usize| -> f32 {
        if transposed {
            data[feat * num_dets + det]
        } else {
            data[det * num_feats + feat]
        }
    };

    let mut candidates = Vec::new();
    for i in 0..num_dets {
        let (class_id, score) = (BOX_VALUES..num_feats)
            .map(|f| (f - BOX_VALUES, value(i, f)))
            .fold((0usize, f32::MIN), |best, cur| if cur.1 > best.1 { cur } else { best });
        if score <= confidence {
            continue;
        }

        let cx = value(i, 0) as f64;
        let cy = value(i, 1) as f64;
        let w = value(i, 2) as f64;
        let h = value(i, 3) as f64;
        candidates.push(Candidate {
            x1: cx - w / 2.0,
            y1: cy - h / 2.0,
            x2: cx + w / 2.0,
            y2: cy + h / 2.0,
            class_id,
            score,
        });
    }
    Ok(candidates)
}

// ---------------------------------------------------------------------------
// NMS
// ---------------------------------------------------------------------------

/// Greedy per-class NMS: sort by score descending, suppress same-class overlaps.
/// Stops once `max_det` boxes are kept.
fn nms(candidates: &mut [Candidate], iou_thresh: f64, max_det: usize) -> Vec<Candidate> {
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut keep = Vec::new();
    let mut suppressed = vec![false; candidates.len()];

    for i in 0..candidates.len() {
        if keep.len() == max_det {
            break;
        }
        if suppressed[i] {
            continue;
        }
        keep.push(candidates[i].clone());
        for j in (i + 1)..candidates.len() {
            if suppressed[j] || candidates[j].class_id != candidates[i].class_id {
                continue;
            }
            if bbox_iou(&candidates[i], &candidates[j]) > iou_thresh {
                suppressed[j] = true;
            }
        }
    }
    keep
}

fn bbox_iou(a: &Candidate, b: &Candidate) -> f64 {
    let x1 = a.x1.max(b.x1);
    let y1 = a.y1.max(b.y1);
    let x2 = a.x2.min(b.x2);
    let y2 = a.y2.min(b.y2);

    let inter = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);
    if inter == 0.0 {
        return 0.0;
    }
    let area_a = (a.x2 - a.x1) * (a.y2 - a.y1);
    let area_b = (b.x2 - b.x1) * (b.y2 - b.y1);
    inter / (area_a + area_b - inter)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
