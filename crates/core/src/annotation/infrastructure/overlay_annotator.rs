use ab_glyph::{FontRef, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::detection::Detection;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;

const FONT_DATA: &[u8] = include_bytes!("../../../assets/DejaVuSans.ttf");

const BOX_COLOR: Rgb<u8> = Rgb([255, 0, 255]);
const CORNER_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Corner stroke length in pixels, before clipping to the box size.
const CORNER_LENGTH: i32 = 30;
const CORNER_THICKNESS: i32 = 5;

const LABEL_FONT_SIZE: f32 = 24.0;
/// Gap between the label baseline and the top of the box.
const LABEL_OFFSET: i32 = 10;
/// Padding around the label text inside its background box.
const LABEL_PADDING: i32 = 6;

/// Draws each detection as a corner-accented rectangle with a filled
/// `name (confidence)` label above it.
pub struct OverlayAnnotator {
    font: FontRef<'static>,
    scale: PxScale,
}

impl OverlayAnnotator {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let font = FontRef::try_from_slice(FONT_DATA)?;
        Ok(Self {
            font,
            scale: PxScale::from(LABEL_FONT_SIZE),
        })
    }

    fn draw_box(&self, image: &mut RgbImage, bbox: &BoundingBox) {
        let (w, h) = (bbox.width(), bbox.height());
        draw_hollow_rect_mut(
            image,
            Rect::at(bbox.x1, bbox.y1).of_size(w as u32, h as u32),
            BOX_COLOR,
        );

        let len = CORNER_LENGTH.min(w / 3).min(h / 3).max(1);
        let t = CORNER_THICKNESS.min(len);
        let strokes = [
            // top-left
            (bbox.x1, bbox.y1, len, t),
            (bbox.x1, bbox.y1, t, len),
            // top-right
            (bbox.x2 - len, bbox.y1, len, t),
            (bbox.x2 - t, bbox.y1, t, len),
            // bottom-left
            (bbox.x1, bbox.y2 - t, len, t),
            (bbox.x1, bbox.y2 - len, t, len),
            // bottom-right
            (bbox.x2 - len, bbox.y2 - t, len, t),
            (bbox.x2 - t, bbox.y2 - len, t, len),
        ];
        for (x, y, sw, sh) in strokes {
            draw_filled_rect_mut(
                image,
                Rect::at(x, y).of_size(sw as u32, sh as u32),
                CORNER_COLOR,
            );
        }
    }

    fn draw_label(&self, image: &mut RgbImage, bbox: &BoundingBox, label: &str) {
        let (tw, th) = text_size(self.scale, &self.font, label);
        let (tw, th) = (tw as i32, th as i32);

        let x = bbox.x1;
        // Baseline sits LABEL_OFFSET above the box; push down if it would leave the image.
        let baseline = (bbox.y1 - LABEL_OFFSET).max(th + LABEL_PADDING);
        let text_top = baseline - th;

        let bg = Rect::at(x - LABEL_PADDING, text_top - LABEL_PADDING)
            .of_size((tw + 2 * LABEL_PADDING) as u32, (th + 2 * LABEL_PADDING) as u32);
        draw_filled_rect_mut(image, bg, BOX_COLOR);
        draw_text_mut(image, TEXT_COLOR, x, text_top, self.scale, &self.font, label);
    }
}

impl FrameAnnotator for OverlayAnnotator {
    fn annotate(
        &self,
        frame: &mut Frame,
        detections: &[Detection],
    ) -> Result<(), Box<dyn std::error::Error>> {
        if detections.is_empty() {
            return Ok(());
        }
        let (fw, fh) = (frame.width(), frame.height());
        let mut image = std::mem::take(frame).into_rgb_image();

        for detection in detections {
            let Some(bbox) = detection.bbox.clamp_to(fw, fh) else {
                log::debug!("Skipping off-image box for {}", detection.class_name);
                continue;
            };
            self.draw_box(&mut image, &bbox);
            self.draw_label(&mut image, &bbox, &detection.label());
        }

        *frame = Frame::from_rgb_image(image);
        Ok(())
    }
}
