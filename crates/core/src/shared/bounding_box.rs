use serde::Serialize;

/// Axis-aligned box in integer pixel coordinates, corners inclusive-exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl BoundingBox {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Rounds floating-point corners to the nearest pixel.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(
            x1.round() as i32,
            y1.round() as i32,
            x2.round() as i32,
            y2.round() as i32,
        )
    }

    pub fn width(&self) -> i32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> i32 {
        self.y2 - self.y1
    }

    /// A box is usable only when `x1 < x2` and `y1 < y2`.
    pub fn is_valid(&self) -> bool {
        self.x1 < self.x2 && self.y1 < self.y2
    }

    /// Clips the box to a `width` x `height` image.
    ///
    /// Returns `None` when nothing of the box remains visible.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<BoundingBox> {
        let w = width as i32;
        let h = height as i32;
        let clamped = BoundingBox::new(
            self.x1.clamp(0, w),
            self.y1.clamp(0, h),
            self.x2.clamp(0, w),
            self.y2.clamp(0, h),
        );
        clamped.is_valid().then_some(clamped)
    }
}
