use image::RgbImage;
use ndarray::ArrayView3;

/// Number of interleaved channels in a [`Frame`] (R, G, B).
pub const CHANNELS: usize = 3;

/// A decoded image: contiguous RGB bytes in row-major order.
///
/// Color order is fixed at the decode boundary, so detection and
/// annotation never have to care about the source format.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
        }
    }

    /// A frame filled with a single color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * CHANNELS)
            .collect();
        Self::new(data, width, height)
    }

    pub fn from_rgb_image(image: RgbImage) -> Self {
        let (width, height) = image.dimensions();
        Self::new(image.into_raw(), width, height)
    }

    /// Consumes the frame into an `image` buffer for drawing or encoding.
    pub fn into_rgb_image(self) -> RgbImage {
        let (width, height) = (self.width, self.height);
        // Length is checked in `new`, so this only fails on a broken invariant.
        RgbImage::from_raw(width, height, self.data)
            .unwrap_or_else(|| RgbImage::new(width, height))
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// `[height, width, 3]` view used by preprocessing.
    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(
            (self.height as usize, self.width as usize, CHANNELS),
            &self.data,
        )
        .expect("Frame data length must match dimensions")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2);
    }

    #[test]
    fn test_filled_repeats_color() {
        let frame = Frame::filled(3, 2, [10, 20, 30]);
        assert_eq!(frame.data().len(), 18);
        assert_eq!(frame.pixel(2, 1), [10, 20, 30]);
    }

    #[test]
    fn test_rgb_image_conversion_keeps_pixels() {
        let mut img = RgbImage::new(4, 3);
        img.put_pixel(3, 2, image::Rgb([1, 2, 3]));
        let frame = Frame::from_rgb_image(img);
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.pixel(3, 2), [1, 2, 3]);

        let back = frame.into_rgb_image();
        assert_eq!(back.get_pixel(3, 2).0, [1, 2, 3]);
    }

    #[test]
    fn test_as_ndarray_shape_and_access() {
        let mut data = vec![0u8; 24]; // 4 wide, 2 high
        data[(4 + 1) * 3] = 255; // row=1, col=1, R
        let frame = Frame::new(data, 4, 2);
        let arr = frame.as_ndarray();
        assert_eq!(arr.shape(), &[2, 4, 3]);
        assert_eq!(arr[[1, 1, 0]], 255);
        assert_eq!(arr[[1, 1, 1]], 0);
    }
}
