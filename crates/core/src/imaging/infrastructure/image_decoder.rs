use std::path::Path;

use image::ImageFormat;

use crate::shared::error::AnalysisError;
use crate::shared::frame::Frame;

const SUPPORTED_FORMATS: &[ImageFormat] = &[ImageFormat::Jpeg, ImageFormat::Png, ImageFormat::WebP];

/// Reads an upload fully into memory.
pub fn read_image_bytes(path: &Path) -> Result<Vec<u8>, AnalysisError> {
    std::fs::read(path).map_err(|source| AnalysisError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Decodes JPEG, PNG or WEBP bytes into an RGB frame.
///
/// Alpha is dropped and grayscale is expanded, so the frame is always RGB.
pub fn decode_image(bytes: &[u8]) -> Result<Frame, AnalysisError> {
    let format =
        image::guess_format(bytes).map_err(|e| AnalysisError::ImageDecode(e.to_string()))?;
    if !SUPPORTED_FORMATS.contains(&format) {
        return Err(AnalysisError::ImageDecode(format!(
            "unsupported image format {format:?}"
        )));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| AnalysisError::ImageDecode(e.to_string()))?;
    let frame = Frame::from_rgb_image(decoded.into_rgb8());
    log::debug!("Decoded {format:?} image {}x{}", frame.width(), frame.height());
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, RgbImage, Rgba};
    use std::io::Cursor;

    fn encode(img: &RgbImage, format: ImageFormat) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, format).unwrap();
        buf.into_inner()
    }

    fn solid(width: u32, height: u32) -> RgbImage {
        ImageBuffer::from_pixel(width, height, Rgb([50, 100, 200]))
    }

    #[test]
    fn test_decodes_png_as_rgb() {
        let frame = decode_image(&encode(&solid(100, 80), ImageFormat::Png)).unwrap();
        assert_eq!(frame.width(), 100);
        assert_eq!(frame.height(), 80);
        assert_eq!(frame.pixel(0, 0), [50, 100, 200]);
    }

    #[test]
    fn test_decodes_jpeg_dimensions() {
        let frame = decode_image(&encode(&solid(64, 48), ImageFormat::Jpeg)).unwrap();
        assert_eq!((frame.width(), frame.height()), (64, 48));
    }

    #[test]
    fn test_decodes_webp() {
        let frame = decode_image(&encode(&solid(32, 32), ImageFormat::WebP)).unwrap();
        assert_eq!((frame.width(), frame.height()), (32, 32));
        assert_eq!(frame.pixel(5, 5), [50, 100, 200]);
    }

    #[test]
    fn test_alpha_channel_is_dropped() {
        let rgba: ImageBuffer<Rgba<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(4, 4, Rgba([10, 20, 30, 128]));
        let mut buf = Cursor::new(Vec::new());
        rgba.write_to(&mut buf, ImageFormat::Png).unwrap();

        let frame = decode_image(&buf.into_inner()).unwrap();
        assert_eq!(frame.data().len(), 4 * 4 * 3);
        assert_eq!(frame.pixel(0, 0), [10, 20, 30]);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = decode_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, AnalysisError::ImageDecode(_)));
    }

    #[test]
    fn test_truncated_png_fails_to_decode() {
        let bytes = encode(&solid(64, 64), ImageFormat::Png);
        let err = decode_image(&bytes[..bytes.len() / 2]).unwrap_err();
        assert!(matches!(err, AnalysisError::ImageDecode(_)));
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let bytes = encode(&solid(8, 8), ImageFormat::Bmp);
        let err = decode_image(&bytes).unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let err = read_image_bytes(Path::new("/nonexistent/face.jpg")).unwrap_err();
        assert!(matches!(err, AnalysisError::Io { .. }));
    }
}
