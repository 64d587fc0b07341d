//! Image exporters
//!
//! Every converted image is written as a baseline JPEG.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;

use crate::error::{ConvertError, Result};

/// Quality used when none is configured
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Clamp a JPEG quality setting to the encoder's valid range
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(1, 100)
}

/// Export an RGB image as JPEG, replacing any existing file at `path`
///
/// # Errors
/// Returns [`ConvertError::Write`] if the file cannot be created, encoding
/// fails, or the final flush fails.
pub fn export_jpeg<P: AsRef<Path>>(image: &RgbImage, path: P, quality: u8) -> Result<()> {
    let path = path.as_ref();

    let file = File::create(path).map_err(|e| ConvertError::write(path, e))?;
    let mut writer = BufWriter::new(file);

    JpegEncoder::new_with_quality(&mut writer, clamp_quality(quality))
        .encode_image(image)
        .map_err(|e| ConvertError::write(path, e))?;

    writer.flush().map_err(|e| ConvertError::write(path, e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::fs;
    use tempfile::tempdir;

    fn channel_close(a: [u8; 3], b: [u8; 3], tolerance: u8) -> bool {
        a.iter().zip(b).all(|(x, y)| x.abs_diff(y) <= tolerance)
    }

    #[test]
    fn test_clamp_quality() {
        assert_eq!(clamp_quality(0), 1);
        assert_eq!(clamp_quality(75), 75);
        assert_eq!(clamp_quality(200), 100);
    }

    #[test]
    fn test_export_jpeg_success() {
        let image = RgbImage::from_pixel(10, 10, Rgb([255, 56, 0]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.jpg");

        let result = export_jpeg(&image, &path, DEFAULT_JPEG_QUALITY);

        assert!(result.is_ok(), "JPEG export should succeed: {:?}", result);
        let bytes = fs::read(&path).unwrap();
        // SOI marker
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_export_jpeg_flat_color_survives() {
        let image = RgbImage::from_pixel(16, 16, Rgb([120, 180, 220]));
        let dir = tempdir().unwrap();
        let path = dir.path().join("flat.jpg");

        export_jpeg(&image, &path, DEFAULT_JPEG_QUALITY).unwrap();
        let decoded = image::open(&path).unwrap().into_rgb8();

        assert_eq!(decoded.dimensions(), (16, 16));
        assert!(decoded
            .pixels()
            .all(|p| channel_close(p.0, [120, 180, 220], 3)));
    }

    #[test]
    fn test_export_jpeg_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("same.jpg");
        fs::write(&path, b"stale").unwrap();

        export_jpeg(&RgbImage::new(4, 4), &path, 80).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_ne!(bytes, b"stale");
        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_export_jpeg_invalid_path() {
        let image = RgbImage::new(2, 2);
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.jpg");

        let err = export_jpeg(&image, &path, 90).unwrap_err();

        assert_eq!(err.kind(), "write");
        assert!(err.to_string().contains("out.jpg"));
    }
}
