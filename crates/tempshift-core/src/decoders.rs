//! Image decoding
//!
//! Delegates to the `image` crate. The format is sniffed from file content
//! first, so a PNG saved with a `.jpg` extension still decodes.

use std::path::Path;

use image::{ImageReader, RgbImage};

use crate::error::{ConvertError, Result};
use crate::transform::to_rgb;
use crate::verbose_println;

/// Input extensions offered by the CLI and accepted by `is_supported_extension`
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "bmp", "gif", "tif", "tiff", "webp", "tga", "pbm", "pgm", "ppm", "pnm",
    "qoi",
];

/// Check if a file extension is one of the advertised input formats
pub fn is_supported_extension(ext: &str) -> bool {
    let ext_lower = ext.to_lowercase();
    SUPPORTED_EXTENSIONS.contains(&ext_lower.as_str())
}

/// Decode an image file into 8-bit RGB
///
/// # Errors
/// Returns [`ConvertError::Decode`] if the path is empty, the file cannot be
/// opened, or its content is not a decodable image.
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();

    if path.as_os_str().is_empty() {
        return Err(ConvertError::invalid_input(path, "no input image given"));
    }

    let reader = ImageReader::open(path)
        .map_err(|e| ConvertError::invalid_input(path, format!("cannot open file: {}", e)))?
        .with_guessed_format()
        .map_err(|e| ConvertError::invalid_input(path, format!("cannot read file: {}", e)))?;

    let format = reader.format();
    let decoded = reader
        .decode()
        .map_err(|e| ConvertError::decode(path, format!("not a decodable image: {}", e), e))?;

    verbose_println!(
        "[tempshift] Decoded {} ({}x{}, {:?}, {:?})",
        path.display(),
        decoded.width(),
        decoded.height(),
        format,
        decoded.color()
    );

    Ok(to_rgb(decoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, Rgba, RgbaImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("JPEG"));
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("Tiff"));
        assert!(!is_supported_extension("dng"));
        assert!(!is_supported_extension("txt"));
    }

    #[test]
    fn test_decode_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.png");
        RgbImage::from_pixel(5, 4, Rgb([10, 20, 30]))
            .save(&path)
            .unwrap();

        let image = decode_image(&path).unwrap();

        assert_eq!(image.dimensions(), (5, 4));
        assert!(image.pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn test_decode_rgba_png_drops_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");
        RgbaImage::from_pixel(2, 2, Rgba([255, 128, 0, 10]))
            .save(&path)
            .unwrap();

        let image = decode_image(&path).unwrap();

        assert!(image.pixels().all(|p| p.0 == [255, 128, 0]));
    }

    #[test]
    fn test_decode_sniffs_content_over_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("actually_png.jpg");
        RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let image = decode_image(&path).unwrap();
        assert_eq!(image.get_pixel(1, 1).0, [1, 2, 3]);
    }

    #[test]
    fn test_decode_empty_path() {
        let err = decode_image("").unwrap_err();
        assert_eq!(err.kind(), "decode");
        assert!(err.to_string().contains("no input image"));
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempdir().unwrap();
        let err = decode_image(dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_decode_garbage_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, b"definitely not an image").unwrap();

        let err = decode_image(&path).unwrap_err();
        assert!(matches!(err, ConvertError::Decode { .. }));
    }

    #[test]
    fn test_decode_error_names_the_cause() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("truncated.png");
        fs::write(&path, b"\x89PNG\r\n\x1a\n").unwrap();

        let err = decode_image(&path).unwrap_err();
        let cause = std::error::Error::source(&err).unwrap().to_string();
        let message = err.to_string();

        assert!(message.contains("not a decodable image: "));
        assert!(message.contains(&cause), "{:?} lacks {:?}", message, cause);
    }
}
