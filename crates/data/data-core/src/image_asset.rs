//! Chart image decoding.

use std::path::Path;

use data_spi::{DataError, Result};
use image::{ImageError, RgbImage};

/// Decode a chart image to 8-bit RGB.
pub fn load_chart_image(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|e| match e {
        ImageError::IoError(io) => DataError::read_failed(path.display(), io),
        other => DataError::DecodeFailed {
            path: path.display().to_string(),
            reason: other.to_string(),
        },
    })?;
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "chart image decoded"
    );
    Ok(image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::io::Write;

    #[test]
    fn test_load_png() {
        let file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        RgbImage::from_pixel(4, 2, Rgb([200, 10, 10]))
            .save(file.path())
            .unwrap();

        let image = load_chart_image(file.path()).unwrap();
        assert_eq!(image.dimensions(), (4, 2));
        assert_eq!(image.get_pixel(3, 1), &Rgb([200, 10, 10]));
    }

    #[test]
    fn test_missing_image_is_read_error() {
        let err = load_chart_image(Path::new("/nonexistent/heatmat.png")).unwrap_err();
        assert!(matches!(err, DataError::ReadFailed { .. }));
    }

    #[test]
    fn test_corrupt_image_is_decode_error() {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(b"definitely not a png").unwrap();

        let err = load_chart_image(file.path()).unwrap_err();
        assert!(matches!(err, DataError::DecodeFailed { .. }));
    }
}
