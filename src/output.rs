//! PNG output helpers

use std::path::Path;

use image::imageops::{resize, FilterType};
use image::RgbaImage;
use thiserror::Error;

/// Error type for output operations.
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Image encoding error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file, creating parent directories as
/// needed.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    image.save(path)?;
    Ok(())
}

/// Scale an image by an integer factor using nearest-neighbor
/// interpolation, keeping pixel-art edges crisp.
pub fn scale_image(image: &RgbaImage, factor: u32) -> RgbaImage {
    if factor <= 1 {
        return image.clone();
    }
    resize(
        image,
        image.width() * factor,
        image.height() * factor,
        FilterType::Nearest,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_save_png_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/out.png");
        let image = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        save_png(&image, &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_scale_image_nearest() {
        let mut image = RgbaImage::new(2, 1);
        image.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 0, Rgba([0, 255, 0, 255]));
        let scaled = scale_image(&image, 2);
        assert_eq!(scaled.width(), 4);
        assert_eq!(scaled.height(), 2);
        assert_eq!(*scaled.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
        assert_eq!(*scaled.get_pixel(1, 1), Rgba([255, 0, 0, 255]));
        assert_eq!(*scaled.get_pixel(2, 0), Rgba([0, 255, 0, 255]));
    }

    #[test]
    fn test_scale_factor_one_is_identity() {
        let image = RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 4]));
        assert_eq!(scale_image(&image, 1), image);
    }
}
