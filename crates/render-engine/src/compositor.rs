//! Layer compositor: background skin under the rendered overlay content.
//!
//! The content layer defines the output size. The background is stretched to
//! cover it and the content is alpha-blended on top.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::export::ExportError;

/// Composite `content` over `background`, returning an image the size of
/// `content`.
pub fn composite(background: &DynamicImage, content: &RgbaImage) -> Result<RgbaImage, ExportError> {
    let (width, height) = content.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCanvas);
    }

    let mut canvas = imageops::resize(&background.to_rgba8(), width, height, FilterType::Triangle);
    imageops::overlay(&mut canvas, content, 0, 0);
    Ok(canvas)
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .map_err(ExportError::Encode)?;
    Ok(bytes.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_background_shows_through_transparent_content() {
        let background = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255])));
        let mut content = RgbaImage::from_pixel(8, 6, Rgba([0, 0, 0, 0]));
        content.put_pixel(1, 1, Rgba([255, 0, 0, 255]));

        let out = composite(&background, &content).unwrap();

        assert_eq!(out.dimensions(), (8, 6));
        assert_eq!(out.get_pixel(1, 1), &Rgba([255, 0, 0, 255]));
        let Rgba([r, g, b, a]) = *out.get_pixel(5, 4);
        assert_eq!((r, g), (0, 0));
        assert!(b >= 254 && a >= 254, "background should show through, got {b}/{a}");
    }

    #[test]
    fn test_empty_content_is_rejected() {
        let background = DynamicImage::ImageRgba8(RgbaImage::new(2, 2));
        let content = RgbaImage::new(0, 0);
        assert!(matches!(
            composite(&background, &content),
            Err(ExportError::EmptyCanvas)
        ));
    }

    #[test]
    fn test_png_signature() {
        let bytes = encode_png(&RgbaImage::new(3, 3)).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}
