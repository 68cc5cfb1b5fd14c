use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::Result;
use crate::types::TileBounds;

/// Crop `bounds` out of `img` and write it as `<out_dir>/<name>.png`.
/// The crop keeps the source color type.
pub fn write_tile(img: &DynamicImage, bounds: &TileBounds, out_dir: &Path, name: &str) -> Result<PathBuf> {
    let path = out_dir.join(format!("{name}.png"));
    let tile = img.crop_imm(bounds.left, bounds.top, bounds.width(), bounds.height());
    tile.save_with_format(&path, ImageFormat::Png)?;
    Ok(path)
}

pub fn write_preview(preview: &RgbaImage, path: &Path) -> Result<()> {
    preview.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgb, RgbImage};

    #[test]
    fn writes_exact_crop() {
        let dir = tempfile::tempdir().unwrap();
        let src = RgbImage::from_fn(30, 20, |x, y| Rgb([x as u8, y as u8, 7]));
        let img = DynamicImage::ImageRgb8(src);

        let bounds = TileBounds { left: 5, top: 4, right: 17, bottom: 12 };
        let path = write_tile(&img, &bounds, dir.path(), "slate").unwrap();
        assert_eq!(path, dir.path().join("slate.png"));

        let out = image::open(&path).unwrap();
        assert_eq!(out.dimensions(), (12, 8));
        let out = out.to_rgb8();
        assert_eq!(*out.get_pixel(0, 0), Rgb([5, 4, 7]));
        assert_eq!(*out.get_pixel(11, 7), Rgb([16, 11, 7]));
    }
}
