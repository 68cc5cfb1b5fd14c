use std::path::Path;

use image::DynamicImage;
use tracing::info;

use crate::error::{Error, Result};

/// Open a composite sheet. A path that does not exist is reported as
/// `Error::MissingSource` so callers can skip the sheet.
pub fn open_sheet(path: &Path) -> Result<DynamicImage> {
    if !path.is_file() {
        return Err(Error::MissingSource {
            path: path.to_path_buf(),
        });
    }

    let img = image::open(path)?;
    info!("  Image size: {}x{}", img.width(), img.height());
    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_sheet_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.png");
        match open_sheet(&path) {
            Err(Error::MissingSource { path: p }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn undecodable_sheet_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(open_sheet(&path), Err(Error::Image(_))));
    }
}
