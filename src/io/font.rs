use std::path::Path;

use ab_glyph::FontVec;

use crate::error::{Error, Result};

/// Load a TrueType/OpenType font for preview labels.
pub fn load_font(path: &Path) -> Result<FontVec> {
    if !path.is_file() {
        return Err(Error::InvalidArgument {
            arg: "--font",
            value: path.display().to_string(),
        });
    }

    let data = std::fs::read(path)?;
    Ok(FontVec::try_from_vec(data)?)
}
