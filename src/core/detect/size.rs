use image::{GenericImageView, Pixel};
use tracing::debug;

use super::bounds::detect_tile_bounds;
use crate::core::grid::grid_centers;
use crate::core::params::{DetectParams, GridLayout};
use crate::types::TileSpec;

/// Most frequent value; ties go to the value seen first.
fn mode(values: impl IntoIterator<Item = u32>) -> Option<u32> {
    let mut counts: Vec<(u32, usize)> = Vec::new();
    for v in values {
        match counts.iter_mut().find(|(seen, _)| *seen == v) {
            Some((_, n)) => *n += 1,
            None => counts.push((v, 1)),
        }
    }

    let mut best: Option<(u32, usize)> = None;
    for (v, n) in counts {
        if best.is_none_or(|(_, top)| n > top) {
            best = Some((v, n));
        }
    }
    best.map(|(v, _)| v)
}

/// Most common width and most common height, each taken independently.
pub fn mode_size(sizes: &[(u32, u32)]) -> Option<(u32, u32)> {
    let width = mode(sizes.iter().map(|s| s.0))?;
    let height = mode(sizes.iter().map(|s| s.1))?;
    Some((width, height))
}

/// Estimate the common tile size by detecting the first
/// `params.size_samples` tiles. `None` when none of them could be detected.
pub fn estimate_tile_size<I>(
    img: &I,
    tiles: &[TileSpec],
    layout: &GridLayout,
    params: &DetectParams,
) -> Option<(u32, u32)>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (w, h) = img.dimensions();
    let centers = grid_centers(w, h, layout);

    let sizes: Vec<(u32, u32)> = tiles
        .iter()
        .take(params.size_samples)
        .filter_map(|tile| {
            let center = *centers.get(tile.cell_index(layout.cols))?;
            let bounds = detect_tile_bounds(img, center, params)?;
            debug!("  {}: {}x{}", tile.name, bounds.width(), bounds.height());
            Some(bounds.size())
        })
        .collect();

    mode_size(&sizes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn majority_size_wins() {
        let sizes = [(50, 40), (51, 40), (50, 40), (50, 40), (48, 39), (50, 40)];
        assert_eq!(mode_size(&sizes), Some((50, 40)));

        let shuffled = [(48, 39), (51, 41), (50, 40), (50, 40), (50, 40), (50, 40)];
        assert_eq!(mode_size(&shuffled), Some((50, 40)));
    }

    #[test]
    fn width_and_height_are_independent() {
        // no pair repeats, but 60 and 30 do
        let sizes = [(60, 31), (60, 30), (61, 30), (62, 32)];
        assert_eq!(mode_size(&sizes), Some((60, 30)));
    }

    #[test]
    fn ties_keep_first_seen() {
        assert_eq!(mode_size(&[(10, 20), (11, 21)]), Some((10, 20)));
        assert_eq!(mode_size(&[(11, 21), (10, 20), (10, 20), (11, 21)]), Some((11, 21)));
    }

    #[test]
    fn empty_batch_has_no_common_size() {
        assert_eq!(mode_size(&[]), None);

        let blank = RgbImage::from_pixel(400, 300, Rgb([255, 255, 255]));
        let tiles = [TileSpec::new("a", 0, 0), TileSpec::new("b", 1, 0)];
        let size = estimate_tile_size(&blank, &tiles, &GridLayout::default(), &DetectParams::default());
        assert_eq!(size, None);
    }

    #[test]
    fn estimates_from_grid_tiles() {
        let layout = GridLayout::default();
        let mut img = RgbImage::from_pixel(400, 300, Rgb([255, 255, 255]));
        // 64x55 tiles around every seed of a 400x300 grid
        for (x, y) in grid_centers(400, 300, &layout) {
            for py in y - 20..y + 35 {
                for px in x - 32..x + 32 {
                    img.put_pixel(px, py, Rgb([30, 90, 30]));
                }
            }
        }

        let tiles = [
            TileSpec::new("a", 0, 0),
            TileSpec::new("b", 1, 0),
            TileSpec::new("c", 2, 0),
            TileSpec::new("d", 3, 0),
            TileSpec::new("e", 0, 1),
            TileSpec::new("f", 1, 1),
            TileSpec::new("g", 2, 1),
        ];
        let size = estimate_tile_size(&img, &tiles, &layout, &DetectParams::default());
        assert_eq!(size, Some((64, 55)));
    }
}
