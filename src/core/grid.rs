use tracing::debug;

use crate::core::params::{FixedGridParams, GridLayout};
use crate::types::TileBounds;

/// One seed point per grid cell in row-major order, so the seed of cell
/// `(col, row)` sits at index `row * cols + col`.
///
/// The seed is placed at the horizontal middle of the cell and
/// `layout.center_bias_y` of the way down, which keeps it above the label text
/// under each tile. It only has to land inside the tile.
pub fn grid_centers(width: u32, height: u32, layout: &GridLayout) -> Vec<(u32, u32)> {
    let (w, h) = (f64::from(width), f64::from(height));
    let left = w * layout.margin_left;
    let top = h * layout.margin_top;
    let usable_w = w - left - w * layout.margin_right;
    let usable_h = h - top - h * layout.margin_bottom;

    let cols = layout.cols.max(1);
    let rows = layout.rows.max(1);
    let cell_w = usable_w / f64::from(cols);
    let cell_h = usable_h / f64::from(rows);

    let mut centers = Vec::with_capacity((cols * rows) as usize);
    for row in 0..rows {
        for col in 0..cols {
            let x = left + (f64::from(col) + 0.5) * cell_w;
            let y = top + (f64::from(row) + layout.center_bias_y) * cell_h;
            centers.push((x.max(0.0) as u32, y.max(0.0) as u32));
        }
    }
    centers
}

/// Crop geometry of the hand-tuned grid for one image size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedGrid {
    pub width: u32,
    pub height: u32,
    pub left_margin: u32,
    pub top_margin: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl FixedGrid {
    pub fn new(width: u32, height: u32, params: &FixedGridParams) -> Self {
        let cell_width = width
            .saturating_sub(params.left_margin + params.right_margin)
            / params.cols.max(1);
        let cell_height = height
            .saturating_sub(params.top_margin + params.bottom_margin)
            / params.rows.max(1);

        let grid = Self {
            width,
            height,
            left_margin: params.left_margin,
            top_margin: params.top_margin,
            cell_width,
            cell_height,
            tile_width: (f64::from(cell_width) * params.tile_width_ratio) as u32,
            tile_height: (f64::from(cell_height) * params.tile_height_ratio) as u32,
        };
        debug!(
            "Fixed grid: cell {}x{}, tile {}x{}",
            grid.cell_width, grid.cell_height, grid.tile_width, grid.tile_height
        );
        grid
    }

    /// Crop rectangle of cell `(col, row)`, clipped to the image.
    pub fn tile_bounds(&self, col: u32, row: u32) -> TileBounds {
        let left = self.left_margin + col * self.cell_width;
        let top = self.top_margin + row * self.cell_height;
        TileBounds {
            left,
            top,
            right: left + self.tile_width,
            bottom: top + self.tile_height,
        }
        .clamped(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_for_400x300() {
        let centers = grid_centers(400, 300, &GridLayout::default());
        assert_eq!(centers.len(), 12);
        assert_eq!(centers[0], (59, 44));
        assert_eq!(centers[3], (341, 44));
        // (col 1, row 2)
        assert_eq!(centers[2 * 4 + 1], (153, 222));
        assert_eq!(centers[11], (341, 222));
    }

    #[test]
    fn centers_stay_inside_image() {
        let layout = GridLayout::default();
        for (w, h) in [(1, 1), (7, 5), (1600, 1200), (33, 900)] {
            let centers = grid_centers(w, h, &layout);
            assert_eq!(centers.len(), 12);
            assert!(centers.iter().all(|&(x, y)| x < w && y < h), "{w}x{h}");
        }
    }

    #[test]
    fn centers_follow_bias() {
        let layout = GridLayout {
            cols: 1,
            rows: 1,
            margin_left: 0.0,
            margin_right: 0.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
            center_bias_y: 0.5,
        };
        assert_eq!(grid_centers(100, 80, &layout), vec![(50, 40)]);
    }

    #[test]
    fn fixed_grid_geometry() {
        let grid = FixedGrid::new(1000, 800, &FixedGridParams::default());
        assert_eq!((grid.cell_width, grid.cell_height), (232, 244));
        assert_eq!((grid.tile_width, grid.tile_height), (190, 190));

        assert_eq!(
            grid.tile_bounds(0, 0),
            TileBounds { left: 35, top: 26, right: 225, bottom: 216 }
        );
        assert_eq!(
            grid.tile_bounds(3, 2),
            TileBounds { left: 35 + 3 * 232, top: 26 + 2 * 244, right: 35 + 3 * 232 + 190, bottom: 26 + 2 * 244 + 190 }
        );
    }

    #[test]
    fn fixed_grid_clips_to_small_images() {
        let grid = FixedGrid::new(50, 40, &FixedGridParams::default());
        assert_eq!((grid.cell_width, grid.cell_height), (0, 0));
        let b = grid.tile_bounds(3, 2);
        assert!(b.right <= 50 && b.bottom <= 40);
        assert!(b.is_empty());
    }
}
