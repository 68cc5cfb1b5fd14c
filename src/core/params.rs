use serde::{Deserialize, Serialize};

/// Near-white / transparent pixel classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundParams {
    /// Every color channel at or above this value counts as background
    pub threshold: u8,
    /// Alpha below this value counts as background
    pub alpha_cutoff: u8,
}

impl Default for BackgroundParams {
    fn default() -> Self {
        Self {
            threshold: 245,
            alpha_cutoff: 128,
        }
    }
}

/// Budgets for the edge walk and the seed search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectParams {
    pub background: BackgroundParams,
    /// Maximum pixels advanced by a single edge walk
    pub max_steps: u32,
    /// Largest ring radius searched when the seed lands on background
    pub search_radius: u32,
    /// Number of leading tiles sampled when estimating the common tile size
    pub size_samples: usize,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            background: BackgroundParams::default(),
            max_steps: 500,
            search_radius: 49,
            size_samples: 6,
        }
    }
}

/// Logical sheet grid used to seed detection. Margins are fractions of the
/// image extent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLayout {
    pub cols: u32,
    pub rows: u32,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    /// Larger than the others: the last row carries labels underneath
    pub margin_bottom: f64,
    /// Seed position within a cell, as a fraction of the cell height
    pub center_bias_y: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 3,
            margin_left: 0.03,
            margin_right: 0.03,
            margin_top: 0.03,
            margin_bottom: 0.08,
            center_bias_y: 0.4,
        }
    }
}

/// Hand-tuned crop grid in absolute pixels.
///
/// Raising `top_margin` moves crops down, raising `left_margin` moves them
/// right; the ratios control how much of each cell is kept.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FixedGridParams {
    pub cols: u32,
    pub rows: u32,
    pub left_margin: u32,
    pub top_margin: u32,
    pub right_margin: u32,
    pub bottom_margin: u32,
    pub tile_width_ratio: f64,
    pub tile_height_ratio: f64,
}

impl Default for FixedGridParams {
    fn default() -> Self {
        Self {
            cols: 4,
            rows: 3,
            left_margin: 35,
            top_margin: 26,
            right_margin: 35,
            bottom_margin: 40,
            tile_width_ratio: 0.82,
            tile_height_ratio: 0.78,
        }
    }
}

/// Every tunable used by a run, passed explicitly to the flows in `api`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TileParams {
    pub detect: DetectParams,
    pub layout: GridLayout,
    pub fixed: FixedGridParams,
}
