//! Shared types used across tilecut.
//! Includes the run `Mode`, detection `Strategy`, the static tile catalog
//! records (`TileSpec`, `TileSheet`) and detected `TileBounds`.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Mode {
    /// Crop every tile to its own PNG
    #[default]
    Extract,
    /// Write an annotated copy of each sheet showing the crop rectangles
    Preview,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Extract => write!(f, "Extract"),
            Mode::Preview => write!(f, "Preview"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Strategy {
    /// Locate each tile by walking from a grid seed to the background edge
    #[default]
    Auto,
    /// Hand-tuned margins and ratios, no detection
    Fixed,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Auto => write!(f, "Auto"),
            Strategy::Fixed => write!(f, "Fixed"),
        }
    }
}

/// A named tile and its logical cell in the sheet grid.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct TileSpec {
    pub name: &'static str,
    pub col: u32,
    pub row: u32,
}

impl TileSpec {
    pub const fn new(name: &'static str, col: u32, row: u32) -> Self {
        Self { name, col, row }
    }

    /// Row-major index into a flat per-cell list.
    pub fn cell_index(&self, cols: u32) -> usize {
        (self.row * cols + self.col) as usize
    }
}

/// A composite source image and the tiles it holds.
#[derive(Copy, Clone, Debug)]
pub struct TileSheet {
    /// File name relative to the input directory
    pub file: &'static str,
    pub tiles: &'static [TileSpec],
}

/// Half-open pixel rectangle: `right` and `bottom` are one past the last
/// included column/row.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TileBounds {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl TileBounds {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Intersect with a `width` x `height` image extent.
    pub fn clamped(self, width: u32, height: u32) -> Self {
        let left = self.left.min(width);
        let top = self.top.min(height);
        Self {
            left,
            top,
            right: self.right.clamp(left, width),
            bottom: self.bottom.clamp(top, height),
        }
    }
}

impl std::fmt::Display for TileBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}) to ({},{}) = {}x{}",
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.width(),
            self.height()
        )
    }
}

/// Outcome of locating one tile, whether by detection or by fixed grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDetection {
    pub name: &'static str,
    /// Seed point used for detection; `None` for the fixed grid
    pub center: Option<(u32, u32)>,
    /// `None` when the tile could not be located
    pub bounds: Option<TileBounds>,
}

impl TileDetection {
    /// Bounds worth cropping: present and non-empty.
    pub fn located(&self) -> Option<TileBounds> {
        self.bounds.filter(|b| !b.is_empty())
    }
}
