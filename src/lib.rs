#![doc = r#"
tilecut: crop named tiles out of composite terrain screenshot sheets.

Each sheet is a 4 x 3 grid of texture tiles with labels underneath, on a
near-white background. tilecut locates every tile either by a hand-tuned
fixed grid or by walking from a grid seed to the background edge, and writes
one PNG per tile. A preview mode draws the computed rectangles over the sheet
instead.

Quick start: extract every tile of a sheet
------------------------------------------
```rust,no_run
use std::path::Path;
use tilecut::{extract_sheet, sheets, Strategy, TileParams};

fn main() -> tilecut::Result<()> {
    let report = extract_sheet(
        Path::new("terrain-raw-mud-air.png"),
        &sheets::MUD_AIR_TILES,
        Path::new("tiles"),
        Strategy::Auto,
        &TileParams::default(),
    )?;
    println!("extracted={} failed={:?}", report.extracted, report.failed);
    Ok(())
}
```

Detect a single tile in memory
------------------------------
```rust
use image::{Rgb, RgbImage};
use tilecut::{detect_tile_bounds, DetectParams, TileBounds};

let mut img = RgbImage::from_pixel(100, 80, Rgb([255, 255, 255]));
for y in 20..50 {
    for x in 10..50 {
        img.put_pixel(x, y, Rgb([90, 60, 30]));
    }
}

let bounds = detect_tile_bounds(&img, (30, 35), &DetectParams::default());
assert_eq!(bounds, Some(TileBounds { left: 10, top: 20, right: 50, bottom: 50 }));
```

Batch over the built-in sheets
------------------------------
```rust,no_run
use std::path::Path;
use tilecut::{run_sheets, sheets::TERRAIN_SHEETS, Mode, RunOptions, Strategy};

fn main() -> tilecut::Result<()> {
    let options = RunOptions {
        mode: Mode::Preview,
        strategy: Strategy::Auto,
        ..Default::default()
    };
    let report = run_sheets(Path::new("."), Path::new("tiles"), &TERRAIN_SHEETS, &options)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Error handling
--------------
All fallible functions return `tilecut::Result<T>`. A missing sheet is
`Error::MissingSource`, which `run_sheets` treats as "skip and continue";
only `Error::OutputDir` aborts a run.

Useful modules
--------------
- [`api`]: high-level entry points.
- [`core`]: detection primitives, grid geometry and preview drawing.
- [`types`]: `Mode`, `Strategy`, `TileSpec`, `TileBounds`.
- [`sheets`]: the built-in terrain sheet catalog.
- [`error`]: crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod sheets;
pub mod types;

// Types
pub use crate::core::params::{BackgroundParams, DetectParams, FixedGridParams, GridLayout, TileParams};
pub use error::{Error, Result};
pub use types::{Mode, Strategy, TileBounds, TileDetection, TileSheet, TileSpec};

// Detection primitives
pub use crate::core::detect::{
    Direction, detect_tile_bounds, estimate_tile_size, find_edge, is_background, mode_size, ring_offsets,
};
pub use crate::core::grid::{FixedGrid, grid_centers};

// High-level API re-exports
pub use api::{
    RunOptions, RunReport, SheetReport, detect_tiles, extract_sheet, fixed_tiles, locate_tiles,
    preview_file_name, preview_sheet, render_preview, run_sheets, save_tiles,
};
