//! High-level library API: locate the tiles of a sheet (auto-detected or by
//! fixed grid), crop them to PNG files, render annotated previews, and run
//! over a whole set of sheets with continue-on-error semantics. Prefer these
//! entry points over the low-level `core` modules when integrating tilecut.
use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use image::{DynamicImage, GenericImageView, Pixel, RgbaImage};
use tracing::{debug, info, warn};

use crate::core::detect::{detect_tile_bounds, estimate_tile_size};
use crate::core::grid::{FixedGrid, grid_centers};
use crate::core::params::{FixedGridParams, TileParams};
use crate::core::preview::PreviewCanvas;
use crate::error::{Error, Result};
use crate::io::writers::png::{write_preview, write_tile};
use crate::io::{load_font, open_sheet};
use crate::types::{Mode, Strategy, TileDetection, TileSheet, TileSpec};

/// Outcome of processing one sheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetReport {
    pub sheet: String,
    /// Tiles written (extract mode) or drawn with bounds (preview mode)
    pub extracted: usize,
    /// Names of tiles that could not be located
    pub failed: Vec<String>,
    /// Common tile size found by sampling, auto strategy only
    pub tile_size: Option<(u32, u32)>,
}

/// Totals over a run of several sheets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub tiles_extracted: usize,
    pub tiles_failed: usize,
}

/// Options for [`run_sheets`]
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub mode: Mode,
    pub strategy: Strategy,
    pub params: TileParams,
    /// Font for preview labels; the built-in bitmap font is used without one
    pub font: Option<PathBuf>,
}

/// File name of the preview written for the sheet at `index` (0-based).
pub fn preview_file_name(index: usize, strategy: Strategy) -> String {
    match strategy {
        Strategy::Auto => format!("preview-auto-{}.png", index + 1),
        Strategy::Fixed => format!("preview-{}.png", index + 1),
    }
}

/// Detect every tile of `tiles` from its grid seed. Tiles that cannot be
/// located are logged and returned without bounds.
pub fn detect_tiles<I>(img: &I, tiles: &[TileSpec], params: &TileParams) -> Vec<TileDetection>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (w, h) = img.dimensions();
    let centers = grid_centers(w, h, &params.layout);

    tiles
        .iter()
        .map(|tile| {
            let Some(&center) = centers.get(tile.cell_index(params.layout.cols)) else {
                warn!("  No center for {} at ({}, {})", tile.name, tile.col, tile.row);
                return TileDetection {
                    name: tile.name,
                    center: None,
                    bounds: None,
                };
            };

            debug!("  {}: seed ({}, {})", tile.name, center.0, center.1);
            let bounds = detect_tile_bounds(img, center, &params.detect);
            if bounds.is_none() {
                let err = Error::DetectionFailure {
                    name: tile.name.to_string(),
                    x: center.0,
                    y: center.1,
                };
                warn!("  {}", err);
            }

            TileDetection {
                name: tile.name,
                center: Some(center),
                bounds,
            }
        })
        .collect()
}

/// Crop rectangles of the hand-tuned grid for a `width` x `height` sheet.
pub fn fixed_tiles(width: u32, height: u32, tiles: &[TileSpec], params: &FixedGridParams) -> Vec<TileDetection> {
    let grid = FixedGrid::new(width, height, params);
    info!("  Cell size: {}x{}", grid.cell_width, grid.cell_height);
    info!("  Tile size: {}x{}", grid.tile_width, grid.tile_height);

    tiles
        .iter()
        .map(|tile| TileDetection {
            name: tile.name,
            center: None,
            bounds: Some(grid.tile_bounds(tile.col, tile.row)),
        })
        .collect()
}

/// Locate the tiles of a loaded sheet with `strategy`. For the auto strategy
/// the common tile size is also estimated; not finding one is only a warning.
pub fn locate_tiles(
    img: &DynamicImage,
    sheet: &str,
    tiles: &[TileSpec],
    strategy: Strategy,
    params: &TileParams,
) -> (Vec<TileDetection>, Option<(u32, u32)>) {
    match strategy {
        Strategy::Auto => {
            let rgba = img.to_rgba8();

            info!("  Detecting tile size...");
            let tile_size = estimate_tile_size(&rgba, tiles, &params.layout, &params.detect);
            match tile_size {
                Some((w, h)) => info!("  Detected tile size: {}x{}", w, h),
                None => warn!(
                    "  {}",
                    Error::NoCommonSize {
                        sheet: sheet.to_string()
                    }
                ),
            }

            (detect_tiles(&rgba, tiles, params), tile_size)
        }
        Strategy::Fixed => (
            fixed_tiles(img.width(), img.height(), tiles, &params.fixed),
            None,
        ),
    }
}

/// Write each located tile to `<out_dir>/<name>.png`. Returns how many were
/// written and the names of the ones skipped for lack of bounds.
pub fn save_tiles(img: &DynamicImage, detections: &[TileDetection], out_dir: &Path) -> Result<(usize, Vec<String>)> {
    let mut extracted = 0;
    let mut failed = Vec::new();

    for det in detections {
        let Some(bounds) = det.located() else {
            // detection failures were already reported by `detect_tiles`
            match det.bounds {
                Some(empty) => warn!("  Skipping {}: empty crop {}", det.name, empty),
                None => debug!("  Skipping {}: no bounds", det.name),
            }
            failed.push(det.name.to_string());
            continue;
        };

        write_tile(img, &bounds, out_dir, det.name)?;
        info!(
            "  Extracted: {}.png ({}x{}) at ({},{})",
            det.name,
            bounds.width(),
            bounds.height(),
            bounds.left,
            bounds.top
        );
        extracted += 1;
    }

    info!("  Total extracted: {}", extracted);
    Ok((extracted, failed))
}

/// Annotate `img` with the located tiles.
pub fn render_preview(
    img: &DynamicImage,
    detections: &[TileDetection],
    strategy: Strategy,
    font: Option<&FontVec>,
) -> RgbaImage {
    let mut canvas = PreviewCanvas::new(img.width(), img.height(), font);

    for det in detections {
        if let Some(center) = det.center {
            canvas.draw_seed(center);
        }
        match (det.located(), strategy) {
            (Some(bounds), Strategy::Auto) => {
                debug!("  {}: {}", det.name, bounds);
                canvas.draw_detected(&bounds, det.name);
            }
            (Some(bounds), Strategy::Fixed) => canvas.draw_fixed(&bounds, det.name),
            (None, _) => {
                if let Some(center) = det.center {
                    canvas.draw_failure(center);
                }
            }
        }
    }

    canvas.compose(img)
}

/// Crop every tile of the sheet at `source` into `out_dir`.
pub fn extract_sheet(
    source: &Path,
    tiles: &[TileSpec],
    out_dir: &Path,
    strategy: Strategy,
    params: &TileParams,
) -> Result<SheetReport> {
    info!("Processing: {}", source.display());
    let img = open_sheet(source)?;
    let sheet = source.display().to_string();

    let (detections, tile_size) = locate_tiles(&img, &sheet, tiles, strategy, params);
    let (extracted, failed) = save_tiles(&img, &detections, out_dir)?;

    Ok(SheetReport {
        sheet,
        extracted,
        failed,
        tile_size,
    })
}

/// Write an annotated copy of the sheet at `source` to `preview_path`.
pub fn preview_sheet(
    source: &Path,
    tiles: &[TileSpec],
    preview_path: &Path,
    strategy: Strategy,
    params: &TileParams,
    font: Option<&FontVec>,
) -> Result<SheetReport> {
    info!("Generating preview for: {}", source.display());
    let img = open_sheet(source)?;
    let sheet = source.display().to_string();

    let (detections, tile_size) = locate_tiles(&img, &sheet, tiles, strategy, params);
    let preview = render_preview(&img, &detections, strategy, font);
    write_preview(&preview, preview_path)?;
    info!("  Saved preview: {}", preview_path.display());

    let (found, missing): (Vec<_>, Vec<_>) = detections.iter().partition(|d| d.located().is_some());
    Ok(SheetReport {
        sheet,
        extracted: found.len(),
        failed: missing.iter().map(|d| d.name.to_string()).collect(),
        tile_size,
    })
}

/// Process every sheet in `sheets`, reading from `input_dir` and writing to
/// `output_dir`.
///
/// The output directory is created first; failing that is the only fatal
/// error. A missing sheet is skipped, any other per-sheet error is logged and
/// counted, and the remaining sheets are still processed.
pub fn run_sheets(input_dir: &Path, output_dir: &Path, sheets: &[TileSheet], options: &RunOptions) -> Result<RunReport> {
    fs::create_dir_all(output_dir).map_err(|source| Error::OutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let font = match (options.mode, &options.font) {
        (Mode::Preview, Some(path)) => match load_font(path) {
            Ok(font) => Some(font),
            Err(e) => {
                warn!("Labels disabled: {}", e);
                None
            }
        },
        _ => None,
    };

    let mut report = RunReport::default();
    for (index, sheet) in sheets.iter().enumerate() {
        let source = input_dir.join(sheet.file);

        let result = match options.mode {
            Mode::Extract => extract_sheet(&source, sheet.tiles, output_dir, options.strategy, &options.params),
            Mode::Preview => {
                let preview_path = output_dir.join(preview_file_name(index, options.strategy));
                preview_sheet(
                    &source,
                    sheet.tiles,
                    &preview_path,
                    options.strategy,
                    &options.params,
                    font.as_ref(),
                )
            }
        };

        match result {
            Ok(sheet_report) => {
                report.processed += 1;
                report.tiles_extracted += sheet_report.extracted;
                report.tiles_failed += sheet_report.failed.len();
            }
            Err(e @ Error::MissingSource { .. }) => {
                warn!("  {}", e);
                report.skipped += 1;
            }
            Err(e) => {
                warn!("Error processing {}: {}", source.display(), e);
                report.errors += 1;
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn preview_names_follow_strategy() {
        assert_eq!(preview_file_name(0, Strategy::Auto), "preview-auto-1.png");
        assert_eq!(preview_file_name(1, Strategy::Fixed), "preview-2.png");
    }

    #[test]
    fn detection_reports_failures_per_tile() {
        let layout = crate::core::params::GridLayout::default();
        let mut img = RgbImage::from_pixel(400, 300, Rgb([255, 255, 255]));
        // only the first cell holds a tile
        let (x, y) = grid_centers(400, 300, &layout)[0];
        for py in y - 10..y + 10 {
            for px in x - 10..x + 10 {
                img.put_pixel(px, py, Rgb([0, 0, 0]));
            }
        }

        let tiles = [TileSpec::new("a", 0, 0), TileSpec::new("b", 3, 2), TileSpec::new("c", 9, 9)];
        let dets = detect_tiles(&img, &tiles, &TileParams::default());
        assert_eq!(dets.len(), 3);
        assert!(dets[0].bounds.is_some());
        assert_eq!(dets[1].bounds, None);
        assert!(dets[1].center.is_some());
        // outside the grid: no seed at all
        assert_eq!(dets[2].center, None);
        assert_eq!(dets[2].bounds, None);
    }

    #[test]
    fn save_skips_tiles_without_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(50, 50, Rgb([9, 9, 9])));
        let dets = [
            TileDetection {
                name: "kept",
                center: None,
                bounds: Some(crate::types::TileBounds { left: 0, top: 0, right: 10, bottom: 10 }),
            },
            TileDetection {
                name: "lost",
                center: Some((25, 25)),
                bounds: None,
            },
        ];

        let (extracted, failed) = save_tiles(&img, &dets, dir.path()).unwrap();
        assert_eq!(extracted, 1);
        assert_eq!(failed, vec!["lost".to_string()]);
        assert!(dir.path().join("kept.png").is_file());
        assert!(!dir.path().join("lost.png").exists());
    }

    #[test]
    fn preview_and_extract_agree_on_clamped_fixed_tiles() {
        // two 150 px columns: the fourth column starts past the right edge and clamps empty
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("sheet.png");
        RgbImage::from_pixel(300, 300, Rgb([120, 90, 60])).save(&source).unwrap();
        let tiles = [TileSpec::new("inside", 0, 0), TileSpec::new("outside", 3, 0)];
        let params = TileParams {
            fixed: FixedGridParams {
                cols: 2,
                left_margin: 0,
                right_margin: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let grid = FixedGrid::new(300, 300, &params.fixed);
        assert!(grid.tile_bounds(3, 0).is_empty());

        let out = dir.path().join("out");
        fs::create_dir_all(&out).unwrap();
        let extracted = extract_sheet(&source, &tiles, &out, Strategy::Fixed, &params).unwrap();
        let previewed = preview_sheet(&source, &tiles, &out.join("p.png"), Strategy::Fixed, &params, None).unwrap();
        assert_eq!(extracted.extracted, 1);
        assert_eq!(extracted.extracted, previewed.extracted);
        assert_eq!(extracted.failed, previewed.failed);
    }

    #[test]
    fn default_preview_draws_labels() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(200, 150, image::Rgba([255, 255, 255, 255])));
        let dets = [TileDetection {
            name: "asphalt",
            center: Some((100, 60)),
            bounds: Some(crate::types::TileBounds { left: 20, top: 20, right: 180, bottom: 130 }),
        }];

        let out = render_preview(&img, &dets, Strategy::Auto, None);
        let yellow = (30..120)
            .flat_map(|x| (27..45).map(move |y| (x, y)))
            .filter(|&(x, y)| *out.get_pixel(x, y) == image::Rgba([255, 255, 0, 255]))
            .count();
        assert!(yellow > 0, "no label drawn in default preview");
    }
}
