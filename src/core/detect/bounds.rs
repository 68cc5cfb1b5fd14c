use image::{GenericImageView, Pixel};
use tracing::debug;

use super::background::is_background;
use super::walker::{Direction, find_edge, in_bounds, ring_offsets};
use crate::core::params::DetectParams;
use crate::types::TileBounds;

/// Move the seed onto tile content: the seed itself if it is not background,
/// else the first non-background ring candidate.
fn locate_content<I>(img: &I, seed: (u32, u32), params: &DetectParams) -> Option<(u32, u32)>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let bg = &params.background;
    let (sx, sy) = (i64::from(seed.0), i64::from(seed.1));
    if in_bounds(img, sx, sy) && !is_background(&img.get_pixel(seed.0, seed.1), bg) {
        return Some(seed);
    }

    ring_offsets(params.search_radius)
        .map(|(dx, dy)| (sx + dx, sy + dy))
        .find(|&(x, y)| {
            in_bounds(img, x, y) && !is_background(&img.get_pixel(x as u32, y as u32), bg)
        })
        .map(|(x, y)| (x as u32, y as u32))
}

/// Detect the exact extent of the tile around `seed`.
///
/// Walks outward from the seed to the background along the four cardinal
/// directions, then walks again vertically from the found left edge and
/// horizontally from the found top edge to pick up extent that is only
/// reachable around a corner. The outward-most result of both passes wins.
///
/// The second pass starts from the left and top edges only, so content that
/// bulges past the first pass only toward the bottom-right is not recovered.
///
/// Returns `None` when neither the seed nor any pixel within
/// `params.search_radius` of it is tile content.
pub fn detect_tile_bounds<I>(img: &I, seed: (u32, u32), params: &DetectParams) -> Option<TileBounds>
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let Some((cx, cy)) = locate_content(img, seed, params) else {
        debug!("Could not find tile at ({}, {})", seed.0, seed.1);
        return None;
    };
    if (cx, cy) != seed {
        debug!("Seed ({}, {}) moved onto content at ({}, {})", seed.0, seed.1, cx, cy);
    }

    let steps = params.max_steps;
    let bg = &params.background;
    let walk = |from: (u32, u32), dir: Direction| find_edge(img, from, dir, steps, bg);

    let (_, top) = walk((cx, cy), Direction::Up);
    let (_, bottom) = walk((cx, cy), Direction::Down);
    let (left, _) = walk((cx, cy), Direction::Left);
    let (right, _) = walk((cx, cy), Direction::Right);

    let (_, corner_top) = walk((left, cy), Direction::Up);
    let (_, corner_bottom) = walk((left, cy), Direction::Down);
    let (corner_left, _) = walk((cx, top), Direction::Left);
    let (corner_right, _) = walk((cx, top), Direction::Right);

    let bounds = TileBounds {
        left: left.min(corner_left),
        top: top.min(corner_top),
        right: right.max(corner_right) + 1,
        bottom: bottom.max(corner_bottom) + 1,
    };
    debug!("Detected bounds: {}", bounds);

    Some(bounds)
}
