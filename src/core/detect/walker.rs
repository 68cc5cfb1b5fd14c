use image::{GenericImageView, Pixel};

use super::background::is_background;
use crate::core::params::BackgroundParams;

/// Cardinal walking direction in image coordinates (y grows downward).
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Unit offsets probed at every ring radius, in probe order.
static RING_UNITS: [(i64, i64); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Offsets around a seed for radius `1..=max_radius`, innermost ring first.
pub fn ring_offsets(max_radius: u32) -> impl Iterator<Item = (i64, i64)> + Clone {
    (1..=i64::from(max_radius))
        .flat_map(|r| RING_UNITS.iter().map(move |&(ux, uy)| (ux * r, uy * r)))
}

pub(crate) fn in_bounds<I: GenericImageView>(img: &I, x: i64, y: i64) -> bool {
    let (w, h) = img.dimensions();
    x >= 0 && y >= 0 && x < i64::from(w) && y < i64::from(h)
}

/// Walk from `start` in `dir` while the next pixel is inside the image and not
/// background, for at most `max_steps` steps. Returns the last accepted
/// position, which is `start` itself if the first step is rejected.
pub fn find_edge<I>(
    img: &I,
    start: (u32, u32),
    dir: Direction,
    max_steps: u32,
    params: &BackgroundParams,
) -> (u32, u32)
where
    I: GenericImageView,
    I::Pixel: Pixel<Subpixel = u8>,
{
    let (dx, dy) = dir.delta();
    let (mut x, mut y) = (i64::from(start.0), i64::from(start.1));

    for _ in 0..max_steps {
        let (nx, ny) = (x + dx, y + dy);
        if !in_bounds(img, nx, ny) || is_background(&img.get_pixel(nx as u32, ny as u32), params) {
            break;
        }
        x = nx;
        y = ny;
    }

    (x as u32, y as u32)
}
