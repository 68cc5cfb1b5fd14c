//! Background-edge tile detection.
pub mod background;
pub mod bounds;
pub mod size;
pub mod walker;

pub use background::is_background;
pub use bounds::detect_tile_bounds;
pub use size::{estimate_tile_size, mode_size};
pub use walker::{Direction, find_edge, ring_offsets};
