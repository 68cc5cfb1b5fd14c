//! The terrain material sheets and the tiles each one holds. Both are laid
//! out as 4 columns by 3 rows.
use crate::types::{TileSheet, TileSpec};

pub const ASPHALT_LIMESTONE_TILES: [TileSpec; 12] = [
    TileSpec::new("asphalt", 0, 0),
    TileSpec::new("basalt", 1, 0),
    TileSpec::new("brick", 2, 0),
    TileSpec::new("cobblestone", 3, 0),
    TileSpec::new("concrete", 0, 1),
    TileSpec::new("crackedlava", 1, 1),
    TileSpec::new("glacier", 2, 1),
    TileSpec::new("grass", 3, 1),
    TileSpec::new("ground", 0, 2),
    TileSpec::new("ice", 1, 2),
    TileSpec::new("leafygrass", 2, 2),
    TileSpec::new("limestone", 3, 2),
];

/// Cell (3, 2) is empty on this sheet.
pub const MUD_AIR_TILES: [TileSpec; 11] = [
    TileSpec::new("mud", 0, 0),
    TileSpec::new("pavement", 1, 0),
    TileSpec::new("rock", 2, 0),
    TileSpec::new("salt", 3, 0),
    TileSpec::new("sand", 0, 1),
    TileSpec::new("sandstone", 1, 1),
    TileSpec::new("slate", 2, 1),
    TileSpec::new("snow", 3, 1),
    TileSpec::new("water", 0, 2),
    TileSpec::new("woodplanks", 1, 2),
    TileSpec::new("air", 2, 2),
];

pub const TERRAIN_SHEETS: [TileSheet; 2] = [
    TileSheet {
        file: "terrain-raw-asphalt-limestone.png",
        tiles: &ASPHALT_LIMESTONE_TILES,
    },
    TileSheet {
        file: "terrain-raw-mud-air.png",
        tiles: &MUD_AIR_TILES,
    },
];
