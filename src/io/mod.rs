//! I/O layer: loading source sheets and label fonts, and `writers` for tile
//! crops and preview images.
pub mod font;
pub mod source;
pub mod writers;

pub use font::load_font;
pub use source::open_sheet;
