//! Core building blocks: background classification, edge walking, bounds
//! detection, grid geometry and the preview overlay. These are internal
//! primitives consumed by the high-level `api` module.
pub mod detect;
pub mod grid;
pub mod params;
pub mod preview;
