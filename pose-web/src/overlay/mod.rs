//! Overlay module - what JS should draw for a frame
//!
//! Re-exports only. All logic in submodules. The canvas itself stays on the
//! JS side; this module only decides which points, segments and colors.

mod style;
mod skeleton;
mod fps;

pub use style::{colors, MaskStyle, GridGroup, GridStyle, grid_groups, grid_style, VISIBILITY_MIN};
pub use skeleton::{LandmarkGroup, OverlayPlan};
pub use fps::FpsMeter;
