//! Pose Web - joint angle estimation on top of MediaPipe Pose
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! Detection runs in the JS pose library; each result is passed to
//! `process_frame`, which returns angles plus what to draw.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

pub mod error;
pub mod config;
pub mod landmarks;
pub mod geometry;
pub mod overlay;
mod bridge;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    process_frame, reset_session, pose_connections, grid_style_json,
    FrameOptions, FrameResult,
};
pub use bridge::{analyze_frame, FrameReport, PoseFrame};
pub use config::FrameConfig;
pub use error::PoseError;

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
    console_log!("✅ pose-web loaded");
}
