//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod frame;
mod session;

pub use frame::{analyze_frame, FrameReport, PoseFrame};

pub use session::{
    // WASM entry points
    process_frame,
    reset_session,
    pose_connections,
    grid_style_json,
    // WASM types
    FrameOptions,
    FrameResult,
};
