//! Frame session and JS entry points
//!
//! The detector calls back once per processed frame; JS forwards each
//! result here. Frame data lives only for the duration of the call; the
//! session keeps nothing but the FPS meter.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;
use crate::config::FrameConfig;
use crate::error::PoseError;
use crate::landmarks::{Landmark, landmarks_from_flat, landmarks_to_flat, POSE_CONNECTIONS};
use crate::overlay::{grid_style, FpsMeter};
use super::frame::{analyze_frame, FrameReport, PoseFrame};

/// Session state between frames
#[derive(Default)]
struct Session {
    fps: FpsMeter,
}

impl Session {
    fn process(&mut self, frame: &PoseFrame, config: &FrameConfig, now_ms: f64) -> Result<FrameReport, PoseError> {
        self.fps.tick(now_ms);
        analyze_frame(frame, config)
    }

    fn reset(&mut self) {
        *self = Session::default();
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

/// Run `f` on the session. A call made while another one is still running
/// (a frame callback re-entering) is refused rather than queued.
fn with_session<T>(f: impl FnOnce(&mut Session) -> Result<T, PoseError>) -> Result<T, PoseError> {
    SESSION.with(|session_cell| {
        let mut session = session_cell
            .try_borrow_mut()
            .map_err(|_| PoseError::Reentrant)?;
        f(&mut session)
    })
}

// ============================================================================
// WASM-BINDGEN TYPES
// ============================================================================

/// Control panel options, rebuilt by JS whenever a control changes
#[wasm_bindgen]
pub struct FrameOptions {
    config: FrameConfig,
}

#[wasm_bindgen]
impl FrameOptions {
    /// Parse the control panel's options object (`JSON.stringify`-ed)
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: &str) -> Result<FrameOptions, JsValue> {
        let config = FrameConfig::from_json(options_json)?;
        Ok(FrameOptions { config })
    }

    /// Options to hand to the detector's `setOptions`
    pub fn detector_options_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.config.detector_options())
            .map_err(|e| JsValue::from(PoseError::from(e)))
    }

    #[wasm_bindgen(getter)]
    pub fn selfie_mode(&self) -> bool {
        self.config.selfie_mode
    }
}

/// Analysis result handed back to JS
#[wasm_bindgen]
pub struct FrameResult {
    report: FrameReport,
    fps: f32,
}

#[wasm_bindgen]
impl FrameResult {
    #[wasm_bindgen(getter)]
    pub fn has_pose(&self) -> bool {
        self.report.has_pose()
    }

    #[wasm_bindgen(getter)]
    pub fn left(&self) -> Option<bool> {
        self.report.angles.map(|a| a.left)
    }

    #[wasm_bindgen(getter)]
    pub fn torso(&self) -> Option<f32> {
        self.report.angles.map(|a| a.torso)
    }

    #[wasm_bindgen(getter)]
    pub fn shoulder(&self) -> Option<f32> {
        self.report.angles.map(|a| a.shoulder)
    }

    #[wasm_bindgen(getter)]
    pub fn elbow(&self) -> Option<f32> {
        self.report.angles.map(|a| a.elbow)
    }

    #[wasm_bindgen(getter)]
    pub fn knee(&self) -> Option<f32> {
        self.report.angles.map(|a| a.knee)
    }

    #[wasm_bindgen(getter)]
    pub fn trunk_lean(&self) -> Option<f32> {
        self.report.trunk_lean
    }

    #[wasm_bindgen(getter)]
    pub fn world_trunk_lean(&self) -> Option<f32> {
        self.report.world_trunk_lean
    }

    #[wasm_bindgen(getter)]
    pub fn spatial_elbow(&self) -> Option<f32> {
        self.report.spatial_elbow
    }

    #[wasm_bindgen(getter)]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Filtered 2D landmarks, 4 floats each (NaN = no visibility)
    pub fn landmarks(&self) -> Vec<f32> {
        landmarks_to_flat(&self.report.landmarks)
    }

    /// Re-oriented world landmarks, 4 floats each
    pub fn world_landmarks(&self) -> Vec<f32> {
        landmarks_to_flat(&self.report.world_landmarks)
    }

    /// Connector segments, `[x1, y1, x2, y2]` each
    pub fn connectors(&self) -> Vec<f32> {
        self.report.overlay.connectors_flat()
    }

    /// Full report, including landmark dot groups and mask style
    pub fn to_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.report).map_err(|e| JsValue::from(PoseError::from(e)))
    }
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

fn format_optional(value: Option<f32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}°", v))
}

/// One console line per analysed frame, `None` when nobody was detected
fn angle_log_line(report: &FrameReport) -> Option<String> {
    let angles = report.angles?;
    Some(format!(
        "{} side | torso {:.1}° shoulder {:.1}° elbow {:.1}° knee {:.1}° | lean 2d {} 3d {} | elbow 3d {}",
        if angles.left { "L" } else { "R" },
        angles.torso, angles.shoulder, angles.elbow, angles.knee,
        format_optional(report.trunk_lean),
        format_optional(report.world_trunk_lean),
        format_optional(report.spatial_elbow),
    ))
}

fn optional_landmarks(data: &[f32]) -> Result<Option<Vec<Landmark>>, PoseError> {
    if data.is_empty() {
        Ok(None)
    } else {
        landmarks_from_flat(data).map(Some)
    }
}

/// Analyse one detector result.
///
/// `landmarks` / `world_landmarks` are flat Float32Arrays (x, y, z,
/// visibility per landmark); pass an empty array when the detector
/// returned none. Calls must not overlap.
#[wasm_bindgen]
pub fn process_frame(
    landmarks: &[f32],
    world_landmarks: &[f32],
    width: f32,
    height: f32,
    options: &FrameOptions,
) -> Result<FrameResult, JsValue> {
    let frame = PoseFrame {
        width,
        height,
        landmarks: optional_landmarks(landmarks)?,
        world_landmarks: optional_landmarks(world_landmarks)?,
    };
    let now = js_sys::Date::now();

    let result = with_session(|session| {
        let report = session.process(&frame, &options.config, now)?;
        Ok(FrameResult { report, fps: session.fps.fps() })
    })?;

    if let Some(line) = angle_log_line(&result.report) {
        crate::console_log!("{}", line);
    }

    Ok(result)
}

/// Forget session state, called when the video source changes
#[wasm_bindgen]
pub fn reset_session() {
    let reset = with_session(|session| {
        session.reset();
        Ok(())
    });
    if let Err(err) = reset {
        web_sys::console::warn_1(&format!("Reset skipped: {}", err).into());
    }
}

/// Skeleton connections as a flat `[a0, b0, a1, b1, ...]` index array
#[wasm_bindgen]
pub fn pose_connections() -> Vec<u32> {
    POSE_CONNECTIONS
        .iter()
        .flat_map(|&(a, b)| [a as u32, b as u32])
        .collect()
}

/// Color groups and connection color for the 3D landmark grid, as JSON
#[wasm_bindgen]
pub fn grid_style_json() -> Result<String, JsValue> {
    serde_json::to_string(&grid_style()).map_err(|e| JsValue::from(PoseError::from(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::{Landmark, POSE_LANDMARK_COUNT};

    fn frame() -> PoseFrame {
        PoseFrame {
            width: 640.0,
            height: 480.0,
            landmarks: Some(vec![Landmark::new(0.5, 0.5, 0.0).with_visibility(0.9); POSE_LANDMARK_COUNT]),
            world_landmarks: None,
        }
    }

    #[test]
    fn test_session_tracks_fps() {
        let mut session = Session::default();
        let config = FrameConfig::default();
        for i in 0..10 {
            let report = session.process(&frame(), &config, i as f64 * 40.0).unwrap();
            assert!(report.has_pose());
        }
        assert!((session.fps.fps() - 25.0).abs() < 0.1);

        session.reset();
        assert_eq!(session.fps.fps(), 0.0);
    }

    #[test]
    fn test_failed_frame_still_ticks_fps() {
        let mut session = Session::default();
        let config = FrameConfig::default();
        session.process(&frame(), &config, 0.0).unwrap();
        let bad = PoseFrame { width: 0.0, ..frame() };
        assert!(session.process(&bad, &config, 40.0).is_err());
        assert!((session.fps.fps() - 25.0).abs() < 0.1);
        // The next good frame is analysed on its own
        let report = session.process(&frame(), &config, 80.0).unwrap();
        assert!(report.has_pose());
    }

    #[test]
    fn test_angle_log_line() {
        let mut report = analyze_frame(&frame(), &FrameConfig::default()).unwrap();
        report.spatial_elbow = Some(172.4);
        let line = angle_log_line(&report).unwrap();
        assert!(line.starts_with("L side | torso"));
        assert!(line.contains(&format!("lean 2d {:.1}°", report.trunk_lean.unwrap())));
        assert!(line.contains("3d -"));
        assert!(line.ends_with("elbow 3d 172.4°"));

        assert_eq!(angle_log_line(&FrameReport::empty()), None);
    }

    #[test]
    fn test_empty_array_means_no_landmarks() {
        assert_eq!(optional_landmarks(&[]), Ok(None));
        assert_eq!(optional_landmarks(&[0.1, 0.2, 0.3, 1.0]).unwrap().unwrap().len(), 1);
        assert!(optional_landmarks(&[0.1, 0.2]).is_err());
    }

    #[test]
    fn test_nested_call_is_refused() {
        let inner = with_session(|_| Ok(with_session(|_| Ok(()))));
        assert_eq!(inner, Ok(Err(PoseError::Reentrant)));
        // Session usable again once the outer call returns
        assert_eq!(with_session(|_| Ok(1)), Ok(1));
    }

    #[test]
    fn test_grid_style_json() {
        let json = grid_style_json().unwrap();
        assert!(json.contains("\"LEFT\""));
        assert!(json.contains(&0xffa500u32.to_string()));
        assert!(json.contains(&format!("\"connectionColor\":{}", 0xccccccu32)));
    }

    #[test]
    fn test_pose_connections_flat() {
        let flat = pose_connections();
        assert_eq!(flat.len(), POSE_CONNECTIONS.len() * 2);
        assert_eq!((flat[0], flat[1]), (0, 1));
    }
}
