use serde::Serialize;

use crate::{
    foundation::core::DVec3,
    transition::{motion::DecorativeMotion, params::SceneParams},
};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AudioSnapshot {
    pub playing: bool, // intent
    pub audible: bool,
    pub volume: f64,
}

/// Everything a renderer (or a test) needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub time: f64,
    pub index: usize,
    pub phase_id: String,
    /// All fixed-duration tweens have landed.
    pub settled: bool,
    pub current: SceneParams,
    pub target: SceneParams,
    /// Tweened offsets plus the idle bob.
    pub left_position: DVec3,
    pub right_position: DVec3,
    pub motion: DecorativeMotion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioSnapshot>,
}
