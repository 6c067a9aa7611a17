//! Lunara drives a phase-based ambient narrative: a short sequence of moon-cycle "phases",
//! each a bundle of scene values, text, and a volume level for a generated ambient loop.
//!
//! The crate has no renderer of its own. A host owns the frame loop and:
//!
//! - Builds a [`PhaseTransitionController`] from a [`PhaseCatalog`]
//! - Calls [`PhaseTransitionController::tick`] once per frame and reads the live [`SceneParams`]
//! - Feeds wheel/keyboard input through a [`NavigationGate`]
//! - Optionally attaches an [`AmbientAudio`] loop played through an [`AudioHost`]
#![forbid(unsafe_code)]

pub mod animation;
pub mod audio;
pub mod foundation;
pub mod input;
pub mod narrative;
pub mod overlay;
pub mod transition;

pub use crate::animation::ease::Ease;
pub use crate::animation::tween::{Lerp, Smoothed, Tween, Tweened};
pub use crate::audio::asset::{AmbientAudio, INITIAL_VOLUME};
pub use crate::audio::host::{
    AudioHost, AutoplayPolicy, MemoryHost, PlaybackHandle, Preload, ResourceId,
};
pub use crate::audio::synth::{AmbientSpec, ambient_sample, render_ambient_wav, synthesize_ambient};
pub use crate::audio::wav::{WavInfo, decode_pcm16, encode_pcm16_mono, quantize_pcm16};
pub use crate::foundation::core::{DVec3, Rgb, Seconds};
pub use crate::foundation::error::{LunaError, LunaResult};
pub use crate::input::gate::{InputEvent, Key, NavigationGate};
pub use crate::narrative::catalog::PhaseCatalog;
pub use crate::narrative::config::{ExperienceConfig, NavigationConfig, TransitionConfig};
pub use crate::narrative::phase::Phase;
pub use crate::overlay::view::OverlayView;
pub use crate::transition::controller::{Direction, PhaseTransitionController};
pub use crate::transition::motion::{BodyMotion, DecorativeMotion};
pub use crate::transition::params::{SceneParams, TransitionState};
pub use crate::transition::snapshot::{AudioSnapshot, FrameSnapshot};
pub use crate::transition::volume::VolumeFade;
