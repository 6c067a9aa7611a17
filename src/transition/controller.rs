use serde::{Deserialize, Serialize};

use crate::{
    animation::tween::{Smoothed, Tweened},
    audio::asset::AmbientAudio,
    foundation::core::{DVec3, Rgb, Seconds},
    foundation::error::LunaResult,
    narrative::{catalog::PhaseCatalog, config::TransitionConfig, phase::Phase},
    transition::{
        motion::DecorativeMotion,
        params::{SceneParams, TransitionState},
        snapshot::{AudioSnapshot, FrameSnapshot},
        volume::VolumeFade,
    },
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn step(self) -> isize {
        match self {
            Self::Prev => -1,
            Self::Next => 1,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prev" | "-1" | "back" => Ok(Self::Prev),
            "next" | "+1" | "1" => Ok(Self::Next),
            other => Err(format!("unknown direction '{other}' (expected next or prev)")),
        }
    }
}

/// Live animated values, one driver per field.
#[derive(Clone, Debug)]
struct SceneDrivers {
    background: Tweened<Rgb>,
    left_offset: Tweened<DVec3>,
    right_offset: Tweened<DVec3>,
    moon_tint: Tweened<Rgb>,
    light_tint: Tweened<Rgb>,
    ambient_color: Tweened<Rgb>,
    light_intensity: Tweened<f64>,
    ambient_intensity: Tweened<f64>,
    glow_intensity: Tweened<f64>,
    halo_opacity: Tweened<f64>,
    star_drift_speed: Smoothed<f64>,
    bloom_intensity: Smoothed<f64>,
}

impl SceneDrivers {
    fn at_rest(p: &SceneParams, cfg: &TransitionConfig) -> Self {
        Self {
            background: Tweened::at_rest(p.background),
            left_offset: Tweened::at_rest(p.left_offset),
            right_offset: Tweened::at_rest(p.right_offset),
            moon_tint: Tweened::at_rest(p.moon_tint),
            light_tint: Tweened::at_rest(p.light_tint),
            ambient_color: Tweened::at_rest(p.ambient_color),
            light_intensity: Tweened::at_rest(p.light_intensity),
            ambient_intensity: Tweened::at_rest(p.ambient_intensity),
            glow_intensity: Tweened::at_rest(p.glow_intensity),
            halo_opacity: Tweened::at_rest(p.halo_opacity),
            star_drift_speed: Smoothed::new(p.star_drift_speed, cfg.star_rate),
            bloom_intensity: Smoothed::new(p.bloom_intensity, cfg.bloom_rate),
        }
    }

    fn retarget(&mut self, to: &SceneParams, now: Seconds, cfg: &TransitionConfig) {
        let (secs, ease) = (cfg.scene_secs, cfg.scene_ease);
        self.background
            .retarget(to.background, now, cfg.background_secs, ease);
        self.left_offset.retarget(to.left_offset, now, secs, ease);
        self.right_offset.retarget(to.right_offset, now, secs, ease);
        self.moon_tint.retarget(to.moon_tint, now, secs, ease);
        self.light_tint.retarget(to.light_tint, now, secs, ease);
        self.ambient_color.retarget(to.ambient_color, now, secs, ease);
        self.light_intensity
            .retarget(to.light_intensity, now, secs, ease);
        self.ambient_intensity
            .retarget(to.ambient_intensity, now, secs, ease);
        self.glow_intensity.retarget(to.glow_intensity, now, secs, ease);
        self.halo_opacity.retarget(to.halo_opacity, now, secs, ease);
        self.star_drift_speed.set_target(to.star_drift_speed);
        self.bloom_intensity.set_target(to.bloom_intensity);
    }

    fn update(&mut self, now: Seconds, dt: f64) {
        self.background.update(now);
        self.left_offset.update(now);
        self.right_offset.update(now);
        self.moon_tint.update(now);
        self.light_tint.update(now);
        self.ambient_color.update(now);
        self.light_intensity.update(now);
        self.ambient_intensity.update(now);
        self.glow_intensity.update(now);
        self.halo_opacity.update(now);
        self.star_drift_speed.step(dt);
        self.bloom_intensity.step(dt);
    }

    fn tweens_settled(&self, now: Seconds) -> bool {
        self.background.is_settled(now)
            && self.left_offset.is_settled(now)
            && self.right_offset.is_settled(now)
            && self.moon_tint.is_settled(now)
            && self.light_tint.is_settled(now)
            && self.ambient_color.is_settled(now)
            && self.light_intensity.is_settled(now)
            && self.ambient_intensity.is_settled(now)
            && self.glow_intensity.is_settled(now)
            && self.halo_opacity.is_settled(now)
    }

    fn current(&self) -> SceneParams {
        SceneParams {
            background: *self.background.current(),
            left_offset: *self.left_offset.current(),
            right_offset: *self.right_offset.current(),
            moon_tint: *self.moon_tint.current(),
            light_tint: *self.light_tint.current(),
            ambient_color: *self.ambient_color.current(),
            light_intensity: *self.light_intensity.current(),
            ambient_intensity: *self.ambient_intensity.current(),
            glow_intensity: *self.glow_intensity.current(),
            halo_opacity: *self.halo_opacity.current(),
            star_drift_speed: self.star_drift_speed.value,
            bloom_intensity: self.bloom_intensity.value,
        }
    }
}

/// Owns the active phase and drives every scene value (and the ambient volume) toward it.
///
/// The controller is frame-driven: a host calls [`tick`](Self::tick) once per rendered frame
/// and reads [`current`](Self::current) afterwards. Navigation may happen between ticks at
/// any rate; each call simply replaces the in-flight tweens.
#[derive(Debug)]
pub struct PhaseTransitionController {
    catalog: PhaseCatalog,
    config: TransitionConfig,
    clock: Seconds,
    state: TransitionState,
    drivers: SceneDrivers,
    motion: DecorativeMotion,
    audio: Option<AmbientAudio>,
    volume_fade: Option<VolumeFade>,
}

impl PhaseTransitionController {
    /// Build a controller resting on the first phase.
    pub fn new(catalog: PhaseCatalog, config: TransitionConfig) -> LunaResult<Self> {
        catalog.validate()?;
        config.validate()?;
        Ok(Self::new_unchecked(catalog, config))
    }

    /// The built-in five-phase sequence with default timing.
    pub fn reference() -> Self {
        Self::new_unchecked(PhaseCatalog::reference(), TransitionConfig::default())
    }

    fn new_unchecked(catalog: PhaseCatalog, config: TransitionConfig) -> Self {
        let state = TransitionState::at_rest(0, catalog.first());
        let drivers = SceneDrivers::at_rest(&state.current, &config);
        Self {
            catalog,
            config,
            clock: Seconds::ZERO,
            state,
            drivers,
            motion: DecorativeMotion::default(),
            audio: None,
            volume_fade: None,
        }
    }

    /// Attach the session's ambient loop, returning any previously attached one.
    ///
    /// An idle loop is reset to the configured initial volume. The outgoing loop's fade is
    /// completed as in [`detach_audio`](Self::detach_audio).
    pub fn attach_audio(&mut self, mut audio: AmbientAudio) -> Option<AmbientAudio> {
        self.finish_fade();
        if !audio.is_playing() {
            audio.set_volume(self.config.initial_volume);
        }
        self.audio.replace(audio)
    }

    /// Remove the ambient loop. A fade in flight is completed first, so a loop detached
    /// while fading out leaves paused and silent.
    pub fn detach_audio(&mut self) -> Option<AmbientAudio> {
        self.finish_fade();
        self.audio.take()
    }

    fn finish_fade(&mut self) {
        if let Some(fade) = self.volume_fade.take()
            && let Some(audio) = self.audio.as_mut()
        {
            fade.finish(audio);
        }
    }

    pub fn audio(&self) -> Option<&AmbientAudio> {
        self.audio.as_ref()
    }

    pub fn audio_mut(&mut self) -> Option<&mut AmbientAudio> {
        self.audio.as_mut()
    }

    pub fn catalog(&self) -> &PhaseCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn clock(&self) -> Seconds {
        self.clock
    }

    pub fn index(&self) -> usize {
        self.state.current_index
    }

    pub fn count(&self) -> usize {
        self.catalog.len()
    }

    pub fn phase(&self) -> &Phase {
        &self.catalog[self.state.current_index]
    }

    pub fn can_prev(&self) -> bool {
        self.index() > 0
    }

    pub fn can_next(&self) -> bool {
        self.index() + 1 < self.count()
    }

    pub fn state(&self) -> &TransitionState {
        &self.state
    }

    pub fn current(&self) -> &SceneParams {
        &self.state.current
    }

    pub fn target(&self) -> &SceneParams {
        &self.state.target
    }

    pub fn motion(&self) -> &DecorativeMotion {
        &self.motion
    }

    pub fn volume_fade(&self) -> Option<&VolumeFade> {
        self.volume_fade.as_ref()
    }

    /// True once every fixed-duration tween has landed.
    ///
    /// Smoothed fields (star drift, bloom) approach their targets asymptotically and are
    /// not considered here.
    pub fn is_settled(&self) -> bool {
        self.drivers.tweens_settled(self.clock)
    }

    /// Step one phase backward or forward. Out-of-range steps are ignored.
    ///
    /// Returns whether the active phase changed.
    pub fn go_to(&mut self, direction: Direction) -> bool {
        let Some(next) = self.index().checked_add_signed(direction.step()) else {
            return false;
        };
        if next >= self.count() {
            return false;
        }
        self.activate(next);
        true
    }

    /// Jump straight to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a valid phase index.
    pub fn jump_to(&mut self, index: usize) -> bool {
        assert!(
            index < self.count(),
            "phase index {index} out of range for {} phases",
            self.count()
        );
        if index == self.index() {
            return false;
        }
        self.activate(index);
        true
    }

    fn activate(&mut self, index: usize) {
        let from = self.state.current_index;
        let target = SceneParams::from_phase(&self.catalog[index]);
        self.drivers.retarget(&target, self.clock, &self.config);
        self.state.current_index = index;
        self.state.target = target;

        tracing::debug!(from, to = index, id = %self.catalog[index].id, "phase transition");

        if self.is_audio_playing() {
            self.start_fade(
                self.target_volume(),
                self.config.retarget_secs,
                false,
            );
        }
    }

    /// Advance all animation by `dt` seconds. Call once per rendered frame.
    pub fn tick(&mut self, dt: f64) {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.clock = self.clock.advance(dt);
        let now = self.clock;

        self.drivers.update(now, dt);
        self.state.current = self.drivers.current();
        self.motion
            .step(now, dt, self.state.current.star_drift_speed);

        let finished = match (self.volume_fade.as_ref(), self.audio.as_mut()) {
            (Some(fade), Some(audio)) => fade.apply(audio, now),
            _ => false,
        };
        if finished {
            self.volume_fade = None;
            tracing::debug!("volume fade finished");
        }
    }

    /// Playback volume the loop should rest at for the active phase.
    pub fn target_volume(&self) -> f64 {
        self.config.volume_for_index(self.index())
    }

    /// User intent: whether the ambient loop has been switched on.
    pub fn is_audio_playing(&self) -> bool {
        self.audio.as_ref().is_some_and(AmbientAudio::is_playing)
    }

    /// Whether the host is actually producing sound right now.
    pub fn is_audio_audible(&self) -> bool {
        self.audio.as_ref().is_some_and(AmbientAudio::is_audible)
    }

    /// Switch the ambient loop on (fade in) or off (fade out, then pause).
    ///
    /// A host refusing to start playback is not an error: the intent is still recorded and
    /// the fade still runs, so a later `play` from the host side picks up the right volume.
    pub fn set_audio_playing(&mut self, playing: bool) {
        let Some(audio) = self.audio.as_mut() else {
            tracing::debug!("no ambient audio attached; ignoring toggle");
            return;
        };
        if audio.is_playing() == playing {
            return;
        }

        if playing {
            audio.set_volume(0.0);
            if let Err(err) = audio.play() {
                tracing::debug!(%err, "ambient playback start rejected");
            }
            audio.set_playing_intent(true);
            self.start_fade(self.target_volume(), self.config.fade_in_secs, false);
        } else {
            audio.set_playing_intent(false);
            self.start_fade(0.0, self.config.fade_out_secs, true);
        }
    }

    /// Flip the audio intent; returns the new state.
    pub fn toggle_audio(&mut self) -> bool {
        let playing = !self.is_audio_playing();
        self.set_audio_playing(playing);
        self.is_audio_playing()
    }

    fn start_fade(&mut self, to: f64, duration: f64, then_pause: bool) {
        let Some(audio) = self.audio.as_ref() else {
            return;
        };
        let mut fade = VolumeFade::new(
            audio.volume(),
            to,
            self.clock,
            duration,
            self.config.volume_ease,
        );
        if then_pause {
            fade = fade.then_pause();
        }
        tracing::debug!(from = audio.volume(), to, duration, then_pause, "volume fade");
        self.volume_fade = Some(fade);
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            time: self.clock.0,
            index: self.index(),
            phase_id: self.phase().id.clone(),
            settled: self.is_settled(),
            current: self.state.current.clone(),
            target: self.state.target.clone(),
            left_position: self.motion.left_position(self.state.current.left_offset),
            right_position: self.motion.right_position(self.state.current.right_offset),
            motion: self.motion.clone(),
            audio: self.audio.as_ref().map(|a| AudioSnapshot {
                playing: a.is_playing(),
                audible: a.is_audible(),
                volume: a.volume(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/controller.rs"]
mod tests;
