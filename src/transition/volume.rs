use crate::{
    animation::{ease::Ease, tween::Tween},
    audio::asset::AmbientAudio,
    foundation::core::Seconds,
};

/// A volume tween with an optional pause once it lands.
///
/// Replacing the fade cancels the pending pause as well, so a fade-out interrupted by a
/// fade-in never silences the loop.
#[derive(Clone, Debug, PartialEq)]
pub struct VolumeFade {
    tween: Tween<f64>,
    then_pause: bool,
}

impl VolumeFade {
    pub fn new(from: f64, to: f64, start: Seconds, duration: f64, ease: Ease) -> Self {
        Self {
            tween: Tween::new(from, to, start, duration, ease),
            then_pause: false,
        }
    }

    pub fn then_pause(mut self) -> Self {
        self.then_pause = true;
        self
    }

    pub fn target(&self) -> f64 {
        self.tween.to
    }

    pub fn pauses_on_finish(&self) -> bool {
        self.then_pause
    }

    pub fn volume_at(&self, now: Seconds) -> f64 {
        self.tween.sample(now)
    }

    /// Push the volume for `now` into `audio`; returns true once the fade has completed.
    pub(crate) fn apply(&self, audio: &mut AmbientAudio, now: Seconds) -> bool {
        audio.set_volume(self.tween.sample(now));
        let done = self.tween.is_finished(now);
        if done && self.then_pause {
            audio.pause();
        }
        done
    }

    /// Jump straight to the end state: target volume, paused if the fade would pause.
    pub(crate) fn finish(&self, audio: &mut AmbientAudio) {
        audio.set_volume(self.tween.to);
        if self.then_pause {
            audio.pause();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/volume.rs"]
mod tests;
