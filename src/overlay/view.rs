use serde::Serialize;

use crate::transition::controller::PhaseTransitionController;

pub const AUDIO_ON_LABEL: &str = "Silenciar ambiência";
pub const AUDIO_OFF_LABEL: &str = "Ativar ambiência";
pub const AUDIO_ON_BADGE: &str = "SOM";
pub const AUDIO_OFF_BADGE: &str = "SILÊNCIO";
pub const PREV_LABEL: &str = "Fase anterior";
pub const NEXT_LABEL: &str = "Próxima fase";

#[derive(Clone, Debug, PartialEq, Serialize)]
/// What the text layer shows for the active phase.
pub struct OverlayView {
    pub index: usize,
    pub total: usize,
    /// Zero-padded "01 · 05" position marker.
    pub counter: String,
    pub phase_id: String,
    pub title: String,
    pub tagline: String,
    pub poem_lines: Vec<String>,
    /// `(index + 1) / total * 100`.
    pub progress_percent: f64,
    pub can_prev: bool,
    pub can_next: bool,
    pub audio_playing: bool,
    /// Accessible name of the audio toggle; describes what pressing it will do.
    pub audio_label: &'static str,
    pub audio_badge: &'static str,
    pub prev_label: Option<&'static str>,
    pub next_label: Option<&'static str>,
}

impl OverlayView {
    pub fn from_controller(controller: &PhaseTransitionController) -> Self {
        let phase = controller.phase();
        let index = controller.index();
        let total = controller.count();
        let playing = controller.is_audio_playing();
        let (can_prev, can_next) = (controller.can_prev(), controller.can_next());

        Self {
            index,
            total,
            counter: format!("{:02} · {:02}", index + 1, total),
            phase_id: phase.id.clone(),
            title: phase.title.clone(),
            tagline: phase.tagline.clone(),
            poem_lines: phase.poem_lines().map(str::to_owned).collect(),
            progress_percent: progress_percent(index, total),
            can_prev,
            can_next,
            audio_playing: playing,
            audio_label: if playing { AUDIO_ON_LABEL } else { AUDIO_OFF_LABEL },
            audio_badge: if playing { AUDIO_ON_BADGE } else { AUDIO_OFF_BADGE },
            prev_label: can_prev.then_some(PREV_LABEL),
            next_label: can_next.then_some(NEXT_LABEL),
        }
    }
}

pub fn progress_percent(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (index + 1) as f64 / total as f64 * 100.0
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/view.rs"]
mod tests;
