use crate::{
    foundation::core::Seconds,
    narrative::config::NavigationConfig,
    transition::controller::{Direction, PhaseTransitionController},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Vertical scroll; positive means "down", i.e. forward.
    Wheel { delta_y: f64 },
    Key(Key),
}

/// Turns raw wheel and keyboard events into navigation intents.
///
/// Wheel input is debounced: an accepted wheel step locks further wheel steps for
/// `cooldown_secs`, whether or not the step actually moved the controller. Keys are never
/// locked.
#[derive(Clone, Debug)]
pub struct NavigationGate {
    config: NavigationConfig,
    wheel_locked_until: Option<Seconds>,
}

impl NavigationGate {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            wheel_locked_until: None,
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn is_wheel_locked(&self, now: Seconds) -> bool {
        self.wheel_locked_until.is_some_and(|until| now < until)
    }

    /// Classify `event` at time `now`; `None` means the event is ignored.
    pub fn translate(&mut self, event: InputEvent, now: Seconds) -> Option<Direction> {
        match event {
            InputEvent::Wheel { delta_y } => {
                if !delta_y.is_finite() || delta_y.abs() < self.config.wheel_threshold {
                    return None;
                }
                if self.is_wheel_locked(now) {
                    tracing::trace!(delta_y, "wheel step inside cooldown");
                    return None;
                }
                self.wheel_locked_until = Some(now.advance(self.config.cooldown_secs));
                Some(if delta_y > 0.0 {
                    Direction::Next
                } else {
                    Direction::Prev
                })
            }
            InputEvent::Key(Key::ArrowRight) => Some(Direction::Next),
            InputEvent::Key(Key::ArrowLeft) => Some(Direction::Prev),
            InputEvent::Key(Key::Other) => None,
        }
    }

    /// Translate and apply to `controller` on its own clock; returns whether the phase changed.
    pub fn dispatch(
        &mut self,
        event: InputEvent,
        controller: &mut PhaseTransitionController,
    ) -> bool {
        self.translate(event, controller.clock())
            .is_some_and(|dir| controller.go_to(dir))
    }
}

impl Default for NavigationGate {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/gate.rs"]
mod tests;
