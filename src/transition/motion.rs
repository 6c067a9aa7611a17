//! Continuous idle motion layered over the phase values.
//!
//! None of this depends on the active phase except the star rotation, which integrates the
//! smoothed drift speed. The vertical bob is accumulated separately from the tweened offsets
//! so a transition never fights with it.

use serde::{Deserialize, Serialize};

use crate::foundation::core::{DVec3, Seconds};

const BOB_FREQ: f64 = 0.6; // rad/s
const BOB_GAIN: f64 = 0.25;
const LEFT_SPIN: f64 = 0.12; // rad/s around Y
const RIGHT_SPIN: f64 = -0.10;
const LEFT_TILT: (f64, f64) = (0.15, 0.08); // (freq rad/s, amplitude rad) around X
const RIGHT_TILT: (f64, f64) = (0.18, 0.06);
const STAR_PITCH_RATIO: f64 = 0.35;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyMotion {
    /// Extra vertical displacement on top of the tweened offset.
    pub bob: f64,
    /// Euler angles (x = tilt, y = spin), radians.
    pub rotation: DVec3,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DecorativeMotion {
    pub left: BodyMotion,
    pub right: BodyMotion,
    /// Star field Euler angles, radians.
    pub stars: DVec3,
}

impl DecorativeMotion {
    pub fn step(&mut self, now: Seconds, dt: f64, star_speed: f64) {
        let t = now.0;

        self.left.bob += (t * BOB_FREQ).sin() * dt * BOB_GAIN;
        self.right.bob += (t * BOB_FREQ).cos() * dt * BOB_GAIN;

        self.left.rotation.y += dt * LEFT_SPIN;
        self.left.rotation.x = (t * LEFT_TILT.0).sin() * LEFT_TILT.1;
        self.right.rotation.y += dt * RIGHT_SPIN;
        self.right.rotation.x = (t * RIGHT_TILT.0).sin() * RIGHT_TILT.1;

        self.stars.y += star_speed * dt;
        self.stars.x += star_speed * dt * STAR_PITCH_RATIO;
    }

    pub fn left_position(&self, offset: DVec3) -> DVec3 {
        offset + DVec3::Y * self.left.bob
    }

    pub fn right_position(&self, offset: DVec3) -> DVec3 {
        offset + DVec3::Y * self.right.bob
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/motion.rs"]
mod tests;
