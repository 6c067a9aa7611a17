use crate::{
    animation::ease::Ease,
    foundation::core::{DVec3, Rgb, Seconds},
    foundation::math::smoothing_factor,
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for DVec3 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        *a + (*b - *a) * t
    }
}

impl Lerp for Rgb {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.mix(*b, t)
    }
}

/// One fixed-duration eased interpolation.
///
/// A tween is a plain record evaluated against the caller's clock; it never mutates on its
/// own. Superseding a tween means replacing the record.
#[derive(Clone, Debug, PartialEq)]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start: Seconds,
    pub duration: f64, // seconds, <= 0 means "already there"
    pub ease: Ease,
}

impl<T> Tween<T>
where
    T: Lerp + Clone,
{
    pub fn new(from: T, to: T, start: Seconds, duration: f64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            ease,
        }
    }

    /// A tween that is finished from the start and always yields `value`.
    pub fn settled(value: T) -> Self {
        Self::new(value.clone(), value, Seconds::ZERO, 0.0, Ease::Linear)
    }

    /// Linear time progress in `[0, 1]`.
    pub fn progress(&self, now: Seconds) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (now.since(self.start) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Seconds) -> bool {
        self.progress(now) >= 1.0
    }

    pub fn sample(&self, now: Seconds) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to.clone();
        }
        T::lerp(&self.from, &self.to, self.ease.apply(p))
    }
}

/// A live value driven by at most one tween at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct Tweened<T> {
    current: T,
    tween: Tween<T>,
}

impl<T> Tweened<T>
where
    T: Lerp + Clone,
{
    pub fn at_rest(value: T) -> Self {
        Self {
            current: value.clone(),
            tween: Tween::settled(value),
        }
    }

    pub fn current(&self) -> &T {
        &self.current
    }

    pub fn target(&self) -> &T {
        &self.tween.to
    }

    pub fn tween(&self) -> &Tween<T> {
        &self.tween
    }

    pub fn is_settled(&self, now: Seconds) -> bool {
        self.tween.is_finished(now)
    }

    /// Start a new tween from the current value, cancelling any tween in flight.
    pub fn retarget(&mut self, to: T, now: Seconds, duration: f64, ease: Ease) {
        self.tween = Tween::new(self.current.clone(), to, now, duration, ease);
    }

    pub fn update(&mut self, now: Seconds) -> &T {
        self.current = self.tween.sample(now);
        &self.current
    }
}

/// Frame-rate aware exponential approach toward a movable target.
///
/// Every step covers `min(1, dt * rate)` of the remaining distance, so the value
/// self-corrects no matter how often or how abruptly the target moves.
#[derive(Clone, Debug, PartialEq)]
pub struct Smoothed<T> {
    pub value: T,
    pub target: T,
    pub rate: f64, // per second
}

impl<T> Smoothed<T>
where
    T: Lerp + Clone,
{
    pub fn new(value: T, rate: f64) -> Self {
        Self {
            target: value.clone(),
            value,
            rate,
        }
    }

    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    pub fn step(&mut self, dt: f64) -> &T {
        let k = smoothing_factor(dt, self.rate);
        self.value = T::lerp(&self.value, &self.target, k);
        &self.value
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
