/// Linear interpolation between two values of the same shape.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for kurbo::Point {
    fn lerp(self, to: Self, t: f64) -> Self {
        kurbo::Point::lerp(self, to, t)
    }
}

/// A time-based interpolation from one value to another.
///
/// A settled tween (`from == to`, or past its duration) samples to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween<T> {
    pub from: T,
    pub to: T,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    /// A tween that is already at `value`.
    pub fn settled(value: T, easing: Easing) -> Self {
        Self::new(value, value, 0, 1, easing)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self, now_ms: u64) -> f64 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        self.easing.sample(t)
    }

    pub fn sample(&self, now_ms: u64) -> T {
        if self.is_done(now_ms) {
            return self.to;
        }
        self.from.lerp(self.to, self.progress(now_ms))
    }

    /// Restarts towards `new_to` from the value sampled at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, new_to: T, duration_ms: u64) {
        let cur = self.sample(now_ms);
        *self = Self::new(cur, new_to, now_ms, duration_ms, self.easing);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    #[default]
    EaseInOutCubic,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
        }
    }
}
