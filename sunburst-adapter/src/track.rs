use crate::{ArcShape, Easing, Lerp, Tween};

/// The previous/target pair of one animated value.
///
/// A new target arriving mid-animation re-bases from the currently sampled value, so rapid
/// clicks never jump.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track<T> {
    previous: T,
    target: T,
    tween: Option<Tween<T>>,
}

impl<T: Lerp> Track<T> {
    /// A settled track at `value`.
    pub fn new(value: T) -> Self {
        Self {
            previous: value,
            target: value,
            tween: None,
        }
    }

    pub fn previous(&self) -> T {
        self.previous
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn tween(&self) -> Option<&Tween<T>> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self, now_ms: u64) -> bool {
        self.tween.is_some_and(|t| !t.is_done(now_ms))
    }

    /// Eased progress of the running transition; `1.0` when settled.
    pub fn progress(&self, now_ms: u64) -> f64 {
        self.tween.map_or(1.0, |t| t.progress(now_ms))
    }

    pub fn sample(&self, now_ms: u64) -> T {
        self.tween.map_or(self.target, |t| t.sample(now_ms))
    }

    pub fn retarget(&mut self, now_ms: u64, target: T, duration_ms: u64, easing: Easing) {
        let current = self.sample(now_ms);
        self.previous = current;
        self.target = target;
        self.tween = Some(Tween::new(current, target, now_ms, duration_ms, easing));
    }

    /// Drops a finished tween. Returns whether the track is still animating.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.tween.is_some_and(|t| t.is_done(now_ms)) {
            self.tween = None;
        }
        self.tween.is_some()
    }

    /// Jumps to the target.
    pub fn finish(&mut self) {
        self.tween = None;
    }
}

impl Track<ArcShape> {
    /// Whether the arc is drawn at `now_ms`.
    ///
    /// While animating, an arc is hidden only if it starts and ends collapsed. Once settled it is
    /// hidden exactly when the target is collapsed.
    pub fn is_visible(&self, now_ms: u64) -> bool {
        if self.is_animating(now_ms) {
            !(self.previous.is_collapsed() && self.target.is_collapsed())
        } else {
            !self.target.is_collapsed()
        }
    }
}
