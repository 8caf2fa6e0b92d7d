/// Linear opacity fade toward a target at a fixed rate.
///
/// Progress is driven by elapsed seconds, so a fade takes the same wall time
/// regardless of frame rate. The value never leaves [0, 1] and moves
/// monotonically toward the target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    value: f32,
    target: f32,
    rate_per_sec: f32,
}

impl Fade {
    /// A fade resting at `value` (clamped to [0, 1]).
    pub fn at(value: f32, rate_per_sec: f32) -> Self {
        let value = clamp01(value);
        Self {
            value,
            target: value,
            rate_per_sec: rate_per_sec.abs(),
        }
    }

    /// Retarget the fade, keeping the current opacity as the starting point.
    pub fn fade_to(&mut self, target: f32) {
        self.target = clamp01(target);
    }

    /// Jump straight to `value` with no animation.
    pub fn set(&mut self, value: f32) {
        self.value = clamp01(value);
        self.target = self.value;
    }

    /// Advance by `dt_sec`; returns the new value.
    pub fn tick(&mut self, dt_sec: f32) -> f32 {
        let step = self.rate_per_sec * dt_sec.max(0.0);
        if self.value < self.target {
            self.value = (self.value + step).min(self.target);
        } else if self.value > self.target {
            self.value = (self.value - step).max(self.target);
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }
}

#[inline]
fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}
