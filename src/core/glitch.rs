use super::constants::{GLITCH_DELAY_SEC, GLITCH_DURATION_SEC, GLITCH_STRENGTH};
use rand::Rng;

#[inline]
fn sample<R: Rng + ?Sized>(rng: &mut R, range: [f32; 2]) -> f32 {
    range[0] + rng.gen::<f32>() * (range[1] - range[0])
}

/// Sporadic glitch scheduler: idle for a random delay, then a short burst at
/// a random strength, repeat.
#[derive(Clone, Debug)]
pub struct GlitchTimer {
    remaining_sec: f32,
    active: bool,
    strength: f32,
    enabled: bool,
}

impl GlitchTimer {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, enabled: bool) -> Self {
        Self {
            remaining_sec: sample(rng, GLITCH_DELAY_SEC),
            active: false,
            strength: 0.0,
            enabled,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by `dt_sec` and return the strength to apply this frame (0 when idle).
    pub fn tick<R: Rng + ?Sized>(&mut self, dt_sec: f32, rng: &mut R) -> f32 {
        if !self.enabled {
            return 0.0;
        }
        self.remaining_sec -= dt_sec.max(0.0);
        while self.remaining_sec <= 0.0 {
            if self.active {
                self.active = false;
                self.strength = 0.0;
                self.remaining_sec += sample(rng, GLITCH_DELAY_SEC);
            } else {
                self.active = true;
                self.strength = sample(rng, GLITCH_STRENGTH);
                self.remaining_sec += sample(rng, GLITCH_DURATION_SEC);
            }
        }
        self.strength
    }
}
