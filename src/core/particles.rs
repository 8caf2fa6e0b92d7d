use super::constants::*;
use rand::Rng;

/// GPU-ready particle record; the renderer uploads the slice as instance data.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 4],
}

/// Convert HSL (all components in [0, 1]) to an RGB triple.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let q = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    ]
}

#[inline]
fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * 6.0 * (2.0 / 3.0 - t)
    } else {
        p
    }
}

/// Fixed-size buffer of drifting, hue-cycling points.
///
/// Motion is a per-frame sinusoidal offset keyed on render time and particle
/// index; there is no lifetime, collision or spatial structure.
pub struct ParticleField {
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| {
                let x = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_X;
                let y = rng.gen::<f32>() * PARTICLE_SPAN_Y + PARTICLE_MIN_Y;
                let z = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD_Z;
                let [r, g, b] = hsl_to_rgb(rng.gen::<f32>(), PARTICLE_SATURATION, PARTICLE_LIGHTNESS);
                Particle {
                    position: [x, y, z],
                    size: rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_MIN_SIZE,
                    color: [r, g, b, 1.0],
                }
            })
            .collect();
        Self { particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Apply one frame of drift and recolor at render time `time_sec`.
    pub fn update(&mut self, time_sec: f64) {
        for (i, p) in self.particles.iter_mut().enumerate() {
            let fi = i as f64;
            // occasionally flip the bob direction
            let flip = if (time_sec * 0.1 + fi * 0.001).sin() > 0.9 { -1.0 } else { 1.0 };
            p.position[1] += ((time_sec * 0.5 + fi).sin() * 0.5 * flip) as f32;
            p.position[0] += ((time_sec * 0.3 + fi).sin() * 0.15) as f32;
            p.position[2] += ((time_sec * 0.3 + fi).cos() * 0.15) as f32;

            let hue = (time_sec * 0.1 + fi * 0.001).rem_euclid(1.0) as f32;
            let [r, g, b] = hsl_to_rgb(hue, PARTICLE_SATURATION, PARTICLE_LIGHTNESS);
            p.color = [r, g, b, 1.0];
        }
    }
}
