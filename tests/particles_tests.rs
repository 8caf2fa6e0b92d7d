// Host-side tests for the particle field and HSL color conversion.
// `core` builds on every target, so these link against the library directly.

use portfolio_web::core::particles::{hsl_to_rgb, Particle, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_rgb(actual: [f32; 3], expected: [f32; 3]) {
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-5, "{:?} != {:?}", actual, expected);
    }
}

#[test]
fn hsl_primaries() {
    assert_rgb(hsl_to_rgb(0.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
    assert_rgb(hsl_to_rgb(1.0 / 3.0, 1.0, 0.5), [0.0, 1.0, 0.0]);
    assert_rgb(hsl_to_rgb(2.0 / 3.0, 1.0, 0.5), [0.0, 0.0, 1.0]);
    // hue wraps
    assert_rgb(hsl_to_rgb(1.0, 1.0, 0.5), [1.0, 0.0, 0.0]);
}

#[test]
fn hsl_particle_lightness() {
    // the particle palette: full saturation, 60% lightness
    assert_rgb(hsl_to_rgb(0.0, 1.0, 0.6), [1.0, 0.2, 0.2]);
    assert_rgb(hsl_to_rgb(0.5, 1.0, 0.6), [0.2, 1.0, 1.0]);
}

#[test]
fn hsl_grey_and_extremes() {
    assert_rgb(hsl_to_rgb(0.3, 0.0, 0.25), [0.25, 0.25, 0.25]);
    assert_rgb(hsl_to_rgb(0.7, 1.0, 0.0), [0.0, 0.0, 0.0]);
    assert_rgb(hsl_to_rgb(0.7, 1.0, 1.0), [1.0, 1.0, 1.0]);
}

#[test]
fn initial_particles_fill_the_volume() {
    let mut rng = StdRng::seed_from_u64(42);
    let field = ParticleField::new(2000, &mut rng);
    assert_eq!(field.len(), 2000);
    for p in field.particles() {
        let [x, y, z] = p.position;
        assert!((-4000.0..=4000.0).contains(&x));
        assert!((100.0..=1100.0).contains(&y));
        assert!((-5000.0..=5000.0).contains(&z));
        assert!((5.0..=20.0).contains(&p.size));
        assert_eq!(p.color[3], 1.0);
        assert!(p.color[..3].iter().all(|c| (0.0..=1.0).contains(c)));
    }
}

#[test]
fn drift_per_frame_is_small() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = ParticleField::new(500, &mut rng);
    let mut t = 0.0f64;
    for _ in 0..120 {
        let before: Vec<Particle> = field.particles().to_vec();
        t += 1.0 / 60.0;
        field.update(t);
        for (a, b) in before.iter().zip(field.particles()) {
            assert!((b.position[0] - a.position[0]).abs() <= 0.15 + 1e-3);
            assert!((b.position[1] - a.position[1]).abs() <= 0.5 + 1e-3);
            assert!((b.position[2] - a.position[2]).abs() <= 0.15 + 1e-3);
            assert_eq!(a.size, b.size);
        }
    }
}

#[test]
fn colors_cycle_with_time() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = ParticleField::new(10, &mut rng);
    field.update(0.0);
    let first = field.particles()[0].color;
    // hue advances 0.1 per second; half a cycle later the color differs
    field.update(5.0);
    assert_ne!(field.particles()[0].color, first);
    // a full cycle returns to the same hue
    field.update(10.0);
    let again = field.particles()[0].color;
    for (a, b) in first.iter().zip(again) {
        assert!((a - b).abs() < 1e-4);
    }
}

#[test]
fn empty_field_is_allowed() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut field = ParticleField::new(0, &mut rng);
    field.update(1.0);
    assert!(field.is_empty());
}
