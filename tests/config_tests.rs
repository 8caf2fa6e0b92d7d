// Host-side tests for query-string configuration and the glitch scheduler.
// `core` builds on every target, so these link against the library directly.

use portfolio_web::core::flight::FlightPath;
use portfolio_web::core::glitch::GlitchTimer;
use portfolio_web::core::SceneConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn defaults() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.seed, 42);
    assert_eq!(cfg.particle_count, 50_000);
    assert_eq!(cfg.tree_target, 75);
    assert_eq!(cfg.stylized_ratio, 0.25);
    assert_eq!(cfg.entry_flight, FlightPath::AlongZ { target_z: -4000.0 });
    assert!(cfg.glitch);
    assert_eq!(SceneConfig::from_query(""), cfg);
    assert_eq!(SceneConfig::from_query("?"), cfg);
}

#[test]
fn query_overrides() {
    let cfg = SceneConfig::from_query(
        "?seed=7&particles=1000&trees=10&stylized=0.5&flight=forward&glitch=off",
    );
    assert_eq!(cfg.seed, 7);
    assert_eq!(cfg.particle_count, 1000);
    assert_eq!(cfg.tree_target, 10);
    assert_eq!(cfg.stylized_ratio, 0.5);
    assert_eq!(cfg.entry_flight, FlightPath::Forward { distance: 2000.0 });
    assert!(!cfg.glitch);

    let params = cfg.placement_params();
    assert_eq!(params.tree_target, 10);
    assert_eq!(params.stylized_ratio, 0.5);
    assert_eq!(params.house_count, 6);
}

#[test]
fn query_without_leading_question_mark() {
    let cfg = SceneConfig::from_query("flight=z&glitch=1");
    assert_eq!(cfg.entry_flight, FlightPath::AlongZ { target_z: -4000.0 });
    assert!(cfg.glitch);
}

#[test]
fn oversized_values_are_capped() {
    let cfg = SceneConfig::from_query("particles=99999999&trees=100000&stylized=4");
    assert_eq!(cfg.particle_count, 200_000);
    assert_eq!(cfg.tree_target, 500);
    assert_eq!(cfg.stylized_ratio, 1.0);

    let cfg = SceneConfig::from_query("stylized=-1");
    assert_eq!(cfg.stylized_ratio, 0.0);
}

#[test]
fn malformed_values_are_ignored() {
    let cfg = SceneConfig::from_query(
        "seed=abc&particles=-5&stylized=NaN&flight=sideways&glitch=maybe&volume=11&&seed",
    );
    assert_eq!(cfg, SceneConfig::default());
}

#[test]
fn later_keys_win() {
    let cfg = SceneConfig::from_query("seed=1&seed=2");
    assert_eq!(cfg.seed, 2);
}

#[test]
fn disabled_glitch_never_fires() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut glitch = GlitchTimer::new(&mut rng, false);
    for _ in 0..6000 {
        assert_eq!(glitch.tick(1.0 / 60.0, &mut rng), 0.0);
    }
    assert!(!glitch.is_active());
}

#[test]
fn glitch_bursts_follow_the_schedule() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut glitch = GlitchTimer::new(&mut rng, true);

    // (active, frames) runs over two minutes at 60 Hz
    let mut runs: Vec<(bool, usize)> = Vec::new();
    for _ in 0..7200 {
        let strength = glitch.tick(1.0 / 60.0, &mut rng);
        let active = strength > 0.0;
        assert_eq!(active, glitch.is_active());
        if active {
            assert!((0.1..=0.3).contains(&strength), "strength {}", strength);
        }
        match runs.last_mut() {
            Some((a, n)) if *a == active => *n += 1,
            _ => runs.push((active, 1)),
        }
    }

    let bursts: Vec<usize> = runs.iter().filter(|r| r.0).map(|r| r.1).collect();
    assert!(bursts.len() >= 8, "only {} bursts", bursts.len());
    // drop the trailing run, which may be cut short
    for (active, frames) in &runs[..runs.len() - 1] {
        if *active {
            assert!((5..=19).contains(frames), "burst of {} frames", frames);
        } else {
            assert!((298..=602).contains(frames), "idle for {} frames", frames);
        }
    }
}
