// Host-side tests for the visitor stage machine and label fades.
// `core` builds on every target, so these link against the library directly.

use portfolio_web::core::fade::Fade;
use portfolio_web::core::stage::SceneEffects;
use portfolio_web::core::{Label, SceneEffect, SceneState, Section, StageEvent, ViewStage};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FRAME: f32 = 1.0 / 60.0;

fn run_frames(scene: &mut SceneState, frames: usize) -> Vec<SceneEffect> {
    let mut out = Vec::new();
    for _ in 0..frames {
        out.extend(scene.update(FRAME));
    }
    out
}

/// Walk the happy path up to the navigation words.
fn reach_navigation() -> SceneState {
    let mut scene = SceneState::new();
    scene.advance(StageEvent::ClickEntry);
    run_frames(&mut scene, 60);
    scene.flight_completed();
    scene.advance(StageEvent::ClickPortfolio);
    run_frames(&mut scene, 60);
    assert_eq!(scene.stage(), ViewStage::NavigationVisible);
    scene
}

const ALL_EVENTS: [StageEvent; 6] = [
    StageEvent::ClickEntry,
    StageEvent::ClickPortfolio,
    StageEvent::SelectSection(Section::Work),
    StageEvent::SelectSection(Section::About),
    StageEvent::SelectSection(Section::Contact),
    StageEvent::ClosePanel,
];

#[test]
fn starts_at_entry_with_enter_visible() {
    let scene = SceneState::new();
    assert_eq!(scene.stage(), ViewStage::Entry);
    assert_eq!(scene.mounted_labels().as_slice(), &[Label::Enter]);
    assert_eq!(scene.label_opacity(Label::Enter), 1.0);
    assert_eq!(scene.label_opacity(Label::Portfolio), 0.0);
    assert_eq!(scene.prompt(), Some("Click ENTER"));
}

#[test]
fn click_entry_starts_flight_and_cross_fade() {
    let mut scene = SceneState::new();
    let fx = scene.advance(StageEvent::ClickEntry);
    assert_eq!(scene.stage(), ViewStage::TransitioningToPortfolio);
    assert!(fx.contains(&SceneEffect::BeginFlight));
    assert!(fx.contains(&SceneEffect::StageChanged(ViewStage::TransitioningToPortfolio)));

    // both words are mounted while they cross-fade
    assert!(scene.is_mounted(Label::Enter));
    assert!(scene.is_mounted(Label::Portfolio));
    assert_eq!(scene.label_opacity(Label::Portfolio), 0.0);

    run_frames(&mut scene, 15);
    let enter = scene.label_opacity(Label::Enter);
    let portfolio = scene.label_opacity(Label::Portfolio);
    assert!(enter > 0.0 && enter < 1.0);
    assert!(portfolio > 0.0 && portfolio < 1.0);

    // the fade takes 0.6 s; ENTER unmounts once it reaches zero
    run_frames(&mut scene, 30);
    assert!(!scene.is_mounted(Label::Enter));
    assert_eq!(scene.label_opacity(Label::Portfolio), 1.0);
    // still waiting on the camera
    assert_eq!(scene.stage(), ViewStage::TransitioningToPortfolio);
}

#[test]
fn flight_completion_reaches_portfolio_once() {
    let mut scene = SceneState::new();
    scene.advance(StageEvent::ClickEntry);
    let fx = scene.flight_completed();
    assert_eq!(fx.as_slice(), &[SceneEffect::StageChanged(ViewStage::Portfolio)]);
    assert!(scene.flight_completed().is_empty());
    assert_eq!(scene.prompt(), Some("Click PORTFOLIO • Use ← → arrow keys to rotate"));
}

#[test]
fn flight_completion_outside_transition_is_ignored() {
    let mut scene = SceneState::new();
    assert!(scene.flight_completed().is_empty());
    assert_eq!(scene.stage(), ViewStage::Entry);
}

#[test]
fn portfolio_click_swaps_to_navigation_after_fade() {
    let mut scene = SceneState::new();
    scene.advance(StageEvent::ClickEntry);
    run_frames(&mut scene, 60);
    scene.flight_completed();

    let fx = scene.advance(StageEvent::ClickPortfolio);
    assert!(fx.is_empty());
    assert_eq!(scene.stage(), ViewStage::Portfolio);

    // a second click while fading does nothing new
    assert!(scene.advance(StageEvent::ClickPortfolio).is_empty());

    let fx = run_frames(&mut scene, 60);
    assert_eq!(scene.stage(), ViewStage::NavigationVisible);
    assert!(fx.contains(&SceneEffect::StageChanged(ViewStage::NavigationVisible)));
    assert!(!scene.is_mounted(Label::Portfolio));
    for s in Section::ALL {
        assert!(scene.is_mounted(Label::Nav(s)));
        assert_eq!(scene.label_opacity(Label::Nav(s)), 1.0);
    }
    assert_eq!(
        scene.prompt(),
        Some("Click WORK, ABOUT, or CONTACT • Use ← → arrow keys to rotate")
    );
}

#[test]
fn panels_open_and_close_from_navigation() {
    let mut scene = reach_navigation();

    let fx = scene.advance(StageEvent::SelectSection(Section::About));
    assert_eq!(scene.stage(), ViewStage::PanelOpen(Section::About));
    assert_eq!(scene.active_panel(), Some(Section::About));
    assert!(fx.contains(&SceneEffect::PanelOpened(Section::About)));
    assert_eq!(scene.prompt(), None);

    // another section while a panel is open is ignored
    assert!(scene.advance(StageEvent::SelectSection(Section::Work)).is_empty());
    assert_eq!(scene.active_panel(), Some(Section::About));

    let fx = scene.advance(StageEvent::ClosePanel);
    assert_eq!(scene.stage(), ViewStage::NavigationVisible);
    assert!(fx.contains(&SceneEffect::PanelClosed));
    assert_eq!(scene.active_panel(), None);

    // closing twice is a no-op
    assert!(scene.advance(StageEvent::ClosePanel).is_empty());
}

#[test]
fn close_then_select_switches_sections() {
    // the nav bar sends ClosePanel ahead of the new section
    let mut scene = reach_navigation();
    scene.advance(StageEvent::SelectSection(Section::Work));
    scene.advance(StageEvent::ClosePanel);
    scene.advance(StageEvent::SelectSection(Section::Contact));
    assert_eq!(scene.active_panel(), Some(Section::Contact));
}

#[test]
fn invalid_events_leave_state_untouched() {
    let mut scene = SceneState::new();
    for ev in [
        StageEvent::ClickPortfolio,
        StageEvent::SelectSection(Section::Work),
        StageEvent::ClosePanel,
    ] {
        let before = scene.clone();
        assert!(scene.advance(ev).is_empty());
        assert_eq!(scene.stage(), before.stage());
        assert_eq!(scene.mounted_labels(), before.mounted_labels());
    }

    scene.advance(StageEvent::ClickEntry);
    // a second ClickEntry must not restart the flight
    assert!(scene.advance(StageEvent::ClickEntry).is_empty());
    // a PORTFOLIO click during the flight waits for the landing
    assert!(scene.advance(StageEvent::ClickPortfolio).is_empty());
    run_frames(&mut scene, 60);
    assert_eq!(scene.stage(), ViewStage::TransitioningToPortfolio);
}

#[test]
fn portfolio_click_during_flight_is_kept_until_landing() {
    let mut scene = SceneState::new();
    scene.advance(StageEvent::ClickEntry);
    run_frames(&mut scene, 45);
    // the label is fully visible and prompted before the camera arrives
    assert_eq!(scene.label_opacity(Label::Portfolio), 1.0);
    assert!(scene.prompt().is_some_and(|p| p.starts_with("Click PORTFOLIO")));

    assert!(scene.advance(StageEvent::ClickPortfolio).is_empty());
    assert_eq!(scene.label_opacity(Label::Portfolio), 1.0);

    let fx = scene.flight_completed();
    assert_eq!(fx.as_slice(), &[SceneEffect::StageChanged(ViewStage::Portfolio)]);

    let fx = run_frames(&mut scene, 60);
    assert_eq!(fx, vec![SceneEffect::StageChanged(ViewStage::NavigationVisible)]);
    assert_eq!(scene.stage(), ViewStage::NavigationVisible);
    assert!(!scene.is_mounted(Label::Portfolio));
}

#[test]
fn landing_without_a_click_waits_at_portfolio() {
    let mut scene = SceneState::new();
    scene.advance(StageEvent::ClickEntry);
    run_frames(&mut scene, 45);
    scene.flight_completed();
    run_frames(&mut scene, 600);
    assert_eq!(scene.stage(), ViewStage::Portfolio);
    assert_eq!(scene.label_opacity(Label::Portfolio), 1.0);
}

#[test]
fn nav_bar_appears_with_the_navigation_words() {
    let mut scene = SceneState::new();
    assert!(!scene.nav_bar_visible());
    scene.advance(StageEvent::ClickEntry);
    run_frames(&mut scene, 60);
    scene.flight_completed();
    assert!(!scene.nav_bar_visible());

    scene.advance(StageEvent::ClickPortfolio);
    run_frames(&mut scene, 60);
    assert!(scene.nav_bar_visible());
    // stays available while a panel is open, so sections can be switched
    scene.advance(StageEvent::SelectSection(Section::Work));
    assert!(scene.nav_bar_visible());
}

fn has_begin_flight(fx: &SceneEffects) -> bool {
    fx.iter().any(|e| *e == SceneEffect::BeginFlight)
}

#[test]
fn random_event_sequences_only_move_forward() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut scene = SceneState::new();
        let mut flights = 0;
        let mut enter_gone = false;
        for _ in 0..300 {
            let before = scene.stage();
            match rng.gen_range(0..4) {
                0 => {
                    let ev = ALL_EVENTS[rng.gen_range(0..ALL_EVENTS.len())];
                    if has_begin_flight(&scene.advance(ev)) {
                        flights += 1;
                    }
                }
                1 => {
                    scene.flight_completed();
                }
                _ => {
                    scene.update(rng.gen_range(0.0..0.2));
                }
            }
            let after = scene.stage();
            // panels may close back to navigation; nothing else moves backward
            let panel_closed =
                matches!(before, ViewStage::PanelOpen(_)) && after == ViewStage::NavigationVisible;
            assert!(
                after.ordinal() >= before.ordinal() || panel_closed,
                "{:?} -> {:?}",
                before,
                after
            );
            // one step at a time, never skipping a stage
            if after != before && !panel_closed {
                assert_eq!(after.ordinal(), before.ordinal() + 1, "{:?} -> {:?}", before, after);
            }
            if before.ordinal() >= ViewStage::NavigationVisible.ordinal() {
                assert!(after.ordinal() >= ViewStage::NavigationVisible.ordinal());
            }

            if enter_gone {
                assert!(!scene.is_mounted(Label::Enter));
            }
            enter_gone |= !scene.is_mounted(Label::Enter);

            for label in [Label::Enter, Label::Portfolio, Label::Nav(Section::Work)] {
                let o = scene.label_opacity(label);
                assert!((0.0..=1.0).contains(&o));
                if !scene.is_mounted(label) {
                    assert_eq!(o, 0.0);
                }
            }
        }
        assert!(flights <= 1);
    }
}

#[test]
fn fade_is_monotonic_and_bounded() {
    let mut fade = Fade::at(0.0, 1.0 / 0.6);
    fade.fade_to(1.0);
    let mut last = fade.value();
    for _ in 0..100 {
        let v = fade.tick(FRAME);
        assert!(v >= last);
        assert!((0.0..=1.0).contains(&v));
        last = v;
    }
    assert!(fade.is_settled());
    assert_eq!(fade.value(), 1.0);

    // retargeting mid-way reverses from the current value
    fade.fade_to(0.0);
    fade.tick(0.3);
    let mid = fade.value();
    assert!((mid - 0.5).abs() < 1e-4);
    fade.fade_to(1.0);
    assert!(fade.tick(0.1) > mid);
}

#[test]
fn fade_is_frame_rate_independent() {
    let mut coarse = Fade::at(1.0, 2.0);
    let mut fine = Fade::at(1.0, 2.0);
    coarse.fade_to(0.0);
    fine.fade_to(0.0);
    coarse.tick(0.25);
    for _ in 0..25 {
        fine.tick(0.01);
    }
    assert!((coarse.value() - fine.value()).abs() < 1e-4);
}

#[test]
fn fade_clamps_inputs() {
    let mut fade = Fade::at(3.0, 1.0);
    assert_eq!(fade.value(), 1.0);
    fade.fade_to(-2.0);
    assert_eq!(fade.target(), 0.0);
    fade.tick(-1.0);
    assert_eq!(fade.value(), 1.0);
    fade.set(f32::NAN);
    assert_eq!(fade.value(), 0.0);
}

#[test]
fn labels_map_to_their_events() {
    assert_eq!(Label::Enter.event(), StageEvent::ClickEntry);
    assert_eq!(Label::Portfolio.event(), StageEvent::ClickPortfolio);
    assert_eq!(
        Label::Nav(Section::Contact).event(),
        StageEvent::SelectSection(Section::Contact)
    );
    assert_eq!(Label::Nav(Section::About).text(), "ABOUT");
    for s in Section::ALL {
        assert_eq!(Section::from_slug(s.slug()), Some(s));
    }
    assert_eq!(Section::from_slug("home"), None);
}
