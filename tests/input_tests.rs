// Host-side tests for keyboard mapping and screen projection.
// `core` builds on every target, so these link against the library directly.

use glam::Vec3;
use portfolio_web::core::camera::{project_to_screen, CameraPose, Projection};
use portfolio_web::core::input::{arrow_for_key, stage_event_for_key, Arrow, KeyState};
use portfolio_web::core::StageEvent;

#[test]
fn arrow_keys_map_to_directions() {
    assert_eq!(arrow_for_key("ArrowLeft"), Some(Arrow::Left));
    assert_eq!(arrow_for_key("ArrowRight"), Some(Arrow::Right));
    assert_eq!(arrow_for_key("ArrowUp"), None);
    assert_eq!(arrow_for_key("a"), None);
}

#[test]
fn escape_closes_panels() {
    assert_eq!(stage_event_for_key("Escape"), Some(StageEvent::ClosePanel));
    assert_eq!(stage_event_for_key("Enter"), None);
}

#[test]
fn key_state_direction() {
    let mut keys = KeyState::default();
    assert_eq!(keys.direction(), 0.0);
    keys.press(Arrow::Right);
    assert_eq!(keys.direction(), 1.0);
    keys.press(Arrow::Left);
    // left wins while both are held
    assert_eq!(keys.direction(), -1.0);
    keys.release(Arrow::Left);
    assert_eq!(keys.direction(), 1.0);
    keys.clear();
    assert_eq!(keys, KeyState::default());
}

#[test]
fn initial_pose_faces_the_enter_text() {
    let pose = CameraPose::initial(10.0);
    assert_eq!(pose.eye, Vec3::new(0.0, 210.0, -6000.0));
    assert_eq!(pose.target, Vec3::new(0.0, 210.0, -3000.0));
    assert!((pose.forward() - Vec3::Z).length() < 1e-6);
}

#[test]
fn look_target_projects_to_viewport_center() {
    let pose = CameraPose::initial(0.0);
    let projection = Projection::new(1600.0 / 900.0);
    let p = project_to_screen(&pose, &projection, pose.target, 1600.0, 900.0).expect("visible");
    assert!((p.x - 800.0).abs() < 1e-2);
    assert!((p.y - 450.0).abs() < 1e-2);
    assert!((p.depth - 3000.0).abs() < 1e-2);
}

#[test]
fn screen_axes_point_right_and_down() {
    let pose = CameraPose::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -100.0));
    let projection = Projection::new(1.0);
    let right = project_to_screen(&pose, &projection, Vec3::new(10.0, 0.0, -100.0), 500.0, 500.0)
        .expect("visible");
    let up = project_to_screen(&pose, &projection, Vec3::new(0.0, 10.0, -100.0), 500.0, 500.0)
        .expect("visible");
    assert!(right.x > 250.0);
    assert!(up.y < 250.0);
}

#[test]
fn points_behind_the_camera_are_hidden() {
    let pose = CameraPose::initial(0.0);
    let projection = Projection::new(1.0);
    let behind = Vec3::new(0.0, 200.0, -7000.0);
    assert!(project_to_screen(&pose, &projection, behind, 800.0, 800.0).is_none());
    let too_far = Vec3::new(0.0, 200.0, 600_000.0);
    assert!(project_to_screen(&pose, &projection, too_far, 800.0, 800.0).is_none());
}

#[test]
fn pixels_per_unit_matches_projection() {
    let pose = CameraPose::looking_at(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
    let projection = Projection::new(1.0);
    let height = 1000.0;
    let depth = 2500.0;
    let center = project_to_screen(&pose, &projection, Vec3::new(0.0, 0.0, -depth), height, height)
        .expect("visible");
    let raised = project_to_screen(&pose, &projection, Vec3::new(0.0, 100.0, -depth), height, height)
        .expect("visible");
    let ppu = projection.pixels_per_unit(depth, height);
    assert!(((center.y - raised.y) - 100.0 * ppu).abs() < 1e-2);
    // twice as far, half as large
    assert!((projection.pixels_per_unit(2.0 * depth, height) * 2.0 - ppu).abs() < 1e-6);
}
