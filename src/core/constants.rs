use glam::Vec3;

// Shared scene layout and choreography constants.

// Terrain
pub const PLANE_HEIGHT_FRACTION: f32 = 0.15; // ground sits 15% up the terrain's bounding box
pub const GROUND_SIZE: f32 = 100_000.0;
pub const GROUND_TEXTURE_REPEAT: f32 = 50.0;

// Scene center shared by the houses, the trees and the ENTER text (XZ plane)
pub const SCENE_CENTER_X: f32 = 0.0;
pub const SCENE_CENTER_Z: f32 = -3000.0;

// Text anchors (heights are relative to the ground plane)
pub const ENTER_Z: f32 = -3000.0;
pub const ENTER_HEIGHT: f32 = 200.0;
pub const ENTER_SIZE: f32 = 400.0;
pub const PORTFOLIO_Z: f32 = -1000.0;
pub const PORTFOLIO_HEIGHT: f32 = 200.0;
pub const PORTFOLIO_SIZE: f32 = 400.0;
pub const NAV_Z: f32 = -1000.0;
pub const NAV_HEIGHT: f32 = 300.0;
pub const NAV_SIZE: f32 = 240.0;
pub const NAV_GAP: f32 = 800.0; // equal gap between navigation words

// Fallback word widths at NAV_SIZE when no font metrics are available
pub const NAV_WIDTH_WORK: f32 = 600.0;
pub const NAV_WIDTH_ABOUT: f32 = 750.0;
pub const NAV_WIDTH_CONTACT: f32 = 1050.0;

// Section accent colors (sRGB)
pub const WORK_COLOR: [f32; 3] = [1.0, 0.420, 0.616]; // #ff6b9d
pub const ABOUT_COLOR: [f32; 3] = [0.306, 0.804, 0.769]; // #4ecdc4
pub const CONTACT_COLOR: [f32; 3] = [1.0, 0.902, 0.427]; // #ffe66d

// Opacity fades: 0.05 every 30 ms
pub const FADE_RATE_PER_SEC: f32 = 0.05 / 0.030;

// Camera
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 200.0, -6000.0);
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 500_000.0;
pub const FRAMES_PER_SEC: f32 = 60.0; // reference rate for per-frame tuning below

// Scripted flight
pub const FLIGHT_DURATION_SEC: f32 = 1.5;
pub const ENTRY_FLIGHT_TARGET_Z: f32 = -4000.0;
pub const ENTRY_FLIGHT_FORWARD_DISTANCE: f32 = 2000.0;

// Manual orbit (arrow keys), per 60 Hz frame
pub const MANUAL_ORBIT_RADIUS: f32 = 3000.0;
pub const MANUAL_MAX_SPEED: f32 = 0.03; // rad/frame
pub const MANUAL_ACCEL_GAIN: f32 = 0.02; // fraction of the velocity error closed per frame
pub const MANUAL_DECEL_GAIN: f32 = 0.01; // fraction of velocity lost per frame when released
pub const MANUAL_STOP_EPSILON: f32 = 0.0001; // below this the orbit snaps to rest

// Automatic orbit behind an open panel, per 60 Hz frame
pub const AUTO_ORBIT_SPEED: f32 = 0.002;

// Houses
pub const HOUSE_COUNT: usize = 6;
pub const HOUSE_RADIUS: f32 = 20_000.0;
pub const HOUSE_SCALE: f32 = 3.0;

// Trees
pub const TREE_TARGET_COUNT: usize = 75;
pub const TREE_MIN_SPACING: f32 = 20_000.0;
pub const TREE_GAP_HALF_WIDTH: f32 = 0.45; // rad around each gap center
pub const TREE_MIN_RADIUS: f32 = 25_000.0;
pub const TREE_RADIUS_SPAN: f32 = 375_000.0;
pub const TREE_DISTANCE_BIAS: f32 = 0.7; // u^0.7 biases trees toward the houses
pub const TREE_LATERAL_JITTER: f32 = 0.2; // fraction of radius, centered
pub const TREE_BASE_SCALE_MIN: f32 = 3000.0;
pub const TREE_BASE_SCALE_SPAN: f32 = 2000.0;
pub const TREE_SCALE_DISTANCE_UNIT: f32 = 50_000.0;
pub const TREE_ATTEMPTS_PER_TREE: usize = 100;
pub const TREE_ATTEMPTS_TOTAL: usize = 10_000;
pub const STYLIZED_TREE_RATIO: f32 = 0.25;

// Particles
pub const PARTICLE_COUNT: usize = 50_000;
pub const PARTICLE_SPREAD_X: f32 = 8000.0;
pub const PARTICLE_SPREAD_Z: f32 = 10_000.0;
pub const PARTICLE_MIN_Y: f32 = 100.0;
pub const PARTICLE_SPAN_Y: f32 = 1000.0;
pub const PARTICLE_MIN_SIZE: f32 = 5.0;
pub const PARTICLE_SIZE_SPAN: f32 = 15.0;
pub const PARTICLE_SATURATION: f32 = 1.0;
pub const PARTICLE_LIGHTNESS: f32 = 0.6;

// Sporadic glitch
pub const GLITCH_DELAY_SEC: [f32; 2] = [5.0, 10.0];
pub const GLITCH_DURATION_SEC: [f32; 2] = [0.1, 0.3];
pub const GLITCH_STRENGTH: [f32; 2] = [0.1, 0.3];

// Default seed for decorative placement and particles
pub const DEFAULT_SEED: u64 = 42;
