/// Rendering and post-processing tuning constants.
///
/// Kept separate from the scene layout constants in `core::constants`, which
/// are shared with the platform-independent logic.
// Lighting
pub const SUN_DIRECTION: [f32; 3] = [100.0, 200.0, 100.0]; // toward the sun, normalized in-shader
pub const SUN_INTENSITY: f32 = 2.0;
pub const RIM_DIRECTION: [f32; 3] = [-50.0, 50.0, -100.0];
pub const RIM_INTENSITY: f32 = 0.8;
pub const AMBIENT_INTENSITY: f32 = 0.3;
pub const HEMI_INTENSITY: f32 = 0.8;

// Environment backdrop
pub const BACKDROP_INTENSITY: f32 = 0.15;
pub const ENVIRONMENT_INTENSITY: f32 = 0.3;

// Model tints (linear), multiplied with lighting
pub const HOUSE_TINT: [f32; 4] = [0.78, 0.62, 0.48, 1.0];
pub const PINE_TINT: [f32; 4] = [0.16, 0.36, 0.20, 1.0];
pub const STYLIZED_TINT: [f32; 4] = [0.36, 0.52, 0.22, 1.0];

// Particle sprites
pub const PARTICLE_OPACITY: f32 = 0.9;
// world size multiplier; tan(fov/2) makes sprites match attenuated point sizes
pub const PARTICLE_WORLD_SCALE: f32 = 0.47;

// Post-processing (bloom)
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_THRESHOLD: f32 = 0.2;
pub const BLOOM_SMOOTHING: f32 = 0.9;

// Chromatic aberration offset in UV units
pub const ABERRATION_OFFSET: [f32; 2] = [0.002, 0.002];

// Upper bound for a single frame step; longer stalls (tab switch) are clamped
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Canvas pixel ratio cap (matches dpr=[1, 1.5])
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 1.5;
