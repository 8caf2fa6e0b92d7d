pub mod assets;
pub mod camera;
pub mod choreographer;
pub mod config;
pub mod constants;
pub mod fade;
pub mod flight;
pub mod font;
pub mod glitch;
pub mod input;
pub mod layout;
pub mod mesh;
pub mod panels;
pub mod particles;
pub mod placement;
pub mod stage;
pub mod terrain;

pub use assets::{AssetError, AssetId, LoadProgress};
pub use camera::{CameraPose, Projection};
pub use choreographer::{rotation_mode_for, Choreographer, RotationMode};
pub use config::SceneConfig;
pub use stage::{Label, SceneEffect, SceneState, Section, StageEvent, ViewStage};

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static PARTICLES_WGSL: &str = include_str!("../../shaders/particles.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
