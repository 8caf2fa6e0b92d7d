//! Camera description shared by the choreographer, the renderer and the
//! label projector. Nothing here touches platform APIs.

use super::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_START, ENTER_HEIGHT, ENTER_Z};
use glam::{Mat4, Vec3, Vec4};

/// Where the camera is and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl CameraPose {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
        }
    }

    /// Initial pose: behind the ENTER text, looking straight at it.
    pub fn initial(plane_y: f32) -> Self {
        let eye = CAMERA_START + Vec3::new(0.0, plane_y, 0.0);
        let target = Vec3::new(eye.x, plane_y + ENTER_HEIGHT, ENTER_Z);
        Self::looking_at(eye, target)
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

/// Right-handed perspective projection parameters.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Projection {
    pub fn new(aspect: f32) -> Self {
        Self {
            aspect,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }

    /// On-screen height in pixels of something `world_size` tall at view depth `depth`.
    pub fn pixels_per_unit(&self, depth: f32, viewport_height: f32) -> f32 {
        let half = (self.fovy_radians * 0.5).tan().max(1e-6);
        viewport_height * 0.5 / (depth.max(1e-3) * half)
    }
}

/// A point projected into viewport pixel space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
    /// Distance along the view direction; always positive for visible points.
    pub depth: f32,
}

/// Project a world-space point into a `width` x `height` viewport (origin top-left).
///
/// Returns `None` for points behind the camera or outside the clip depth range.
pub fn project_to_screen(
    pose: &CameraPose,
    projection: &Projection,
    point: Vec3,
    width: f32,
    height: f32,
) -> Option<ScreenPoint> {
    let view = pose.view_matrix();
    let view_pos = view.transform_point3(point);
    let depth = -view_pos.z;
    if depth <= projection.znear || depth >= projection.zfar {
        return None;
    }
    let clip = projection.matrix() * Vec4::new(view_pos.x, view_pos.y, view_pos.z, 1.0);
    if clip.w <= 0.0 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(ScreenPoint {
        x: (ndc.x * 0.5 + 0.5) * width,
        y: (0.5 - ndc.y * 0.5) * height,
        depth,
    })
}
