use super::camera::CameraPose;
use glam::Vec3;

/// Shape of a scripted camera move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlightPath {
    /// Slide along Z to `target_z`; X, Y and the view direction stay fixed.
    AlongZ { target_z: f32 },
    /// Move `distance` along the camera's horizontal facing direction.
    Forward { distance: f32 },
}

/// Quadratic ease-in-out on [0, 1].
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Fixed-duration eased move between two camera states.
///
/// The pose is a pure function of elapsed time. Completion is reported by
/// exactly one call to [`Flight::step`], the first one that reaches progress 1.
#[derive(Clone, Debug)]
pub struct Flight {
    start: CameraPose,
    offset: Vec3,
    duration_sec: f32,
    elapsed_sec: f32,
    completed: bool,
}

/// Result of advancing a flight by one frame.
#[derive(Clone, Copy, Debug)]
pub struct FlightStep {
    pub pose: CameraPose,
    pub progress: f32,
    pub just_completed: bool,
}

impl Flight {
    pub fn new(start: CameraPose, path: FlightPath, duration_sec: f32) -> Self {
        let offset = match path {
            FlightPath::AlongZ { target_z } => Vec3::new(0.0, 0.0, target_z - start.eye.z),
            FlightPath::Forward { distance } => {
                let f = start.forward();
                let flat = Vec3::new(f.x, 0.0, f.z).normalize_or_zero();
                flat * distance
            }
        };
        Self {
            start,
            offset,
            duration_sec: duration_sec.max(1e-3),
            elapsed_sec: 0.0,
            completed: false,
        }
    }

    pub fn progress(&self) -> f32 {
        (self.elapsed_sec / self.duration_sec).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Pose at the current progress. The view direction is kept from the start pose.
    pub fn pose(&self) -> CameraPose {
        let delta = self.offset * ease_in_out_quad(self.progress());
        CameraPose {
            eye: self.start.eye + delta,
            target: self.start.target + delta,
            up: self.start.up,
        }
    }

    pub fn step(&mut self, dt_sec: f32) -> FlightStep {
        self.elapsed_sec += dt_sec.max(0.0);
        let progress = self.progress();
        let just_completed = progress >= 1.0 && !self.completed;
        if just_completed {
            self.completed = true;
        }
        FlightStep {
            pose: self.pose(),
            progress,
            just_completed,
        }
    }
}
