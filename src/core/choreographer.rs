//! Per-frame camera pose computation.
//!
//! The choreographer owns the camera pose and moves it with one of three
//! mutually exclusive drivers: a scripted [`Flight`], an automatic circular
//! orbit, or a keyboard-driven manual orbit. A flight in progress always
//! takes precedence over the orbit mode requested by the stage.

use super::camera::CameraPose;
use super::constants::*;
use super::flight::{Flight, FlightPath};
use super::input::KeyState;
use super::stage::ViewStage;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotationMode {
    /// Pose is left where it is.
    Hold,
    Automatic,
    Manual,
}

/// Orbit mode used while the visitor is in `stage`.
pub fn rotation_mode_for(stage: ViewStage) -> RotationMode {
    match stage {
        ViewStage::Entry | ViewStage::TransitioningToPortfolio => RotationMode::Hold,
        ViewStage::Portfolio | ViewStage::NavigationVisible => RotationMode::Manual,
        ViewStage::PanelOpen(_) => RotationMode::Automatic,
    }
}

/// Angle of `eye` around `center` in the XZ plane, matching `center + r*(sin, 0, cos)`.
#[inline]
pub fn orbit_angle(center: Vec3, eye: Vec3) -> f32 {
    (eye.x - center.x).atan2(eye.z - center.z)
}

#[inline]
fn orbit_pose(center: Vec3, radius: f32, angle: f32) -> CameraPose {
    let eye = center + Vec3::new(angle.sin(), 0.0, angle.cos()) * radius;
    CameraPose::looking_at(eye, center)
}

/// Constant-speed orbit that always faces its center.
#[derive(Clone, Debug)]
pub struct AutoOrbit {
    pub center: Vec3,
    pub radius: f32,
    /// Radians per 60 Hz frame.
    pub speed: f32,
    angle: Option<f32>,
}

impl AutoOrbit {
    pub fn new(center: Vec3, radius: f32, speed: f32) -> Self {
        Self {
            center,
            radius,
            speed,
            angle: None,
        }
    }

    pub fn anchor(&mut self, eye: Vec3) {
        self.angle = Some(orbit_angle(self.center, eye));
    }

    pub fn release(&mut self) {
        self.angle = None;
    }

    pub fn angle(&self) -> Option<f32> {
        self.angle
    }

    pub fn step(&mut self, dt_sec: f32) -> CameraPose {
        let frames = dt_sec.max(0.0) * FRAMES_PER_SEC;
        let angle = self.angle.unwrap_or(0.0) + self.speed * frames;
        self.angle = Some(angle);
        orbit_pose(self.center, self.radius, angle)
    }
}

/// Orbit whose angular velocity follows the held arrow keys.
#[derive(Clone, Debug)]
pub struct ManualOrbit {
    pub center: Vec3,
    pub radius: f32,
    pub max_speed: f32,
    pub accel_gain: f32,
    pub decel_gain: f32,
    pub stop_epsilon: f32,
    angle: Option<f32>,
    velocity: f32,
}

impl ManualOrbit {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            max_speed: MANUAL_MAX_SPEED,
            accel_gain: MANUAL_ACCEL_GAIN,
            decel_gain: MANUAL_DECEL_GAIN,
            stop_epsilon: MANUAL_STOP_EPSILON,
            angle: None,
            velocity: 0.0,
        }
    }

    pub fn anchor(&mut self, eye: Vec3) {
        self.angle = Some(orbit_angle(self.center, eye));
        self.velocity = 0.0;
    }

    pub fn release(&mut self) {
        self.angle = None;
        self.velocity = 0.0;
    }

    pub fn angle(&self) -> Option<f32> {
        self.angle
    }

    /// Radians per 60 Hz frame.
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn step(&mut self, dt_sec: f32, keys: &KeyState) -> CameraPose {
        let frames = dt_sec.max(0.0) * FRAMES_PER_SEC;
        let target = keys.direction() * self.max_speed;
        if target != 0.0 {
            let alpha = 1.0 - (1.0 - self.accel_gain).powf(frames);
            self.velocity += (target - self.velocity) * alpha;
        } else {
            self.velocity *= (1.0 - self.decel_gain).powf(frames);
            if self.velocity.abs() < self.stop_epsilon {
                self.velocity = 0.0;
            }
        }
        let angle = self.angle.unwrap_or(0.0) + self.velocity * frames;
        self.angle = Some(angle);
        orbit_pose(self.center, self.radius, angle)
    }
}

/// Output of one choreographer frame.
#[derive(Clone, Copy, Debug)]
pub struct ChoreoFrame {
    pub pose: CameraPose,
    /// True on the single frame a scripted flight lands.
    pub flight_completed: bool,
}

pub struct Choreographer {
    pose: CameraPose,
    mode: RotationMode,
    auto: AutoOrbit,
    manual: ManualOrbit,
    flight: Option<Flight>,
    flight_duration_sec: f32,
}

impl Choreographer {
    pub fn new(pose: CameraPose, auto: AutoOrbit, manual: ManualOrbit) -> Self {
        Self {
            pose,
            mode: RotationMode::Hold,
            auto,
            manual,
            flight: None,
            flight_duration_sec: FLIGHT_DURATION_SEC,
        }
    }

    /// Choreographer laid out for a ground plane at `plane_y`.
    pub fn for_scene(plane_y: f32) -> Self {
        let center = Vec3::new(SCENE_CENTER_X, plane_y + PORTFOLIO_HEIGHT, PORTFOLIO_Z);
        Self::new(
            CameraPose::initial(plane_y),
            AutoOrbit::new(center, MANUAL_ORBIT_RADIUS, AUTO_ORBIT_SPEED),
            ManualOrbit::new(center, MANUAL_ORBIT_RADIUS),
        )
    }

    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn is_flying(&self) -> bool {
        self.flight.is_some()
    }

    pub fn manual(&self) -> &ManualOrbit {
        &self.manual
    }

    pub fn auto(&self) -> &AutoOrbit {
        &self.auto
    }

    pub fn start_flight(&mut self, path: FlightPath) {
        log::info!("[camera] flight {:?} from z={:.0}", path, self.pose.eye.z);
        self.flight = Some(Flight::new(self.pose, path, self.flight_duration_sec));
    }

    /// Switch orbit mode. Entering an orbit re-anchors its angle to the
    /// current eye so the camera does not jump. Returns true if the mode changed.
    pub fn set_mode(&mut self, mode: RotationMode) -> bool {
        if mode == self.mode {
            return false;
        }
        match self.mode {
            RotationMode::Automatic => self.auto.release(),
            RotationMode::Manual => self.manual.release(),
            RotationMode::Hold => {}
        }
        match mode {
            RotationMode::Automatic => self.auto.anchor(self.pose.eye),
            RotationMode::Manual => self.manual.anchor(self.pose.eye),
            RotationMode::Hold => {}
        }
        log::info!("[camera] mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        true
    }

    pub fn update(&mut self, dt_sec: f32, keys: &KeyState) -> ChoreoFrame {
        if let Some(flight) = self.flight.as_mut() {
            let step = flight.step(dt_sec);
            self.pose = step.pose;
            if step.just_completed {
                self.flight = None;
                // re-anchor whatever orbit is active against the landed pose
                match self.mode {
                    RotationMode::Automatic => self.auto.anchor(self.pose.eye),
                    RotationMode::Manual => self.manual.anchor(self.pose.eye),
                    RotationMode::Hold => {}
                }
            }
            return ChoreoFrame {
                pose: self.pose,
                flight_completed: step.just_completed,
            };
        }
        self.pose = match self.mode {
            RotationMode::Hold => self.pose,
            RotationMode::Automatic => self.auto.step(dt_sec),
            RotationMode::Manual => self.manual.step(dt_sec, keys),
        };
        ChoreoFrame {
            pose: self.pose,
            flight_completed: false,
        }
    }
}
