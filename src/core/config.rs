//! Runtime configuration, defaulted from `constants` and overridable from the
//! page's query string (e.g. `?seed=7&particles=20000&flight=forward`).

use super::constants::*;
use super::flight::FlightPath;
use super::placement::PlacementParams;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub seed: u64,
    pub particle_count: usize,
    pub tree_target: usize,
    pub stylized_ratio: f32,
    pub entry_flight: FlightPath,
    pub glitch: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            particle_count: PARTICLE_COUNT,
            tree_target: TREE_TARGET_COUNT,
            stylized_ratio: STYLIZED_TREE_RATIO,
            entry_flight: FlightPath::AlongZ {
                target_z: ENTRY_FLIGHT_TARGET_Z,
            },
            glitch: true,
        }
    }
}

const MAX_PARTICLES: usize = 200_000;
const MAX_TREES: usize = 500;

impl SceneConfig {
    /// Defaults with overrides from a `?key=value&...` query string.
    pub fn from_query(query: &str) -> Self {
        let mut cfg = Self::default();
        cfg.apply_query(query);
        cfg
    }

    pub fn apply_query(&mut self, query: &str) {
        let query = query.strip_prefix('?').unwrap_or(query);
        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if !self.apply(key, value) {
                log::warn!("[config] ignoring {}={:?}", key, value);
            }
        }
    }

    /// Apply one override; false if the key is unknown or the value malformed.
    fn apply(&mut self, key: &str, value: &str) -> bool {
        match key {
            "seed" => value.parse().map(|v| self.seed = v).is_ok(),
            "particles" => value
                .parse::<usize>()
                .map(|v| self.particle_count = v.min(MAX_PARTICLES))
                .is_ok(),
            "trees" => value
                .parse::<usize>()
                .map(|v| self.tree_target = v.min(MAX_TREES))
                .is_ok(),
            "stylized" => match value.parse::<f32>() {
                Ok(v) if v.is_finite() => {
                    self.stylized_ratio = v.clamp(0.0, 1.0);
                    true
                }
                _ => false,
            },
            "flight" => match value {
                "z" => {
                    self.entry_flight = FlightPath::AlongZ {
                        target_z: ENTRY_FLIGHT_TARGET_Z,
                    };
                    true
                }
                "forward" => {
                    self.entry_flight = FlightPath::Forward {
                        distance: ENTRY_FLIGHT_FORWARD_DISTANCE,
                    };
                    true
                }
                _ => false,
            },
            "glitch" => match value {
                "on" | "1" | "true" => {
                    self.glitch = true;
                    true
                }
                "off" | "0" | "false" => {
                    self.glitch = false;
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    pub fn placement_params(&self) -> PlacementParams {
        PlacementParams {
            tree_target: self.tree_target,
            stylized_ratio: self.stylized_ratio,
            ..PlacementParams::default()
        }
    }
}
