//! One-shot layout of the decorative houses and trees.
//!
//! Houses sit at equal angles on a ring around the scene center. Trees are
//! rejection-sampled inside angular windows centred between neighbouring
//! houses, with a minimum pairwise spacing. The attempt budget is bounded, so
//! fewer trees than requested may be placed.

use super::constants::*;
use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    House,
    PineTree,
    StylizedTree,
}

/// A decorative model instance. `position.y` is the ground plane height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
    pub variant: Variant,
}

#[derive(Clone, Debug)]
pub struct PlacementParams {
    pub center: Vec2, // (x, z)
    pub house_count: usize,
    pub house_radius: f32,
    pub house_scale: f32,
    pub tree_target: usize,
    pub tree_min_spacing: f32,
    pub gap_half_width: f32,
    pub attempts_per_tree: usize,
    pub attempts_total: usize,
    pub stylized_ratio: f32,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            center: Vec2::new(SCENE_CENTER_X, SCENE_CENTER_Z),
            house_count: HOUSE_COUNT,
            house_radius: HOUSE_RADIUS,
            house_scale: HOUSE_SCALE,
            tree_target: TREE_TARGET_COUNT,
            tree_min_spacing: TREE_MIN_SPACING,
            gap_half_width: TREE_GAP_HALF_WIDTH,
            attempts_per_tree: TREE_ATTEMPTS_PER_TREE,
            attempts_total: TREE_ATTEMPTS_TOTAL,
            stylized_ratio: STYLIZED_TREE_RATIO,
        }
    }
}

/// Houses evenly spaced around the center, each rotated to face inward.
pub fn place_houses(params: &PlacementParams, plane_y: f32) -> Vec<Placement> {
    let n = params.house_count.max(1);
    (0..params.house_count)
        .map(|i| {
            let angle = house_angle(i, n);
            Placement {
                position: Vec3::new(
                    params.center.x + angle.cos() * params.house_radius,
                    plane_y,
                    params.center.y + angle.sin() * params.house_radius,
                ),
                rotation_y: angle + PI,
                scale: params.house_scale,
                variant: Variant::House,
            }
        })
        .collect()
}

#[inline]
fn house_angle(i: usize, n: usize) -> f32 {
    (i as f32 / n as f32) * TAU
}

/// Angles halfway between consecutive houses.
pub fn gap_center_angles(house_count: usize) -> Vec<f32> {
    let n = house_count.max(1);
    let half_step = PI / n as f32;
    (0..house_count).map(|i| house_angle(i, n) + half_step).collect()
}

/// Smallest absolute difference between two angles, in [0, π].
#[inline]
pub fn angular_distance(a: f32, b: f32) -> f32 {
    let d = (a - b).rem_euclid(TAU);
    if d > PI {
        TAU - d
    } else {
        d
    }
}

pub fn in_gap(angle: f32, gaps: &[f32], half_width: f32) -> bool {
    gaps.iter().any(|g| angular_distance(angle, *g) < half_width)
}

/// Trees scattered in the gaps between houses.
pub fn place_trees<R: Rng + ?Sized>(params: &PlacementParams, plane_y: f32, rng: &mut R) -> Vec<Placement> {
    let gaps = gap_center_angles(params.house_count);
    let min_spacing_sq = params.tree_min_spacing * params.tree_min_spacing;
    let mut trees: Vec<Placement> = Vec::with_capacity(params.tree_target);
    let mut total_attempts = 0usize;

    for _ in 0..params.tree_target {
        if total_attempts >= params.attempts_total {
            break;
        }
        let mut found = None;
        let mut attempts = 0usize;
        while found.is_none() && attempts < params.attempts_per_tree && total_attempts < params.attempts_total {
            attempts += 1;
            total_attempts += 1;

            let angle = rng.gen::<f32>() * TAU;
            if !in_gap(angle, &gaps, params.gap_half_width) {
                continue;
            }
            let roll = rng.gen::<f32>().powf(TREE_DISTANCE_BIAS);
            let radius = TREE_MIN_RADIUS + roll * TREE_RADIUS_SPAN;
            let lateral = (rng.gen::<f32>() - 0.5) * radius * TREE_LATERAL_JITTER;
            let x = params.center.x + angle.cos() * radius + angle.sin() * lateral;
            let z = params.center.y + angle.sin() * radius - angle.cos() * lateral;

            let crowded = trees.iter().any(|t| {
                let dx = t.position.x - x;
                let dz = t.position.z - z;
                dx * dx + dz * dz < min_spacing_sq
            });
            if !crowded {
                found = Some((x, z));
            }
        }

        if let Some((x, z)) = found {
            let distance = Vec2::new(x, z).distance(params.center);
            let scale_multiplier = (distance / TREE_SCALE_DISTANCE_UNIT).max(1.0);
            let base_scale = TREE_BASE_SCALE_MIN + rng.gen::<f32>() * TREE_BASE_SCALE_SPAN;
            let rotation_y = rng.gen::<f32>() * TAU;
            let variant = if rng.gen::<f32>() < params.stylized_ratio {
                Variant::StylizedTree
            } else {
                Variant::PineTree
            };
            trees.push(Placement {
                position: Vec3::new(x, plane_y, z),
                rotation_y,
                scale: base_scale * scale_multiplier,
                variant,
            });
        }
    }

    log::info!(
        "[placement] trees={}/{} attempts={}",
        trees.len(),
        params.tree_target,
        total_attempts
    );
    trees
}

/// Houses followed by trees.
pub fn generate<R: Rng + ?Sized>(params: &PlacementParams, plane_y: f32, rng: &mut R) -> Vec<Placement> {
    let mut out = place_houses(params, plane_y);
    out.extend(place_trees(params, plane_y, rng));
    out
}
