//! Voxel picking by incremental lattice traversal (Amanatides–Woo).

use cubit_core::{MaterialId, VoxelSource, WorldCoord};
use glam::{IVec3, Vec3};

/// Distances beyond this are clamped; f32 steps stop advancing far out.
pub const MAX_RAY_DISTANCE: f32 = 65536.0;

/// Exclusive upper bound of a floored coordinate that fits in `i32` (2^31).
const GRID_END: f32 = 2_147_483_648.0;

/// First solid voxel along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Cell that was hit.
    pub voxel: WorldCoord,
    /// Outward normal of the face the ray crossed to enter `voxel`.
    /// Zero when the ray starts inside a solid voxel.
    pub normal: IVec3,
    /// Ray distance at which `voxel` was entered.
    pub distance: f32,
    pub material: MaterialId,
}

impl RayHit {
    /// Empty cell in front of the hit face, where a placed block goes.
    pub fn adjacent(&self) -> WorldCoord {
        self.voxel + self.normal
    }
}

/// Walk the grid from `origin` along `direction` and return the first
/// non-air voxel entered within `max_distance`.
///
/// `direction` need not be normalized. A zero or non-finite direction,
/// or a negative `max_distance`, yields no hit. So does an origin outside
/// the `i32` grid, and the walk ends as a miss when it reaches the grid's
/// edge. When two axes cross a grid plane at the same `t`, Z steps before
/// Y and Y before X.
pub fn intersect_ray<S: VoxelSource + ?Sized>(
    source: &S,
    origin: Vec3,
    direction: Vec3,
    max_distance: f32,
) -> Option<RayHit> {
    if !origin.is_finite() || max_distance.is_nan() || max_distance < 0.0 {
        return None;
    }
    let dir = direction.try_normalize()?;
    let max_distance = max_distance.min(MAX_RAY_DISTANCE);

    let floored = origin.floor();
    if floored.cmplt(Vec3::splat(-GRID_END)).any() || floored.cmpge(Vec3::splat(GRID_END)).any() {
        return None;
    }
    let mut cell = floored.as_ivec3();
    let step = IVec3::new(step_sign(dir.x), step_sign(dir.y), step_sign(dir.z));
    let t_delta = Vec3::new(axis_delta(dir.x), axis_delta(dir.y), axis_delta(dir.z));
    let mut t_max = Vec3::new(
        first_crossing(origin.x, cell.x, dir.x),
        first_crossing(origin.y, cell.y, dir.y),
        first_crossing(origin.z, cell.z, dir.z),
    );

    let mut t = 0.0;
    let mut normal = IVec3::ZERO;
    loop {
        let material = source.voxel(cell);
        if material.is_solid() {
            return Some(RayHit {
                voxel: cell,
                normal,
                distance: t,
                material,
            });
        }

        let axis = next_axis(t_max);
        t = t_max[axis];
        if t > max_distance {
            return None;
        }
        cell[axis] = cell[axis].checked_add(step[axis])?;
        t_max[axis] += t_delta[axis];
        normal = IVec3::ZERO;
        normal[axis] = -step[axis];
    }
}

fn step_sign(d: f32) -> i32 {
    if d > 0.0 {
        1
    } else if d < 0.0 {
        -1
    } else {
        0
    }
}

/// Ray distance between successive plane crossings on one axis.
fn axis_delta(d: f32) -> f32 {
    if d == 0.0 {
        f32::INFINITY
    } else {
        1.0 / d.abs()
    }
}

/// Ray distance to the first plane crossing on one axis.
fn first_crossing(origin: f32, cell: i32, d: f32) -> f32 {
    if d > 0.0 {
        (cell as f32 + 1.0 - origin) / d
    } else if d < 0.0 {
        (cell as f32 - origin) / d
    } else {
        f32::INFINITY
    }
}

/// Axis with the nearest crossing. Ties go to the later axis.
fn next_axis(t_max: Vec3) -> usize {
    if t_max.x < t_max.y {
        if t_max.x < t_max.z {
            0
        } else {
            2
        }
    } else if t_max.y < t_max.z {
        1
    } else {
        2
    }
}
