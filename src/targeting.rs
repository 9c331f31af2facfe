use glam::{IVec3, Vec3};

use crate::{
    collision::{Aabb, Ray},
    world::VoxelWorld,
};

/// Result of aiming at the world: the block entered by the crosshair ray
/// and the axis-aligned face it was entered through.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    pub coord: IVec3,
    pub normal: IVec3,
    pub distance: f32,
}

/// Casts a ray against the unit cubes of the visible set and returns the
/// nearest hit. The candidate set is exactly the renderer's visibility
/// window, so edits can never target a block the player cannot see.
///
/// The visible set may lag one refresh interval behind world edits, so
/// coordinates no longer present in the world are skipped.
pub fn raycast_visible(
    origin: Vec3,
    direction: Vec3,
    visible: &[IVec3],
    world: &VoxelWorld,
) -> Option<RayHit> {
    let ray = Ray::new(origin, direction.normalize());
    let mut closest: Option<RayHit> = None;
    for &coord in visible {
        if !world.contains(coord) {
            continue;
        }
        if let Some((t, normal)) = ray.intersect_aabb(&Aabb::unit_cube(coord)) {
            if t < 0.0 {
                continue;
            }
            if closest.as_ref().map_or(true, |hit| t < hit.distance) {
                closest = Some(RayHit {
                    coord,
                    normal,
                    distance: t,
                });
            }
        }
    }
    closest
}
