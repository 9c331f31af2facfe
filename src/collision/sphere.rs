use glam::{IVec3, Vec3};

use crate::world::VoxelWorld;

/// Tests whether a sphere overlaps any occupied voxel. Used for movement
/// clamping: callers propose a position per axis and revert on overlap.
///
/// Every stored block is solid for this test, water included. There is no
/// wading; liquids are volumetric obstacles just like stone.
pub fn sphere_intersects_world(world: &VoxelWorld, center: Vec3, radius: f32) -> bool {
    let radius_sq = radius * radius;
    let min = (center - radius).floor().as_ivec3();
    let max = (center + radius).floor().as_ivec3();
    for x in min.x..=max.x {
        for y in min.y..=max.y {
            for z in min.z..=max.z {
                let coord = IVec3::new(x, y, z);
                if !world.contains(coord) {
                    continue;
                }
                // Closest point on the unit cube to the sphere center
                let cube_min = coord.as_vec3();
                let closest = center.clamp(cube_min, cube_min + Vec3::ONE);
                if center.distance_squared(closest) < radius_sq {
                    return true;
                }
            }
        }
    }
    false
}
