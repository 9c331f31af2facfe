use glam::{IVec3, Vec3};

mod ray;
mod sphere;

pub use ray::Ray;
pub use sphere::sphere_intersects_world;

/// Axis-aligned box in world space.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Aabb {
        Self { min, max }
    }

    /// The unit cube addressed by a voxel coordinate.
    pub fn unit_cube(coord: IVec3) -> Aabb {
        let min = coord.as_vec3();
        Self {
            min,
            max: min + Vec3::ONE,
        }
    }
}
