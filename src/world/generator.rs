use std::time::Instant;

use glam::IVec3;
use log::{debug, info};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Deserialize;

use super::VoxelWorld;
use crate::blocks::{self, BlockId};

/// Highest y probed when looking for a tree's ground block.
const TREE_SCAN_CEILING: i32 = 12;
/// Highest y probed when looking for a consumable's surface block.
const SURFACE_SCAN_CEILING: i32 = 20;
/// Lake columns are cleared from the ground up to this height.
const LAKE_CARVE_HEIGHT: i32 = 6;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Terrain covers `[-world_size/2, world_size/2)` on x and z.
    pub world_size: i32,
    pub tree_count: u32,
    pub lake_radius: i32,
    pub consumable_count: u32,
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        Self {
            world_size: 128,
            tree_count: 12,
            lake_radius: 6,
            consumable_count: 35,
            seed: 0,
        }
    }
}

/// Hash-based 2d value noise in [0, 1).
fn noise2d(x: f64, z: f64) -> f64 {
    let s = (x * 127.1 + z * 311.7).sin() * 43758.5453;
    s - s.floor()
}

/// Procedural startup terrain: height-noise columns with stone/dirt/grass
/// layering and ore pockets, a handful of trees, scattered consumables,
/// and one lake around the origin. Deterministic for a given seed.
pub struct WorldGenerator {
    config: GeneratorConfig,
}

impl WorldGenerator {
    pub fn new(config: GeneratorConfig) -> WorldGenerator {
        Self { config }
    }

    pub fn generate(&self, world: &mut VoxelWorld) {
        let start = Instant::now();
        let mut rng = StdRng::seed_from_u64(self.config.seed);
        self.generate_terrain(world);
        self.generate_trees(world, &mut rng);
        self.generate_consumables(world, &mut rng);
        // Lake carving runs last so it overrides terrain and cannot be
        // buried by trees or items
        self.carve_lake(world);
        info!(
            "World generation: {} blocks in {:.1}ms",
            world.len(),
            start.elapsed().as_secs_f32() * 1000.0
        );
    }

    /// Terrain column height at `(x, z)`.
    pub fn surface_height(&self, x: i32, z: i32) -> i32 {
        4 + (noise2d(x as f64 * 0.3, z as f64 * 0.3) * 5.0).floor() as i32
    }

    fn generate_terrain(&self, world: &mut VoxelWorld) {
        let half = self.config.world_size / 2;
        for x in -half..half {
            for z in -half..half {
                let h = self.surface_height(x, z);
                for y in 0..h {
                    let mut id = blocks::DIRT;
                    if y == h - 1 {
                        id = blocks::GRASS;
                    }
                    if y < h - 3 {
                        id = blocks::STONE;
                    }
                    if noise2d(x as f64 * 0.7, z as f64 * 0.7) > 0.86 && y < h - 2 {
                        id = blocks::ORE;
                    }
                    world.add_block(IVec3::new(x, y, z), id);
                }
                // Flat spots get a sand cap on the surface
                if h <= 4 && noise2d(x as f64, z as f64) > 0.35 {
                    world.add_block(IVec3::new(x, h, z), blocks::SAND);
                }
            }
        }
    }

    fn generate_trees(&self, world: &mut VoxelWorld, rng: &mut StdRng) {
        let half = self.config.world_size / 2;
        for _ in 0..self.config.tree_count {
            let x = rng.gen_range(-half..half);
            let z = rng.gen_range(-half..half);
            self.add_tree_at(world, x, z);
        }
    }

    fn add_tree_at(&self, world: &mut VoxelWorld, x: i32, z: i32) {
        let mut y_base = 0;
        for y in (0..=TREE_SCAN_CEILING).rev() {
            if world.contains(IVec3::new(x, y, z)) {
                y_base = y + 1;
                break;
            }
        }
        for i in 0..4 {
            world.add_block(IVec3::new(x, y_base + i, z), blocks::PLANKS);
        }
        // Diamond-shaped leaf cluster around the crown
        let crown_y = y_base + 3;
        for dx in -2..=2i32 {
            for dz in -2..=2i32 {
                for dy in 0..=2i32 {
                    if dx.abs() + dz.abs() + dy.abs() <= 4 {
                        world.add_block(IVec3::new(x + dx, crown_y + dy, z + dz), blocks::LEAVES);
                    }
                }
            }
        }
    }

    /// Topmost occupied y in a column plus one, and the surface block.
    /// Defaults to ground level for completely empty columns.
    fn find_surface(&self, world: &VoxelWorld, x: i32, z: i32) -> (i32, Option<BlockId>) {
        for y in (0..=SURFACE_SCAN_CEILING).rev() {
            if let Some(id) = world.get(IVec3::new(x, y, z)) {
                return (y + 1, Some(id));
            }
        }
        (1, None)
    }

    fn try_place_consumable(&self, world: &mut VoxelWorld, x: i32, z: i32) -> bool {
        let (y, surface) = self.find_surface(world, x, z);
        if surface == Some(blocks::WATER) {
            return false;
        }
        let coord = IVec3::new(x, y, z);
        if world.contains(coord) {
            return false;
        }
        world.add_block(coord, blocks::APPLE_PIE)
    }

    fn generate_consumables(&self, world: &mut VoxelWorld, rng: &mut StdRng) {
        let half = self.config.world_size / 2;
        let mut placed = 0;
        let mut attempts = 0;
        // Best effort: bounded retries, fewer items than requested is fine
        while placed < self.config.consumable_count && attempts < self.config.consumable_count * 6 {
            let x = rng.gen_range(-half..half);
            let z = rng.gen_range(-half..half);
            if self.try_place_consumable(world, x, z) {
                placed += 1;
            }
            attempts += 1;
        }
        if placed < self.config.consumable_count {
            debug!(
                "Placed {placed}/{} consumables after {attempts} attempts",
                self.config.consumable_count
            );
        }
    }

    fn carve_lake(&self, world: &mut VoxelWorld) {
        let r = self.config.lake_radius;
        for x in -r..=r {
            for z in -r..=r {
                if x * x + z * z > r * r {
                    continue;
                }
                for y in 0..LAKE_CARVE_HEIGHT {
                    world.remove_block(IVec3::new(x, y, z));
                }
                world.add_block(IVec3::new(x, 0, z), blocks::GRANITE);
                world.add_block(IVec3::new(x, 1, z), blocks::WATER);
            }
        }
    }
}
