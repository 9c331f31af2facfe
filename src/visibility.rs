use glam::{IVec3, Vec3};
use log::trace;

use crate::world::VoxelWorld;

/// Horizontal render/interaction radius, measured between cube centers.
pub const VIEW_DISTANCE: f32 = 15.0;
/// Vertical band; blocks further above or below the player are culled.
pub const VIEW_DISTANCE_Y: f32 = 20.0;
/// How often the visible set is recomputed, in seconds of simulation time.
pub const REFRESH_INTERVAL: f32 = 0.25;

/// Windowed filter over the world: the subset of coordinates close enough
/// to the player to render and target. Recomputed on a fixed cadence, not
/// every tick; between refreshes the previous subset is reused.
pub struct VisibilityIndex {
    visible: Vec<IVec3>,
    timer: f32,
}

impl VisibilityIndex {
    pub fn new() -> VisibilityIndex {
        Self {
            visible: Vec::new(),
            timer: 0.0,
        }
    }

    pub fn current_visible(&self) -> &[IVec3] {
        &self.visible
    }

    /// Accumulates simulation time and refreshes once the interval is due.
    pub fn tick(&mut self, dt: f32, world: &VoxelWorld, player_position: Vec3) {
        self.timer += dt;
        if self.timer >= REFRESH_INTERVAL {
            self.refresh(world, player_position);
        }
    }

    /// Rebuilds the visible set immediately and restarts the interval.
    pub fn refresh(&mut self, world: &VoxelWorld, player_position: Vec3) {
        self.timer = 0.0;
        self.visible.clear();
        self.visible.extend(
            world
                .iter()
                .map(|(coord, _)| coord)
                .filter(|coord| is_within_view(*coord, player_position)),
        );
        trace!("Visibility refresh: {} blocks in range", self.visible.len());
    }
}

fn is_within_view(coord: IVec3, player_position: Vec3) -> bool {
    let delta = coord.as_vec3() + Vec3::splat(0.5) - player_position;
    if delta.y.abs() > VIEW_DISTANCE_Y {
        return false;
    }
    delta.x * delta.x + delta.z * delta.z <= VIEW_DISTANCE * VIEW_DISTANCE
}

#[cfg(test)]
mod tests {
    use glam::{IVec3, Vec3};

    use super::{REFRESH_INTERVAL, VisibilityIndex};
    use crate::{blocks, world::VoxelWorld};

    #[test]
    fn window_limits_horizontal_and_vertical_range() {
        let mut world = VoxelWorld::new();
        world.add_block(IVec3::new(0, 0, 0), blocks::STONE);
        world.add_block(IVec3::new(14, 0, 0), blocks::STONE);
        world.add_block(IVec3::new(20, 0, 0), blocks::STONE);
        world.add_block(IVec3::new(0, 25, 0), blocks::STONE);

        let mut index = VisibilityIndex::new();
        index.refresh(&world, Vec3::new(0.5, 0.5, 0.5));
        let visible = index.current_visible();
        assert!(visible.contains(&IVec3::new(0, 0, 0)));
        assert!(visible.contains(&IVec3::new(14, 0, 0)));
        assert!(!visible.contains(&IVec3::new(20, 0, 0)));
        // Within horizontal range but above the vertical band
        assert!(!visible.contains(&IVec3::new(0, 25, 0)));
    }

    #[test]
    fn refresh_is_gated_by_the_interval() {
        let mut world = VoxelWorld::new();
        let mut index = VisibilityIndex::new();
        index.refresh(&world, Vec3::ZERO);

        world.add_block(IVec3::new(1, 0, 0), blocks::DIRT);
        index.tick(REFRESH_INTERVAL / 2.0, &world, Vec3::ZERO);
        // Interval not yet elapsed, stale subset is reused
        assert!(index.current_visible().is_empty());

        index.tick(REFRESH_INTERVAL / 2.0, &world, Vec3::ZERO);
        assert_eq!(index.current_visible(), &[IVec3::new(1, 0, 0)]);
    }

    #[test]
    fn forced_refresh_restarts_the_interval() {
        let mut world = VoxelWorld::new();
        let mut index = VisibilityIndex::new();
        index.tick(REFRESH_INTERVAL - 0.01, &world, Vec3::ZERO);
        index.refresh(&world, Vec3::ZERO);

        world.add_block(IVec3::ZERO, blocks::DIRT);
        index.tick(0.01, &world, Vec3::ZERO);
        assert!(index.current_visible().is_empty());
    }
}
