use glam::Vec3;
use log::info;

use crate::{
    blocks::{BlockCatalog, BlockId},
    collision::sphere_intersects_world,
    interaction::{EditAction, EditContext, EditResult, InteractionError, InteractionManager},
    inventory::InventoryLedger,
    player::{MovementIntent, Player, flight_step},
    survival::SurvivalController,
    targeting::{RayHit, raycast_visible},
    visibility::VisibilityIndex,
    world::{GeneratorConfig, VoxelWorld, WorldGenerator},
};

/// Upper bound on one tick's simulation delta. Longer wall-clock stalls
/// advance the simulation by at most this much, avoiding tunnelling.
pub const MAX_TICK_DELTA: f32 = 0.05;
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 8.0, 20.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Free flight, no gravity, no vitals.
    Flight,
    /// Gravity, fall damage and hunger.
    Survival,
}

/// Top-level simulation state. Owns the world and every subsystem and is
/// the only place they are wired together; callers drive it through
/// `tick` and `perform_edit`.
pub struct Game {
    mode: GameMode,
    catalog: BlockCatalog,
    world: VoxelWorld,
    inventory: InventoryLedger,
    player: Player,
    visibility: VisibilityIndex,
    interaction: InteractionManager,
    survival: SurvivalController,
}

impl Game {
    pub fn new(mode: GameMode, config: GeneratorConfig) -> Game {
        let catalog = BlockCatalog::standard();
        let mut world = VoxelWorld::new();
        WorldGenerator::new(config).generate(&mut world);
        let inventory = InventoryLedger::seeded(&catalog);
        let player = Player::new(SPAWN_POSITION);
        let mut visibility = VisibilityIndex::new();
        visibility.refresh(&world, player.position);
        info!("Game ready in {mode:?} mode");
        Self {
            mode,
            catalog,
            world,
            inventory,
            player,
            visibility,
            interaction: InteractionManager::new(),
            survival: SurvivalController::new(),
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn world(&self) -> &VoxelWorld {
        &self.world
    }

    pub fn inventory(&self) -> &InventoryLedger {
        &self.inventory
    }

    pub fn health(&self) -> f32 {
        self.survival.health
    }

    pub fn food(&self) -> f32 {
        self.survival.food
    }

    pub fn is_alive(&self) -> bool {
        self.mode == GameMode::Flight || self.survival.health > 0.0
    }

    pub fn visible_block_count(&self) -> usize {
        self.visibility.current_visible().len()
    }

    /// Whether a player-sized sphere at `position` would overlap a block.
    pub fn is_position_colliding(&self, position: Vec3) -> bool {
        sphere_intersects_world(&self.world, position, self.player.radius)
    }

    /// The block currently under the crosshair, if any.
    pub fn targeted_block(&self) -> Option<RayHit> {
        raycast_visible(
            self.player.position,
            self.player.look_direction(),
            self.visibility.current_visible(),
            &self.world,
        )
    }

    /// Advances the simulation by `dt` seconds, clamped to the tick cap.
    pub fn tick(&mut self, intent: &MovementIntent, dt: f32) {
        let dt = dt.min(MAX_TICK_DELTA);
        match self.mode {
            GameMode::Flight => flight_step(&mut self.player, &self.world, intent, dt),
            GameMode::Survival => {
                self.survival.step(&mut self.player, &self.world, intent, dt);
                self.survival.decay_food(dt);
            }
        }
        self.visibility.tick(dt, &self.world, self.player.position);
    }

    /// Resolves one edit through the active interaction mode against
    /// whatever the crosshair currently targets.
    pub fn perform_edit(&mut self, action: EditAction, block_id: BlockId) -> EditResult {
        let hit = self.targeted_block();
        let mut ctx = EditContext {
            world: &mut self.world,
            inventory: &mut self.inventory,
            player_position: self.player.position,
            hit,
        };
        let mut result = self.interaction.perform_edit(&mut ctx, action, block_id);
        if self.mode == GameMode::Survival {
            self.survival
                .handle_edit(&mut result, &self.catalog, &mut self.inventory);
        }
        // Edits invalidate the visible set immediately rather than waiting
        // out the refresh interval
        if result.changed {
            self.visibility.refresh(&self.world, self.player.position);
        }
        result
    }

    pub fn set_interaction_mode(&mut self, name: &str) -> Result<(), InteractionError> {
        self.interaction.set_mode(name)?;
        info!("Interaction mode switched to '{name}'");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glam::{IVec3, Vec3};

    use super::{Game, GameMode, MAX_TICK_DELTA, SPAWN_POSITION};
    use crate::{
        blocks,
        interaction::EditAction,
        inventory::{STARTING_STOCK, STARTING_STOCK_LIQUID},
        player::{FLIGHT_SPEED, MovementIntent},
        survival::MAX_FOOD,
        world::GeneratorConfig,
    };

    /// Tiny deterministic world: terrain only, plus the lake column at the
    /// origin (granite at y 0, water at y 1).
    fn bare_config() -> GeneratorConfig {
        GeneratorConfig {
            world_size: 8,
            tree_count: 0,
            lake_radius: 0,
            consumable_count: 0,
            seed: 0,
        }
    }

    /// Parks the player over the origin column looking straight down.
    fn aim_down_at_origin(game: &mut Game) {
        game.player.position = Vec3::new(0.5, 10.0, 0.5);
        game.player.pitch = -std::f32::consts::FRAC_PI_2;
        game.visibility.refresh(&game.world, game.player.position);
    }

    #[test]
    fn new_game_starts_stocked_and_healthy() {
        let game = Game::new(GameMode::Survival, bare_config());
        assert_eq!(game.player().position, SPAWN_POSITION);
        assert_eq!(game.health(), 100.0);
        assert_eq!(game.food(), MAX_FOOD);
        assert!(game.is_alive());
        assert_eq!(game.inventory().get_count(blocks::STONE), STARTING_STOCK);
        assert_eq!(
            game.inventory().get_count(blocks::WATER),
            STARTING_STOCK_LIQUID
        );
        assert!(game.visible_block_count() > 0);
        // Spawn point hangs in the air above the terrain
        assert!(!game.is_position_colliding(SPAWN_POSITION));
        assert!(game.is_position_colliding(Vec3::new(0.5, 1.5, 0.5)));
    }

    #[test]
    fn tick_delta_is_clamped() {
        let mut game = Game::new(GameMode::Flight, bare_config());
        game.player_mut().position = Vec3::new(0.5, 30.0, 0.5);
        let intent = MovementIntent {
            forward: 1.0,
            ..Default::default()
        };
        let before = game.player().position;
        // A half-second stall still advances by at most one capped tick
        game.tick(&intent, 0.5);
        let moved = game.player().position.distance(before);
        assert!((moved - FLIGHT_SPEED * MAX_TICK_DELTA).abs() < 1e-4);
    }

    #[test]
    fn removing_the_targeted_block_credits_inventory() {
        let mut game = Game::new(GameMode::Flight, bare_config());
        aim_down_at_origin(&mut game);

        // The lake column surface at the origin is water
        let hit = game.targeted_block().unwrap();
        assert_eq!(hit.coord, IVec3::new(0, 1, 0));

        let result = game.perform_edit(EditAction::Remove, blocks::STONE);
        assert!(result.changed);
        assert_eq!(result.removed_id, Some(blocks::WATER));
        assert!(!game.world().contains(IVec3::new(0, 1, 0)));
        assert_eq!(
            game.inventory().get_count(blocks::WATER),
            STARTING_STOCK_LIQUID + 1
        );
    }

    #[test]
    fn placing_spends_stock_and_is_retargetable_at_once() {
        let mut game = Game::new(GameMode::Flight, bare_config());
        aim_down_at_origin(&mut game);
        game.perform_edit(EditAction::Remove, blocks::STONE);

        // The granite floor is now targeted; place on its top face
        let hit = game.targeted_block().unwrap();
        assert_eq!(hit.coord, IVec3::new(0, 0, 0));
        let result = game.perform_edit(EditAction::Place, blocks::PLANKS);
        assert!(result.changed);
        assert_eq!(game.world().get(IVec3::new(0, 1, 0)), Some(blocks::PLANKS));
        assert_eq!(
            game.inventory().get_count(blocks::PLANKS),
            STARTING_STOCK - 1
        );

        // The fresh block is targetable without waiting for the next
        // visibility refresh
        let hit = game.targeted_block().unwrap();
        assert_eq!(hit.coord, IVec3::new(0, 1, 0));
    }

    #[test]
    fn edits_with_nothing_targeted_are_noops() {
        let mut game = Game::new(GameMode::Flight, bare_config());
        game.player_mut().position = Vec3::new(0.5, 40.0, 0.5);
        // Looking up into empty sky
        game.player_mut().pitch = std::f32::consts::FRAC_PI_2;
        game.visibility.refresh(&game.world, game.player.position);

        let blocks_before = game.world().len();
        let result = game.perform_edit(EditAction::Remove, blocks::STONE);
        assert!(!result.changed);
        assert_eq!(game.world().len(), blocks_before);
    }

    #[test]
    fn survival_removal_of_an_edible_feeds_the_player() {
        let mut game = Game::new(GameMode::Survival, bare_config());
        aim_down_at_origin(&mut game);
        game.world.add_block(IVec3::new(0, 2, 0), blocks::APPLE_PIE);
        game.visibility.refresh(&game.world, game.player.position);
        game.survival.food = 40.0;

        let result = game.perform_edit(EditAction::Remove, blocks::STONE);
        assert_eq!(result.removed_id, Some(blocks::APPLE_PIE));
        assert_eq!(game.food(), 75.0);
        // The removal credit is consumed again, net zero
        assert_eq!(game.inventory().get_count(blocks::APPLE_PIE), STARTING_STOCK);
    }

    #[test]
    fn survival_ticks_drain_food() {
        let mut game = Game::new(GameMode::Survival, bare_config());
        let idle = MovementIntent::default();
        for _ in 0..120 {
            game.tick(&idle, 1.0 / 60.0);
        }
        assert!(game.food() < MAX_FOOD);
        assert!(game.food() > 90.0);
    }

    #[test]
    fn unknown_interaction_modes_are_rejected() {
        let mut game = Game::new(GameMode::Flight, bare_config());
        assert!(game.set_interaction_mode("spectator").is_err());
        assert!(game.set_interaction_mode("creative").is_ok());
    }
}
