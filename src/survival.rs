use glam::Vec3;
use log::debug;

use crate::{
    blocks::BlockCatalog,
    collision::sphere_intersects_world,
    interaction::EditResult,
    inventory::InventoryLedger,
    player::{MovementIntent, Player, clamp_move},
    world::VoxelWorld,
};

pub const MAX_HEALTH: f32 = 100.0;
pub const MAX_FOOD: f32 = 100.0;
pub const WALK_SPEED: f32 = 9.0;
pub const GRAVITY: f32 = 28.0;
pub const JUMP_SPEED: f32 = 9.0;
/// Food drained per second of survival play.
pub const FOOD_DECAY_RATE: f32 = 2.5;
/// Food restored by one consumable block.
pub const FOOD_PER_MEAL: f32 = 35.0;
/// Falls below this distance are harmless.
pub const FALL_DAMAGE_DISTANCE: f32 = 3.0;
/// Falls from this distance are lethal.
pub const FALL_DEATH_DISTANCE: f32 = 6.0;

/// Gravity, jumping, fall damage and hunger. Owns the vertical velocity
/// and grounded/falling state; horizontal movement is clamped through the
/// same collision test as flight.
pub struct SurvivalController {
    pub health: f32,
    pub food: f32,
    vertical_velocity: f32,
    grounded: bool,
    /// Height at which the player last left the ground while descending.
    /// Cleared on landing; jumps never record one.
    fall_start_y: Option<f32>,
}

impl SurvivalController {
    pub fn new() -> SurvivalController {
        Self {
            health: MAX_HEALTH,
            food: MAX_FOOD,
            vertical_velocity: 0.0,
            grounded: false,
            fall_start_y: None,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// One survival movement tick: clamped walking, jump, gravity
    /// integration, landing resolution.
    pub fn step(
        &mut self,
        player: &mut Player,
        world: &VoxelWorld,
        intent: &MovementIntent,
        dt: f32,
    ) {
        let intent = intent.clamped();
        let mut direction =
            player.forward_flat() * intent.forward + player.right_flat() * intent.strafe;
        if direction.length_squared() > 0.0 {
            direction = direction.normalize();
        }
        let step = direction * WALK_SPEED * dt;
        let mut pos = clamp_move(
            world,
            player.position,
            Vec3::new(step.x, 0.0, step.z),
            player.radius,
        );

        let was_grounded = self.grounded;
        if was_grounded && intent.jump {
            self.vertical_velocity = JUMP_SPEED;
            self.grounded = false;
        }

        self.vertical_velocity -= GRAVITY * dt;
        pos.y += self.vertical_velocity * dt;

        if sphere_intersects_world(world, pos, player.radius) {
            if self.vertical_velocity < 0.0 {
                if let Some(fall_start) = self.fall_start_y.take() {
                    self.apply_fall_damage(fall_start - player.position.y);
                }
                self.grounded = true;
            }
            self.vertical_velocity = 0.0;
            pos.y = player.position.y;
        } else {
            if was_grounded && self.vertical_velocity < 0.0 {
                self.fall_start_y = Some(player.position.y);
            }
            self.grounded = false;
        }

        player.position = pos;
    }

    fn apply_fall_damage(&mut self, fall_distance: f32) {
        if fall_distance >= FALL_DEATH_DISTANCE {
            self.health = 0.0;
        } else if fall_distance >= FALL_DAMAGE_DISTANCE {
            self.health = (self.health - MAX_HEALTH / 2.0).max(0.0);
        }
        if fall_distance >= FALL_DAMAGE_DISTANCE {
            debug!(
                "Landed after falling {fall_distance:.1} blocks, health now {}",
                self.health
            );
        }
    }

    /// Linear hunger decay, floored at zero.
    pub fn decay_food(&mut self, dt: f32) {
        self.food = (self.food - FOOD_DECAY_RATE * dt).max(0.0);
    }

    /// Reacts to an edit result: an edible block that was just removed is
    /// eaten on the spot. The unit the removal credited is discarded
    /// again, so consumables never accumulate in the ledger.
    pub fn handle_edit(
        &mut self,
        result: &mut EditResult,
        catalog: &BlockCatalog,
        inventory: &mut InventoryLedger,
    ) {
        let Some(id) = result.removed_id else {
            return;
        };
        if !catalog.is_edible(id) {
            return;
        }
        self.food = (self.food + FOOD_PER_MEAL).min(MAX_FOOD);
        inventory.add_to_inv(id, -1);
        result.inventory_changed = true;
        debug!("Consumed block {id}, food now {:.0}", self.food);
    }
}
