use glam::{EulerRot, Quat, Vec3};

use crate::{collision::sphere_intersects_world, world::VoxelWorld};

/// Radius of the player's collision sphere.
pub const PLAYER_RADIUS: f32 = 0.35;
pub const FLIGHT_SPEED: f32 = 18.0;

/// Per-tick movement request from the input layer. Axis components are
/// clamped to [-1, 1] before use.
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementIntent {
    pub forward: f32,
    pub strafe: f32,
    pub ascend: f32,
    pub jump: bool,
}

impl MovementIntent {
    pub fn clamped(self) -> MovementIntent {
        MovementIntent {
            forward: self.forward.clamp(-1.0, 1.0),
            strafe: self.strafe.clamp(-1.0, 1.0),
            ascend: self.ascend.clamp(-1.0, 1.0),
            jump: self.jump,
        }
    }
}

/// Continuous player state. Position is owned here and mutated only by
/// the movement code; yaw/pitch are written by the input layer.
pub struct Player {
    pub position: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub radius: f32,
}

impl Player {
    pub fn new(position: Vec3) -> Player {
        Self {
            position,
            yaw: 0.0,
            pitch: 0.0,
            radius: PLAYER_RADIUS,
        }
    }

    /// Camera aim through the crosshair.
    pub fn look_direction(&self) -> Vec3 {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0) * Vec3::NEG_Z
    }

    /// Horizontal heading, pitch ignored.
    pub fn forward_flat(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    pub fn right_flat(&self) -> Vec3 {
        self.forward_flat().cross(Vec3::Y)
    }
}

/// Applies a movement delta axis by axis, reverting any single axis that
/// would push the player sphere into a block. A wall stops movement into
/// it without cancelling sliding along it.
pub fn clamp_move(world: &VoxelWorld, from: Vec3, step: Vec3, radius: f32) -> Vec3 {
    let mut pos = from;
    pos.x += step.x;
    if sphere_intersects_world(world, pos, radius) {
        pos.x = from.x;
    }
    pos.y += step.y;
    if sphere_intersects_world(world, pos, radius) {
        pos.y = from.y;
    }
    pos.z += step.z;
    if sphere_intersects_world(world, pos, radius) {
        pos.z = from.z;
    }
    pos
}

/// Free flight: heading from yaw plus a vertical intent, no gravity.
pub fn flight_step(player: &mut Player, world: &VoxelWorld, intent: &MovementIntent, dt: f32) {
    let intent = intent.clamped();
    let mut direction =
        player.forward_flat() * intent.forward + player.right_flat() * intent.strafe;
    direction.y += intent.ascend;
    if direction.length_squared() > 0.0 {
        direction = direction.normalize();
    }
    let step = direction * FLIGHT_SPEED * dt;
    player.position = clamp_move(world, player.position, step, player.radius);
}
