use std::collections::HashMap;

use glam::Vec3;
use thiserror::Error;

use crate::{blocks::BlockId, inventory::InventoryLedger, targeting::RayHit, world::VoxelWorld};

mod creative;

pub use creative::CreativeMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Remove,
    Place,
}

/// What an edit did, reported back so callers can rebuild inventory UI
/// and react to special removals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditResult {
    pub changed: bool,
    pub inventory_changed: bool,
    pub removed_id: Option<BlockId>,
}

impl EditResult {
    pub fn unchanged() -> EditResult {
        EditResult::default()
    }
}

/// Everything a mode may touch while resolving one edit. Borrowed fresh
/// per call; modes hold no world state of their own.
pub struct EditContext<'a> {
    pub world: &'a mut VoxelWorld,
    pub inventory: &'a mut InventoryLedger,
    pub player_position: Vec3,
    pub hit: Option<RayHit>,
}

/// One interaction mode: a policy turning an edit action plus the current
/// crosshair hit into world/inventory mutations.
pub trait InteractionMode {
    fn perform_edit(
        &mut self,
        ctx: &mut EditContext,
        action: EditAction,
        block_id: BlockId,
    ) -> EditResult;
}

#[derive(Debug, Error)]
pub enum InteractionError {
    /// Requesting a mode that was never registered is a wiring defect,
    /// not a runtime condition, and is surfaced instead of swallowed.
    #[error("unknown interaction mode: {0}")]
    UnknownMode(String),
}

/// Name-keyed registry of interaction modes with exactly one active at a
/// time. `creative` is registered and active from the start.
pub struct InteractionManager {
    modes: HashMap<String, Box<dyn InteractionMode>>,
    active: String,
}

impl InteractionManager {
    pub fn new() -> InteractionManager {
        let mut manager = Self {
            modes: HashMap::new(),
            active: "creative".to_string(),
        };
        manager.register_mode("creative", Box::new(CreativeMode));
        manager
    }

    pub fn register_mode(&mut self, name: &str, mode: Box<dyn InteractionMode>) {
        self.modes.insert(name.to_string(), mode);
    }

    pub fn set_mode(&mut self, name: &str) -> Result<(), InteractionError> {
        if !self.modes.contains_key(name) {
            return Err(InteractionError::UnknownMode(name.to_string()));
        }
        self.active = name.to_string();
        Ok(())
    }

    pub fn active_mode(&self) -> &str {
        &self.active
    }

    pub fn perform_edit(
        &mut self,
        ctx: &mut EditContext,
        action: EditAction,
        block_id: BlockId,
    ) -> EditResult {
        let mode = self
            .modes
            .get_mut(&self.active)
            .expect("active mode is always registered");
        mode.perform_edit(ctx, action, block_id)
    }
}
