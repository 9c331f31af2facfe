use glam::{IVec3, Vec3};
use log::debug;

use super::{EditAction, EditContext, EditResult, InteractionMode};
use crate::blocks::BlockId;

/// Build-anything mode. Removing a block credits one unit of its type;
/// placing debits one unit and targets the cube adjacent to the hit face.
pub struct CreativeMode;

impl InteractionMode for CreativeMode {
    fn perform_edit(
        &mut self,
        ctx: &mut EditContext,
        action: EditAction,
        block_id: BlockId,
    ) -> EditResult {
        let Some(hit) = ctx.hit else {
            return EditResult::unchanged();
        };

        match action {
            EditAction::Remove => match ctx.world.remove_block(hit.coord) {
                Some(removed_id) => {
                    ctx.inventory.add_to_inv(removed_id, 1);
                    debug!("Removed block {removed_id} at {}", hit.coord);
                    EditResult {
                        changed: true,
                        inventory_changed: true,
                        removed_id: Some(removed_id),
                    }
                }
                None => EditResult::unchanged(),
            },
            EditAction::Place => {
                if !ctx.inventory.can_spend(block_id, 1) {
                    return EditResult::unchanged();
                }
                // Place against the hit face, adjacent to the target block
                let target = hit.coord + hit.normal;
                if ctx.world.contains(target) {
                    return EditResult::unchanged();
                }
                if cube_contains(target, ctx.player_position) {
                    return EditResult::unchanged();
                }
                if !ctx.world.add_block(target, block_id) {
                    return EditResult::unchanged();
                }
                ctx.inventory.spend(block_id, 1);
                debug!("Placed block {block_id} at {target}");
                EditResult {
                    changed: true,
                    inventory_changed: true,
                    removed_id: None,
                }
            }
        }
    }
}

/// Closed-interval overlap test against the target cube; guards against
/// the player burying themselves in a placed block.
fn cube_contains(coord: IVec3, position: Vec3) -> bool {
    let min = coord.as_vec3();
    let max = min + Vec3::ONE;
    (min.x..=max.x).contains(&position.x)
        && (min.y..=max.y).contains(&position.y)
        && (min.z..=max.z).contains(&position.z)
}
