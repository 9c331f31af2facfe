use std::collections::HashMap;

use glam::IVec3;

use crate::blocks::BlockId;

mod generator;

pub use generator::GeneratorConfig;
pub use generator::WorldGenerator;

/// Sparse block store. A coordinate `(x, y, z)` names the unit cube
/// `[x,x+1)x[y,y+1)x[z,z+1)`; absence means air. The world is logically
/// unbounded, only generated or edited coordinates exist.
pub struct VoxelWorld {
    blocks: HashMap<IVec3, BlockId>,
}

impl VoxelWorld {
    pub fn new() -> VoxelWorld {
        Self {
            blocks: HashMap::new(),
        }
    }

    /// Inserts a block. Occupied coordinates are left untouched and
    /// reported as failure, never overwritten.
    pub fn add_block(&mut self, coord: IVec3, id: BlockId) -> bool {
        if self.blocks.contains_key(&coord) {
            return false;
        }
        self.blocks.insert(coord, id);
        true
    }

    /// Removes and returns the block at `coord`, if any.
    pub fn remove_block(&mut self, coord: IVec3) -> Option<BlockId> {
        self.blocks.remove(&coord)
    }

    pub fn get(&self, coord: IVec3) -> Option<BlockId> {
        self.blocks.get(&coord).copied()
    }

    pub fn contains(&self, coord: IVec3) -> bool {
        self.blocks.contains_key(&coord)
    }

    /// Iterates all placed blocks. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (IVec3, BlockId)> + '_ {
        self.blocks.iter().map(|(coord, id)| (*coord, *id))
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
