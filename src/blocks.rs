/// Index into the block catalog. Ids are small and dense.
pub type BlockId = u8;

pub const GRASS: BlockId = 0;
pub const DIRT: BlockId = 1;
pub const STONE: BlockId = 2;
pub const SAND: BlockId = 3;
pub const PLANKS: BlockId = 4;
pub const LEAVES: BlockId = 5;
pub const GRANITE: BlockId = 6;
pub const ORE: BlockId = 7;
pub const GLOWSTONE: BlockId = 8;
pub const WATER: BlockId = 9;
pub const APPLE_PIE: BlockId = 10;

/// Descriptor for one kind of block. No per-instance state; the world
/// stores bare ids and looks the rest up here.
#[derive(Debug, Clone)]
pub struct BlockType {
    pub id: BlockId,
    pub name: &'static str,
    /// Liquids are rendered volumetric but are not a valid surface for
    /// spawned items.
    pub is_liquid: bool,
    /// Edible blocks restore food when removed in survival.
    pub is_edible: bool,
}

/// Read-only table of block descriptors, indexed by id.
pub struct BlockCatalog {
    types: Vec<BlockType>,
}

impl BlockCatalog {
    pub fn standard() -> BlockCatalog {
        fn block(id: BlockId, name: &'static str) -> BlockType {
            BlockType {
                id,
                name,
                is_liquid: false,
                is_edible: false,
            }
        }
        let mut types = vec![
            block(GRASS, "grass"),
            block(DIRT, "dirt"),
            block(STONE, "stone"),
            block(SAND, "sand"),
            block(PLANKS, "planks"),
            block(LEAVES, "leaves"),
            block(GRANITE, "granite"),
            block(ORE, "ore"),
            block(GLOWSTONE, "glowstone"),
            block(WATER, "water"),
            block(APPLE_PIE, "apple pie"),
        ];
        types[WATER as usize].is_liquid = true;
        types[APPLE_PIE as usize].is_edible = true;
        BlockCatalog { types }
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.types.get(id as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_liquid(&self, id: BlockId) -> bool {
        self.get(id).is_some_and(|t| t.is_liquid)
    }

    pub fn is_edible(&self, id: BlockId) -> bool {
        self.get(id).is_some_and(|t| t.is_edible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_dense() {
        let catalog = BlockCatalog::standard();
        for (index, block) in catalog.iter().enumerate() {
            assert_eq!(block.id as usize, index);
        }
        assert_eq!(catalog.len(), 11);
    }

    #[test]
    fn flags() {
        let catalog = BlockCatalog::standard();
        assert!(catalog.is_liquid(WATER));
        assert!(catalog.is_edible(APPLE_PIE));
        assert!(!catalog.is_liquid(STONE));
        assert!(!catalog.is_edible(WATER));
        assert!(!catalog.is_edible(42));
    }
}
