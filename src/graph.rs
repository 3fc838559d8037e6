//! Freeform block-graph toy model
//!
//! Blocks spawn children at random positions, can be dragged around, and
//! draw dashed connector lines to their parents. Removing a block also
//! removes its direct children (grandchildren survive, orphaned).

use egui::{Pos2, Rect};
use rand::Rng;

/// Side length of a rendered block
pub const BLOCK_SIZE: f32 = 96.0;

/// Unique identifier for a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId(pub u64);

/// One draggable block
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    /// Top-left corner
    pub pos: Pos2,
    pub parent: Option<BlockId>,
}

/// The block graph: a flat list of blocks with parent links
#[derive(Debug, Default)]
pub struct BlockGraph {
    blocks: Vec<Block>,
    next_id: u64,
}

impl BlockGraph {
    /// Create a graph seeded with one root block at a random position
    pub fn new(bounds: Rect, rng: &mut impl Rng) -> Self {
        let mut graph = Self {
            blocks: Vec::new(),
            next_id: 0,
        };
        let id = graph.alloc_id();
        graph.blocks.push(Block {
            id,
            pos: random_pos(bounds, rng),
            parent: None,
        });
        graph
    }

    fn alloc_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }

    /// All blocks, in creation order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Look up a block by id
    pub fn get(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// Add a child block at a random position. No-op if the parent is gone.
    pub fn spawn_child(&mut self, parent: BlockId, bounds: Rect, rng: &mut impl Rng) -> Option<BlockId> {
        if self.get(parent).is_none() {
            return None;
        }
        let id = self.alloc_id();
        self.blocks.push(Block {
            id,
            pos: random_pos(bounds, rng),
            parent: Some(parent),
        });
        Some(id)
    }

    /// Remove a block and its direct children
    pub fn remove(&mut self, id: BlockId) {
        self.blocks
            .retain(|b| b.id != id && b.parent != Some(id));
    }

    /// Move a block to a new position
    pub fn drag_to(&mut self, id: BlockId, pos: Pos2) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            block.pos = pos;
        }
    }

    /// Parent/child id pairs for every block whose parent still exists
    pub fn edges(&self) -> Vec<(BlockId, BlockId)> {
        self.blocks
            .iter()
            .filter_map(|b| {
                b.parent
                    .filter(|&p| self.get(p).is_some())
                    .map(|p| (p, b.id))
            })
            .collect()
    }
}

/// Pick a random top-left position keeping the block inside `bounds`
fn random_pos(bounds: Rect, rng: &mut impl Rng) -> Pos2 {
    let max_x = (bounds.max.x - BLOCK_SIZE).max(bounds.min.x);
    let max_y = (bounds.max.y - BLOCK_SIZE).max(bounds.min.y);
    Pos2::new(
        rng.random_range(bounds.min.x..=max_x),
        rng.random_range(bounds.min.y..=max_y),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bounds() -> Rect {
        Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(800.0, 600.0))
    }

    #[test]
    fn test_new_graph_has_one_root() {
        let mut rng = StdRng::seed_from_u64(1);
        let graph = BlockGraph::new(bounds(), &mut rng);
        assert_eq!(graph.len(), 1);
        assert_eq!(graph.blocks()[0].parent, None);
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_spawn_child_links_parent() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = BlockGraph::new(bounds(), &mut rng);
        let root = graph.blocks()[0].id;

        let child = graph.spawn_child(root, bounds(), &mut rng).unwrap();
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.edges(), vec![(root, child)]);
    }

    #[test]
    fn test_spawn_child_of_missing_parent() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = BlockGraph::new(bounds(), &mut rng);
        assert!(graph
            .spawn_child(BlockId(999), bounds(), &mut rng)
            .is_none());
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_remove_cascades_to_direct_children_only() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = BlockGraph::new(bounds(), &mut rng);
        let root = graph.blocks()[0].id;
        let child = graph.spawn_child(root, bounds(), &mut rng).unwrap();
        let grandchild = graph.spawn_child(child, bounds(), &mut rng).unwrap();

        graph.remove(root);

        // Root and its direct child are gone; the grandchild survives
        // orphaned with no rendered edge
        assert!(graph.get(root).is_none());
        assert!(graph.get(child).is_none());
        assert!(graph.get(grandchild).is_some());
        assert!(graph.edges().is_empty());
    }

    #[test]
    fn test_drag_to_updates_position() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = BlockGraph::new(bounds(), &mut rng);
        let root = graph.blocks()[0].id;

        graph.drag_to(root, Pos2::new(10.0, 20.0));
        assert_eq!(graph.get(root).unwrap().pos, Pos2::new(10.0, 20.0));
    }

    #[test]
    fn test_positions_stay_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let b = bounds();
        let mut graph = BlockGraph::new(b, &mut rng);
        let root = graph.blocks()[0].id;
        for _ in 0..20 {
            graph.spawn_child(root, b, &mut rng);
        }
        for block in graph.blocks() {
            assert!(block.pos.x >= b.min.x && block.pos.x + BLOCK_SIZE <= b.max.x);
            assert!(block.pos.y >= b.min.y && block.pos.y + BLOCK_SIZE <= b.max.y);
        }
    }

    #[test]
    fn test_ids_are_unique_after_removal() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut graph = BlockGraph::new(bounds(), &mut rng);
        let root = graph.blocks()[0].id;
        let child = graph.spawn_child(root, bounds(), &mut rng).unwrap();
        graph.remove(child);

        let newer = graph.spawn_child(root, bounds(), &mut rng).unwrap();
        assert_ne!(newer, child);
    }
}
