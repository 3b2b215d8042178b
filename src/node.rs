use std::ops::Index;

use crate::puzzle::PuzzleState;

pub type NodeId = usize;

/// A board reached during search. Nodes never change once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    pub state: PuzzleState,
    pub depth: usize,
    /// Where the empty space was in the parent. Moving there again would
    /// undo the move that produced this node.
    pub forbidden: Option<usize>,
    pub parent: Option<NodeId>,
}

impl SearchNode {
    pub fn root(state: PuzzleState) -> Self {
        Self {
            state,
            depth: 0,
            forbidden: None,
            parent: None,
        }
    }

    /// The position moved into the empty space to reach this node, which is
    /// where the empty space now sits.
    pub fn last_move(&self) -> Option<usize> {
        self.parent.map(|_| self.state.empty_position())
    }
}

/// Append-only node storage. Children point at their parent by index, so the
/// tree has no ownership cycles and is only ever walked upwards.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Moves leading from the root to `id`, in the order they were played.
    pub fn moves_to(&self, id: NodeId) -> Vec<usize> {
        let mut moves = Vec::new();
        let mut current = self.get(id);

        while let Some(node) = current {
            if let Some(position) = node.last_move() {
                moves.push(position);
            }
            current = node.parent.and_then(|parent| self.get(parent));
        }

        moves.reverse();
        moves
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(arena: &NodeArena, parent: NodeId, position: usize) -> SearchNode {
        let parent_node = arena.get(parent).unwrap();
        let mut state = parent_node.state;
        let forbidden = state.empty_position();
        state.apply_move(position).unwrap();
        SearchNode {
            state,
            depth: parent_node.depth + 1,
            forbidden: Some(forbidden),
            parent: Some(parent),
        }
    }

    #[test]
    fn root_has_no_moves() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(PuzzleState::new()));
        assert_eq!(arena.get(root).unwrap().last_move(), None);
        assert!(arena.moves_to(root).is_empty());
    }

    #[test]
    fn moves_are_reported_root_to_leaf() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(PuzzleState::new()));
        let node = child(&arena, root, 2);
        let a = arena.push(node);
        let node = child(&arena, a, 3);
        let b = arena.push(node);
        let node = child(&arena, b, 4);
        let c = arena.push(node);

        assert_eq!(arena.moves_to(c), vec![2, 3, 4]);
        assert_eq!(arena.get(c).unwrap().depth, 3);
        assert_eq!(arena.get(c).unwrap().forbidden, Some(3));

        let mut replay = PuzzleState::new();
        replay.apply_sequence(&arena.moves_to(c)).unwrap();
        assert_eq!(replay, arena.get(c).unwrap().state);
    }

    #[test]
    fn siblings_share_a_parent() {
        let mut arena = NodeArena::new();
        let root = arena.push(SearchNode::root(PuzzleState::new()));
        let node = child(&arena, root, 8);
        let left = arena.push(node);
        let node = child(&arena, root, 4);
        let right = arena.push(node);

        assert_eq!(arena.moves_to(left), vec![8]);
        assert_eq!(arena.moves_to(right), vec![4]);
        assert_eq!(arena.len(), 3);
    }
}
