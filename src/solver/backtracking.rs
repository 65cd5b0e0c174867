use crate::moves::Moves;

use super::tree::{NodeId, SearchTree};

/// Follows parent links up to the root. The result starts at the root.
pub(crate) fn backtrack_path(tree: &SearchTree, final_node: NodeId) -> Vec<NodeId> {
    let mut path = Vec::with_capacity(usize::from(tree[final_node].depth) + 1);
    let mut cur = final_node;
    loop {
        path.push(cur);
        match tree[cur].parent {
            Some(parent) => cur = parent,
            None => {
                path.reverse();
                return path;
            }
        }
    }
}

pub(crate) fn reconstruct_moves(tree: &SearchTree, final_node: NodeId) -> Moves {
    let mut moves = Moves::default();
    for id in backtrack_path(tree, final_node) {
        // only the root has no move
        if let Some(mov) = tree[id].mov {
            moves.add(mov);
        }
    }
    moves
}
