use std::ops::Index;

use crate::moves::{Move, Moves};
use crate::robots::Robots;

use super::backtracking;

/// Handle to a node in a `SearchTree`. Only valid for the tree that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchNode {
    pub robots: Robots,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    /// The move that led here from the parent.
    pub mov: Option<Move>,
    pub depth: u16,
}

/// Every configuration the search created, linked to its parent.
///
/// Nodes are only ever appended so a parent always has a lower index than its children.
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub(crate) fn new(robots: Robots) -> Self {
        SearchTree {
            nodes: vec![SearchNode {
                robots,
                parent: None,
                mov: None,
                depth: 0,
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true - there's always the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn add(&mut self, parent: NodeId, mov: Move, robots: Robots) -> NodeId {
        let depth = self[parent].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            robots,
            parent: Some(parent),
            mov: Some(mov),
            depth,
        });
        id
    }

    /// Adds the nodes along `steps` from the root, reusing the ones already there.
    ///
    /// Returns the last node.
    pub(crate) fn add_path(&mut self, steps: &[(Move, Robots)]) -> NodeId {
        let mut cur = self.root();
        for &(mov, robots) in steps {
            let existing = self
                .iter()
                .find(|(_, node)| node.parent == Some(cur) && node.mov == Some(mov))
                .map(|(id, _)| id);
            cur = match existing {
                Some(id) => id,
                None => self.add(cur, mov, robots),
            };
        }
        cur
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &SearchNode)> {
        self.nodes.iter().enumerate().map(|(i, node)| (NodeId(i), node))
    }

    /// Nodes from the root to `id`, both included.
    pub fn path(&self, id: NodeId) -> Vec<NodeId> {
        backtracking::backtrack_path(self, id)
    }

    /// Moves from the root to `id`.
    pub fn moves(&self, id: NodeId) -> Moves {
        backtracking::reconstruct_moves(self, id)
    }

    /// Copy with only the nodes on the paths to `keep`, in the same relative order.
    ///
    /// Returns the new tree and the new ids of `keep`.
    pub(crate) fn compact(&self, keep: &[NodeId]) -> (SearchTree, Vec<NodeId>) {
        let mut wanted = vec![false; self.nodes.len()];
        wanted[0] = true;
        for &id in keep {
            let mut cur = Some(id);
            while let Some(id) = cur {
                if wanted[id.0] {
                    break; // the rest of the path is already marked
                }
                wanted[id.0] = true;
                cur = self[id].parent;
            }
        }

        let mut new_ids = vec![None; self.nodes.len()];
        let mut nodes = Vec::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if !wanted[i] {
                continue;
            }
            new_ids[i] = Some(NodeId(nodes.len()));
            nodes.push(SearchNode {
                // parents come first so they're already remapped
                parent: node.parent.and_then(|p| new_ids[p.0]),
                ..*node
            });
        }

        let keep = keep.iter().filter_map(|id| new_ids[id.0]).collect();
        (SearchTree { nodes }, keep)
    }
}

impl Index<NodeId> for SearchTree {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::data::{Color, Dir, Position};

    fn robots(row: u8) -> Robots {
        Robots::new(
            Position::new(row, 0),
            Position::new(row, 1),
            Position::new(row, 2),
            Position::new(row, 3),
        )
    }

    fn mov(dir: Dir) -> Move {
        Move::new(Color::Yellow, dir)
    }

    #[test]
    fn building_and_paths() {
        let mut tree = SearchTree::new(robots(0));
        let root = tree.root();
        let a = tree.add(root, mov(Dir::South), robots(1));
        let b = tree.add(root, mov(Dir::East), robots(2));
        let c = tree.add(a, mov(Dir::North), robots(3));

        assert_eq!(tree.len(), 4);
        assert!(!tree.is_empty());
        assert_eq!(tree[c].depth, 2);
        assert_eq!(tree[b].parent, Some(root));
        assert_eq!(tree.path(c), vec![root, a, c]);
        assert_eq!(tree.path(root), vec![root]);
        assert_eq!(tree.moves(c).to_string(), "Ys Yn");
        assert_eq!(tree.moves(root).move_cnt(), 0);
    }

    #[test]
    fn adding_paths() {
        let mut tree = SearchTree::new(robots(0));
        let root = tree.root();

        assert_eq!(tree.add_path(&[]), root);
        let a = tree.add_path(&[(mov(Dir::South), robots(1)), (mov(Dir::East), robots(2))]);
        let b = tree.add_path(&[(mov(Dir::South), robots(1)), (mov(Dir::West), robots(3))]);
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.moves(a).to_string(), "Ys Ye");
        assert_eq!(tree.moves(b).to_string(), "Ys Yw");
        assert_eq!(tree[a].parent, tree[b].parent);
        assert_eq!(tree[b].robots, robots(3));

        // the same path again is found, not duplicated
        let again = tree.add_path(&[(mov(Dir::South), robots(1)), (mov(Dir::East), robots(2))]);
        assert_eq!(again, a);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn compacting() {
        let mut tree = SearchTree::new(robots(0));
        let root = tree.root();
        let a = tree.add(root, mov(Dir::South), robots(1));
        let _b = tree.add(root, mov(Dir::East), robots(2));
        let c = tree.add(a, mov(Dir::North), robots(3));
        let d = tree.add(a, mov(Dir::West), robots(4));
        let _e = tree.add(d, mov(Dir::East), robots(5));

        let (small, kept) = tree.compact(&[d, c]);
        assert_eq!(small.len(), 4);
        assert_eq!(kept.len(), 2);
        assert_eq!(small.moves(kept[0]), tree.moves(d));
        assert_eq!(small.moves(kept[1]), tree.moves(c));
        assert_eq!(small[kept[0]].robots, robots(4));

        let (only_root, kept) = tree.compact(&[]);
        assert_eq!(only_root.len(), 1);
        assert!(kept.is_empty());
    }
}
