use std::borrow::Cow;
use std::error::Error;
use std::path::Path;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};

use crate::fs;

use super::tree::{NodeId, SearchTree};

type Nd = NodeId;
type Ed = (NodeId, NodeId);

/// Dot rendering of a search tree with solutions highlighted.
#[derive(Debug)]
pub(crate) struct Graph<'a> {
    tree: &'a SearchTree,
    solutions: &'a [NodeId],
    edges: Vec<Ed>,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(tree: &'a SearchTree, solutions: &'a [NodeId]) -> Self {
        let edges = tree
            .iter()
            .filter_map(|(id, node)| node.parent.map(|p| (p, id)))
            .collect();
        Self {
            tree,
            solutions,
            edges,
        }
    }

    pub(crate) fn render(&self) -> Result<String, Box<dyn Error>> {
        let mut writer = Vec::new();
        dot::render(self, &mut writer)?;
        let s = String::from_utf8(writer)?;
        Ok(s.replace(
            "digraph G {",
            "digraph G {\n    node [fontname = \"monospace\", shape = box];",
        ))
    }

    pub(crate) fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        fs::write_file(path, &self.render()?)
    }

    fn is_solution(&self, n: Nd) -> bool {
        self.solutions.contains(&n)
    }
}

impl<'a> GraphWalk<'a, Nd, Ed> for Graph<'a> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        self.tree.iter().map(|(id, _)| id).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a> Labeller<'a, Nd, Ed> for Graph<'a> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").unwrap()
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n.index())).unwrap()
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = &self.tree[*n];
        LabelText::EscStr(format!("d: {}\n{}", node.depth, node.robots).into())
    }

    fn edge_label(&'a self, e: &Ed) -> LabelText<'a> {
        let label = self.tree[e.1]
            .mov
            .map(|m| m.to_string())
            .unwrap_or_default();
        LabelText::LabelStr(label.into())
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.is_solution(*n) {
            Style::Filled
        } else {
            Style::Solid
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        if self.is_solution(*n) {
            Some(LabelText::LabelStr("red".into()))
        } else {
            None
        }
    }
}
