//! Labeled trees for the two reconstruction algorithms
//!
//! Both builders produce the same shape: a [`Tree`] of labeled [`Node`]s in
//! arena storage (an append-only vector addressed by [`NodeId`]), built
//! either bottom-up ([`ast`]) or top-down ([`derivation`]) and immutable once
//! the builder returns. Index-based storage keeps the builders'
//! splice-at-position bookkeeping simple and leaves no dangling references
//! behind.

pub mod ast;
pub mod derivation;

use std::fmt;

/// Index of a node within its [`Tree`]'s arena.
pub type NodeId = usize;

/// A single labeled tree node. Children are ordered left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub label: String,
    pub children: Vec<NodeId>,
}

/// Error type for the tree builders: the input did not match any
/// fold/expansion pattern, so no single-rooted tree could be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// The builder was given nothing to build from.
    EmptyInput,
    /// An operator had no reduced operand where one was required.
    MissingOperand { operator: String },
    /// A full scan found no foldable pattern while several nodes remain.
    NoReduciblePattern { remaining: usize },
    /// A move string without a `->` separator.
    MalformedMove { text: String },
    /// A move's left-hand side does not label any unexpanded node.
    SymbolNotOnFrontier { symbol: String },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::EmptyInput => write!(f, "nothing to build a tree from"),
            StructuralError::MissingOperand { operator } => {
                write!(f, "operator '{}' is missing an operand", operator)
            }
            StructuralError::NoReduciblePattern { remaining } => {
                write!(f, "no reducible pattern among {} remaining nodes", remaining)
            }
            StructuralError::MalformedMove { text } => {
                write!(f, "malformed move '{}'", text)
            }
            StructuralError::SymbolNotOnFrontier { symbol } => {
                write!(f, "'{}' does not label any unexpanded node", symbol)
            }
        }
    }
}

impl std::error::Error for StructuralError {}

/// An immutable labeled tree. Nodes own their children exclusively; there is
/// no sharing and no cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Tree {
    pub(crate) fn new(nodes: Vec<Node>, root: NodeId) -> Self {
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    /// Labels of the leaves reachable from the root, left to right.
    pub fn leaves(&self) -> Vec<&str> {
        let mut leaves = Vec::new();
        self.collect_leaves(self.root, &mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, id: NodeId, leaves: &mut Vec<&'a str>) {
        let node = &self.nodes[id];
        if node.children.is_empty() {
            leaves.push(&node.label);
        } else {
            for &child in &node.children {
                self.collect_leaves(child, leaves);
            }
        }
    }

    fn render_node(
        &self,
        id: NodeId,
        prefix: &str,
        last: bool,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let node = &self.nodes[id];
        let branch = if last { "└── " } else { "├── " };
        writeln!(f, "{}{}{}", prefix, branch, node.label)?;
        let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
        for (index, &child) in node.children.iter().enumerate() {
            self.render_node(child, &child_prefix, index + 1 == node.children.len(), f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Tree {
    /// Indented ASCII rendering, root first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = &self.nodes[self.root];
        writeln!(f, "{}", root.label)?;
        for (index, &child) in root.children.iter().enumerate() {
            self.render_node(child, "", index + 1 == root.children.len(), f)?;
        }
        Ok(())
    }
}
