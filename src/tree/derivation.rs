//! Derivation-tree builder
//!
//! Replays the move strings recorded by the LL(1) parser and expands a tree
//! top-down, mirroring the derivation exactly. The frontier is the ordered
//! list of nodes not yet expanded; each expansion replaces the first frontier
//! node labeled with the move's left-hand side by its right-hand-side
//! symbols, spliced in at the same position so the tree keeps reading left to
//! right. `pop` moves consume input but never touch the frontier: the matched
//! terminal is already a leaf from an earlier expansion.

use super::{Node, NodeId, StructuralError, Tree};

/// Label used for the leaf child of an ε production.
pub const EPSILON: &str = "ε";

/// One parsed expansion move.
struct Expansion<'a> {
    lhs: &'a str,
    symbols: Vec<&'a str>,
}

/// Parse a `"lhs -> rhs"` move; `None` for `pop` moves.
fn parse_move(text: &str) -> Result<Option<Expansion<'_>>, StructuralError> {
    let (lhs, rhs) = text
        .split_once("->")
        .ok_or_else(|| StructuralError::MalformedMove { text: text.to_string() })?;
    let lhs = lhs.trim();
    if lhs == "pop" {
        return Ok(None);
    }
    let symbols: Vec<&str> = rhs.split(' ').filter(|s| !s.is_empty()).collect();
    Ok(Some(Expansion { lhs, symbols }))
}

/// Build the derivation tree for a recorded move sequence.
///
/// The root takes its label from the first expansion's left-hand side (the
/// parser always expands the start symbol first). The leaves, read left to
/// right, reproduce the terminal sequence fed to the parser, with an
/// [`EPSILON`] leaf wherever an ε production closed a branch.
pub fn build_derivation_tree(moves: &[String]) -> Result<Tree, StructuralError> {
    let mut expansions = Vec::new();
    for text in moves {
        if let Some(expansion) = parse_move(text)? {
            expansions.push(expansion);
        }
    }

    let first = expansions.first().ok_or(StructuralError::EmptyInput)?;
    let mut nodes = vec![Node { label: first.lhs.to_string(), children: vec![] }];
    let mut frontier: Vec<NodeId> = vec![0];

    for expansion in &expansions {
        let position = frontier
            .iter()
            .position(|&id| nodes[id].label == expansion.lhs)
            .ok_or_else(|| StructuralError::SymbolNotOnFrontier {
                symbol: expansion.lhs.to_string(),
            })?;
        let parent = frontier[position];

        let mut children = Vec::with_capacity(expansion.symbols.len());
        for symbol in &expansion.symbols {
            let id = nodes.len();
            nodes.push(Node { label: symbol.to_string(), children: vec![] });
            children.push(id);
        }
        nodes[parent].children = children.clone();

        // Replace the expanded node by its children, in place, left to right.
        frontier.splice(position..position + 1, children);
    }

    Ok(Tree::new(nodes, 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moves(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_single_expansion() {
        let tree = build_derivation_tree(&moves(&["exp -> term exp'"])).unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.label, "exp");
        assert_eq!(root.children.len(), 2);
        assert_eq!(tree.node(root.children[0]).label, "term");
        assert_eq!(tree.node(root.children[1]).label, "exp'");
    }

    #[test]
    fn test_epsilon_becomes_a_leaf() {
        let tree =
            build_derivation_tree(&moves(&["exp -> term exp'", "exp' -> ε"])).unwrap();
        let root = tree.node(tree.root());
        let tail = tree.node(root.children[1]);
        assert_eq!(tail.label, "exp'");
        assert_eq!(tail.children.len(), 1);
        assert_eq!(tree.node(tail.children[0]).label, EPSILON);
    }

    #[test]
    fn test_pop_moves_leave_the_frontier_alone() {
        let with_pops = moves(&[
            "exp -> term exp'",
            "term -> factor term'",
            "pop -> identifier",
            "term' -> ε",
            "pop -> identifier",
            "exp' -> ε",
        ]);
        let without_pops = moves(&[
            "exp -> term exp'",
            "term -> factor term'",
            "term' -> ε",
            "exp' -> ε",
        ]);
        let a = build_derivation_tree(&with_pops).unwrap();
        let b = build_derivation_tree(&without_pops).unwrap();
        assert_eq!(a.leaves(), b.leaves());
    }

    #[test]
    fn test_expansion_order_is_leftmost() {
        // Two `term` nodes on the frontier: the first expansion must take
        // the left one for the leaves to stay in input order.
        let tree = build_derivation_tree(&moves(&[
            "exp -> term or term",
            "term -> identifier",
            "term -> ! identifier",
        ]))
        .unwrap();
        assert_eq!(tree.leaves(), vec!["identifier", "or", "!", "identifier"]);
    }

    #[test]
    fn test_unknown_lhs_is_an_error() {
        let result = build_derivation_tree(&moves(&["exp -> term exp'", "factor -> x"]));
        assert_eq!(
            result.unwrap_err(),
            StructuralError::SymbolNotOnFrontier { symbol: "factor".into() }
        );
    }

    #[test]
    fn test_malformed_move_is_an_error() {
        let result = build_derivation_tree(&moves(&["exp term exp'"]));
        assert!(matches!(result, Err(StructuralError::MalformedMove { .. })));
    }

    #[test]
    fn test_no_expansions_is_an_error() {
        assert_eq!(
            build_derivation_tree(&moves(&[])).unwrap_err(),
            StructuralError::EmptyInput
        );
        assert_eq!(
            build_derivation_tree(&moves(&["pop -> identifier"])).unwrap_err(),
            StructuralError::EmptyInput
        );
    }
}
