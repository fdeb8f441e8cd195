//! Pattern-fold AST builder
//!
//! Builds an operator tree from a flat expression by repeatedly folding the
//! first reducible pattern and restarting the scan, a fix-point iteration
//! rather than a single pass. Fold priority (tightest binding first):
//! `!` chains (innermost operand first, so stacked `!`s nest to the right),
//! then comparison (`>`, `<`, `=`/`==`), then `and`/`&&`, then `or`/`||`.
//! Trying the patterns in that fixed order yields a precedence-correct tree
//! without a precedence-climbing parser.
//!
//! The builder assumes the expression is already grammatical: run the parser
//! first and only build the tree on acceptance. On input that is not, it
//! fails with a [`StructuralError`] instead of producing a wrong tree.

use super::{Node, NodeId, StructuralError, Tree};

fn is_not(label: &str) -> bool {
    label == "!"
}

fn is_comparison(label: &str) -> bool {
    matches!(label, ">" | "<" | "=" | "==")
}

fn is_and(label: &str) -> bool {
    matches!(label, "and" | "&&")
}

fn is_or(label: &str) -> bool {
    matches!(label, "or" | "||")
}

fn is_operator(label: &str) -> bool {
    is_not(label) || is_comparison(label) || is_and(label) || is_or(label)
}

/// Working state of the fold: the arena under construction, the expression
/// text gathered per node, and the ordered list of indices still to reduce.
struct Folder {
    nodes: Vec<Node>,
    texts: Vec<String>,
    work: Vec<NodeId>,
}

impl Folder {
    fn new(symbols: &[&str]) -> Self {
        let nodes = symbols
            .iter()
            .map(|s| Node { label: s.to_string(), children: vec![] })
            .collect();
        let texts = symbols.iter().map(|s| s.to_string()).collect();
        let work = (0..symbols.len()).collect();
        Self { nodes, texts, work }
    }

    /// A node is still a bare operator symbol if it came straight from the
    /// input and has not been folded into a subtree yet.
    fn is_unreduced_operator(&self, id: NodeId) -> bool {
        self.nodes[id].children.is_empty() && is_operator(&self.nodes[id].label)
    }

    /// Fold the first `!` whose operand is not itself a bare `!` (skipping
    /// over a chain finds its innermost application first).
    fn fold_not(&mut self) -> Result<bool, StructuralError> {
        for index in 0..self.work.len() {
            let id = self.work[index];
            if !(self.nodes[id].children.is_empty() && is_not(&self.nodes[id].label)) {
                continue;
            }
            let &child = self
                .work
                .get(index + 1)
                .ok_or_else(|| StructuralError::MissingOperand { operator: "!".into() })?;
            if self.nodes[child].children.is_empty() && is_not(&self.nodes[child].label) {
                continue;
            }
            if self.is_unreduced_operator(child) {
                return Err(StructuralError::MissingOperand { operator: "!".into() });
            }

            let parent = self.nodes.len();
            self.nodes.push(Node { label: "!".into(), children: vec![child] });
            self.texts.push(format!("! {}", self.texts[child]));
            self.work.splice(index..index + 2, [parent]);
            return Ok(true);
        }
        Ok(false)
    }

    /// Fold the first binary operator matching `pred` whose neighbors are
    /// both already-reduced operands.
    fn fold_binary(&mut self, pred: fn(&str) -> bool) -> Result<bool, StructuralError> {
        for index in 0..self.work.len() {
            let id = self.work[index];
            if !(self.nodes[id].children.is_empty() && pred(&self.nodes[id].label)) {
                continue;
            }
            let operator = self.nodes[id].label.clone();
            if index == 0 || index + 1 == self.work.len() {
                return Err(StructuralError::MissingOperand { operator });
            }
            let left = self.work[index - 1];
            let right = self.work[index + 1];
            if self.is_unreduced_operator(left) || self.is_unreduced_operator(right) {
                return Err(StructuralError::MissingOperand { operator });
            }

            let parent = self.nodes.len();
            self.texts
                .push(format!("{} {} {}", self.texts[left], operator, self.texts[right]));
            self.nodes.push(Node { label: operator, children: vec![left, right] });
            self.work.splice(index - 1..index + 2, [parent]);
            return Ok(true);
        }
        Ok(false)
    }
}

/// Build an operator-precedence AST from a whitespace-separated expression.
///
/// Operands (identifiers, numbers) become leaves labeled with their own
/// text; each fold labels the new parent with the operator as written and
/// carries the concatenated expression text for later folds. The builder
/// accepts both operator spellings (`and`/`&&`, `or`/`||`, `=`/`==`).
pub fn build_ast(expr: &str) -> Result<Tree, StructuralError> {
    // Brackets are grouping noise to this builder; drop them up front.
    let symbols: Vec<&str> = expr
        .split_whitespace()
        .filter(|symbol| !matches!(*symbol, "(" | ")"))
        .collect();
    if symbols.is_empty() {
        return Err(StructuralError::EmptyInput);
    }

    let mut folder = Folder::new(&symbols);
    while folder.work.len() > 1 {
        if folder.fold_not()? {
            continue;
        }
        if folder.fold_binary(is_comparison)? {
            continue;
        }
        if folder.fold_binary(is_and)? {
            continue;
        }
        if folder.fold_binary(is_or)? {
            continue;
        }
        return Err(StructuralError::NoReduciblePattern { remaining: folder.work.len() });
    }

    let root = folder.work[0];
    if folder.is_unreduced_operator(root) {
        let operator = folder.nodes[root].label.clone();
        return Err(StructuralError::MissingOperand { operator });
    }
    Ok(Tree::new(folder.nodes, root))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_operand() {
        let tree = build_ast("a").unwrap();
        assert_eq!(tree.node(tree.root()).label, "a");
        assert!(tree.node(tree.root()).children.is_empty());
    }

    #[test]
    fn test_comparison_binds_tighter_than_and() {
        let tree = build_ast("a > b and c").unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.label, "and");

        let left = tree.node(root.children[0]);
        assert_eq!(left.label, ">");
        assert_eq!(tree.node(left.children[0]).label, "a");
        assert_eq!(tree.node(left.children[1]).label, "b");

        let right = tree.node(root.children[1]);
        assert_eq!(right.label, "c");
        assert!(right.children.is_empty());
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let tree = build_ast("a or b and c").unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.label, "or");
        assert_eq!(tree.node(root.children[0]).label, "a");
        assert_eq!(tree.node(root.children[1]).label, "and");
    }

    #[test]
    fn test_not_chain_nests_to_the_right() {
        let tree = build_ast("! ! a").unwrap();
        let outer = tree.node(tree.root());
        assert_eq!(outer.label, "!");
        let inner = tree.node(outer.children[0]);
        assert_eq!(inner.label, "!");
        assert_eq!(tree.node(inner.children[0]).label, "a");
    }

    #[test]
    fn test_not_binds_tighter_than_comparison() {
        let tree = build_ast("! a > b").unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.label, ">");
        assert_eq!(tree.node(root.children[0]).label, "!");
        assert_eq!(tree.node(root.children[1]).label, "b");
    }

    #[test]
    fn test_symbol_spellings() {
        let tree = build_ast("a == 3 && ! b").unwrap();
        let root = tree.node(tree.root());
        assert_eq!(root.label, "&&");
        assert_eq!(tree.node(root.children[0]).label, "==");
        assert_eq!(tree.node(root.children[1]).label, "!");
    }

    #[test]
    fn test_leaves_preserve_operand_order() {
        let tree = build_ast("a > b and c or d").unwrap();
        assert_eq!(tree.leaves(), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(build_ast("  "), Err(StructuralError::EmptyInput));
    }

    #[test]
    fn test_adjacent_operands_fail_loudly() {
        assert_eq!(
            build_ast("a b"),
            Err(StructuralError::NoReduciblePattern { remaining: 2 })
        );
    }

    #[test]
    fn test_trailing_operator_fails_loudly() {
        assert_eq!(
            build_ast("a and"),
            Err(StructuralError::MissingOperand { operator: "and".into() })
        );
        assert_eq!(
            build_ast("!"),
            Err(StructuralError::MissingOperand { operator: "!".into() })
        );
    }

    #[test]
    fn test_leading_operator_fails_loudly() {
        assert_eq!(
            build_ast("and a"),
            Err(StructuralError::MissingOperand { operator: "and".into() })
        );
    }
}
