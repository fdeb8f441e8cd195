//! Declarative grammar model
//!
//! A [`Grammar`] is a pure data holder: non-terminals, terminals, start
//! symbol, and an ordered production list per non-terminal. Two variants of
//! the same boolean-expression grammar are provided; they differ only in how
//! operator repetition is encoded, and both are LL(1) (no FIRST/FIRST
//! conflicts, no FIRST/FOLLOW conflicts on the ε alternatives).
//!
//! Precedence, lowest to highest: logical-or, logical-and, comparison,
//! logical-not/operand.

use rustc_hash::FxHashMap;
use std::fmt;

/// A context-free grammar over `&'static str` symbols.
///
/// Immutable once constructed. Alternatives are ordered; the empty string
/// stands for an ε alternative.
pub struct Grammar {
    pub variables: Vec<&'static str>,
    pub terminals: Vec<&'static str>,
    pub start: &'static str,
    pub productions: FxHashMap<&'static str, Vec<&'static str>>,
}

impl Grammar {
    /// The left-factored grammar: operator repetition is encoded by a single
    /// iteration-via-epsilon level (`exp' : or term | ε`), so each precedence
    /// level admits one operator and chains must be bracketed by the input
    /// shape rather than the grammar.
    ///
    /// FIRST sets: `FIRST(exp) = FIRST(term) = FIRST(factor) =
    /// FIRST(operand) = { identifier, ! }`, `FIRST(exp') = { or, ε }`,
    /// `FIRST(term') = { and, ε }`, `FIRST(factor') = { >, =, <, ε }`,
    /// `FIRST(comop) = { >, =, < }`.
    ///
    /// FOLLOW sets: `FOLLOW(exp) = FOLLOW(exp') = { $ }`, `FOLLOW(term) =
    /// FOLLOW(term') = { or, $ }`, `FOLLOW(factor) = FOLLOW(factor') =
    /// { and, or, $ }`, `FOLLOW(comop) = { identifier, ! }`,
    /// `FOLLOW(operand) = { >, =, <, and, or, $ }`.
    pub fn left_factored() -> Self {
        Self::build(&[
            ("exp", vec!["term exp'"]),
            ("exp'", vec!["or term", ""]),
            ("term", vec!["factor term'"]),
            ("term'", vec!["and factor", ""]),
            ("factor", vec!["operand factor'"]),
            ("factor'", vec!["comop operand", ""]),
            ("comop", vec![">", "=", "<"]),
            ("operand", vec!["! operand", "identifier"]),
        ])
    }

    /// The right-recursive grammar: each tail non-terminal re-derives itself
    /// (`exp' : or term exp' | ε`), so `or`/`and`/comparison chains of any
    /// length are accepted, associating left-to-right as the table expands
    /// them. FIRST and FOLLOW match [`Grammar::left_factored`].
    pub fn right_recursive() -> Self {
        Self::build(&[
            ("exp", vec!["term exp'"]),
            ("exp'", vec!["or term exp'", ""]),
            ("term", vec!["factor term'"]),
            ("term'", vec!["and factor term'", ""]),
            ("factor", vec!["operand factor'"]),
            ("factor'", vec!["comop operand factor'", ""]),
            ("comop", vec![">", "=", "<"]),
            ("operand", vec!["! operand", "identifier"]),
        ])
    }

    fn build(rules: &[(&'static str, Vec<&'static str>)]) -> Self {
        let variables: Vec<&'static str> = rules.iter().map(|(lhs, _)| *lhs).collect();
        let mut productions = FxHashMap::default();
        for (lhs, alternatives) in rules {
            productions.insert(*lhs, alternatives.clone());
        }
        Self {
            variables,
            terminals: vec!["or", "and", ">", "=", "<", "!", "identifier"],
            start: "exp",
            productions,
        }
    }

    /// Whether `symbol` is a non-terminal of this grammar.
    pub fn is_variable(&self, symbol: &str) -> bool {
        self.variables.iter().any(|v| *v == symbol)
    }

    /// The production rules as display text, one non-terminal per line.
    pub fn rules_text(&self) -> String {
        self.variables
            .iter()
            .map(|lhs| {
                let alternatives = self.productions[lhs]
                    .iter()
                    .map(|rhs| if rhs.is_empty() { "ε" } else { rhs })
                    .collect::<Vec<_>>()
                    .join(" | ");
                format!("{} : {}", lhs, alternatives)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Grammar {
    /// Renders G(V, T, S, P), one section per field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grammar")?;
        writeln!(f, "Start Symbol")?;
        writeln!(f, "{}", self.start)?;
        writeln!(f, "Terminals")?;
        writeln!(f, "{}", self.terminals.join(", "))?;
        writeln!(f, "Variables")?;
        writeln!(f, "{}", self.variables.join(", "))?;
        writeln!(f, "Productions")?;
        write!(f, "{}", self.rules_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants_share_alphabet() {
        let left = Grammar::left_factored();
        let right = Grammar::right_recursive();
        assert_eq!(left.variables, right.variables);
        assert_eq!(left.terminals, right.terminals);
        assert_eq!(left.start, right.start);
    }

    #[test]
    fn test_rhs_symbols_are_known() {
        for grammar in [Grammar::left_factored(), Grammar::right_recursive()] {
            for variable in &grammar.variables {
                for rhs in &grammar.productions[variable] {
                    for symbol in rhs.split(' ').filter(|s| !s.is_empty()) {
                        assert!(
                            grammar.is_variable(symbol)
                                || grammar.terminals.contains(&symbol),
                            "unknown symbol '{}' in {} -> {}",
                            symbol,
                            variable,
                            rhs
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_display_lists_all_sections() {
        let rendered = Grammar::left_factored().to_string();
        assert!(rendered.contains("Start Symbol"));
        assert!(rendered.contains("Terminals"));
        assert!(rendered.contains("Variables"));
        assert!(rendered.contains("Productions"));
        assert!(rendered.contains("exp' : or term | ε"));
    }

    #[test]
    fn test_repetition_shape_differs() {
        let left = Grammar::left_factored();
        let right = Grammar::right_recursive();
        assert!(left.productions["exp'"].contains(&"or term"));
        assert!(right.productions["exp'"].contains(&"or term exp'"));
    }
}
