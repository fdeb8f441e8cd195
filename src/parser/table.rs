//! LL(1) parsing tables
//!
//! A [`ParseTable`] maps `(non-terminal, lookahead terminal)` to the
//! [`Production`] to expand; a missing entry is a syntax error. The two
//! concrete tables were hand-derived from the FIRST/FOLLOW sets documented
//! on the [`Grammar`](super::grammar::Grammar) constructors; construction
//! goes through [`TableBuilder`] so a table computed from productions could
//! replace them without touching the parsing algorithm.

use rustc_hash::FxHashMap;
use std::fmt;

/// A production right-hand side, parsed once at table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Production {
    /// The ε production: pop the non-terminal, push nothing.
    Empty,
    /// A non-empty right-hand side, symbols in left-to-right order.
    Symbols(Vec<&'static str>),
}

impl Production {
    fn parse(rhs: &'static str) -> Self {
        if rhs.is_empty() {
            Production::Empty
        } else {
            Production::Symbols(rhs.split(' ').collect())
        }
    }

    /// The right-hand-side symbols, empty for ε.
    pub fn symbols(&self) -> &[&'static str] {
        match self {
            Production::Empty => &[],
            Production::Symbols(symbols) => symbols,
        }
    }
}

impl fmt::Display for Production {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Production::Empty => write!(f, "ε"),
            Production::Symbols(symbols) => write!(f, "{}", symbols.join(" ")),
        }
    }
}

/// Builder for [`ParseTable`], one row of `(lookahead, rhs)` entries per
/// non-terminal. The empty string encodes ε.
pub struct TableBuilder {
    rows: FxHashMap<&'static str, FxHashMap<&'static str, Production>>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: FxHashMap::default() }
    }

    /// Add (or extend) the row for `nonterminal`.
    pub fn row(
        mut self,
        nonterminal: &'static str,
        entries: &[(&'static str, &'static str)],
    ) -> Self {
        let row = self.rows.entry(nonterminal).or_default();
        for (lookahead, rhs) in entries {
            row.insert(*lookahead, Production::parse(rhs));
        }
        self
    }

    pub fn build(self) -> ParseTable {
        ParseTable { rows: self.rows }
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// An LL(1) parsing table.
pub struct ParseTable {
    rows: FxHashMap<&'static str, FxHashMap<&'static str, Production>>,
}

impl ParseTable {
    /// Table for [`Grammar::left_factored`](super::grammar::Grammar::left_factored).
    pub fn left_factored() -> Self {
        TableBuilder::new()
            .row("exp", &[("identifier", "term exp'"), ("!", "term exp'")])
            .row("exp'", &[("or", "or term"), ("$", "")])
            .row("term", &[("identifier", "factor term'"), ("!", "factor term'")])
            .row("term'", &[("and", "and factor"), ("$", ""), ("or", "")])
            .row("factor", &[("identifier", "operand factor'"), ("!", "operand factor'")])
            .row(
                "factor'",
                &[
                    (">", "comop operand"),
                    ("<", "comop operand"),
                    ("=", "comop operand"),
                    ("$", ""),
                    ("and", ""),
                    ("or", ""),
                ],
            )
            .row("comop", &[(">", ">"), ("=", "="), ("<", "<")])
            .row("operand", &[("!", "! operand"), ("identifier", "identifier")])
            .build()
    }

    /// Table for [`Grammar::right_recursive`](super::grammar::Grammar::right_recursive).
    pub fn right_recursive() -> Self {
        TableBuilder::new()
            .row("exp", &[("identifier", "term exp'"), ("!", "term exp'")])
            .row("exp'", &[("or", "or term exp'"), ("$", "")])
            .row("term", &[("identifier", "factor term'"), ("!", "factor term'")])
            .row("term'", &[("and", "and factor term'"), ("$", ""), ("or", "")])
            .row("factor", &[("identifier", "operand factor'"), ("!", "operand factor'")])
            .row(
                "factor'",
                &[
                    (">", "comop operand factor'"),
                    ("<", "comop operand factor'"),
                    ("=", "comop operand factor'"),
                    ("$", ""),
                    ("and", ""),
                    ("or", ""),
                ],
            )
            .row("comop", &[(">", ">"), ("=", "="), ("<", "<")])
            .row("operand", &[("!", "! operand"), ("identifier", "identifier")])
            .build()
    }

    /// Look up the production for `(nonterminal, lookahead)`; `None` signals
    /// a syntax error.
    pub fn production(&self, nonterminal: &str, lookahead: &str) -> Option<&Production> {
        self.rows.get(nonterminal)?.get(lookahead)
    }
}
