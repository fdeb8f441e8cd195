//! # Introduction
//!
//! tinylc is a teaching front end for a tiny boolean-expression language.
//! It tokenizes source text, sanity-checks the token stream with a small
//! validity state machine, runs a table-driven LL(1) parser that records its
//! full step trace, and rebuilds two trees from the results: an
//! operator-precedence AST and the literal derivation tree. Everything is
//! exposed as plain data (tokens, trace, trees) so a shell of any kind can
//! render it; the bundled CLI prints text tables.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → (validity DFA)
//!                    ↓ coarsen
//!                Terminals → LL(1) Parser → Trace → Derivation Tree
//!
//! Expression text → AST Builder → Operator Tree
//! ```
//!
//! 1. [`lexer`] — tokenizes the source (lazy, fails on the first bad
//!    character).
//! 2. [`dfa`] — the lexical-validity state machine run over accepted token
//!    streams.
//! 3. [`parser`] — the declarative grammar (two variants), the hand-derived
//!    LL(1) tables, and the tracing stack machine.
//! 4. [`tree`] — arena-stored labeled trees plus the two builders:
//!    [`tree::ast`] (bottom-up pattern folding) and [`tree::derivation`]
//!    (top-down trace replay).
//! 5. [`report`] — plain-text table renderings used by the CLI; not part of
//!    the core data model.
//!
//! ## Language
//!
//! Operands: identifiers `[A-Za-z_][A-Za-z0-9_]*` and numbers `[0-9]+`.
//! Operators: `== != < <= > >= && || !` plus brackets; `#` starts a line
//! comment. The grammar covers `!`, `&&`, `||`, and one `>`/`=`/`<`
//! comparison per comparand pair (the right-recursive variant allows
//! chains). No evaluation: this front end only recognizes and visualizes.

pub mod dfa;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod tree;
