//! LL(1) predictive parsing
//!
//! This module holds the syntactic half of the pipeline:
//! - [`grammar`]: the declarative grammar model (two variants of the same
//!   boolean-expression language)
//! - [`table`]: the hand-derived LL(1) parsing tables behind a builder
//! - [`ll1`]: the table-driven stack machine, its step trace, and the
//!   token-to-terminal coarsening step
//!
//! The parser consumes terminal symbols, not tokens: run [`ll1::coarsen`]
//! over a token stream first (identifiers, numbers, and anything else
//! outside the grammar's alphabet collapse into the generic `identifier`
//! terminal).

pub mod grammar;
pub mod ll1;
pub mod table;
