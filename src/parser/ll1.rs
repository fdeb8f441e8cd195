//! Table-driven LL(1) parser
//!
//! A stack machine over grammar symbols: pop, consult the
//! [`ParseTable`](super::table::ParseTable) on non-terminals, match terminals
//! against the lookahead. The first missing table entry or terminal mismatch
//! rejects the input outright; there is no error recovery or
//! resynchronization, by design.
//!
//! The tracing variant records the machine's full run in a [`ParseTrace`] so
//! a presentation layer can replay it and the derivation-tree builder can
//! reconstruct the parse.

use super::grammar::Grammar;
use super::table::{ParseTable, Production};
use crate::lexer::{Token, TokenKind};
use std::collections::VecDeque;

/// The end-of-input marker, kept at the bottom of the stack and appended to
/// the input internally. Callers must not include it in their input.
pub const END_MARKER: &str = "$";

/// Step-by-step record of one parse run.
///
/// One `stacks`/`inputs` snapshot is taken before every step of the machine;
/// a `moves` entry is written for every step that completes: an expansion
/// (`"lhs -> rhs"`, `"lhs -> ε"`) or a non-final terminal match
/// (`"pop -> t"`). The final end-marker match and a rejecting step record no
/// move, so after a completed run `stacks.len() == inputs.len() ==
/// moves.len() + 1` and the last snapshot is either the accepting
/// `["$"] / ["$"]` configuration or the rejected one.
#[derive(Debug, Default)]
pub struct ParseTrace {
    /// Parse stack before each step, bottom first.
    pub stacks: Vec<Vec<String>>,
    /// Remaining input before each step, current lookahead first.
    pub inputs: Vec<Vec<String>>,
    /// Description of each completed step.
    pub moves: Vec<String>,
}

impl ParseTrace {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Replace each token by its terminal symbol in the grammar's alphabet:
/// operator tokens the grammar knows keep their identity, every other token
/// (identifiers, numbers, and operators outside the grammar, brackets
/// included) becomes the generic `identifier` terminal.
pub fn coarsen(tokens: &[Token]) -> Vec<&'static str> {
    tokens
        .iter()
        .map(|token| match token.kind {
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "!",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::Eq => "=",
            _ => "identifier",
        })
        .collect()
}

/// LL(1) predictive parser over a grammar and its parsing table.
///
/// The grammar and table are read-only; every parse run owns its private
/// stack and trace.
pub struct Ll1Parser<'a> {
    grammar: &'a Grammar,
    table: &'a ParseTable,
}

impl<'a> Ll1Parser<'a> {
    pub fn new(grammar: &'a Grammar, table: &'a ParseTable) -> Self {
        Self { grammar, table }
    }

    /// Parse a pre-coarsened terminal sequence (without the end marker).
    /// Returns whether the input belongs to the grammar's language.
    pub fn parse(&self, input: &[&str]) -> bool {
        self.run(input, None)
    }

    /// Like [`Ll1Parser::parse`], additionally recording the full step trace.
    /// On rejection the trace holds every step up to and including the
    /// failing configuration.
    pub fn parse_traced(&self, input: &[&str]) -> (bool, ParseTrace) {
        let mut trace = ParseTrace::new();
        let accepted = self.run(input, Some(&mut trace));
        (accepted, trace)
    }

    fn run(&self, input: &[&str], mut trace: Option<&mut ParseTrace>) -> bool {
        let mut stack: Vec<&str> = vec![END_MARKER, self.grammar.start];
        let mut rest: VecDeque<&str> = input.iter().copied().collect();
        rest.push_back(END_MARKER);
        let mut lookahead = match rest.pop_front() {
            Some(first) => first,
            None => return false,
        };

        while let Some(&top) = stack.last() {
            if let Some(trace) = trace.as_deref_mut() {
                trace.stacks.push(stack.iter().map(|s| s.to_string()).collect());
                let mut remaining = vec![lookahead.to_string()];
                remaining.extend(rest.iter().map(|s| s.to_string()));
                trace.inputs.push(remaining);
            }
            stack.pop();

            if self.grammar.is_variable(top) {
                let production = match self.table.production(top, lookahead) {
                    Some(production) => production,
                    None => return false,
                };
                if let Some(trace) = trace.as_deref_mut() {
                    trace.moves.push(format!("{} -> {}", top, production));
                }
                for symbol in production.symbols().iter().rev() {
                    stack.push(symbol);
                }
            } else {
                if lookahead != top {
                    return false;
                }
                if let Some(next) = rest.pop_front() {
                    if let Some(trace) = trace.as_deref_mut() {
                        trace.moves.push(format!("pop -> {}", lookahead));
                    }
                    lookahead = next;
                }
                // The end-marker match leaves the lookahead in place; the
                // loop then exits on the emptied stack.
            }
        }

        // The stack emptied; accept only if it did so exactly on the end
        // marker with nothing left behind it.
        lookahead == END_MARKER && rest.is_empty()
    }
}
