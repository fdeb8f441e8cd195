//! Lexical-validity state machine
//!
//! A tiny DFA run over an accepted token stream to sanity-check that it
//! alternates between operand-like and operator-like tokens. The state is
//! derived per token, never stored on it. Brackets are transparent: they
//! neither read nor change the state, and callers must skip them (see
//! [`state_trail`]).

use crate::lexer::{Token, TokenKind};

/// States of the validity machine. [`LexState::Failed`] is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    Start,
    NumberOrIdentifier,
    InOperator,
    Failed,
}

/// Advance the validity machine by one (non-bracket) token kind.
///
/// Pure function of its inputs. Passing a bracket kind is a caller mistake
/// and lands in [`LexState::Failed`] like any other unexpected kind.
pub fn next_state(kind: TokenKind, state: LexState) -> LexState {
    match state {
        LexState::Start | LexState::InOperator => match kind {
            TokenKind::Number | TokenKind::Identifier => LexState::NumberOrIdentifier,
            TokenKind::Not => LexState::InOperator,
            _ => LexState::Failed,
        },
        LexState::NumberOrIdentifier => match kind {
            TokenKind::Eq
            | TokenKind::Ne
            | TokenKind::Lt
            | TokenKind::Le
            | TokenKind::Gt
            | TokenKind::Ge
            | TokenKind::And
            | TokenKind::Or => LexState::InOperator,
            _ => LexState::Failed,
        },
        LexState::Failed => LexState::Failed,
    }
}

/// Run the machine over a token stream, recording the state reached after
/// each token. Brackets record `None` and leave the state untouched.
pub fn state_trail(tokens: &[Token]) -> Vec<Option<LexState>> {
    let mut state = LexState::Start;
    tokens
        .iter()
        .map(|token| {
            if token.kind.is_bracket() {
                None
            } else {
                state = next_state(token.kind, state);
                Some(state)
            }
        })
        .collect()
}

/// A token stream is lexically well-formed iff the last non-bracket token
/// lands in [`LexState::NumberOrIdentifier`]. A stream with no non-bracket
/// tokens has no state to read and is not well-formed.
pub fn stream_is_well_formed(tokens: &[Token]) -> bool {
    state_trail(tokens)
        .iter()
        .rev()
        .find_map(|state| *state)
        .map(|state| state == LexState::NumberOrIdentifier)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    const ALL_KINDS: [TokenKind; 13] = [
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::Eq,
        TokenKind::Ne,
        TokenKind::Lt,
        TokenKind::Le,
        TokenKind::Gt,
        TokenKind::Ge,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::OpenParen,
        TokenKind::ClosedParen,
    ];

    #[test]
    fn test_transitions_from_start() {
        assert_eq!(
            next_state(TokenKind::Identifier, LexState::Start),
            LexState::NumberOrIdentifier
        );
        assert_eq!(
            next_state(TokenKind::Number, LexState::Start),
            LexState::NumberOrIdentifier
        );
        assert_eq!(next_state(TokenKind::Not, LexState::Start), LexState::InOperator);
        assert_eq!(next_state(TokenKind::And, LexState::Start), LexState::Failed);
    }

    #[test]
    fn test_transitions_from_operand() {
        for kind in [
            TokenKind::Eq,
            TokenKind::Ne,
            TokenKind::Lt,
            TokenKind::Le,
            TokenKind::Gt,
            TokenKind::Ge,
            TokenKind::And,
            TokenKind::Or,
        ] {
            assert_eq!(
                next_state(kind, LexState::NumberOrIdentifier),
                LexState::InOperator
            );
        }
        assert_eq!(
            next_state(TokenKind::Identifier, LexState::NumberOrIdentifier),
            LexState::Failed
        );
        assert_eq!(
            next_state(TokenKind::Not, LexState::NumberOrIdentifier),
            LexState::Failed
        );
    }

    #[test]
    fn test_failed_is_absorbing() {
        for kind in ALL_KINDS {
            assert_eq!(next_state(kind, LexState::Failed), LexState::Failed);
        }
    }

    #[test]
    fn test_no_kind_returns_to_start() {
        // Feeding the same kind twice from Start never lands back in Start.
        for kind in ALL_KINDS {
            let once = next_state(kind, LexState::Start);
            assert_ne!(once, LexState::Start);
            assert_ne!(next_state(kind, once), LexState::Start);
        }
    }

    #[test]
    fn test_well_formed_stream() {
        let tokens = tokenize("a == 3 && !b").unwrap();
        let trail = state_trail(&tokens);
        assert_eq!(
            trail,
            vec![
                Some(LexState::NumberOrIdentifier),
                Some(LexState::InOperator),
                Some(LexState::NumberOrIdentifier),
                Some(LexState::InOperator),
                Some(LexState::InOperator),
                Some(LexState::NumberOrIdentifier),
            ]
        );
        assert!(stream_is_well_formed(&tokens));
    }

    #[test]
    fn test_trailing_operator_is_ill_formed() {
        let tokens = tokenize("a &&").unwrap();
        assert!(!stream_is_well_formed(&tokens));
    }

    #[test]
    fn test_adjacent_operands_are_ill_formed() {
        let tokens = tokenize("a b").unwrap();
        assert!(!stream_is_well_formed(&tokens));
    }

    #[test]
    fn test_brackets_are_transparent() {
        let tokens = tokenize("(a) && (b)").unwrap();
        let trail = state_trail(&tokens);
        assert_eq!(trail[0], None);
        assert_eq!(trail[2], None);
        assert!(stream_is_well_formed(&tokens));
    }

    #[test]
    fn test_empty_and_bracket_only_streams() {
        assert!(!stream_is_well_formed(&[]));
        let tokens = tokenize("()").unwrap();
        assert!(!stream_is_well_formed(&tokens));
    }
}
