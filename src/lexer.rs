//! Lexer (tokenizer) for the tiny boolean-expression language
//!
//! Converts raw source text into a flat stream of [`Token`]s. The stream is
//! lazy: [`Lexer`] implements [`Iterator`] and scans one token per `next`
//! call, stopping permanently after the first [`LexError`]. Use [`tokenize`]
//! to materialize the whole stream into a `Vec`.

use std::fmt;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // Operands
    Number,
    Identifier,

    // Comparison operators
    Eq, // ==
    Ne, // !=
    Lt, // <
    Le, // <=
    Gt, // >
    Ge, // >=

    // Logical operators
    And, // &&
    Or,  // ||
    Not, // !

    // Brackets
    OpenParen,   // (
    ClosedParen, // )
}

impl TokenKind {
    /// Brackets are transparent to the lexical-validity machine: they are
    /// grouping punctuation, not operands or operators.
    pub fn is_bracket(self) -> bool {
        matches!(self, TokenKind::OpenParen | TokenKind::ClosedParen)
    }
}

/// A single lexical match.
///
/// `line` starts at 1 and increments on every newline the lexer consumes;
/// `position` is the token's index in the stream, starting at 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
    pub position: usize,
}

impl Token {
    /// The numeric value of a [`TokenKind::Number`] token.
    ///
    /// The lexer already validated the digits fit an `i64`, so this is `Some`
    /// for every number token it produced.
    pub fn number_value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Number => self.text.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Number => write!(f, "number {}", self.text),
            TokenKind::Identifier => write!(f, "identifier '{}'", self.text),
            _ => write!(f, "'{}'", self.text),
        }
    }
}

/// Lexer error type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token pattern.
    BadCharacter { line: usize, ch: char },
    /// A digit run that does not fit the lexer's integer width.
    BadNumber { line: usize, text: String },
}

impl LexError {
    /// Line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            LexError::BadCharacter { line, .. } => *line,
            LexError::BadNumber { line, .. } => *line,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::BadCharacter { line, ch } => {
                write!(f, "Line {}: Bad character '{}'", line, ch)
            }
            LexError::BadNumber { line, text } => {
                write!(f, "Line {}: Number literal out of range: {}", line, text)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize an entire source string.
///
/// Fails with the first [`LexError`], discarding any tokens scanned before
/// it; the empty string (or one holding only whitespace and comments) yields
/// an empty vector.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).collect()
}

/// Lexer for boolean-expression source text.
///
/// Single use: the iterator is finite and cannot be restarted. After it
/// yields an `Err` it yields `None` forever.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    next_index: usize,
    failed: bool,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            next_index: 0,
            failed: false,
        }
    }

    /// Scan the next token, or `None` at end of input.
    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        self.skip_whitespace_and_comments();

        let ch = self.peek()?;
        let line = self.line;

        let result = match ch {
            '0'..='9' => self.number_literal(),
            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier()),

            '(' => Ok(self.single(TokenKind::OpenParen)),
            ')' => Ok(self.single(TokenKind::ClosedParen)),

            // Two-character operators are matched before their one-character
            // prefixes; '&' and '|' have no one-character fallback.
            '=' => self.pair_only('=', TokenKind::Eq),
            '&' => self.pair_only('&', TokenKind::And),
            '|' => self.pair_only('|', TokenKind::Or),
            '!' => Ok(self.pair_or_single('=', TokenKind::Ne, TokenKind::Not)),
            '<' => Ok(self.pair_or_single('=', TokenKind::Le, TokenKind::Lt)),
            '>' => Ok(self.pair_or_single('=', TokenKind::Ge, TokenKind::Gt)),

            _ => Err(LexError::BadCharacter { line, ch }),
        };

        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }

    /// Scan an identifier: `[A-Za-z_][A-Za-z0-9_]*`.
    fn identifier(&mut self) -> Token {
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        self.token(TokenKind::Identifier, text)
    }

    /// Scan a number literal: `[0-9]+`, validated as an integer.
    fn number_literal(&mut self) -> Result<Token, LexError> {
        let line = self.line;
        let mut text = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        text.parse::<i64>()
            .map_err(|_| LexError::BadNumber { line, text: text.clone() })?;

        Ok(self.token(TokenKind::Number, text))
    }

    /// Consume one character and produce a single-character token.
    fn single(&mut self, kind: TokenKind) -> Token {
        let ch = self.advance().unwrap_or_default();
        self.token(kind, ch.to_string())
    }

    /// Consume a two-character operator whose first character is not a token
    /// by itself (`==`, `&&`, `||`).
    fn pair_only(&mut self, second: char, kind: TokenKind) -> Result<Token, LexError> {
        let line = self.line;
        let first = self.advance().unwrap_or_default();
        if self.peek() == Some(second) {
            self.advance();
            Ok(self.token(kind, format!("{}{}", first, second)))
        } else {
            Err(LexError::BadCharacter { line, ch: first })
        }
    }

    /// Consume a one- or two-character operator, longest match first
    /// (`<=` before `<`, `!=` before `!`).
    fn pair_or_single(&mut self, second: char, pair: TokenKind, single: TokenKind) -> Token {
        let first = self.advance().unwrap_or_default();
        if self.peek() == Some(second) {
            self.advance();
            self.token(pair, format!("{}{}", first, second))
        } else {
            self.token(single, first.to_string())
        }
    }

    /// Skip spaces, tabs, newlines (counting lines), and `#` comments.
    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') => {
                    self.advance();
                }
                Some('\n') => {
                    self.advance();
                    self.line += 1;
                }
                Some('#') => self.skip_line_comment(),
                _ => break,
            }
        }
    }

    /// Skip a `#` comment up to (not including) the newline.
    fn skip_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Build a token at the current line, assigning the next stream index.
    fn token(&mut self, kind: TokenKind, text: String) -> Token {
        let token = Token {
            kind,
            text,
            line: self.line,
            position: self.next_index,
        };
        self.next_index += 1;
        token
    }

    /// Peek at the current character without consuming.
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to the next character.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.next_token()
    }
}
