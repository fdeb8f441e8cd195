//! Plain-text report layer
//!
//! Renders the core's data (token stream, validity states, parse trace) as
//! aligned text tables for the CLI. Everything here is a pure `String`
//! builder; a richer shell can render the same data its own way.

use crate::dfa::{state_trail, stream_is_well_formed};
use crate::lexer::Token;
use crate::parser::ll1::ParseTrace;

/// Pad every cell to its column's widest entry and join with two spaces.
fn render_columns(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            if cell.len() > widths[column] {
                widths[column] = cell.len();
            }
        }
    }

    let mut out = String::new();
    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    for (index, row) in std::iter::once(&header_row).chain(rows.iter()).enumerate() {
        let line: Vec<String> = row
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{:<width$}", cell))
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
        if index == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            out.push_str(&rule.join("  "));
            out.push('\n');
        }
    }
    out
}

/// The token list with per-token validity states; brackets leave the state
/// column blank.
pub fn token_table(tokens: &[Token]) -> String {
    let trail = state_trail(tokens);
    let rows: Vec<Vec<String>> = tokens
        .iter()
        .zip(&trail)
        .map(|(token, state)| {
            vec![
                format!("{:?}", token.kind),
                token.text.clone(),
                token.line.to_string(),
                token.position.to_string(),
                state.map(|s| format!("{:?}", s)).unwrap_or_default(),
            ]
        })
        .collect();
    render_columns(&["Token Type", "Token Value", "Line", "Index", "State"], &rows)
}

/// The validity verdict line for an accepted token stream.
pub fn lexical_status(tokens: &[Token]) -> String {
    if stream_is_well_formed(tokens) {
        "Status: Parsing Success".to_string()
    } else {
        "Status: Parsing Failed".to_string()
    }
}

/// The parser's step table. The final snapshot row carries the verdict in
/// its move column.
pub fn trace_table(trace: &ParseTrace, accepted: bool) -> String {
    let verdict = if accepted { "Success!" } else { "Fail!" };
    let rows: Vec<Vec<String>> = trace
        .stacks
        .iter()
        .zip(&trace.inputs)
        .enumerate()
        .map(|(step, (stack, input))| {
            let movement = trace
                .moves
                .get(step)
                .map(|m| m.as_str())
                .unwrap_or(verdict);
            vec![stack.join(" "), input.join(" "), movement.to_string()]
        })
        .collect();
    render_columns(&["Stack", "Input", "Move"], &rows)
}

/// The token patterns, one per line.
pub fn token_patterns() -> String {
    [
        "ID          : [a-zA-Z_][a-zA-Z0-9_]*",
        "NUMBER      : [0-9]+",
        "EQ          : ==",
        "NE          : !=",
        "LT          : <",
        "LE          : <=",
        "GT          : >",
        "GE          : >=",
        "AND         : &&",
        "OR          : ||",
        "NOT         : !",
        "OPEN BRACKET: (",
        "CLOSE BRACKET: )",
        "COMMENT     : #.* (discarded)",
    ]
    .join("\n")
}
