//! # Boundary Splitter and Batch Grouper
//!
//! Cuts the massaged token stream into per-statement slices at every
//! terminator token, re-merges `BEGIN [UNLOGGED|COUNTER] BATCH ... APPLY
//! BATCH` units into single logical statements, and computes the
//! `incomplete` flag an interactive caller uses to decide between
//! executing and prompting for another line.
//!
//! ## Batch Detection
//!
//! A statement whose first token is `BEGIN` (case-insensitively) opens a
//! batch; while the batch is open, every following statement is appended
//! to it. The batch closes when a statement's third-from-last token is
//! `APPLY`, matching the shape `... APPLY BATCH ;`. A statement containing
//! a literal `'APPLY'` immediately before a trailing `BATCH` identifier
//! could in principle be misread as the closer; this is a known, narrow
//! edge of the heuristic.
//!
//! ## Completeness
//!
//! The input is incomplete when a batch is still open after the last
//! statement, or when any token in the massaged stream is one of the four
//! unclosed kinds (string, name, dollar string, block comment). An
//! incomplete input must not be executed; every statement of a complete
//! input is safe to execute in order.
//!
//! ## Rendering
//!
//! A statement's rendered string is the verbatim source substring from its
//! first token's start to its last token's end, so original formatting and
//! casing survive. Shell commands lose a trailing `;`; statements that are
//! blank after trimming are dropped.

use smallvec::SmallVec;

use super::commands::is_shell_command;
use super::lexer::{tokenize, LexError};
use super::massage::massage_tokens;
use super::token::{Token, TokenKind};

/// One recognized statement: an ordered run of tokens plus the derived
/// fields the caller's dispatcher wants without re-scanning the text.
#[derive(Debug, Clone)]
pub struct Statement<'a> {
    tokens: Vec<Token<'a>>,
    leading_identifier: Option<String>,
    extra_tokens: SmallVec<[Token<'a>; 2]>,
}

impl<'a> Statement<'a> {
    pub fn tokens(&self) -> &[Token<'a>] {
        &self.tokens
    }

    /// Upper-cased text of the first identifier token, if any.
    pub fn leading_identifier(&self) -> Option<&str> {
        self.leading_identifier.as_deref()
    }

    /// The 2nd and 3rd meaningful tokens, populated only for the first
    /// statement of a recognition call.
    pub fn extra_tokens(&self) -> &[Token<'a>] {
        &self.extra_tokens
    }

    /// Whether the statement ends in a terminator token. A trailing
    /// statement without one is still awaiting input.
    pub fn is_terminated(&self) -> bool {
        self.tokens
            .last()
            .is_some_and(|t| t.kind == TokenKind::Terminator)
    }

    /// Whether the statement's first token is a shell-command word.
    pub fn is_shell_command(&self) -> bool {
        self.tokens
            .first()
            .is_some_and(|t| is_shell_command(t.text))
    }
}

/// Outcome of one recognition pass over an input buffer.
#[derive(Debug)]
pub struct RecognitionResult<'a> {
    pub statements: Vec<Statement<'a>>,
    /// True when the input ends inside an open literal, comment, or batch.
    pub incomplete: bool,
    source: &'a str,
}

impl<'a> RecognitionResult<'a> {
    /// The original input text the statements reference.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Verbatim source substring covered by `statement`.
    pub fn statement_text(&self, statement: &Statement<'a>) -> &'a str {
        match (statement.tokens.first(), statement.tokens.last()) {
            (Some(first), Some(last)) => &self.source[first.start..last.end],
            _ => "",
        }
    }

    /// Rendered statement strings: trimmed, shell commands with a trailing
    /// `;` stripped, blank entries dropped.
    pub fn statement_strings(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.statements.len());
        for statement in &self.statements {
            let mut text = self.statement_text(statement).trim();
            if statement.is_shell_command() {
                if let Some(stripped) = text.strip_suffix(';') {
                    text = stripped.trim();
                }
            }
            if !text.is_empty() {
                out.push(text.to_string());
            }
        }
        out
    }
}

/// Recognizes `text` as a sequence of statements without rendering them.
///
/// This is the interactive entry point: the caller inspects `incomplete`
/// (and whether the final statement is terminated) to decide between
/// executing and buffering another line.
pub fn recognize(text: &str) -> Result<RecognitionResult<'_>, LexError> {
    let tokens = tokenize(text)?;
    let massaged = massage_tokens(&tokens);
    let has_unclosed = massaged.iter().any(|t| t.kind.is_unclosed());

    let mut pieces: Vec<Vec<Token<'_>>> = Vec::new();
    let mut current: Vec<Token<'_>> = Vec::new();
    for &token in &massaged {
        current.push(token);
        if token.kind == TokenKind::Terminator {
            pieces.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        pieces.push(current);
    }

    let mut grouped: Vec<Vec<Token<'_>>> = Vec::new();
    let mut in_batch = false;
    for piece in pieces {
        if piece.is_empty() {
            continue;
        }

        let len = piece.len();
        let closes_batch = len >= 3 && piece[len - 3].text.eq_ignore_ascii_case("APPLY");
        let opens_batch = piece[0].text.eq_ignore_ascii_case("BEGIN");

        if in_batch {
            match grouped.last_mut() {
                Some(open) => open.extend(piece),
                None => grouped.push(piece),
            }
        } else {
            grouped.push(piece);
        }

        if len >= 3 {
            if closes_batch {
                in_batch = false;
            } else if opens_batch {
                in_batch = true;
            }
        } else if opens_batch {
            in_batch = true;
        }
    }

    let statements = grouped
        .into_iter()
        .enumerate()
        .map(|(index, tokens)| {
            let leading_identifier = tokens
                .iter()
                .find(|t| t.kind == TokenKind::Identifier)
                .map(|t| t.text.to_ascii_uppercase());
            let mut extra_tokens = SmallVec::new();
            if index == 0 {
                extra_tokens.extend(
                    tokens
                        .iter()
                        .copied()
                        .filter(|t| t.kind.is_meaningful())
                        .skip(1)
                        .take(2),
                );
            }
            Statement {
                tokens,
                leading_identifier,
                extra_tokens,
            }
        })
        .collect();

    Ok(RecognitionResult {
        statements,
        incomplete: in_batch || has_unclosed,
        source: text,
    })
}

/// Splits `text` into rendered statement strings.
///
/// This is the batch/file/stdin entry point: blank input yields an empty
/// list, and the `incomplete` signal is not surfaced. Callers that need it
/// use [`recognize`] instead.
pub fn split(text: &str) -> Result<Vec<String>, LexError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    Ok(recognize(text)?.statement_strings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_terminator() {
        let result = recognize("SELECT 1; SELECT 2; SELECT 3;").unwrap();
        assert_eq!(result.statements.len(), 3);
        assert!(!result.incomplete);
        assert!(result.statements.iter().all(Statement::is_terminated));
    }

    #[test]
    fn trailing_tokens_form_an_unterminated_statement() {
        let result = recognize("SELECT 1; SELECT 2").unwrap();
        assert_eq!(result.statements.len(), 2);
        assert!(!result.statements[1].is_terminated());
        assert!(!result.incomplete);
    }

    #[test]
    fn leading_identifier_is_uppercased() {
        let result = recognize("select * from t;").unwrap();
        assert_eq!(result.statements[0].leading_identifier(), Some("SELECT"));
    }

    #[test]
    fn extra_tokens_only_on_first_statement() {
        let result = recognize("copy t from 'file.csv'; select 1;").unwrap();
        let first = &result.statements[0];
        let extras: Vec<&str> = first.extra_tokens().iter().map(|t| t.text).collect();
        assert_eq!(extras, ["t", "from"]);
        assert!(result.statements[1].extra_tokens().is_empty());
    }

    #[test]
    fn batch_is_merged_into_one_statement() {
        let result =
            recognize("BEGIN BATCH INSERT INTO t (a) VALUES (1); APPLY BATCH;").unwrap();
        assert_eq!(result.statements.len(), 1);
        assert!(!result.incomplete);
    }

    #[test]
    fn open_batch_marks_the_input_incomplete() {
        let result = recognize("BEGIN BATCH INSERT INTO t (a) VALUES (1);").unwrap();
        assert!(result.incomplete);
    }

    #[test]
    fn unclosed_literal_marks_the_input_incomplete() {
        for input in ["'open", "\"open", "$$open", "/* open"] {
            let result = recognize(input).unwrap();
            assert!(result.incomplete, "expected incomplete for {input:?}");
        }
    }

    #[test]
    fn statement_text_is_verbatim_source() {
        let input = "SeLeCt   *\nFROM  t ;";
        let result = recognize(input).unwrap();
        assert_eq!(result.statement_text(&result.statements[0]), input);
    }

    #[test]
    fn shell_command_semicolon_is_stripped_from_rendering() {
        let result = recognize("DESCRIBE keyspaces;").unwrap();
        assert_eq!(result.statement_strings(), ["DESCRIBE keyspaces"]);
    }

    #[test]
    fn split_trims_and_handles_blank_input() {
        assert!(split("").unwrap().is_empty());
        assert!(split("   \n\t  ").unwrap().is_empty());
    }

    #[test]
    fn split_keeps_terminators_on_cql_statements() {
        assert_eq!(
            split("SELECT * FROM t1; SELECT * FROM t2;").unwrap(),
            ["SELECT * FROM t1;", "SELECT * FROM t2;"]
        );
    }
}
