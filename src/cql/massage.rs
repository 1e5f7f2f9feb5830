//! # Token Massager
//!
//! Shell commands such as `DESCRIBE` or `CONSISTENCY` terminate on a line
//! break instead of a semicolon. This pass rewrites the tokenizer's output
//! so the rest of the pipeline only ever sees one terminator kind: an
//! end-of-line token belonging to a shell-command statement becomes a
//! statement terminator, and every other end-of-line token is dropped
//! because a bare line break carries no boundary meaning in CQL.
//!
//! A statement is classified once, when its first token arrives, by
//! membership of that token's lower-cased text in the fixed shell-command
//! set. A `;` always closes the current statement regardless of
//! classification.

use super::commands::is_shell_command;
use super::token::{Token, TokenKind};

/// Rewrites end-of-line tokens: converted to terminators inside
/// shell-command statements, dropped everywhere else.
///
/// Tokens after the last terminator are passed through uncommitted; the
/// missing terminator surfaces in the caller's completeness handling.
pub fn massage_tokens<'a>(tokens: &[Token<'a>]) -> Vec<Token<'a>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut current = Vec::new();
    let mut terminate_on_newline = false;

    for &token in tokens {
        let mut token = token;

        if token.kind == TokenKind::Endline {
            if terminate_on_newline {
                token.kind = TokenKind::Terminator;
            } else {
                continue;
            }
        }

        current.push(token);

        if token.kind == TokenKind::Terminator {
            terminate_on_newline = false;
            output.append(&mut current);
        } else if current.len() == 1 {
            // First token of a new statement; classify it.
            terminate_on_newline = is_shell_command(token.text);
        }
    }

    output.append(&mut current);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cql::lexer::tokenize;

    fn massaged_kinds(input: &str) -> Vec<TokenKind> {
        massage_tokens(&tokenize(input).unwrap())
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn plain_newlines_are_dropped() {
        assert_eq!(
            massaged_kinds("SELECT\n1\n;"),
            [
                TokenKind::Identifier,
                TokenKind::WholeNumber,
                TokenKind::Terminator,
            ]
        );
    }

    #[test]
    fn shell_command_newline_becomes_terminator() {
        assert_eq!(
            massaged_kinds("DESCRIBE keyspaces\n"),
            [
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Terminator,
            ]
        );
    }

    #[test]
    fn classification_resets_after_each_statement() {
        // The DESCRIBE statement ends at its newline; the following SELECT
        // is not a shell command, so its newline is dropped.
        assert_eq!(
            massaged_kinds("desc tables\nSELECT 1\n;"),
            [
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Terminator,
                TokenKind::Identifier,
                TokenKind::WholeNumber,
                TokenKind::Terminator,
            ]
        );
    }

    #[test]
    fn semicolon_closes_a_shell_command_too() {
        let tokens = massage_tokens(&tokenize("SHOW VERSION;").unwrap());
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Terminator);
        assert_eq!(tokens.last().unwrap().text, ";");
    }

    #[test]
    fn converted_terminator_keeps_its_source_range() {
        let input = "exit\n";
        let tokens = massage_tokens(&tokenize(input).unwrap());
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Terminator);
        assert_eq!(last.text, "\n");
        assert_eq!((last.start, last.end), (4, 5));
    }

    #[test]
    fn trailing_partial_statement_is_kept() {
        assert_eq!(
            massaged_kinds("SELECT 1"),
            [TokenKind::Identifier, TokenKind::WholeNumber]
        );
    }
}
