//! # CQL Tokenizer - Zero-Copy Scanner
//!
//! This module implements the tokenizer that converts raw CQL text into an
//! ordered sequence of typed tokens. All string tokens are borrowed slices
//! pointing directly into the input string; tokenizing allocates only the
//! output vector.
//!
//! ## Rule Order
//!
//! The scanner applies a fixed, ordered list of rule families at each
//! offset, most specific first, so that a closed literal always beats its
//! unclosed variant and insignificant text is skipped in one step:
//!
//! 1. Dollar-quoted string (`$$ ... $$`), checked by hand before anything
//!    else (see below)
//! 2. End-of-line (a single `\n`)
//! 3. Insignificant text, consumed but never emitted: runs of horizontal
//!    whitespace, `--` and `//` line comments, `/* ... */` block comments
//!    (the first closing marker terminates the comment)
//! 4. Closed single-quoted string literal, `''` escaping an embedded quote
//! 5. Closed double-quoted name, `""` escaping an embedded quote
//! 6. Unclosed string / name / block comment, matching to end of input
//! 7. Float, UUID, hex blob, whole number
//! 8. Identifier
//! 9. `;`, `:`, `*`, operators, comparisons, brackets
//!
//! ## The `$$` Special Case
//!
//! A dollar-quoted string is bounded by a literal `$$` marker on each side
//! and may contain any text, including quotes. "Shortest match not followed
//! by another `$$`" cannot be expressed without negative lookahead, so the
//! marker search is hand-coded: if `$$` opens at the current offset, the
//! next `$$` closes it; with no closer the rest of the input becomes an
//! unclosed dollar-string token.
//!
//! ## Incomplete vs. Invalid
//!
//! Input that ends inside a literal or comment produces an `Unclosed*`
//! token and tokenizing succeeds; the splitter turns that into the
//! `incomplete` signal. Input with a byte no rule matches fails the whole
//! call with a [`LexError`] carrying the offset and a short excerpt, and
//! the caller must not execute any statement from that call.

use super::token::{Token, TokenKind};
use crate::config::constants::LEX_ERROR_EXCERPT_CHARS;
use thiserror::Error;

/// No rule matched at `position`. Fatal for the whole tokenize call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot lex input at byte {position}: {excerpt:?}")]
pub struct LexError {
    pub position: usize,
    pub excerpt: String,
}

/// Tokenizes CQL input text.
///
/// Returns the full token sequence, or a [`LexError`] if some offset
/// matches no rule. There is no partial output on failure.
pub fn tokenize(input: &str) -> Result<Vec<Token<'_>>, LexError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<Token<'a>>, LexError> {
        loop {
            if self.pos >= self.bytes.len() {
                return Ok(None);
            }

            if self.rest().starts_with("$$") {
                return Ok(Some(self.scan_dollar_string()));
            }

            let ch = self.bytes[self.pos];
            let token = match ch {
                b'\n' => self.single(TokenKind::Endline),
                b' ' | b'\t' | b'\r' | b'\x0c' | b'\x0b' => {
                    self.skip_whitespace();
                    continue;
                }
                b'-' => {
                    if self.peek() == Some(b'-') {
                        self.skip_line_comment();
                        continue;
                    }
                    match self.match_float() {
                        Some(len) => self.emit(TokenKind::Float, len),
                        None => self.single(TokenKind::Op),
                    }
                }
                b'/' => {
                    if self.peek() == Some(b'/') {
                        self.skip_line_comment();
                        continue;
                    }
                    if self.peek() == Some(b'*') {
                        match self.scan_block_comment() {
                            Some(token) => token,
                            None => continue,
                        }
                    } else {
                        self.single(TokenKind::Op)
                    }
                }
                b'\'' => self.scan_quoted(b'\'', TokenKind::StringLiteral, TokenKind::UnclosedString),
                b'"' => self.scan_quoted(b'"', TokenKind::QuotedName, TokenKind::UnclosedName),
                b'0'..=b'9' => self.scan_number(),
                b'a'..=b'z' | b'A'..=b'Z' => match self.match_uuid() {
                    Some(len) => self.emit(TokenKind::Uuid, len),
                    None => self.scan_identifier(),
                },
                b';' => self.single(TokenKind::Terminator),
                b':' => self.single(TokenKind::Colon),
                b'*' => self.single(TokenKind::Star),
                b'+' | b'=' | b'%' | b',' | b'(' | b')' | b'.' => self.single(TokenKind::Op),
                b'<' | b'>' | b'!' => self.scan_cmp(),
                b'[' | b']' | b'{' | b'}' => self.single(TokenKind::Bracket),
                _ => return Err(self.fail()),
            };
            return Ok(Some(token));
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos + 1).copied()
    }

    fn emit(&mut self, kind: TokenKind, len: usize) -> Token<'a> {
        let start = self.pos;
        self.pos += len;
        Token::new(kind, &self.input[start..self.pos], start)
    }

    fn single(&mut self, kind: TokenKind) -> Token<'a> {
        self.emit(kind, 1)
    }

    fn fail(&self) -> LexError {
        let excerpt: String = self.rest().chars().take(LEX_ERROR_EXCERPT_CHARS).collect();
        LexError {
            position: self.pos,
            excerpt,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.bytes.get(self.pos) {
            match ch {
                b' ' | b'\t' | b'\r' | b'\x0c' | b'\x0b' => self.pos += 1,
                _ => break,
            }
        }
    }

    /// Consumes `--` or `//` through the end of the line, exclusive of the
    /// line break itself.
    fn skip_line_comment(&mut self) {
        self.pos += 2;
        while let Some(&ch) = self.bytes.get(self.pos) {
            if ch == b'\n' || ch == b'\r' {
                break;
            }
            self.pos += 1;
        }
    }

    /// A closed `/* ... */` comment is insignificant and yields no token;
    /// the first `*/` terminates it. With no closer the rest of the input
    /// becomes an unclosed-comment token.
    fn scan_block_comment(&mut self) -> Option<Token<'a>> {
        match self.input[self.pos + 2..].find("*/") {
            Some(idx) => {
                self.pos += 2 + idx + 2;
                None
            }
            None => Some(self.emit(TokenKind::UnclosedComment, self.bytes.len() - self.pos)),
        }
    }

    fn scan_dollar_string(&mut self) -> Token<'a> {
        match self.input[self.pos + 2..].find("$$") {
            Some(idx) => self.emit(TokenKind::DollarString, 2 + idx + 2),
            None => self.emit(TokenKind::UnclosedDollarString, self.bytes.len() - self.pos),
        }
    }

    /// Scans a quote-delimited literal where a doubled delimiter escapes an
    /// embedded delimiter. The literal closes at the first delimiter not
    /// part of a pair; if input ends first but an escaped pair was seen,
    /// the closed reading still wins and the pair's first quote closes the
    /// literal, leaving its second quote to start the next token.
    fn scan_quoted(&mut self, delim: u8, closed: TokenKind, unclosed: TokenKind) -> Token<'a> {
        let mut i = self.pos + 1;
        let mut last_pair = None;
        loop {
            match self.bytes.get(i) {
                None => {
                    return match last_pair {
                        Some(p) => self.emit(closed, p + 1 - self.pos),
                        None => self.emit(unclosed, self.bytes.len() - self.pos),
                    };
                }
                Some(&ch) if ch == delim => {
                    if self.bytes.get(i + 1) == Some(&delim) {
                        last_pair = Some(i);
                        i += 2;
                    } else {
                        return self.emit(closed, i + 1 - self.pos);
                    }
                }
                Some(_) => i += 1,
            }
        }
    }

    /// Digit-led tokens, most specific first: float, UUID, hex blob, whole
    /// number.
    fn scan_number(&mut self) -> Token<'a> {
        if let Some(len) = self.match_float() {
            return self.emit(TokenKind::Float, len);
        }
        if let Some(len) = self.match_uuid() {
            return self.emit(TokenKind::Uuid, len);
        }
        if let Some(len) = self.match_blob() {
            return self.emit(TokenKind::Blob, len);
        }
        let mut len = 0;
        while self
            .bytes
            .get(self.pos + len)
            .is_some_and(|ch| ch.is_ascii_digit())
        {
            len += 1;
        }
        self.emit(TokenKind::WholeNumber, len)
    }

    /// `-?[0-9]+\.[0-9]+`, digits required on both sides of the dot.
    fn match_float(&self) -> Option<usize> {
        let b = &self.bytes[self.pos..];
        let mut i = 0;
        if b.first() == Some(&b'-') {
            i += 1;
        }
        let int_start = i;
        while b.get(i).is_some_and(|ch| ch.is_ascii_digit()) {
            i += 1;
        }
        if i == int_start || b.get(i) != Some(&b'.') {
            return None;
        }
        i += 1;
        let frac_start = i;
        while b.get(i).is_some_and(|ch| ch.is_ascii_digit()) {
            i += 1;
        }
        (i > frac_start).then_some(i)
    }

    /// Canonical 8-4-4-4-12 hyphenated hex form, case-insensitive.
    fn match_uuid(&self) -> Option<usize> {
        const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];
        let b = &self.bytes[self.pos..];
        let mut i = 0;
        for (group, &len) in GROUPS.iter().enumerate() {
            if group > 0 {
                if b.get(i) != Some(&b'-') {
                    return None;
                }
                i += 1;
            }
            for _ in 0..len {
                if !b.get(i)?.is_ascii_hexdigit() {
                    return None;
                }
                i += 1;
            }
        }
        Some(i)
    }

    /// `0x` or `0X` followed by one or more hex digits.
    fn match_blob(&self) -> Option<usize> {
        let b = &self.bytes[self.pos..];
        if b.first() != Some(&b'0') || !matches!(b.get(1).copied(), Some(b'x') | Some(b'X')) {
            return None;
        }
        let mut i = 2;
        while b.get(i).is_some_and(|ch| ch.is_ascii_hexdigit()) {
            i += 1;
        }
        (i > 2).then_some(i)
    }

    /// `[a-z][a-z0-9_]*`, case-insensitive, value preserved verbatim.
    fn scan_identifier(&mut self) -> Token<'a> {
        let mut len = 1;
        while self
            .bytes
            .get(self.pos + len)
            .is_some_and(|ch| ch.is_ascii_alphanumeric() || *ch == b'_')
        {
            len += 1;
        }
        self.emit(TokenKind::Identifier, len)
    }

    /// `[<>!]=?`
    fn scan_cmp(&mut self) -> Token<'a> {
        let len = if self.peek() == Some(b'=') { 2 } else { 1 };
        self.emit(TokenKind::Cmp, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn empty_input_has_no_tokens() {
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn whitespace_and_comments_are_skipped() {
        assert!(tokenize("  \t\r  -- line\n/* block */ // tail").unwrap().len() == 1);
        assert_eq!(kinds(" \t-- c\n"), [TokenKind::Endline]);
    }

    #[test]
    fn simple_select_token_kinds() {
        assert_eq!(
            kinds("SELECT * FROM t1;"),
            [
                TokenKind::Identifier,
                TokenKind::Star,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Terminator,
            ]
        );
    }

    #[test]
    fn token_spans_cover_source_ranges() {
        let input = "SELECT  a;";
        let tokens = tokenize(input).unwrap();
        assert_eq!(tokens[0].text, "SELECT");
        assert_eq!((tokens[0].start, tokens[0].end), (0, 6));
        assert_eq!(tokens[1].text, "a");
        assert_eq!((tokens[1].start, tokens[1].end), (8, 9));
        assert_eq!(tokens[2].text, ";");
        assert_eq!((tokens[2].start, tokens[2].end), (9, 10));
    }

    #[test]
    fn string_literal_swallows_semicolons_and_newlines() {
        let tokens = tokenize("'a;b\nc'").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, "'a;b\nc'");
    }

    #[test]
    fn doubled_quote_is_an_escape_not_a_terminator() {
        let tokens = tokenize("'it''s'").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, "'it''s'");

        let tokens = tokenize("\"a\"\"b\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::QuotedName);
        assert_eq!(tokens[0].text, "\"a\"\"b\"");
    }

    #[test]
    fn unclosed_string_runs_to_end_of_input() {
        let tokens = tokenize("'open").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::UnclosedString);
        assert_eq!(tokens[0].text, "'open");
    }

    #[test]
    fn trailing_escaped_pair_still_closes_the_literal() {
        // Greedy reading of 'ab'' is a closed 'ab' plus an unclosed '.
        let tokens = tokenize("'ab''").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, "'ab'");
        assert_eq!(tokens[1].kind, TokenKind::UnclosedString);
        assert_eq!(tokens[1].text, "'");
    }

    #[test]
    fn dollar_quoted_string_spans_both_markers() {
        let tokens = tokenize("$$any ' \" ; text$$").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::DollarString);
        assert_eq!(tokens[0].text, "$$any ' \" ; text$$");
    }

    #[test]
    fn unclosed_dollar_string_consumes_the_rest() {
        let tokens = tokenize("$$still open; SELECT").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::UnclosedDollarString);
    }

    #[test]
    fn unclosed_block_comment_is_a_token() {
        let tokens = tokenize("SELECT /* not done").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[1].kind, TokenKind::UnclosedComment);
        assert_eq!(tokens[1].text, "/* not done");
    }

    #[test]
    fn block_comment_ends_at_first_closer() {
        let tokens = tokenize("/* a */ x */").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
        assert_eq!(tokens[0].text, "x");
    }

    #[test]
    fn numeric_literal_kinds() {
        assert_eq!(kinds("42"), [TokenKind::WholeNumber]);
        assert_eq!(kinds("3.14"), [TokenKind::Float]);
        assert_eq!(kinds("-3.14"), [TokenKind::Float]);
        assert_eq!(kinds("0xDEADbeef"), [TokenKind::Blob]);
        assert_eq!(
            kinds("550e8400-e29b-41d4-a716-446655440000"),
            [TokenKind::Uuid]
        );
    }

    #[test]
    fn bare_minus_and_dot_are_operators() {
        assert_eq!(
            kinds("-5"),
            [TokenKind::Op, TokenKind::WholeNumber],
        );
        assert_eq!(
            kinds("1."),
            [TokenKind::WholeNumber, TokenKind::Op],
        );
    }

    #[test]
    fn uuid_beats_identifier_for_hex_led_text() {
        assert_eq!(
            kinds("deadbeef-dead-beef-dead-beefdeadbeef"),
            [TokenKind::Uuid]
        );
        assert_eq!(kinds("deadbeef"), [TokenKind::Identifier]);
    }

    #[test]
    fn comparison_operators() {
        assert_eq!(
            kinds("< <= > >= != !"),
            [
                TokenKind::Cmp,
                TokenKind::Cmp,
                TokenKind::Cmp,
                TokenKind::Cmp,
                TokenKind::Cmp,
                TokenKind::Cmp,
            ]
        );
    }

    #[test]
    fn unmatched_byte_is_a_hard_error() {
        let err = tokenize("SELECT #").unwrap_err();
        assert_eq!(err.position, 7);
        assert_eq!(err.excerpt, "#");
    }

    #[test]
    fn lex_error_excerpt_is_bounded() {
        let input = format!("@{}", "x".repeat(50));
        let err = tokenize(&input).unwrap_err();
        assert_eq!(err.position, 0);
        assert_eq!(err.excerpt.chars().count(), LEX_ERROR_EXCERPT_CHARS);
    }

    #[test]
    fn lone_dollar_sign_does_not_lex() {
        assert!(tokenize("$").is_err());
    }
}
