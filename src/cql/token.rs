//! Token kinds and the borrowed token value produced by the lexer.
//!
//! A token never outlives the text it was lexed from: the `text` field is a
//! slice of the caller's input buffer and `start`/`end` give the half-open
//! byte range the token covers in that buffer.

/// Kind tag for a lexed CQL token.
///
/// Whitespace and closed comments are consumed by the lexer and never
/// appear in its output. The four `Unclosed*` kinds mark input that ended
/// inside a literal or comment; their presence anywhere in a token stream
/// makes the whole input incomplete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A single line break. Dropped or converted by the massager.
    Endline,
    /// Statement terminator, ordinarily `;`.
    Terminator,
    /// Unquoted identifier or keyword.
    Identifier,
    /// Single-quoted string literal, closing quote included.
    StringLiteral,
    /// Double-quoted name, closing quote included.
    QuotedName,
    /// `$$`-delimited string literal, both markers included.
    DollarString,
    /// Single-quoted literal with no closing quote before end of input.
    UnclosedString,
    /// Double-quoted name with no closing quote before end of input.
    UnclosedName,
    /// `$$`-delimited literal with no closing marker before end of input.
    UnclosedDollarString,
    /// `/*` comment with no closing `*/` before end of input.
    UnclosedComment,
    /// Floating-point number, optionally signed.
    Float,
    /// Canonical 8-4-4-4-12 hyphenated UUID.
    Uuid,
    /// `0x`-prefixed hex blob literal.
    Blob,
    /// Run of decimal digits.
    WholeNumber,
    /// `:`
    Colon,
    /// `*`
    Star,
    /// One of `- + = % / , ( ) .`
    Op,
    /// One of `< > <= >= != !`
    Cmp,
    /// One of `[ ] { }`
    Bracket,
}

impl TokenKind {
    /// Whether this kind marks input that ended inside an open literal or
    /// comment.
    pub fn is_unclosed(self) -> bool {
        matches!(
            self,
            TokenKind::UnclosedString
                | TokenKind::UnclosedName
                | TokenKind::UnclosedDollarString
                | TokenKind::UnclosedComment
        )
    }

    /// Whether this kind participates in the "meaningful token" subset used
    /// for fast command dispatch (identifiers, star, and literals).
    pub fn is_meaningful(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier
                | TokenKind::Star
                | TokenKind::QuotedName
                | TokenKind::StringLiteral
                | TokenKind::DollarString
                | TokenKind::WholeNumber
                | TokenKind::Float
                | TokenKind::Uuid
                | TokenKind::Blob
        )
    }
}

/// A lexed CQL token borrowing from the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Exact source substring the token covers.
    pub text: &'a str,
    /// Byte offset of the first byte of the token in the input.
    pub start: usize,
    /// Byte offset one past the last byte of the token in the input.
    pub end: usize,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self {
            kind,
            text,
            start,
            end: start + text.len(),
        }
    }
}
