//! Token model tying a `TokenKind` to the exact text it was scanned from.
//!
//! A `Token` borrows its `value` from the original query, so concatenating the
//! values of a token stream gives the input back byte for byte. Offsets are
//! kept alongside for callers that need to map tokens back to positions.
use crate::sql::token_kind::TokenKind;

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `value == &input[start..end]`
/// - `key` is only ever set on `TokenKind::Placeholder` tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    /// Placeholder name or index, `None` for a bare positional `?`.
    pub key: Option<String>,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    /// Construct a new token starting at byte `start`.
    pub fn new(kind: TokenKind, value: &'a str, start: usize) -> Self {
        Self {
            kind,
            value,
            key: None,
            start,
            end: start + value.len(),
        }
    }

    /// Construct a placeholder token carrying its parsed key.
    pub fn placeholder(value: &'a str, start: usize, key: Option<String>) -> Self {
        Self {
            key,
            ..Self::new(TokenKind::Placeholder, value, start)
        }
    }

    /// Byte length of this token.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub const fn span(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_follow_value() {
        let t = Token::new(TokenKind::Word, "users", 14);
        assert_eq!(t.span(), (14, 19));
        assert_eq!(t.len(), 5);
        assert!(!t.is_empty());
        assert!(t.key.is_none());
    }

    #[test]
    fn placeholder_keeps_key() {
        let t = Token::placeholder(":id", 3, Some("id".into()));
        assert!(t.is(TokenKind::Placeholder));
        assert_eq!(t.key.as_deref(), Some("id"));
        assert_eq!(t.end, 6);
    }
}
