//! Decides whether a parenthesized span is short enough to stay on one line.
use crate::sql::{Token, TokenKind};

/// Default character budget of an inline block, parens included.
pub const INLINE_MAX_LENGTH: usize = 50;

/// Tracks nesting inside a parenthesized span rendered on a single line,
/// e.g. `COUNT(*)` or `DECIMAL(7, 2)`.
#[derive(Debug, Clone)]
pub struct InlineBlock {
    level: usize,
    max_length: usize,
}

impl Default for InlineBlock {
    fn default() -> Self {
        Self::new(INLINE_MAX_LENGTH)
    }
}

impl InlineBlock {
    pub fn new(max_length: usize) -> Self {
        Self {
            level: 0,
            max_length,
        }
    }

    /// Called on the open paren at `index`. Starts a block when the span
    /// qualifies; inside an active block every paren just nests one deeper.
    pub fn begin_if_possible(&mut self, tokens: &[Token<'_>], index: usize) {
        if self.level == 0 && self.is_inline_block(tokens, index) {
            self.level = 1;
        } else if self.level > 0 {
            self.level += 1;
        }
    }

    pub fn end(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.level > 0
    }

    /// Scans from the open paren to its match, giving up once the span
    /// exceeds the budget or contains a token that forces a line break.
    fn is_inline_block(&self, tokens: &[Token<'_>], index: usize) -> bool {
        let mut length = 0;
        let mut depth = 0usize;
        for token in tokens.iter().skip(index) {
            length += token.value.chars().count();
            if length > self.max_length {
                return false;
            }
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return true;
                    }
                }
                _ => {}
            }
            if Self::is_forbidden(token) {
                return false;
            }
        }
        false
    }

    fn is_forbidden(token: &Token<'_>) -> bool {
        matches!(
            token.kind,
            TokenKind::ReservedTopLevel | TokenKind::ReservedNewline
        ) || token.kind.is_comment()
            || token.value == ";"
    }
}
