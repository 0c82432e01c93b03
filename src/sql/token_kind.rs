//! Token kind definitions for the SQL tokenizer.
//!
//! Every byte of the input ends up in a token of one of these kinds; the
//! formatter drives its layout rules off this classification. Reserved words
//! come in three tiers:
//! - `Reserved`         : plain keywords, laid out like any other word.
//! - `ReservedTopLevel` : clause starters (`SELECT`, `FROM`, ...) that open a
//!                        new indented section.
//! - `ReservedNewline`  : connectives (`AND`, `JOIN`, ...) that start a line
//!                        without changing the indentation.

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    #[display("whitespace")]
    Whitespace,
    #[display("word")]
    Word,
    #[display("string")]
    String,
    #[display("reserved")]
    Reserved,
    #[display("reserved-toplevel")]
    ReservedTopLevel,
    #[display("reserved-newline")]
    ReservedNewline,
    #[display("operator")]
    Operator,
    #[display("open-paren")]
    OpenParen,
    #[display("close-paren")]
    CloseParen,
    #[display("line-comment")]
    LineComment,
    #[display("block-comment")]
    BlockComment,
    #[display("number")]
    Number,
    #[display("placeholder")]
    Placeholder,
}

impl TokenKind {
    /// True for any of the three reserved word tiers.
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Reserved | TokenKind::ReservedTopLevel | TokenKind::ReservedNewline
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }

    pub fn is_whitespace(self) -> bool {
        self == TokenKind::Whitespace
    }
}
