//! Lossless, dialect aware SQL tokenization.
//!
//! Modules:
//! - `dialect`    : Reserved word tiers and punctuation tables per language.
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with the text it covers.
//! - `tokenizer`  : Single pass tokenizer producing a `Vec<Token>` from raw SQL.
//!
//! Design Principles:
//! 1. Accept any input; malformed SQL still yields tokens.
//! 2. Never drop or rewrite text: token values concatenate back to the input.
//! 3. Keep dialect knowledge in data (`DialectConfig`), not in code paths.
//!
//! Example:
//! ```rust
//! use sqlfmt::prelude::*;
//!
//! let tokens = Tokenizer::new(Language::Standard.dialect()).tokenize("SELECT a FROM t");
//! assert_eq!(tokens[0].kind, TokenKind::ReservedTopLevel);
//! assert_eq!(tokens.iter().map(|t| t.value).collect::<String>(), "SELECT a FROM t");
//! ```

pub mod dialect;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use dialect::{DialectConfig, Language, StringStyle};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::Tokenizer;

/// Convenience prelude re-exporting the most commonly used items.
pub mod prelude {
    pub use super::{Language, Token, TokenKind, Tokenizer};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_tokenizes() {
        for language in Language::ALL {
            let tokens = Tokenizer::new(language.dialect()).tokenize("SELECT col FROM tbl");
            assert_eq!(tokens.len(), 7, "{language}");
            assert!(tokens.iter().any(|t| t.kind == TokenKind::ReservedTopLevel));
        }
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let toks = Tokenizer::new(Language::Db2.dialect()).tokenize("FROM X");
        assert!(toks.iter().any(|t| t.kind == TokenKind::ReservedTopLevel));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Word && t.value == "X"));
    }
}
