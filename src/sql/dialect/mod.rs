//! Dialect tables and the closed set of supported languages.
//!
//! A dialect is pure data: the reserved word tiers plus the punctuation,
//! quoting and placeholder conventions the tokenizer is built from. Word
//! lists may contain multi-word phrases (`GROUP BY`); the tokenizer lets any
//! whitespace run stand in for the single space between their words.

mod db2;
mod n1ql;
mod plsql;
mod standard;

pub use db2::DB2;
pub use n1ql::N1QL;
pub use plsql::PLSQL;
pub use standard::STANDARD;

use crate::*;
use std::str::FromStr;

/// Supported SQL dialects.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Language {
    #[default]
    #[display("sql")]
    Standard,
    #[display("pl/sql")]
    PlSql,
    #[display("n1ql")]
    N1ql,
    #[display("db2")]
    Db2,
}

impl Language {
    pub const ALL: [Self; 4] = [
        Language::Standard,
        Language::PlSql,
        Language::N1ql,
        Language::Db2,
    ];

    /// Static tables for this dialect.
    pub fn dialect(self) -> &'static DialectConfig {
        match self {
            Language::Standard => &STANDARD,
            Language::PlSql => &PLSQL,
            Language::N1ql => &N1QL,
            Language::Db2 => &DB2,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    /// Names are matched case-insensitively; `plsql` is accepted for `pl/sql`.
    fn from_str(name: &str) -> Result<Self> {
        let language = match name.trim().to_ascii_lowercase().as_str() {
            "sql" => Language::Standard,
            "pl/sql" | "plsql" => Language::PlSql,
            "n1ql" => Language::N1ql,
            "db2" => Language::Db2,
            _ => return Err(Error::UnsupportedDialect(name.to_string())),
        };
        Ok(language)
    }
}

/// Quoting conventions a dialect may enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringStyle {
    /// `` `name` ``, a doubled backtick continues the string.
    Backtick,
    /// `[name]`, `]]` continues the string.
    Bracket,
    /// `"text"`, backslash escapes and doubled quotes.
    DoubleQuote,
    /// `'text'`, backslash escapes and doubled quotes.
    SingleQuote,
    /// `N'text'`, national character literal.
    National,
}

/// Immutable per-dialect configuration consumed by [`Tokenizer::new`].
#[derive(Debug)]
pub struct DialectConfig {
    pub reserved_words: &'static [&'static str],
    pub reserved_toplevel_words: &'static [&'static str],
    pub reserved_newline_words: &'static [&'static str],
    pub string_styles: &'static [StringStyle],
    pub open_parens: &'static [&'static str],
    pub close_parens: &'static [&'static str],
    pub indexed_placeholders: &'static [char],
    pub named_placeholders: &'static [char],
    pub line_comments: &'static [&'static str],
    pub special_word_chars: &'static [char],
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("sql", Language::Standard)]
    #[case("SQL", Language::Standard)]
    #[case("pl/sql", Language::PlSql)]
    #[case("plsql", Language::PlSql)]
    #[case("n1ql", Language::N1ql)]
    #[case("DB2", Language::Db2)]
    fn parses_known_languages(#[case] name: &str, #[case] expected: Language) {
        assert_eq!(name.parse::<Language>().expect("known language"), expected);
    }

    #[test]
    fn unknown_language_names_the_value() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedDialect(_)));
        assert!(err.to_string().contains("klingon"), "got {err}");
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for language in Language::ALL {
            assert_eq!(language.to_string().parse::<Language>().ok(), Some(language));
        }
    }

    #[test]
    fn word_lists_are_upper_case() {
        for language in Language::ALL {
            let d = language.dialect();
            for word in d
                .reserved_words
                .iter()
                .chain(d.reserved_toplevel_words)
                .chain(d.reserved_newline_words)
            {
                assert_eq!(*word, word.to_ascii_uppercase(), "{language}: {word}");
            }
        }
    }
}
