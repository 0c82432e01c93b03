//! SQL pretty-printer.
//!
//! A query is split into lossless tokens by a dialect specific
//! [`Tokenizer`], then re-rendered by the [`Formatter`] with clause aware
//! line breaks and indentation.
//!
//! ```rust
//! use sqlfmt::{FormatOptions, format};
//!
//! let pretty = format("SELECT COUNT(*) FROM t", &FormatOptions::default());
//! assert_eq!(pretty, "SELECT\n  COUNT(*)\nFROM\n  t");
//! ```
reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(formatter);
reexport!(registry);
reexport!(sql);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

/// Format `query` with the process wide [`FormatterRegistry`].
pub fn format(query: &str, options: &FormatOptions) -> String {
    FormatterRegistry::global().format(query, options)
}

/// Tokenize `query` with the cached tokenizer for `language`.
pub fn tokenize(query: &str, language: Language) -> Vec<Token<'_>> {
    FormatterRegistry::global().tokenize(query, language)
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_level_format_uses_defaults() {
        common_init();
        let out = format("select a from t", &FormatOptions::default());
        assert_eq!(out, "select\n  a\nfrom\n  t");
    }

    #[test]
    fn crate_level_tokenize_is_lossless() {
        let sql = "SELECT a -- trailing\nFROM t";
        let rebuilt: String = tokenize(sql, Language::Standard)
            .iter()
            .map(|t| t.value)
            .collect();
        assert_eq!(rebuilt, sql);
    }
}
