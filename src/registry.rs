use crate::*;
use moka::sync::Cache;
use std::sync::{Arc, OnceLock};

/// Owns one tokenizer per dialect.
///
/// Tokenizers are built on first use and then shared; concurrent first
/// callers for the same language wait on a single build. Formatting state is
/// never cached, so each call starts clean.
#[derive(Clone)]
pub struct FormatterRegistry {
    tokenizers: Cache<Language, Arc<Tokenizer>>,
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self {
            tokenizers: Cache::builder()
                .name("sqlfmt-tokenizers")
                .initial_capacity(Language::ALL.len())
                .build(),
        }
    }

    /// Process wide registry backing the crate level `format` helper.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<FormatterRegistry> = OnceLock::new();
        REGISTRY.get_or_init(Self::new)
    }

    pub fn tokenizer(&self, language: Language) -> Arc<Tokenizer> {
        self.tokenizers.get_with(language, || {
            debug!("Building {language} tokenizer");
            Arc::new(Tokenizer::new(language.dialect()))
        })
    }

    pub fn format(&self, query: &str, options: &FormatOptions) -> String {
        let tokenizer = self.tokenizer(options.language);
        Formatter::new(&tokenizer, options).format(query)
    }

    pub fn tokenize<'q>(&self, query: &'q str, language: Language) -> Vec<Token<'q>> {
        self.tokenizer(language).tokenize(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn tokenizer_is_built_once_per_language() {
        common_init();
        let registry = FormatterRegistry::new();
        for language in Language::ALL {
            let first = registry.tokenizer(language);
            let second = registry.tokenizer(language);
            assert!(Arc::ptr_eq(&first, &second), "{language}");
        }
        let standard = registry.tokenizer(Language::Standard);
        let db2 = registry.tokenizer(Language::Db2);
        assert!(!Arc::ptr_eq(&standard, &db2));
    }

    #[test]
    fn concurrent_callers_share_one_tokenizer() {
        let registry = FormatterRegistry::new();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                thread::spawn(move || registry.tokenizer(Language::PlSql))
            })
            .collect();
        let tokenizers: Vec<_> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();
        assert!(tokenizers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    }

    #[test]
    fn registries_are_independent() {
        let a = FormatterRegistry::new();
        let b = FormatterRegistry::new();
        assert!(!Arc::ptr_eq(
            &a.tokenizer(Language::N1ql),
            &b.tokenizer(Language::N1ql)
        ));
    }

    #[test]
    fn format_is_deterministic() {
        let registry = FormatterRegistry::new();
        let options = FormatOptions::default().with_params(vec!["1".to_string()]);
        let sql = "select a, b from t where c = ? and d in (1, 2)";
        assert_eq!(registry.format(sql, &options), registry.format(sql, &options));
        assert_eq!(
            registry.format(sql, &options),
            FormatterRegistry::global().format(sql, &options)
        );
    }
}
