use crate::*;
use confique::Config as _;
use std::sync::OnceLock;

/// Environment driven defaults for the `sqlfmt` binary.
#[derive(confique::Config)]
pub struct Config {
    #[config(env = "SQLFMT_LANGUAGE", default = "sql")]
    pub language: String,
    #[config(env = "SQLFMT_INDENT", default = "  ")]
    pub indent: String,
    #[config(env = "SQLFMT_UPPERCASE", default = false)]
    pub uppercase: bool,
    #[config(env = "SQLFMT_INLINE_MAX_LENGTH", default = 50)]
    pub inline_max_length: usize,
}

/// Environment config, read once per process.
pub fn config() -> Result<&'static Config> {
    static CONFIG: OnceLock<Config> = OnceLock::new();
    if let Some(config) = CONFIG.get() {
        return Ok(config);
    }
    let loaded = Config::load()?;
    Ok(CONFIG.get_or_init(|| loaded))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self::builder().env().load()?)
    }

    /// Resolve into [`FormatOptions`]. Fails when `language` names no known dialect.
    pub fn options(&self) -> Result<FormatOptions> {
        Ok(FormatOptions {
            language: self.language.parse()?,
            indent: self.indent.clone(),
            uppercase: self.uppercase,
            inline_max_length: self.inline_max_length,
            params: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(language: &str) -> Config {
        Config {
            language: language.to_string(),
            indent: "\t".to_string(),
            uppercase: true,
            inline_max_length: 20,
        }
    }

    #[test]
    fn options_carry_every_field() {
        let options = sample("db2").options().expect("db2 is supported");
        assert_eq!(options.language, Language::Db2);
        assert_eq!(options.indent, "\t");
        assert!(options.uppercase);
        assert_eq!(options.inline_max_length, 20);
        assert!(options.params.is_none());
    }

    #[test]
    fn unknown_language_is_rejected() {
        let err = sample("klingon").options().unwrap_err();
        assert!(matches!(err, Error::UnsupportedDialect(ref name) if name == "klingon"));
    }

    #[test]
    fn defaults_load_without_environment() {
        // SQLFMT_* is not set in the test environment
        let config = Config::load().expect("defaults are complete");
        let options = config.options().expect("default language parses");
        assert_eq!(options, FormatOptions::default());
    }

    #[test]
    fn accessor_returns_the_same_instance() {
        let first = config().expect("defaults are complete");
        let second = config().expect("defaults are complete");
        assert!(std::ptr::eq(first, second));
    }
}
