use crate::*;

/// Per-call formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub language: Language,
    /// Unit repeated once per indentation level.
    pub indent: String,
    /// Upper-case reserved words and word parens (`CASE`, `END`).
    pub uppercase: bool,
    /// Longest parenthesized span, in characters, kept on one line.
    pub inline_max_length: usize,
    /// Placeholder values; placeholders are left untouched when `None`.
    pub params: Option<ParamValues>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            indent: "  ".to_string(),
            uppercase: false,
            inline_max_length: INLINE_MAX_LENGTH,
            params: None,
        }
    }
}

impl FormatOptions {
    /// Select the dialect by name, e.g. `"pl/sql"`.
    pub fn with_language(mut self, name: &str) -> Result<Self> {
        self.language = name.parse()?;
        Ok(self)
    }

    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_uppercase(mut self, uppercase: bool) -> Self {
        self.uppercase = uppercase;
        self
    }

    pub fn with_inline_max_length(mut self, max_length: usize) -> Self {
        self.inline_max_length = max_length;
        self
    }

    pub fn with_params(mut self, params: impl Into<ParamValues>) -> Self {
        self.params = Some(params.into());
        self
    }
}
