//! Renders a token stream as indented, line-broken SQL.
//!
//! Original whitespace is discarded and recomputed. Clause keywords
//! (`SELECT`, `FROM`, ...) start a new indented section, connectives (`AND`,
//! `JOIN`, ...) start a new line, commas break lines outside short
//! parenthesized spans, and parentheses either stay inline or open an
//! indented block.

mod indentation;
mod inline_block;
mod options;
mod params;

#[cfg(test)]
mod format_tests;

pub use indentation::Indentation;
pub use inline_block::{INLINE_MAX_LENGTH, InlineBlock};
pub use options::FormatOptions;
pub use params::{ParamValues, Params};

use crate::sql::tokenizer::is_space;
use crate::*;
use itertools::Itertools as _;
use std::borrow::Cow;

/// Formats queries of one dialect with one set of options.
///
/// Cheap to construct: it only borrows the (shared) tokenizer and options,
/// and all per-query state lives in a fresh `FormatterState`.
pub struct Formatter<'a> {
    tokenizer: &'a Tokenizer,
    options: &'a FormatOptions,
}

impl<'a> Formatter<'a> {
    pub fn new(tokenizer: &'a Tokenizer, options: &'a FormatOptions) -> Self {
        Self { tokenizer, options }
    }

    pub fn format(&self, query: &str) -> String {
        let tokens = self.tokenizer.tokenize(query);
        trace!("Formatting {} tokens", tokens.len());
        FormatterState::new(&tokens, self.options).render()
    }
}

struct FormatterState<'a, 'q> {
    tokens: &'a [Token<'q>],
    index: usize,
    output: String,
    indentation: Indentation,
    inline_block: InlineBlock,
    params: Params<'a>,
    previous_toplevel: Option<&'a Token<'q>>,
    uppercase: bool,
}

impl<'a, 'q> FormatterState<'a, 'q> {
    fn new(tokens: &'a [Token<'q>], options: &'a FormatOptions) -> Self {
        Self {
            tokens,
            index: 0,
            output: String::new(),
            indentation: Indentation::new(options.indent.as_str()),
            inline_block: InlineBlock::new(options.inline_max_length),
            params: Params::new(options.params.as_ref()),
            previous_toplevel: None,
            uppercase: options.uppercase,
        }
    }

    fn render(mut self) -> String {
        let tokens = self.tokens;
        for (index, token) in tokens.iter().enumerate() {
            self.index = index;
            match token.kind {
                TokenKind::Whitespace => {}
                TokenKind::LineComment => self.format_line_comment(token),
                TokenKind::BlockComment => self.format_block_comment(token),
                TokenKind::ReservedTopLevel => {
                    self.format_toplevel_reserved_word(token);
                    self.previous_toplevel = Some(token);
                }
                TokenKind::ReservedNewline => self.format_newline_reserved_word(token),
                TokenKind::Reserved => {
                    let word = self.cased(token.value);
                    self.format_with_spaces(&word);
                }
                TokenKind::OpenParen => self.format_opening_paren(token),
                TokenKind::CloseParen => self.format_closing_paren(token),
                TokenKind::Placeholder => self.format_placeholder(token),
                _ => match token.value {
                    "," => self.format_comma(),
                    ":" => self.format_with_space_after(token.value),
                    "." | ";" => self.format_without_spaces(token.value),
                    value => self.format_with_spaces(value),
                },
            }
        }
        self.output.trim().to_string()
    }

    fn format_line_comment(&mut self, token: &Token<'q>) {
        self.output.push_str(token.value);
        self.add_newline();
    }

    fn format_block_comment(&mut self, token: &Token<'q>) {
        self.add_newline();
        let indented = token
            .value
            .replace('\n', &format!("\n{}", self.indentation.indent()));
        self.output.push_str(&indented);
        self.add_newline();
    }

    fn format_toplevel_reserved_word(&mut self, token: &Token<'q>) {
        self.indentation.decrease_top_level();
        self.add_newline();
        self.indentation.increase_top_level();
        let word = self.keyword(token.value);
        self.output.push_str(&word);
        self.add_newline();
    }

    fn format_newline_reserved_word(&mut self, token: &Token<'q>) {
        self.add_newline();
        let word = self.keyword(token.value);
        self.output.push_str(&word);
        self.output.push(' ');
    }

    fn format_opening_paren(&mut self, token: &Token<'q>) {
        // keep the gap only where the query itself had one
        let keep_gap = self.previous_token().is_some_and(|t| {
            matches!(
                t.kind,
                TokenKind::Whitespace | TokenKind::OpenParen | TokenKind::LineComment
            )
        });
        if !keep_gap {
            self.trim_spaces_end();
        }
        let paren = self.cased(token.value);
        self.output.push_str(&paren);

        self.inline_block.begin_if_possible(self.tokens, self.index);
        if !self.inline_block.is_active() {
            self.indentation.increase_block_level();
            self.add_newline();
        }
    }

    fn format_closing_paren(&mut self, token: &Token<'q>) {
        let paren = self.cased(token.value);
        if self.inline_block.is_active() {
            self.inline_block.end();
            self.format_with_space_after(&paren);
        } else {
            self.indentation.decrease_block_level();
            self.add_newline();
            self.format_with_spaces(&paren);
        }
    }

    fn format_placeholder(&mut self, token: &Token<'q>) {
        let value = self.params.get(token);
        self.output.push_str(value);
        self.output.push(' ');
    }

    fn format_comma(&mut self) {
        self.format_with_space_after(",");
        let in_limit = self
            .previous_toplevel
            .is_some_and(|t| t.value.eq_ignore_ascii_case("limit"));
        if !self.inline_block.is_active() && !in_limit {
            self.add_newline();
        }
    }

    fn format_with_space_after(&mut self, value: &str) {
        self.trim_trailing_whitespace();
        self.output.push_str(value);
        self.output.push(' ');
    }

    fn format_without_spaces(&mut self, value: &str) {
        self.trim_trailing_whitespace();
        self.output.push_str(value);
    }

    fn format_with_spaces(&mut self, value: &str) {
        self.output.push_str(value);
        self.output.push(' ');
    }

    fn add_newline(&mut self) {
        self.trim_spaces_end();
        self.output.push('\n');
        self.output.push_str(&self.indentation.indent());
    }

    /// Trims, then restores the line break a preceding line comment needs.
    fn trim_trailing_whitespace(&mut self) {
        self.trim_spaces_end();
        if self
            .previous_non_whitespace_token()
            .is_some_and(|t| t.kind == TokenKind::LineComment)
        {
            self.output.push('\n');
        }
    }

    fn trim_spaces_end(&mut self) {
        let len = self.output.trim_end().len();
        self.output.truncate(len);
    }

    fn previous_token(&self) -> Option<&'a Token<'q>> {
        let tokens = self.tokens;
        self.index.checked_sub(1).and_then(|i| tokens.get(i))
    }

    fn previous_non_whitespace_token(&self) -> Option<&'a Token<'q>> {
        let tokens = self.tokens;
        tokens[..self.index]
            .iter()
            .rev()
            .find(|t| !t.kind.is_whitespace())
    }

    /// Clause keyword as emitted: inner whitespace runs collapse to one space.
    fn keyword(&self, value: &str) -> String {
        let word = value.split(is_space).filter(|w| !w.is_empty()).join(" ");
        if self.uppercase {
            word.to_uppercase()
        } else {
            word
        }
    }

    fn cased(&self, value: &'q str) -> Cow<'q, str> {
        if self.uppercase && value.chars().any(char::is_alphabetic) {
            Cow::Owned(value.to_uppercase())
        } else {
            Cow::Borrowed(value)
        }
    }
}
