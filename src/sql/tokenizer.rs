use crate::sql::{
    dialect::{DialectConfig, StringStyle},
    token::Token,
    token_kind::TokenKind,
};
use crate::*;
use itertools::Itertools as _;
use std::{cmp::Reverse, collections::HashMap};
use unicode_general_category::{GeneralCategory, get_general_category};

/// Multi-character operators, longest first. Anything else is a one
/// character operator.
const OPERATORS: [&str; 18] = [
    "!~~*", "->>", "~~*", "!~~", "!~*", "!=", "<>", "==", "<=", ">=", "!<", "!>", "||", "::",
    "->", "~~", "~*", "!~",
];

/// Dialect aware SQL tokenizer producing a lossless stream of `Token`s.
///
/// Scope / Intent:
/// - Feeds the formatter; classification only, no syntax checking.
/// - Built once per dialect (see `FormatterRegistry`) and then shared, it
///   holds no per-call state.
///
/// Behavior:
/// - At each position the first matching rule wins, in this order:
///   whitespace, line comment, block comment, string, open paren, close
///   paren, placeholder, number, reserved word, word, operator.
/// - Reserved words are skipped right after a `.` so `t.from` keeps `from`
///   as a plain word.
/// - Unterminated strings and block comments run to end of input.
///
/// Guarantees:
/// - Never fails and never panics; every character lands in some token,
///   worst case a one character `Operator`.
/// - Concatenating the token values gives back the input exactly.
///
/// Complexity:
/// - O(n) scanning; reserved words are looked up by their leading word.
#[derive(Debug)]
pub struct Tokenizer {
    toplevel: ReservedTier,
    newline: ReservedTier,
    plain: ReservedTier,
    dialect: &'static DialectConfig,
}

impl Tokenizer {
    pub fn new(dialect: &'static DialectConfig) -> Self {
        let tokenizer = Self {
            toplevel: ReservedTier::new(dialect.reserved_toplevel_words),
            newline: ReservedTier::new(dialect.reserved_newline_words),
            plain: ReservedTier::new(dialect.reserved_words),
            dialect,
        };
        debug!(
            "Built tokenizer with {} top-level, {} newline and {} plain reserved words",
            dialect.reserved_toplevel_words.len(),
            dialect.reserved_newline_words.len(),
            dialect.reserved_words.len(),
        );
        tokenizer
    }

    pub fn tokenize<'a>(&self, input: &'a str) -> Vec<Token<'a>> {
        let mut tokens: Vec<Token<'a>> = Vec::new();
        let mut start = 0;
        while start < input.len() {
            let token = self.next_token(&input[start..], start, tokens.last());
            start = token.end;
            tokens.push(token);
        }
        trace!("Tokenized {} bytes into {} tokens", input.len(), tokens.len());
        tokens
    }

    fn next_token<'a>(
        &self,
        input: &'a str,
        start: usize,
        previous: Option<&Token<'_>>,
    ) -> Token<'a> {
        let lexeme = |kind, len: usize| Token::new(kind, &input[..len], start);
        let special = self.dialect.special_word_chars;
        Some(whitespace_len(input))
            .filter(|&len| len > 0)
            .map(|len| lexeme(TokenKind::Whitespace, len))
            .or_else(|| {
                self.line_comment_len(input)
                    .map(|len| lexeme(TokenKind::LineComment, len))
            })
            .or_else(|| block_comment_len(input).map(|len| lexeme(TokenKind::BlockComment, len)))
            .or_else(|| self.string_len(input).map(|len| lexeme(TokenKind::String, len)))
            .or_else(|| {
                paren_len(self.dialect.open_parens, input, special)
                    .map(|len| lexeme(TokenKind::OpenParen, len))
            })
            .or_else(|| {
                paren_len(self.dialect.close_parens, input, special)
                    .map(|len| lexeme(TokenKind::CloseParen, len))
            })
            .or_else(|| self.placeholder(input, start))
            .or_else(|| number_len(input).map(|len| lexeme(TokenKind::Number, len)))
            .or_else(|| self.reserved(input, previous).map(|(kind, len)| lexeme(kind, len)))
            .or_else(|| self.word_len(input).map(|len| lexeme(TokenKind::Word, len)))
            .unwrap_or_else(|| lexeme(TokenKind::Operator, operator_len(input)))
    }

    fn line_comment_len(&self, input: &str) -> Option<usize> {
        let prefix = self
            .dialect
            .line_comments
            .iter()
            .find(|prefix| input.starts_with(**prefix))?;
        let body = &input[prefix.len()..];
        let len = match body.find(['\r', '\n']) {
            Some(at) if body[at..].starts_with("\r\n") => at + 2,
            Some(at) => at + 1,
            None => body.len(),
        };
        Some(prefix.len() + len)
    }

    fn string_len(&self, input: &str) -> Option<usize> {
        self.dialect
            .string_styles
            .iter()
            .find_map(|style| style.scan(input))
    }

    /// `:name`, then `:'quoted name'`, then `?` / `?12`.
    fn placeholder<'a>(&self, input: &'a str, start: usize) -> Option<Token<'a>> {
        let mut chars = input.chars();
        let prefix = chars.next()?;
        let after = prefix.len_utf8();

        if self.dialect.named_placeholders.contains(&prefix) {
            let ident = ascii_run(&input[after..], |b| {
                b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'$')
            });
            if ident > 0 {
                let value = &input[..after + ident];
                return Some(Token::placeholder(value, start, Some(value[after..].to_string())));
            }
            if let Some(len) = self.string_len(&input[after..]) {
                let value = &input[..after + len];
                return Some(Token::placeholder(value, start, quoted_key(value)));
            }
        }

        if self.dialect.indexed_placeholders.contains(&prefix) {
            let digits = ascii_run(&input[after..], |b| b.is_ascii_digit());
            let value = &input[..after + digits];
            let key = (digits > 0).then(|| value[after..].to_string());
            return Some(Token::placeholder(value, start, key));
        }
        None
    }

    fn reserved(&self, input: &str, previous: Option<&Token<'_>>) -> Option<(TokenKind, usize)> {
        if previous.is_some_and(|t| t.value == ".") {
            return None;
        }
        let special = self.dialect.special_word_chars;
        self.toplevel
            .find(input, special)
            .map(|len| (TokenKind::ReservedTopLevel, len))
            .or_else(|| {
                self.newline
                    .find(input, special)
                    .map(|len| (TokenKind::ReservedNewline, len))
            })
            .or_else(|| {
                self.plain
                    .find(input, special)
                    .map(|len| (TokenKind::Reserved, len))
            })
    }

    fn word_len(&self, input: &str) -> Option<usize> {
        let special = self.dialect.special_word_chars;
        let len = input
            .char_indices()
            .find(|(_, c)| !is_word_char(*c, special))
            .map_or(input.len(), |(at, _)| at);
        (len > 0).then_some(len)
    }
}

/// Reserved phrases of one tier, grouped by their leading word so a lookup
/// only compares against phrases that can possibly match.
#[derive(Debug)]
struct ReservedTier {
    by_head: HashMap<String, Vec<&'static str>>,
}

impl ReservedTier {
    fn new(words: &'static [&'static str]) -> Self {
        let mut by_head = words
            .iter()
            .copied()
            .into_group_map_by(|phrase| leading_ascii_word(phrase).to_ascii_uppercase());
        // `INSERT INTO` must be tried before `INSERT`
        for phrases in by_head.values_mut() {
            phrases.sort_by_key(|phrase| Reverse(phrase.len()));
        }
        Self { by_head }
    }

    /// Byte length of the longest phrase of this tier at the start of `input`.
    /// The phrase must not run into further identifier characters.
    fn find(&self, input: &str, special: &[char]) -> Option<usize> {
        let head = leading_ascii_word(input);
        if head.is_empty() {
            return None;
        }
        self.by_head
            .get(&head.to_ascii_uppercase())?
            .iter()
            .find_map(|phrase| phrase_len(input, phrase, special))
    }
}

impl StringStyle {
    /// Byte length of a string literal of this style at the start of `input`.
    fn scan(self, input: &str) -> Option<usize> {
        match self {
            StringStyle::Backtick => repeated(input, |s| quoted(s, '`', '`', false)),
            StringStyle::DoubleQuote => repeated(input, |s| quoted(s, '"', '"', true)),
            StringStyle::SingleQuote => repeated(input, |s| quoted(s, '\'', '\'', true)),
            StringStyle::National => input
                .strip_prefix('N')
                .and_then(|rest| StringStyle::SingleQuote.scan(rest))
                .map(|len| len + 1),
            StringStyle::Bracket => {
                let first = quoted(input, '[', ']', false)?;
                let rest = repeated(&input[first..], |s| quoted(s, ']', ']', false));
                Some(first + rest.unwrap_or(0))
            }
        }
    }
}

/// One `open ... close` segment; unterminated segments run to end of input.
fn quoted(input: &str, open: char, close: char, backslash_escapes: bool) -> Option<usize> {
    let mut chars = input.char_indices();
    if chars.next()?.1 != open {
        return None;
    }
    while let Some((at, c)) = chars.next() {
        if backslash_escapes && c == '\\' {
            chars.next();
        } else if c == close {
            return Some(at + c.len_utf8());
        }
    }
    Some(input.len())
}

/// Chains segments that directly follow each other, so `'it''s'` is one string.
fn repeated(input: &str, segment: impl Fn(&str) -> Option<usize>) -> Option<usize> {
    let mut len = segment(input)?;
    while let Some(next) = segment(&input[len..]) {
        len += next;
    }
    Some(len)
}

/// Key of a `:'name'` placeholder: the text between the quotes with escaped
/// quotes unescaped.
fn quoted_key(value: &str) -> Option<String> {
    let quote = value.chars().last()?;
    let inner = value.get(2..value.len() - quote.len_utf8()).unwrap_or("");
    let key = inner.replace(&format!("\\{quote}"), &quote.to_string());
    (!key.is_empty()).then_some(key)
}

fn block_comment_len(input: &str) -> Option<usize> {
    let body = input.strip_prefix("/*")?;
    Some(body.find("*/").map_or(input.len(), |at| at + 4))
}

fn paren_len(parens: &[&str], input: &str, special: &[char]) -> Option<usize> {
    parens.iter().find_map(|paren| {
        if paren.bytes().all(|b| b.is_ascii_alphabetic()) {
            phrase_len(input, paren, special)
        } else {
            input.starts_with(*paren).then_some(paren.len())
        }
    })
}

/// Decimal, hex or binary literal; a decimal may carry a leading `-`.
fn number_len(input: &str) -> Option<usize> {
    decimal_len(input)
        .or_else(|| radix_len(input, "0x", |b| b.is_ascii_hexdigit()))
        .or_else(|| radix_len(input, "0b", |b| matches!(b, b'0' | b'1')))
}

fn decimal_len(input: &str) -> Option<usize> {
    let sign = match input.strip_prefix('-') {
        Some(rest) => 1 + whitespace_len(rest),
        None => 0,
    };
    let digits = ascii_run(&input[sign..], |b| b.is_ascii_digit());
    if digits == 0 {
        return None;
    }
    let int_end = sign + digits;
    if input[int_end..].starts_with('.') {
        let fraction = ascii_run(&input[int_end + 1..], |b| b.is_ascii_digit());
        let end = int_end + 1 + fraction;
        if fraction > 0 && at_word_boundary(input, end) {
            return Some(end);
        }
    }
    at_word_boundary(input, int_end).then_some(int_end)
}

fn radix_len(input: &str, prefix: &str, digit: impl Fn(u8) -> bool) -> Option<usize> {
    let digits = ascii_run(input.strip_prefix(prefix)?, digit);
    let end = prefix.len() + digits;
    (digits > 0 && at_word_boundary(input, end)).then_some(end)
}

fn operator_len(input: &str) -> usize {
    OPERATORS
        .iter()
        .find(|op| input.starts_with(**op))
        .map_or_else(|| input.chars().next().map_or(0, char::len_utf8), |op| op.len())
}

/// Case-insensitive match of `phrase` not followed by a word character. A
/// single space in `phrase` matches any run of whitespace.
fn phrase_len(input: &str, phrase: &str, special: &[char]) -> Option<usize> {
    let mut pos = 0;
    for (i, word) in phrase.split(' ').enumerate() {
        if i > 0 {
            let gap = whitespace_len(&input[pos..]);
            if gap == 0 {
                return None;
            }
            pos += gap;
        }
        let end = pos + word.len();
        if !input.as_bytes().get(pos..end)?.eq_ignore_ascii_case(word.as_bytes()) {
            return None;
        }
        pos = end;
    }
    let next = input.get(pos..).and_then(|rest| rest.chars().next());
    (!next.is_some_and(|c| is_word_char(c, special))).then_some(pos)
}

/// Letters, digits, combining marks, `_` and the dialect's extra identifier
/// characters.
fn is_word_char(c: char, special: &[char]) -> bool {
    c.is_alphanumeric() || c == '_' || is_mark(c) || special.contains(&c)
}

fn is_mark(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::NonspacingMark
            | GeneralCategory::SpacingMark
            | GeneralCategory::EnclosingMark
    )
}

pub(crate) fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

fn whitespace_len(input: &str) -> usize {
    input.len() - input.trim_start_matches(is_space).len()
}

fn is_ascii_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// True unless an ASCII word character sits at `pos`.
fn at_word_boundary(input: &str, pos: usize) -> bool {
    !input.as_bytes().get(pos).copied().is_some_and(is_ascii_word)
}

fn ascii_run(input: &str, accept: impl Fn(u8) -> bool) -> usize {
    input.bytes().take_while(|b| accept(*b)).count()
}

fn leading_ascii_word(input: &str) -> &str {
    &input[..ascii_run(input, is_ascii_word)]
}
