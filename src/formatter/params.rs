//! Placeholder substitution.
use crate::*;
use std::collections::HashMap;

/// Values supplied for placeholders.
///
/// `Named` resolves `:name` / `@name` / `$name` by key. `Positional` resolves
/// bare `?` in document order, and numeric keys (`?1`, `$2`) by index.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum ParamValues {
    Named(HashMap<String, String>),
    Positional(Vec<String>),
}

impl ParamValues {
    pub fn named<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        ParamValues::Named(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }

    pub fn positional<V: Into<String>>(values: impl IntoIterator<Item = V>) -> Self {
        ParamValues::Positional(values.into_iter().map(Into::into).collect())
    }

    fn by_key(&self, key: &str) -> Option<&str> {
        match self {
            ParamValues::Named(map) => map.get(key),
            ParamValues::Positional(list) => key.parse::<usize>().ok().and_then(|i| list.get(i)),
        }
        .map(String::as_str)
    }

    fn by_index(&self, index: usize) -> Option<&str> {
        match self {
            ParamValues::Named(map) => map.get(&index.to_string()),
            ParamValues::Positional(list) => list.get(index),
        }
        .map(String::as_str)
    }
}

/// Resolves placeholder tokens for one formatting pass.
#[derive(Debug)]
pub struct Params<'a> {
    values: Option<&'a ParamValues>,
    index: usize,
}

impl<'a> Params<'a> {
    pub fn new(values: Option<&'a ParamValues>) -> Self {
        Self { values, index: 0 }
    }

    /// Replacement text for `token`.
    ///
    /// Without configured values the placeholder is kept verbatim. A missing
    /// value renders as an empty string.
    pub fn get<'t>(&mut self, token: &Token<'t>) -> &'t str
    where
        'a: 't,
    {
        let Some(values) = self.values else {
            return token.value;
        };
        let resolved = match &token.key {
            Some(key) => values.by_key(key),
            None => {
                let value = values.by_index(self.index);
                self.index += 1;
                value
            }
        };
        resolved.unwrap_or_else(|| {
            debug!("No value supplied for placeholder {}", token.value);
            ""
        })
    }
}
