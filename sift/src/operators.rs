//! Ordered operator catalog.
//!
//! Operators are tried in catalog order and the first token found anywhere
//! in the argument wins. A token that is a substring of a *later* token
//! shadows it: every argument containing the later token also contains the
//! earlier one. [`OperatorCatalog::new`] rejects such catalogs;
//! [`OperatorCatalog::new_unchecked`] keeps them for hosts that shadow on
//! purpose.

use crate::{Error, Result};

/// Default tokens, most specific first.
pub const DEFAULT_OPERATORS: &[&str] = &["!<>", "<>", "<=", ">=", "!=", "=", "<", ">", "!"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorCatalog {
    tokens: Vec<String>,
}

impl OperatorCatalog {
    /// Build a catalog, rejecting empty tokens and shadowed tokens.
    pub fn new<I, S>(tokens: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();

        if tokens.is_empty() {
            return Err(Error::InvalidOperators("catalog is empty".to_string()));
        }
        if tokens.iter().any(|t| t.is_empty()) {
            return Err(Error::InvalidOperators("empty operator token".to_string()));
        }

        let catalog = Self { tokens };
        if let Some((earlier, later)) = catalog.shadowed_pairs().into_iter().next() {
            return Err(Error::InvalidOperators(format!(
                "'{}' shadows later operator '{}'",
                earlier, later
            )));
        }
        Ok(catalog)
    }

    /// Build a catalog without the shadowing check. Empty tokens are dropped.
    pub fn new_unchecked<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens
                .into_iter()
                .map(Into::into)
                .filter(|t: &String| !t.is_empty())
                .collect(),
        }
    }

    /// Tokens in match order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Pairs `(earlier, later)` where `earlier` occurs inside `later`, making
    /// `later` unreachable.
    pub fn shadowed_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, earlier) in self.tokens.iter().enumerate() {
            for later in &self.tokens[i + 1..] {
                if later.contains(earlier.as_str()) {
                    pairs.push((earlier.as_str(), later.as_str()));
                }
            }
        }
        pairs
    }

    /// First token (in catalog order) occurring in `argument`, with the byte
    /// offset of its first occurrence.
    pub fn find(&self, argument: &str) -> Option<(&str, usize)> {
        self.tokens.iter().find_map(|token| {
            argument
                .find(token.as_str())
                .map(|position| (token.as_str(), position))
        })
    }
}

impl Default for OperatorCatalog {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_OPERATORS.iter().copied())
    }
}
