//! Parser turning one raw column/argument pair into a [`QueryTerm`].

use serde::Serialize;
use tracing::{debug, trace};

use crate::catalog::ColumnCatalog;
use crate::clean::{DefaultCleaner, ValueCleaner};
use crate::error::ParseError;
use crate::operators::OperatorCatalog;

/// Separator between values within one argument (`=a;b`).
pub const VALUE_SEPARATOR: char = ';';

/// Separator marking a relation path in a column (`user.name`).
pub const RELATION_SEPARATOR: char = '.';

/// Type assigned to columns the catalog does not know.
pub const GENERIC_TYPE: &str = "generic";

/// A validated search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryTerm {
    column: String,
    operator: String,
    values: Vec<String>,
    #[serde(rename = "type")]
    column_type: String,
    is_relation: bool,
}

impl QueryTerm {
    /// Resolved column (primary-key alias already substituted).
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Matched operator token.
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// Cleaned values in the order written. Never empty.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Declared column type, or [`GENERIC_TYPE`].
    pub fn column_type(&self) -> &str {
        &self.column_type
    }

    pub fn is_relation(&self) -> bool {
        self.is_relation
    }

    /// Split a relation term at its last separator into
    /// `(relation path, field)`, e.g. `a.b.c` -> `("a.b", "c")`.
    pub fn relation_split(&self) -> Option<(&str, &str)> {
        if !self.is_relation {
            return None;
        }
        self.column.rsplit_once(RELATION_SEPARATOR)
    }
}

/// Parses raw pairs against a column catalog and operator catalog.
///
/// The global forbidden list is fixed at construction; nothing is read
/// from ambient state while parsing.
#[derive(Debug, Clone)]
pub struct QueryTermParser<C = DefaultCleaner> {
    global_forbidden: Vec<String>,
    cleaner: C,
}

impl QueryTermParser<DefaultCleaner> {
    pub fn new(global_forbidden: Vec<String>) -> Self {
        Self::with_cleaner(global_forbidden, DefaultCleaner)
    }
}

impl Default for QueryTermParser<DefaultCleaner> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<C: ValueCleaner> QueryTermParser<C> {
    pub fn with_cleaner(global_forbidden: Vec<String>, cleaner: C) -> Self {
        Self {
            global_forbidden,
            cleaner,
        }
    }

    pub fn global_forbidden(&self) -> &[String] {
        &self.global_forbidden
    }

    /// Parse one `(column, argument)` pair.
    ///
    /// Steps run in a fixed order and the first failure is returned:
    /// primary-key rewrite, forbidden check, operator detection, value
    /// extraction, type lookup.
    pub fn parse<M>(
        &self,
        catalog: &M,
        operators: &OperatorCatalog,
        column: &str,
        argument: &str,
    ) -> Result<QueryTerm, ParseError>
    where
        M: ColumnCatalog + ?Sized,
    {
        // The rewritten name is used by every later step.
        let from_primary_key = catalog.is_primary_key(column);
        let column = if from_primary_key {
            catalog.primary_column_name().to_string()
        } else {
            column.to_string()
        };

        if catalog
            .forbidden_columns(&self.global_forbidden)
            .contains(column.as_str())
        {
            debug!(column = %column, "rejected forbidden column");
            return Err(ParseError::ForbiddenColumn(column));
        }

        let Some((operator, position)) = operators.find(argument) else {
            debug!(column = %column, argument, "no operator in argument");
            return Err(ParseError::UnrecognizedOperator(argument.to_string()));
        };
        trace!(column = %column, operator, position, "matched operator");

        let remainder = remove_at(argument, position, operator.len());
        let fragments: Vec<&str> = remainder.split(VALUE_SEPARATOR).collect();
        let values = self.cleaner.clean(&fragments);
        if values.is_empty() {
            debug!(column = %column, argument, "argument has no values");
            return Err(ParseError::MissingValue(column));
        }

        let column_type = catalog
            .column_type(&column)
            .unwrap_or(GENERIC_TYPE)
            .to_string();
        let is_relation = !from_primary_key && column.contains(RELATION_SEPARATOR);

        debug!(
            column = %column,
            operator,
            values = values.len(),
            column_type = %column_type,
            is_relation,
            "parsed query term"
        );

        Ok(QueryTerm {
            column,
            operator: operator.to_string(),
            values,
            column_type,
            is_relation,
        })
    }

    /// Parse pairs in order, stopping at the first invalid one.
    pub fn parse_all<'a, M, I>(
        &self,
        catalog: &M,
        operators: &OperatorCatalog,
        pairs: I,
    ) -> Result<Vec<QueryTerm>, ParseError>
    where
        M: ColumnCatalog + ?Sized,
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .map(|(column, argument)| self.parse(catalog, operators, column, argument))
            .collect()
    }
}

/// Parse a single pair with the default cleaner.
pub fn parse_term<M>(
    catalog: &M,
    operators: &OperatorCatalog,
    global_forbidden: &[String],
    column: &str,
    argument: &str,
) -> Result<QueryTerm, ParseError>
where
    M: ColumnCatalog + ?Sized,
{
    QueryTermParser::new(global_forbidden.to_vec()).parse(catalog, operators, column, argument)
}

/// Remove `len` bytes starting at `position`: only the matched occurrence,
/// so later copies of the token inside values survive.
fn remove_at(argument: &str, position: usize, len: usize) -> String {
    let mut remainder = String::with_capacity(argument.len() - len);
    remainder.push_str(&argument[..position]);
    remainder.push_str(&argument[position + len..]);
    remainder
}
