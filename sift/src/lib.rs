//! sift: parse raw query-parameter expressions into validated search terms.
//!
//! A raw pair such as `("age", ">=18")` becomes a [`QueryTerm`] carrying the
//! resolved column, operator, values and declared column type, ready for a
//! downstream query builder.

pub mod catalog;
pub mod clean;
pub mod config;
pub mod error;
pub mod operators;
pub mod term;

pub use catalog::ColumnCatalog;
pub use clean::{DefaultCleaner, ValueCleaner};
pub use config::{Config, ModelConfig};
pub use error::{Error, ParseError, Result};
pub use operators::{OperatorCatalog, DEFAULT_OPERATORS};
pub use term::{parse_term, QueryTerm, QueryTermParser, GENERIC_TYPE, VALUE_SEPARATOR};
