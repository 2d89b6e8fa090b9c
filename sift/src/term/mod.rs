//! Search terms parsed from raw `(column, argument)` query parameters.
//!
//! # Argument Syntax
//!
//! `<operator><value>[;<value>...]`, e.g. `>=10`, `=a;b;c`, `<>1;5`.
//!
//! - **Primary key**: the model's alias (e.g. `id`) resolves to its canonical column
//! - **Relations**: a `.` in the column (e.g. `user.name`) addresses a related model
//! - **Values**: split on `;`, cleaned, empty fragments dropped

mod parser;

pub use parser::{
    parse_term, QueryTerm, QueryTermParser, GENERIC_TYPE, RELATION_SEPARATOR, VALUE_SEPARATOR,
};
