//! Column catalogs: per-model column types plus primary-key and
//! forbidden-column metadata.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::ModelConfig;

/// Read-only view of a model's columns consulted while parsing a term.
pub trait ColumnCatalog {
    /// Whether `column` is the model's primary-key alias (exact, case-sensitive).
    fn is_primary_key(&self, column: &str) -> bool;

    /// Canonical name of the primary column.
    fn primary_column_name(&self) -> &str;

    /// Known columns mapped to their declared types.
    fn columns_with_types(&self) -> &BTreeMap<String, String>;

    /// Effective forbidden set: the global list merged with model overrides.
    fn forbidden_columns(&self, global: &[String]) -> BTreeSet<String>;

    /// Declared type of `column`, if the catalog knows it.
    fn column_type(&self, column: &str) -> Option<&str> {
        self.columns_with_types().get(column).map(String::as_str)
    }
}

impl ColumnCatalog for ModelConfig {
    fn is_primary_key(&self, column: &str) -> bool {
        column == self.primary_key_alias
    }

    fn primary_column_name(&self) -> &str {
        &self.primary_column
    }

    fn columns_with_types(&self) -> &BTreeMap<String, String> {
        &self.columns
    }

    fn forbidden_columns(&self, global: &[String]) -> BTreeSet<String> {
        global
            .iter()
            .chain(self.forbidden_columns.iter())
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_key_alias_is_case_sensitive() {
        let model = ModelConfig::default();
        assert!(model.is_primary_key("id"));
        assert!(!model.is_primary_key("ID"));
        assert!(!model.is_primary_key("uuid"));
    }

    #[test]
    fn test_forbidden_merges_global_and_model() {
        let model = ModelConfig::default().with_forbidden(["token", "password"]);
        let forbidden = model.forbidden_columns(&["password".to_string(), "secret".to_string()]);
        let expected: BTreeSet<String> = ["password", "secret", "token"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(forbidden, expected);
    }

    #[test]
    fn test_column_type_lookup() {
        let model = ModelConfig::default().with_column("age", "int");
        assert_eq!(model.column_type("age"), Some("int"));
        assert_eq!(model.column_type("name"), None);
    }
}
