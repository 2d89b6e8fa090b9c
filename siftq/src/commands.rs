//! CLI command implementations.

use std::path::Path;

use sift::{Config, Error, OperatorCatalog, Result};

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    tracing::debug!(models = config.models.len(), "loaded config");
    Ok(config)
}

pub fn parse(config: Option<&Path>, model: &str, column: &str, argument: &str) -> Result<()> {
    let config = load_config(config)?;
    let catalog = config.model(model)?;
    let operators = config.operator_catalog()?;

    let term = config.parser().parse(catalog, &operators, column, argument)?;
    let json = serde_json::to_string_pretty(&term).map_err(|e| Error::Io(e.into()))?;
    println!("{}", json);
    Ok(())
}

pub fn operators(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let catalog = match &config.operators {
        Some(tokens) => OperatorCatalog::new_unchecked(tokens.iter().cloned()),
        None => OperatorCatalog::default(),
    };

    for (i, token) in catalog.tokens().iter().enumerate() {
        println!("{:>2}  {}", i + 1, token);
    }
    for (earlier, later) in catalog.shadowed_pairs() {
        println!("warning: '{}' shadows '{}'", earlier, later);
    }
    Ok(())
}

pub fn check(config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let catalog = config.operator_catalog()?;

    for (name, model) in &config.models {
        if config.global_forbidden_columns.contains(&model.primary_column)
            || model.forbidden_columns.contains(&model.primary_column)
        {
            println!(
                "warning: model '{}' forbids its primary column '{}'",
                name, model.primary_column
            );
        }
    }

    println!(
        "ok: {} models, {} operators",
        config.models.len(),
        catalog.tokens().len()
    );
    Ok(())
}
