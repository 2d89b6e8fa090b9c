//! Cleaning of raw value fragments split out of an argument.

/// Normalizes raw fragments into usable values, dropping empty results.
pub trait ValueCleaner {
    fn clean(&self, fragments: &[&str]) -> Vec<String>;
}

/// Trims whitespace and strips one pair of matching surrounding quotes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCleaner;

impl ValueCleaner for DefaultCleaner {
    fn clean(&self, fragments: &[&str]) -> Vec<String> {
        fragments
            .iter()
            .map(|fragment| strip_quotes(fragment.trim()).trim())
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect()
    }
}

fn strip_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
