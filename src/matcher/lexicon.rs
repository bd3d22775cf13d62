//! Brand vocabulary for the description parser.
//!
//! The brand dimension is configuration data, not an algorithm: a closed,
//! ordered list of known brand keywords scanned against a description,
//! first hit wins. The stock list below covers common plywood/hardware
//! brands; deployments can replace it with a catalog-driven list loaded
//! from a JSON file or an environment variable.

use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::path::Path;

// Stock brand keywords, in scan order. Canonical casing is what the
// parser reports back.
pub const DEFAULT_BRANDS: &[&str] = &[
    "Century",
    "Greenply",
    "Gurjan",
    "Kitply",
    "Archidply",
    "Duro",
    "Merino",
    "Hettich",
    "Ebco",
    "Fevicol",
    "Godrej",
];

/// The stock brand list as owned strings, in scan order.
pub fn default_brands() -> Vec<String> {
    DEFAULT_BRANDS.iter().map(|b| b.to_string()).collect()
}

/// Load a brand list from a JSON file containing an array of strings.
/// Order in the file is scan order.
pub fn load_from_json(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read brand lexicon: {}", path.display()))?;

    let brands: Vec<String> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse brand lexicon: {}", path.display()))?;

    Ok(brands
        .into_iter()
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect())
}

/// Read a `;`-delimited brand list from an environment variable.
/// Returns `None` when the variable is unset or empty.
pub fn from_env(var: &str) -> Option<Vec<String>> {
    let value = env::var(var).ok()?;
    let brands: Vec<String> = value
        .split(';')
        .map(|b| b.trim().to_string())
        .filter(|b| !b.is_empty())
        .collect();

    if brands.is_empty() {
        None
    } else {
        Some(brands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_brands() {
        let brands = default_brands();
        assert!(!brands.is_empty());
        assert!(brands.iter().any(|b| b == "Century"));
        assert!(brands.iter().any(|b| b == "Gurjan"));
    }

    #[test]
    fn test_load_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["Century", " Greenply ", ""]"#).unwrap();

        let brands = load_from_json(file.path()).unwrap();
        assert_eq!(brands, vec!["Century".to_string(), "Greenply".to_string()]);
    }

    #[test]
    fn test_load_from_json_rejects_bad_input() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_from_json(file.path()).is_err());

        assert!(load_from_json(Path::new("/nonexistent/brands.json")).is_err());
    }

    #[test]
    fn test_from_env() {
        env::set_var("BOQMATCH_TEST_BRANDS", "Century; Greenply ;;Gurjan");
        assert_eq!(
            from_env("BOQMATCH_TEST_BRANDS"),
            Some(vec![
                "Century".to_string(),
                "Greenply".to_string(),
                "Gurjan".to_string()
            ])
        );
        env::remove_var("BOQMATCH_TEST_BRANDS");

        assert_eq!(from_env("BOQMATCH_TEST_BRANDS_UNSET"), None);
    }
}
