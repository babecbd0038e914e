//! Core types and structures for wordlist-forge

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ForgeError, Result};

/// Default output file, same as the original form's preset
pub const DEFAULT_OUTPUT: &str = "wordlist_output.txt";

/// Biographical inputs for one wordlist generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub name: String,
    pub date_text: String,
    pub pet: String,
    pub year_window: u32,
    pub destination: PathBuf,
}

impl GenerationRequest {
    /// Create a request, trimming surrounding whitespace from the text fields
    pub fn new(
        name: &str,
        date_text: &str,
        pet: &str,
        year_window: u32,
        destination: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            date_text: date_text.trim().to_string(),
            pet: pet.trim().to_string(),
            year_window,
            destination: destination.into(),
        }
    }

    /// Check if no biographical field was supplied
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.date_text.is_empty() && self.pet.is_empty()
    }

    /// Reject requests carrying no name, date, or pet.
    ///
    /// The generator itself never performs this check; front ends call it
    /// before handing the request over.
    pub fn ensure_has_input(&self) -> Result<()> {
        if self.is_empty() {
            return Err(ForgeError::MissingInput);
        }
        Ok(())
    }
}

/// Outcome of a successful generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub destination: PathBuf,
    pub total: usize,
}

impl Summary {
    /// Render the human-readable generation report
    pub fn report(&self) -> String {
        format!(
            "✅ Wordlist successfully generated!\nFile: {}\nTotal unique words: {}",
            self.destination.display(),
            self.total
        )
    }
}

/// Configuration for wordlist generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Default year window offered to the user
    pub year_window: u32,
    pub min_year_window: u32,
    pub max_year_window: u32,
    /// Per-field character cap for name and pet
    pub max_input_len: usize,
    /// Upper bound on distinct candidates held in memory
    pub max_candidates: usize,
    pub output: PathBuf,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            year_window: 10,
            min_year_window: 5,
            max_year_window: 50,
            max_input_len: 64,
            max_candidates: 2_000_000,
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GenerationConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("WORDLIST_YEAR_WINDOW") {
            config.year_window = parse_var("WORDLIST_YEAR_WINDOW", &value)?;
        }
        if let Some(value) = lookup("WORDLIST_OUTPUT") {
            let value = value.trim();
            if value.is_empty() {
                return Err(ForgeError::config("WORDLIST_OUTPUT must not be empty"));
            }
            config.output = PathBuf::from(value);
        }
        if let Some(value) = lookup("WORDLIST_MAX_INPUT_LEN") {
            config.max_input_len = parse_var("WORDLIST_MAX_INPUT_LEN", &value)?;
        }
        if let Some(value) = lookup("WORDLIST_MAX_CANDIDATES") {
            config.max_candidates = parse_var("WORDLIST_MAX_CANDIDATES", &value)?;
        }

        Ok(config)
    }

    /// Parse and range-check a user-supplied year window
    pub fn parse_year_window(&self, text: &str) -> Result<u32> {
        let window: u32 = text
            .trim()
            .parse()
            .map_err(|_| crate::validation_error!("Year Range must be a number, got '{}'", text.trim()))?;
        self.check_year_window(window)?;
        Ok(window)
    }

    /// Check that a year window falls inside the configured bounds
    pub fn check_year_window(&self, window: u32) -> Result<()> {
        if window < self.min_year_window || window > self.max_year_window {
            return Err(ForgeError::validation(format!(
                "Year Range must be between {} and {}, got {}",
                self.min_year_window, self.max_year_window, window
            )));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| crate::config_error!("{} has invalid value '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_request_trims_fields() {
        let request = GenerationRequest::new("  Max ", " 1995-03-07", "rex  ", 10, "out.txt");
        assert_eq!(request.name, "Max");
        assert_eq!(request.date_text, "1995-03-07");
        assert_eq!(request.pet, "rex");
    }

    #[test]
    fn test_missing_input() {
        let request = GenerationRequest::new("   ", "", "", 10, "out.txt");
        assert_eq!(request.ensure_has_input(), Err(ForgeError::MissingInput));

        let request = GenerationRequest::new("", "", "rex", 10, "out.txt");
        assert!(request.ensure_has_input().is_ok());
    }

    #[test]
    fn test_summary_report() {
        let summary = Summary {
            destination: PathBuf::from("list.txt"),
            total: 42,
        };
        let report = summary.report();
        assert!(report.contains("list.txt"));
        assert!(report.contains("Total unique words: 42"));
    }

    #[test]
    fn test_config_from_lookup() {
        let vars: HashMap<&str, &str> = [
            ("WORDLIST_YEAR_WINDOW", "20"),
            ("WORDLIST_OUTPUT", "lists/target.txt"),
            ("WORDLIST_MAX_CANDIDATES", "1000"),
        ]
        .into_iter()
        .collect();

        let config = GenerationConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.year_window, 20);
        assert_eq!(config.output, PathBuf::from("lists/target.txt"));
        assert_eq!(config.max_candidates, 1000);
        assert_eq!(config.max_input_len, 64);
    }

    #[test]
    fn test_config_rejects_malformed_value() {
        let result = GenerationConfig::from_lookup(|k| {
            (k == "WORDLIST_MAX_INPUT_LEN").then(|| "lots".to_string())
        });
        assert!(matches!(result, Err(ForgeError::Config { .. })));
    }

    #[test]
    fn test_parse_year_window() {
        let config = GenerationConfig::default();
        assert_eq!(config.parse_year_window(" 10 ").unwrap(), 10);
        assert_eq!(config.parse_year_window("5").unwrap(), 5);
        assert_eq!(config.parse_year_window("50").unwrap(), 50);
        assert!(config.parse_year_window("ten").is_err());
        assert!(config.parse_year_window("4").is_err());
        assert!(config.parse_year_window("51").is_err());
        assert!(config.parse_year_window("-3").is_err());
    }
}
