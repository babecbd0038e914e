//! Targeted wordlist generator

use std::collections::BTreeSet;
use std::time::Instant;

use super::dates::{current_year, date_parts, parse_date, year_range};
use super::export::write_wordlist;
use super::leet::{leet_variants, variant_count};
use super::words::base_words;
use crate::error::{ForgeError, Result};
use crate::types::{GenerationConfig, GenerationRequest, Summary};

/// Generator that turns biographical fragments into password candidates
#[derive(Debug, Clone, Default)]
pub struct WordlistGenerator {
    config: GenerationConfig,
    current_year: Option<i32>,
}

impl WordlistGenerator {
    /// Create a generator with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom limits
    pub fn with_config(config: GenerationConfig) -> Self {
        Self {
            config,
            current_year: None,
        }
    }

    /// Pin the year used for year suffixes instead of reading the clock
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// Build the full candidate set without touching the filesystem
    pub fn build(&self, request: &GenerationRequest) -> Result<BTreeSet<String>> {
        self.check_field("name", &request.name)?;
        self.check_field("pet", &request.pet)?;

        let base = base_words(&request.name, &request.pet);

        let parts = match parse_date(&request.date_text) {
            Ok(date) => date.map(date_parts).unwrap_or_default(),
            Err(e) => {
                tracing::warn!(date = %request.date_text, "Rejected date input");
                return Err(e);
            }
        };

        let limit = self.config.max_candidates;
        let mut wordlist = base.clone();
        for word in &base {
            tracing::debug!(word = %word, variants = variant_count(word), "Expanding leetspeak");
            wordlist.extend(leet_variants(word, limit)?);
            self.check_size("wordlist", wordlist.len())?;
        }

        let year = self.current_year.unwrap_or_else(current_year);
        let years = year_range(request.year_window, year);

        tracing::debug!(
            base_words = base.len(),
            wordlist = wordlist.len(),
            years = years.len(),
            date_parts = parts.len(),
            "Combining suffixes"
        );

        let mut candidates = wordlist.clone();
        for word in &wordlist {
            for suffix in years.iter().chain(parts.iter()) {
                candidates.insert(format!("{}{}", word, suffix));
            }
            self.check_size("candidate set", candidates.len())?;
        }
        candidates.extend(parts);

        Ok(candidates)
    }

    /// Build the candidate set and write it to the request's destination
    pub fn generate(&self, request: &GenerationRequest) -> Result<Summary> {
        let start_time = Instant::now();

        let candidates = self.build(request)?;
        write_wordlist(&request.destination, &candidates)?;

        tracing::info!(
            destination = %request.destination.display(),
            total = candidates.len(),
            duration_ms = %start_time.elapsed().as_millis(),
            "Wordlist generation completed"
        );

        Ok(Summary {
            destination: request.destination.clone(),
            total: candidates.len(),
        })
    }

    fn check_field(&self, field: &str, value: &str) -> Result<()> {
        let len = value.chars().count();
        if len > self.config.max_input_len {
            tracing::warn!(field, len, limit = self.config.max_input_len, "Input field too long");
            return Err(ForgeError::input_too_large(
                format!("{} length", field),
                len,
                self.config.max_input_len,
            ));
        }
        Ok(())
    }

    fn check_size(&self, what: &str, size: usize) -> Result<()> {
        if size > self.config.max_candidates {
            return Err(ForgeError::input_too_large(what, size, self.config.max_candidates));
        }
        Ok(())
    }
}
