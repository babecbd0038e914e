//! Targeted password wordlist generation
//!
//! Base words from a name and a pet name are expanded with leetspeak
//! substitutions, then combined with year suffixes and date fragments.

mod dates;
mod export;
mod generator;
mod leet;
mod words;

pub use dates::{current_year, date_parts, parse_date, year_range};
pub use export::write_wordlist;
pub use generator::WordlistGenerator;
pub use leet::{leet_variants, substitutions, variant_count, LEET_TABLE};
pub use words::{base_words, capitalize};

use std::path::Path;

use crate::error::Result;
use crate::types::{GenerationRequest, Summary};

/// Generate a wordlist with default limits and write it to `destination`
pub fn generate(
    name: &str,
    date_text: &str,
    pet: &str,
    year_window: u32,
    destination: impl AsRef<Path>,
) -> Result<Summary> {
    let request = GenerationRequest {
        name: name.to_string(),
        date_text: date_text.to_string(),
        pet: pet.to_string(),
        year_window,
        destination: destination.as_ref().to_path_buf(),
    };
    WordlistGenerator::new().generate(&request)
}
