//! Leetspeak substitution table and cross-product expansion

use std::collections::BTreeSet;

use crate::error::{ForgeError, Result};

/// Letters with look-alike replacements, in table order.
///
/// The identity substitution is not listed: base words are seeded
/// into the wordlist separately.
pub const LEET_TABLE: &[(char, &[char])] = &[
    ('a', &['4', '@', 'A']),
    ('e', &['3', 'E']),
    ('i', &['1', '!', 'I']),
    ('o', &['0', 'O']),
    ('s', &['5', '$', 'S']),
    ('t', &['7', '+', 'T']),
];

/// Look up the replacements for a lowercase letter
pub fn substitutions(ch: char) -> Option<&'static [char]> {
    LEET_TABLE
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, options)| *options)
}

/// Number of variants `word` expands to, saturating on overflow
pub fn variant_count(word: &str) -> usize {
    word.to_lowercase()
        .chars()
        .map(|ch| substitutions(ch).map_or(1, <[char]>::len))
        .fold(1usize, usize::saturating_mul)
}

/// Expand every combination of per-character substitutions for `word`.
///
/// The word is lowercased first; characters outside the table pass through
/// unchanged. Partial strings are grown one character at a time and the
/// expansion stops with `InputTooLarge` as soon as the number of partials
/// would exceed `limit`.
pub fn leet_variants(word: &str, limit: usize) -> Result<BTreeSet<String>> {
    if word.is_empty() {
        return Ok(BTreeSet::new());
    }

    let lowered = word.to_lowercase();
    let mut partials = vec![String::with_capacity(lowered.len())];

    for ch in lowered.chars() {
        match substitutions(ch) {
            None => partials.iter_mut().for_each(|p| p.push(ch)),
            Some(options) => {
                let next_len = partials.len().saturating_mul(options.len());
                if next_len > limit {
                    return Err(ForgeError::input_too_large(
                        format!("leetspeak expansion of '{}'", word),
                        next_len,
                        limit,
                    ));
                }

                let mut next = Vec::with_capacity(next_len);
                for partial in &partials {
                    for &option in options {
                        let mut grown = partial.clone();
                        grown.push(option);
                        next.push(grown);
                    }
                }
                partials = next;
            }
        }
    }

    Ok(partials.into_iter().collect())
}
