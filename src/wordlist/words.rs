//! Base word case variants

use std::collections::BTreeSet;

/// Uppercase the first character and lowercase the rest
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the base word set from the name and pet fields.
///
/// The name contributes lower, capitalized and upper forms; the pet
/// contributes lower and capitalized forms. Empty fields add nothing.
pub fn base_words(name: &str, pet: &str) -> BTreeSet<String> {
    let mut words = BTreeSet::new();

    if !name.is_empty() {
        words.insert(name.to_lowercase());
        words.insert(capitalize(name));
        words.insert(name.to_uppercase());
    }

    if !pet.is_empty() {
        words.insert(pet.to_lowercase());
        words.insert(capitalize(pet));
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("max"), "Max");
        assert_eq!(capitalize("mAX"), "Max");
        assert_eq!(capitalize("ännä"), "Ännä");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_name_variants() {
        let words = base_words("Max", "");
        let expected: BTreeSet<String> = ["MAX", "Max", "max"].iter().map(|s| s.to_string()).collect();
        assert_eq!(words, expected);
    }

    #[test]
    fn test_pet_variants() {
        let words = base_words("", "REX");
        assert_eq!(words.len(), 2);
        assert!(words.contains("rex"));
        assert!(words.contains("Rex"));
    }

    #[test]
    fn test_duplicates_collapse_across_sources() {
        let words = base_words("Max", "max");
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(base_words("", "").is_empty());
    }
}
