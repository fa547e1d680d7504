//! Word lists
//!
//! Loading the legal-guess list from a URL or a file, and the embedded
//! fallback used when neither is reachable.

mod embedded;
pub mod loader;

pub use embedded::{FALLBACK, FALLBACK_COUNT};
pub use loader::{DEFAULT_WORD_LIST_URL, WordSource, fallback_dictionary, parse_word_list};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_count_matches_const() {
        assert_eq!(FALLBACK.len(), FALLBACK_COUNT);
    }

    #[test]
    fn fallback_words_are_valid() {
        for &word in FALLBACK {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn fallback_dictionary_keeps_every_word() {
        assert_eq!(fallback_dictionary().len(), FALLBACK_COUNT);
    }
}
