//! Basic tokenizer for similarity scoring
//!
//! Terms are maximal runs of word characters (Unicode alphanumerics and
//! `_`), lowercased, with short runs dropped.

/// Default shortest token kept, in chars
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;

/// Tokenize text into terms
///
/// - Lowercase
/// - Split on characters that are neither alphanumeric nor `_`
/// - Filter tokens shorter than 2 characters
///
/// # Example
///
/// ```
/// use essayscore_similarity::tokenizer::tokenize;
///
/// let tokens = tokenize("It covers 71% of Earth's surface.");
/// assert_eq!(tokens, vec!["it", "covers", "71", "of", "earth", "surface"]);
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    tokenize_with(text, DEFAULT_MIN_TOKEN_LEN)
}

/// Tokenize with a custom minimum token length
///
/// Length is counted in chars, so "été" is three characters long.
pub fn tokenize_with(text: &str, min_token_len: usize) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_word_char(c))
        .filter(|s| !s.is_empty() && s.chars().count() >= min_token_len)
        .map(String::from)
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("Hello, World!");
        assert_eq!(tokens, vec!["hello", "world"]);
    }

    #[test]
    fn test_tokenize_filters_short() {
        let tokens = tokenize("I am a test");
        // "I" and "a" filtered (< 2 chars)
        assert_eq!(tokens, vec!["am", "test"]);
    }

    #[test]
    fn test_tokenize_numbers() {
        let tokens = tokenize("test123 foo456bar 71%");
        assert_eq!(tokens, vec!["test123", "foo456bar", "71"]);
    }

    #[test]
    fn test_tokenize_underscore_is_word_char() {
        let tokens = tokenize("snake_case words");
        assert_eq!(tokens, vec!["snake_case", "words"]);
    }

    #[test]
    fn test_tokenize_apostrophe_splits() {
        let tokens = tokenize("Earth's don't");
        // trailing "s" and "t" are single chars
        assert_eq!(tokens, vec!["earth", "don"]);
    }

    #[test]
    fn test_tokenize_unicode_counts_chars() {
        // "été" is 3 chars but 5 bytes; "ü" is 1 char but 2 bytes
        let tokens = tokenize("Été ü Größe");
        assert_eq!(tokens, vec!["été", "größe"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_tokenize_only_punctuation() {
        assert!(tokenize("...---...").is_empty());
    }

    #[test]
    fn test_tokenize_with_min_len() {
        assert_eq!(tokenize_with("a bb ccc", 1), vec!["a", "bb", "ccc"]);
        assert_eq!(tokenize_with("a bb ccc", 3), vec!["ccc"]);
    }
}
