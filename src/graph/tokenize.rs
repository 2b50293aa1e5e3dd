// src/graph/tokenize.rs
//! Text normalisation for graph construction.

/// Lower-cases `text` and drops every character that is neither an ASCII
/// lowercase letter nor ASCII whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_whitespace())
        .collect()
}

/// Splits normalised `text` into word tokens. Empty tokens never appear.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    normalize(text)
        .split_ascii_whitespace()
        .map(str::to_string)
        .collect()
}

/// Whitespace split used for sentences handed to text generation.
/// Unlike [`tokenize`], tokens are kept verbatim.
#[must_use]
pub fn sentence_words(sentence: &str) -> Vec<&str> {
    sentence.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_digits() {
        assert_eq!(tokenize("Hello, World! 42 times."), vec!["hello", "world", "times"]);
    }

    #[test]
    fn punctuation_inside_a_word_joins_it() {
        assert_eq!(tokenize("don't co-operate"), vec!["dont", "cooperate"]);
    }

    #[test]
    fn newlines_and_tabs_separate_words() {
        assert_eq!(tokenize("one\ntwo\tthree\r\nfour"), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn non_latin_letters_are_dropped() {
        assert_eq!(tokenize("café naïve 图"), vec!["caf", "nave"]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ... !!! 123 ").is_empty());
    }

    #[test]
    fn sentence_words_keep_case_and_punctuation() {
        assert_eq!(sentence_words("  Seek to, explore "), vec!["Seek", "to,", "explore"]);
    }
}
