//! Candidate-word extraction from password input.

/// Extracts all candidate words from the given input.
///
/// A candidate word is a maximal run of contiguous ASCII latin letters.
/// Any non-letter character (digits included) terminates the current run
/// and is itself discarded.
///
/// # Returns
/// The candidate words in left-to-right order of appearance. Empty input
/// yields an empty vector.
pub fn extract_candidate_words(input: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();

    for c in input.chars() {
        if c.is_ascii_alphabetic() {
            current.push(c);
        } else if !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
    }

    // Emit the run still open at end of input
    if !current.is_empty() {
        words.push(current);
    }

    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert!(extract_candidate_words("").is_empty());
    }

    #[test]
    fn test_letters_split_by_digits() {
        assert_eq!(extract_candidate_words("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn test_digits_only() {
        assert!(extract_candidate_words("123").is_empty());
    }

    #[test]
    fn test_single_letter_runs() {
        assert_eq!(extract_candidate_words("a1b1c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_trailing_run_emitted() {
        assert_eq!(extract_candidate_words("12cat"), vec!["cat"]);
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(extract_candidate_words("The9Cat"), vec!["The", "Cat"]);
    }

    #[test]
    fn test_non_ascii_terminates_run() {
        assert_eq!(extract_candidate_words("caffè"), vec!["caff"]);
    }

    #[test]
    fn test_symbols_discarded() {
        assert_eq!(extract_candidate_words("!word-two_"), vec!["word", "two"]);
    }
}
