//! Approximate syllable counting.
//!
//! Syllables are estimated as the number of maximal runs of the vowels
//! `a e i o u y`. This is a heuristic, not a phonetic analysis: "queue" is a
//! single run and counts one, "rhythm" counts one through its `y`, and a
//! silent trailing `e` counts as its own run when it follows a consonant
//! ("cake" → 2).

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Counts the vowel runs in `word`, case-insensitively.
pub fn count_syllables(word: &str) -> usize {
    let mut count = 0;
    let mut previous_was_vowel = false;

    for c in word.chars() {
        let vowel = is_vowel(c);
        if vowel && !previous_was_vowel {
            count += 1;
        }
        previous_was_vowel = vowel;
    }

    count
}

/// A complex word has two or more estimated syllables.
pub fn is_complex(word: &str) -> bool {
    count_syllables(word) >= 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 0)]
    #[case("queue", 1)]
    #[case("queries", 2)]
    #[case("rhythm", 1)]
    #[case("a", 1)]
    #[case("strength", 1)]
    #[case("beautiful", 3)]
    #[case("cake", 2)]
    #[case("yesterday", 3)]
    #[case("bcd", 0)]
    fn test_count_syllables(#[case] word: &str, #[case] expected: usize) {
        assert_eq!(count_syllables(word), expected);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(count_syllables("QUEUE"), count_syllables("queue"));
        assert_eq!(count_syllables("RhYtHm"), 1);
    }

    #[test]
    fn test_is_complex() {
        assert!(is_complex("queries"));
        assert!(is_complex("company"));
        assert!(!is_complex("rhythm"));
        assert!(!is_complex("cat"));
    }
}
