//! Martin Porter's 1980 suffix stripper.
//!
//! Steps run in order: 1a-1c handle plurals, `-ed`/`-ing` and a final `y`;
//! 2 and 3 map derivational suffixes through fixed tables; 4 drops a suffix
//! when the remaining stem is long enough; 5 tidies a final `e` or `ll`.
//! Each step only looks at the longest suffix it knows. If that suffix's
//! condition fails, the step leaves the word as it is.
//!
//! ```
//! use sentiscope::analysis::token_filter::stem::Stemmer;
//! use sentiscope::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//! assert_eq!(stemmer.stem("movie"), "movi");
//! assert_eq!(stemmer.stem("terrible"), "terribl");
//! assert_eq!(stemmer.stem("effects"), "effect");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// Stems lowercase ASCII words.
///
/// Input is lowercased first. Words of two letters or fewer, and words with
/// anything other than ASCII letters, come back lowercased but unstemmed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Check if the letter at `pos` is a consonant.
    ///
    /// `y` is a consonant at the start of a word or after a vowel.
    fn is_consonant(word: &[u8], pos: usize) -> bool {
        match word[pos] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => pos == 0 || !Self::is_consonant(word, pos - 1),
            _ => true,
        }
    }

    /// Porter's `m`: the number of vowel-to-consonant transitions.
    fn measure(word: &[u8]) -> usize {
        (1..word.len())
            .filter(|&i| !Self::is_consonant(word, i - 1) && Self::is_consonant(word, i))
            .count()
    }

    fn contains_vowel(word: &[u8]) -> bool {
        (0..word.len()).any(|i| !Self::is_consonant(word, i))
    }

    fn ends_with_double_consonant(word: &[u8]) -> bool {
        let len = word.len();
        len >= 2 && word[len - 1] == word[len - 2] && Self::is_consonant(word, len - 1)
    }

    /// Consonant-vowel-consonant ending where the final consonant is not w, x or y.
    fn ends_cvc(word: &[u8]) -> bool {
        let len = word.len();
        len >= 3
            && Self::is_consonant(word, len - 3)
            && !Self::is_consonant(word, len - 2)
            && Self::is_consonant(word, len - 1)
            && !matches!(word[len - 1], b'w' | b'x' | b'y')
    }

    fn replace_suffix(word: &mut Vec<u8>, suffix_len: usize, replacement: &str) {
        word.truncate(word.len() - suffix_len);
        word.extend_from_slice(replacement.as_bytes());
    }

    /// Longest rule whose suffix matches.
    fn longest_match<'a>(
        word: &[u8],
        rules: &'a [(&'a str, &'a str)],
    ) -> Option<&'a (&'a str, &'a str)> {
        rules
            .iter()
            .filter(|(suffix, _)| word.ends_with(suffix.as_bytes()))
            .max_by_key(|(suffix, _)| suffix.len())
    }

    fn step1a(word: &mut Vec<u8>) {
        if word.ends_with(b"sses") {
            Self::replace_suffix(word, 4, "ss");
        } else if word.ends_with(b"ies") {
            Self::replace_suffix(word, 3, "i");
        } else if word.ends_with(b"ss") {
            // unchanged
        } else if word.ends_with(b"s") {
            word.pop();
        }
    }

    fn step1b(word: &mut Vec<u8>) {
        if word.ends_with(b"eed") {
            if Self::measure(&word[..word.len() - 3]) > 0 {
                word.pop();
            }
            return;
        }

        let suffix_len = if word.ends_with(b"ed") {
            2
        } else if word.ends_with(b"ing") {
            3
        } else {
            return;
        };

        if !Self::contains_vowel(&word[..word.len() - suffix_len]) {
            return;
        }
        word.truncate(word.len() - suffix_len);

        if word.ends_with(b"at") || word.ends_with(b"bl") || word.ends_with(b"iz") {
            word.push(b'e');
        } else if Self::ends_with_double_consonant(word)
            && !matches!(word.last(), Some(&(b'l' | b's' | b'z')))
        {
            word.pop();
        } else if Self::measure(word) == 1 && Self::ends_cvc(word) {
            word.push(b'e');
        }
    }

    fn step1c(word: &mut Vec<u8>) {
        let len = word.len();
        if word.ends_with(b"y") && Self::contains_vowel(&word[..len - 1]) {
            word[len - 1] = b'i';
        }
    }

    fn apply_rules(word: &mut Vec<u8>, rules: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = Self::longest_match(word, rules) {
            if Self::measure(&word[..word.len() - suffix.len()]) > 0 {
                Self::replace_suffix(word, suffix.len(), replacement);
            }
        }
    }

    fn step4(word: &mut Vec<u8>) {
        let Some(suffix) = STEP4_SUFFIXES
            .iter()
            .filter(|suffix| word.ends_with(suffix.as_bytes()))
            .max_by_key(|suffix| suffix.len())
        else {
            return;
        };

        let stem_len = word.len() - suffix.len();
        if Self::measure(&word[..stem_len]) <= 1 {
            return;
        }
        if *suffix == "ion" && !matches!(word[..stem_len].last(), Some(&(b's' | b't'))) {
            return;
        }
        word.truncate(stem_len);
    }

    fn step5(word: &mut Vec<u8>) {
        if word.ends_with(b"e") {
            let stem = &word[..word.len() - 1];
            let m = Self::measure(stem);
            if m > 1 || (m == 1 && !Self::ends_cvc(stem)) {
                word.pop();
            }
        }

        if word.ends_with(b"ll") && Self::measure(word) > 1 {
            word.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.len() <= 2 || !lower.bytes().all(|b| b.is_ascii_lowercase()) {
            return lower;
        }

        let mut bytes = lower.into_bytes();
        Self::step1a(&mut bytes);
        Self::step1b(&mut bytes);
        Self::step1c(&mut bytes);
        Self::apply_rules(&mut bytes, STEP2_RULES);
        Self::apply_rules(&mut bytes, STEP3_RULES);
        Self::step4(&mut bytes);
        Self::step5(&mut bytes);

        // Only ASCII letters were ever written
        String::from_utf8(bytes).unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
