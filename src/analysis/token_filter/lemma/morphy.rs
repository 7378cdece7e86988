//! Morphological lemmatizer in the style of WordNet's morphy.
//!
//! For each part of speech the lookup tries, in order:
//!
//! 1. the irregular-form exception table (`children` → `child`)
//! 2. the word itself, if it is already a base form
//! 3. suffix detachment rules, accepting a candidate only if it is a known base form
//!
//! Parts of speech are tried noun first, then verb, adjective and adverb. A
//! word no part of speech recognises is returned unchanged.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use super::Lemmatizer;
use super::lexicon;

/// Word classes understood by the lemmatizer, in lookup precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

impl PartOfSpeech {
    /// All parts of speech in precedence order.
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
    ];

    /// Suffix detachment rules as `(suffix, replacement)` pairs.
    fn detachment_rules(self) -> &'static [(&'static str, &'static str)] {
        match self {
            PartOfSpeech::Noun => &[
                ("s", ""),
                ("ses", "s"),
                ("ves", "f"),
                ("xes", "x"),
                ("zes", "z"),
                ("ches", "ch"),
                ("shes", "sh"),
                ("men", "man"),
                ("ies", "y"),
            ],
            PartOfSpeech::Verb => &[
                ("s", ""),
                ("ies", "y"),
                ("es", "e"),
                ("es", ""),
                ("ed", "e"),
                ("ed", ""),
                ("ing", "e"),
                ("ing", ""),
            ],
            PartOfSpeech::Adjective => &[("er", ""), ("est", ""), ("er", "e"), ("est", "e")],
            PartOfSpeech::Adverb => &[],
        }
    }
}

struct WordClass {
    base_forms: HashSet<&'static str>,
    exceptions: HashMap<&'static str, &'static str>,
}

impl WordClass {
    fn new(
        base_forms: &'static [&'static str],
        exceptions: &'static [(&'static str, &'static str)],
    ) -> Self {
        WordClass {
            base_forms: base_forms.iter().copied().collect(),
            exceptions: exceptions.iter().copied().collect(),
        }
    }
}

static WORD_CLASSES: LazyLock<HashMap<PartOfSpeech, WordClass>> = LazyLock::new(|| {
    HashMap::from([
        (
            PartOfSpeech::Noun,
            WordClass::new(lexicon::NOUNS, lexicon::NOUN_EXCEPTIONS),
        ),
        (
            PartOfSpeech::Verb,
            WordClass::new(lexicon::VERBS, lexicon::VERB_EXCEPTIONS),
        ),
        (
            PartOfSpeech::Adjective,
            WordClass::new(lexicon::ADJECTIVES, lexicon::ADJECTIVE_EXCEPTIONS),
        ),
        (
            PartOfSpeech::Adverb,
            WordClass::new(lexicon::ADVERBS, lexicon::ADVERB_EXCEPTIONS),
        ),
    ])
});

/// Dictionary-backed lemmatizer over the built-in English lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct MorphyLemmatizer;

impl MorphyLemmatizer {
    /// Create a new lemmatizer.
    pub fn new() -> Self {
        MorphyLemmatizer
    }

    /// Whether `word` is a known base form for the given part of speech.
    pub fn is_base_form(&self, word: &str, pos: PartOfSpeech) -> bool {
        WORD_CLASSES[&pos].base_forms.contains(word)
    }

    /// Find the lemma of `word` as the given part of speech.
    ///
    /// Returns `None` when the word is not recognised for that part of speech.
    pub fn lemmatize_as(&self, word: &str, pos: PartOfSpeech) -> Option<String> {
        let class = &WORD_CLASSES[&pos];

        if let Some(lemma) = class.exceptions.get(word) {
            return Some((*lemma).to_string());
        }
        if class.base_forms.contains(word) {
            return Some(word.to_string());
        }

        for (suffix, replacement) in pos.detachment_rules() {
            let Some(stem) = word.strip_suffix(suffix) else {
                continue;
            };
            if stem.is_empty() {
                continue;
            }
            let candidate = format!("{stem}{replacement}");
            if class.base_forms.contains(candidate.as_str()) {
                return Some(candidate);
            }
            // stopped -> stopp -> stop, running -> runn -> run
            if replacement.is_empty() {
                if let Some(undoubled) = undouble(stem) {
                    if class.base_forms.contains(undoubled) {
                        return Some(undoubled.to_string());
                    }
                }
            }
        }

        None
    }
}

/// Strip one letter from a stem ending in a doubled consonant.
fn undouble(stem: &str) -> Option<&str> {
    let bytes = stem.as_bytes();
    let n = bytes.len();
    if n < 3 {
        return None;
    }
    let last = bytes[n - 1];
    if last == bytes[n - 2] && last.is_ascii_alphabetic() && !b"aeiou".contains(&last) {
        Some(&stem[..n - 1])
    } else {
        None
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        PartOfSpeech::ALL
            .iter()
            .find_map(|&pos| self.lemmatize_as(word, pos))
            .unwrap_or_else(|| word.to_string())
    }

    fn name(&self) -> &'static str {
        "morphy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_noun_plurals() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("effects"), "effect");
        assert_eq!(lemmatizer.lemmatize("movies"), "movie");
        assert_eq!(lemmatizer.lemmatize("stories"), "story");
        assert_eq!(lemmatizer.lemmatize("boxes"), "box");
        assert_eq!(lemmatizer.lemmatize("churches"), "church");
        assert_eq!(lemmatizer.lemmatize("wishes"), "wish");
    }

    #[test]
    fn test_irregular_forms() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("children"), "child");
        assert_eq!(lemmatizer.lemmatize("women"), "woman");
        assert_eq!(lemmatizer.lemmatize("was"), "be");
        assert_eq!(lemmatizer.lemmatize("saw"), "see");
        assert_eq!(lemmatizer.lemmatize("better"), "good");
        assert_eq!(lemmatizer.lemmatize("worst"), "bad");
    }

    #[test]
    fn test_base_forms_unchanged() {
        let lemmatizer = MorphyLemmatizer::new();

        for word in ["movie", "terrible", "good", "acting", "series", "really"] {
            assert_eq!(lemmatizer.lemmatize(word), word);
        }
    }

    #[test]
    fn test_verb_inflections() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("watched"), "watch");
        assert_eq!(lemmatizer.lemmatize("loved"), "love");
        assert_eq!(lemmatizer.lemmatize("enjoying"), "enjoy");
        assert_eq!(lemmatizer.lemmatize("stopped"), "stop");
        assert_eq!(lemmatizer.lemmatize("running"), "run");
        assert_eq!(lemmatizer.lemmatize("tries"), "try");
    }

    #[test]
    fn test_adjective_comparatives() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("darker"), "dark");
        assert_eq!(lemmatizer.lemmatize("nicest"), "nice");
        assert_eq!(lemmatizer.lemmatize("cuter"), "cute");
    }

    #[test]
    fn test_y_to_i_inflections() {
        let lemmatizer = MorphyLemmatizer::new();
        let cases = [
            ("tried", "try"),
            ("cried", "cry"),
            ("carried", "carry"),
            ("funnier", "funny"),
            ("happier", "happy"),
            ("creepier", "creepy"),
            ("scariest", "scary"),
            ("silliest", "silly"),
            ("ugliest", "ugly"),
        ];
        for (word, lemma) in cases {
            assert_eq!(lemmatizer.lemmatize(word), lemma, "{word}");
        }
    }

    #[test]
    fn test_unknown_words_unchanged() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(lemmatizer.lemmatize("zxqv"), "zxqv");
        assert_eq!(lemmatizer.lemmatize("s"), "s");
        assert_eq!(lemmatizer.lemmatize(""), "");
    }

    #[test]
    fn test_part_of_speech_lookup() {
        let lemmatizer = MorphyLemmatizer::new();

        assert_eq!(
            lemmatizer.lemmatize_as("watches", PartOfSpeech::Noun),
            Some("watch".to_string())
        );
        assert_eq!(lemmatizer.lemmatize_as("loved", PartOfSpeech::Noun), None);
        assert_eq!(
            lemmatizer.lemmatize_as("loved", PartOfSpeech::Verb),
            Some("love".to_string())
        );
        assert!(lemmatizer.is_base_form("terrible", PartOfSpeech::Adjective));
        assert!(!lemmatizer.is_base_form("terrible", PartOfSpeech::Noun));
    }
}
