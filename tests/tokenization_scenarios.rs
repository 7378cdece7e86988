use sentiscope::analysis::analyzer::analyzer::Analyzer;
use sentiscope::analysis::{
    TokenizerKind, normalize, tokenize, tokenize_and_lemmatize, tokenize_and_stem,
};
use sentiscope::error::Result;

const RAW_REVIEWS: &[&str] = &[
    "This movie is TERRIBLE, but it has some good effects!",
    "I <i>loved</i> it.<br /><br />10/10 would watch again &amp; again",
    "   ",
    "",
    "Don't   waste your time... seriously!!!",
    "Ça c'est un très bon film",
];

#[test]
fn normalize_is_idempotent() {
    for raw in RAW_REVIEWS {
        let once = normalize(raw);
        assert_eq!(normalize(&once), once, "{raw:?}");
    }
}

#[test]
fn plain_tokens_match_whitespace_words() {
    for raw in RAW_REVIEWS {
        let normalized = normalize(raw);
        assert_eq!(
            tokenize(&normalized).len(),
            normalized.split_whitespace().count()
        );
    }
}

#[test]
fn morphology_never_adds_tokens() {
    for raw in RAW_REVIEWS {
        let normalized = normalize(raw);
        let plain = tokenize(&normalized).len();
        assert!(tokenize_and_stem(&normalized).len() <= plain);
        assert!(tokenize_and_lemmatize(&normalized).len() <= plain);
    }
}

#[test]
fn stop_word_free_review_scenario() -> Result<()> {
    let review = "this movie is terrible but it has some good effects";
    assert_eq!(normalize(review), review);

    let plain = TokenizerKind::Plain.analyzer(true).terms(review)?;
    assert_eq!(plain, vec!["movie", "terrible", "good", "effects"]);

    let stemmed = TokenizerKind::Stem.analyzer(true).terms(review)?;
    assert_eq!(stemmed, vec!["movi", "terribl", "good", "effect"]);

    let lemmatized = TokenizerKind::Lemmatize.analyzer(true).terms(review)?;
    assert_eq!(lemmatized, vec!["movie", "terrible", "good", "effect"]);
    Ok(())
}

#[test]
fn raw_review_goes_through_normalization() -> Result<()> {
    let analyzer = TokenizerKind::Plain.review_analyzer(true);
    let terms = analyzer.terms("This movie is TERRIBLE, but it has some good effects!")?;
    assert_eq!(terms, vec!["movie", "terrible", "good", "effects"]);
    Ok(())
}
