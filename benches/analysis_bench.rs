//! Criterion benchmarks for Sentiscope.
//!
//! Covers the hot paths of a training run:
//! - Review normalization and the three tokenizer variants
//! - TF-IDF fitting
//! - Logistic regression fitting

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use sentiscope::analysis::analyzer::analyzer::Analyzer;
use sentiscope::analysis::{TokenizerKind, normalize};
use sentiscope::corpus::Sentiment;
use sentiscope::ml::logistic::{LogisticConfig, LogisticRegression, Penalty};
use sentiscope::ml::tfidf::{TfIdfVectorizer, VectorizerConfig};

/// Generate synthetic reviews alternating between negative and positive wording.
fn generate_reviews(count: usize) -> (Vec<String>, Vec<Sentiment>) {
    let negative = [
        "awful", "boring", "terrible", "dull", "waste", "worst", "painful", "mess",
    ];
    let positive = [
        "great", "wonderful", "brilliant", "moving", "charming", "best", "superb", "fun",
    ];
    let neutral = [
        "movie", "film", "plot", "acting", "director", "scenes", "characters", "ending",
        "story", "cast", "watched", "really",
    ];

    let mut texts = Vec::with_capacity(count);
    let mut labels = Vec::with_capacity(count);
    for i in 0..count {
        let label = Sentiment::from_bool(i % 2 == 1);
        let polar = if label == Sentiment::Positive {
            &positive
        } else {
            &negative
        };
        let length = 40 + (i % 60);
        let words: Vec<&str> = (0..length)
            .map(|j| {
                if j % 4 == 0 {
                    polar[(i + j) % polar.len()]
                } else {
                    neutral[(i * 7 + j) % neutral.len()]
                }
            })
            .collect();
        texts.push(format!("{}.<br /><br />Rated {}/10!", words.join(" "), i % 10));
        labels.push(label);
    }
    (texts, labels)
}

fn bench_text_analysis(c: &mut Criterion) {
    let (reviews, _) = generate_reviews(500);
    let total_bytes: usize = reviews.iter().map(|r| r.len()).sum();

    let mut group = c.benchmark_group("text_analysis");
    group.throughput(Throughput::Bytes(total_bytes as u64));

    group.bench_function("normalize", |b| {
        b.iter(|| {
            for review in &reviews {
                black_box(normalize(black_box(review)));
            }
        })
    });

    for kind in TokenizerKind::ALL {
        let analyzer = kind.review_analyzer(true);
        group.bench_function(format!("review_{kind}"), |b| {
            b.iter(|| {
                for review in &reviews {
                    black_box(analyzer.terms(black_box(review)).unwrap());
                }
            })
        });
    }

    group.finish();
}

fn bench_vectorizer(c: &mut Criterion) {
    let (reviews, _) = generate_reviews(1000);

    let mut group = c.benchmark_group("tfidf");
    group.throughput(Throughput::Elements(reviews.len() as u64));

    for ngram_range in [(1, 1), (1, 2)] {
        group.bench_function(format!("fit_transform_{}_{}", ngram_range.0, ngram_range.1), |b| {
            b.iter(|| {
                let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig {
                    ngram_range,
                    stop_words: true,
                    ..VectorizerConfig::default()
                });
                black_box(vectorizer.fit_transform(&reviews).unwrap());
            })
        });
    }

    group.finish();
}

fn bench_logistic_regression(c: &mut Criterion) {
    let (reviews, labels) = generate_reviews(1000);
    let mut vectorizer = TfIdfVectorizer::new(VectorizerConfig::default());
    let features = vectorizer.fit_transform(&reviews).unwrap();
    let n_features = vectorizer.vocabulary_size();

    let mut group = c.benchmark_group("logistic_regression");
    group.sample_size(20);

    for penalty in [Penalty::L1, Penalty::L2] {
        group.bench_function(format!("fit_{penalty}"), |b| {
            b.iter(|| {
                let mut model = LogisticRegression::new(LogisticConfig {
                    penalty,
                    c: 10.0,
                    ..LogisticConfig::default()
                });
                model.fit(&features, &labels, n_features).unwrap();
                black_box(model.n_nonzero());
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_text_analysis,
    bench_vectorizer,
    bench_logistic_regression
);
criterion_main!(benches);
