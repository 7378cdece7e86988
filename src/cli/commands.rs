//! Command implementations for Sentiscope CLI.

use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use std::time::Instant;

use anyhow::Context;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::ExperimentConfig;
use crate::corpus::dataset::LabeledDataset;
use crate::corpus::loader::{CorpusLoader, Split};
use crate::error::{Result, SentiscopeError};
use crate::ml::metrics::evaluate;
use crate::ml::model::SentimentModel;
use crate::ml::selector::ModelSelector;

/// File name of the saved model inside the output directory.
pub const MODEL_FILE: &str = "model.bin";

/// File name of the JSON training report inside the output directory.
pub const REPORT_FILE: &str = "report.json";

/// Number of strongest terms per class shown after training.
const TOP_TERMS: usize = 10;

/// Execute a CLI command.
pub fn execute_command(args: SentiscopeArgs) -> Result<()> {
    match &args.command {
        Command::Train(train_args) => train(train_args.clone(), &args),
        Command::Evaluate(evaluate_args) => evaluate_model(evaluate_args.clone(), &args),
        Command::Predict(predict_args) => predict(predict_args.clone(), &args),
        Command::Tokenize(tokenize_args) => tokenize(tokenize_args.clone(), &args),
    }
}

/// Merge the config file (if any) with command line overrides.
pub fn resolve_config(args: &TrainArgs) -> Result<ExperimentConfig> {
    let mut config = match &args.config {
        Some(path) => ExperimentConfig::from_file(path)?,
        None => ExperimentConfig::default(),
    };

    if let Some(root) = &args.corpus_root {
        config.corpus_root = Some(root.clone());
    }
    if let Some(output) = &args.output {
        config.output_dir = output.clone();
    }
    if let Some(folds) = args.folds {
        config.k_folds = folds;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
        config.shuffle = true;
    }
    if args.threads.is_some() {
        config.threads = args.threads;
    }
    if args.max_per_class.is_some() {
        config.max_per_class = args.max_per_class;
    }

    config.validate()?;
    Ok(config)
}

/// Load a corpus, select a model, evaluate it and save the artifacts.
fn train(args: TrainArgs, cli_args: &SentiscopeArgs) -> Result<()> {
    let start_time = Instant::now();
    let config = resolve_config(&args)?;
    let corpus_root = config.corpus_root.clone().ok_or_else(|| {
        SentiscopeError::invalid_config("no corpus root given on the command line or in the config")
    })?;

    if cli_args.verbosity() > 1 {
        println!("Loading corpus from: {}", corpus_root.display());
    }
    let corpus = CorpusLoader::new(&corpus_root)
        .with_max_per_class(config.max_per_class)
        .load()?;

    if cli_args.verbosity() > 1 {
        println!(
            "Searching {} configurations with {}-fold cross-validation",
            config.grid.len(),
            config.k_folds
        );
    }
    let selection = ModelSelector::new(config.selector_config()).select(&corpus.train, &config.grid)?;
    let test_report = evaluate(&selection.model, &corpus.test)?;

    prepare_output_dir(&config.output_dir)?;
    let model_path = config.output_dir.join(MODEL_FILE);
    selection.model.save(&model_path)?;

    let (top_positive_terms, top_negative_terms) = selection.model.top_terms(TOP_TERMS);
    let report = TrainingReport {
        corpus_root: corpus_root.to_string_lossy().to_string(),
        train_stats: corpus.train_stats,
        test_stats: corpus.test_stats,
        k_folds: config.k_folds,
        best_config: selection.best_config,
        best_cv_score: selection.best_cv_score,
        trials: selection.trials,
        test: test_report,
        top_positive_terms,
        top_negative_terms,
        model_path: model_path.to_string_lossy().to_string(),
        duration_ms: start_time.elapsed().as_millis() as u64,
    };
    write_report(&config.output_dir.join(REPORT_FILE), &report)?;

    output_result("Training finished", &report, cli_args)
}

/// Create the output directory if needed.
fn prepare_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    Ok(())
}

/// Write `report` as pretty JSON.
fn write_report(path: &Path, report: &TrainingReport) -> Result<()> {
    fs::write(path, serde_json::to_string_pretty(report)?)
        .with_context(|| format!("writing report {}", path.display()))?;
    log::info!("Wrote report {}", path.display());
    Ok(())
}

/// Score a saved model on a corpus test split.
fn evaluate_model(args: EvaluateArgs, cli_args: &SentiscopeArgs) -> Result<()> {
    let model = SentimentModel::load(&args.model)?;
    let (documents, test_stats) = CorpusLoader::new(&args.corpus_root)
        .with_max_per_class(args.max_per_class)
        .load_split(Split::Test)?;
    let test = LabeledDataset::from_documents(documents);
    let report = evaluate(&model, &test)?;

    output_result(
        "Evaluation finished",
        &EvaluationResult {
            model_path: args.model.to_string_lossy().to_string(),
            config: model.config.clone(),
            test_stats,
            report,
        },
        cli_args,
    )
}

/// Classify texts from the command line or stdin.
fn predict(args: PredictArgs, cli_args: &SentiscopeArgs) -> Result<()> {
    let model = SentimentModel::load(&args.model)?;

    let texts = if args.texts.is_empty() {
        io::stdin()
            .lock()
            .lines()
            .filter(|line| !matches!(line, Ok(l) if l.trim().is_empty()))
            .collect::<io::Result<Vec<String>>>()
            .context("reading texts from stdin")?
    } else {
        args.texts
    };

    let predictions = texts
        .into_iter()
        .map(|text| {
            let (label, probability_positive) = model.classify(&text)?;
            Ok(Prediction {
                text,
                label: label.to_string(),
                probability_positive,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output_result("", &PredictionResults { predictions }, cli_args)
}

/// Show the tokens of one text.
fn tokenize(args: TokenizeArgs, cli_args: &SentiscopeArgs) -> Result<()> {
    let stop_words = !args.keep_stop_words;
    let analyzer = args.kind.review_analyzer(stop_words);
    let tokens = analyzer.terms(&args.text)?;

    output_result(
        "",
        &TokenizationResult {
            kind: args.kind.to_string(),
            stop_words_removed: stop_words,
            tokens,
        },
        cli_args,
    )
}
