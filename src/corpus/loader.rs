//! Corpus loader for the `train/` and `test/` review tree.
//!
//! Expected layout:
//!
//! ```text
//! <root>/
//!   train/
//!     neg/  *.txt
//!     pos/  *.txt
//!   test/
//!     neg/  *.txt
//!     pos/  *.txt
//! ```
//!
//! Class directories may also be named `negative/` and `positive/`. Within a
//! split, negatives come first, then positives, each sorted by file name.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::corpus::dataset::LabeledDataset;
use crate::corpus::document::{ReviewDocument, Sentiment};
use crate::error::{Result, SentiscopeError};

/// Which half of the corpus to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Split {
    Train,
    Test,
}

impl Split {
    pub fn dir_name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

/// Counters collected while reading one split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Documents read successfully.
    pub loaded: usize,
    /// Files that could not be read or decoded.
    pub skipped: usize,
    /// Loaded documents per class, indexed by [`Sentiment::index`].
    pub per_class: [usize; 2],
}

/// The two labeled halves of a review corpus.
#[derive(Debug, Clone)]
pub struct Corpus {
    pub train: LabeledDataset,
    pub test: LabeledDataset,
    pub train_stats: LoadStats,
    pub test_stats: LoadStats,
}

/// Reads a review corpus from disk.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    root: PathBuf,
    max_per_class: Option<usize>,
}

impl CorpusLoader {
    /// Create a loader rooted at `root`.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        CorpusLoader {
            root: root.into(),
            max_per_class: None,
        }
    }

    /// Read at most `limit` files per class directory.
    pub fn with_max_per_class(mut self, limit: Option<usize>) -> Self {
        self.max_per_class = limit;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load both splits.
    pub fn load(&self) -> Result<Corpus> {
        if !self.root.is_dir() {
            return Err(SentiscopeError::not_found(format!(
                "corpus root {}",
                self.root.display()
            )));
        }

        let (train_docs, train_stats) = self.load_split(Split::Train)?;
        let (test_docs, test_stats) = self.load_split(Split::Test)?;

        log::info!(
            "Loaded corpus from {}: {} train ({} skipped), {} test ({} skipped)",
            self.root.display(),
            train_stats.loaded,
            train_stats.skipped,
            test_stats.loaded,
            test_stats.skipped
        );

        Ok(Corpus {
            train: LabeledDataset::from_documents(train_docs),
            test: LabeledDataset::from_documents(test_docs),
            train_stats,
            test_stats,
        })
    }

    /// Load the documents of one split, negatives first.
    pub fn load_split(&self, split: Split) -> Result<(Vec<ReviewDocument>, LoadStats)> {
        let split_dir = self.root.join(split.dir_name());
        if !split_dir.is_dir() {
            return Err(SentiscopeError::not_found(format!(
                "{} split directory {}",
                split.dir_name(),
                split_dir.display()
            )));
        }

        let mut documents = Vec::new();
        let mut stats = LoadStats::default();

        for label in Sentiment::ALL {
            let class_dir = find_class_dir(&split_dir, label)?;
            let entries = fs::read_dir(&class_dir)?.map(|entry| entry.map(|e| e.path()));
            let (mut paths, unreadable) = review_files(entries);
            stats.skipped += unreadable;
            if let Some(limit) = self.max_per_class {
                paths.truncate(limit);
            }

            for path in paths {
                match read_review(&path) {
                    Ok(text) => {
                        documents.push(ReviewDocument::new(text, label, path));
                        stats.loaded += 1;
                        stats.per_class[label.index()] += 1;
                    }
                    Err(e) => {
                        log::warn!("Skipping {}: {}", path.display(), e);
                        stats.skipped += 1;
                    }
                }
            }
        }

        log::debug!(
            "{} split: {} negative, {} positive",
            split.dir_name(),
            stats.per_class[0],
            stats.per_class[1]
        );

        Ok((documents, stats))
    }
}

/// Locate the class directory, accepting both short and long names.
fn find_class_dir(split_dir: &Path, label: Sentiment) -> Result<PathBuf> {
    let long_name = label.to_string();
    [label.as_str(), long_name.as_str()]
        .iter()
        .map(|name| split_dir.join(name))
        .find(|candidate| candidate.is_dir())
        .ok_or_else(|| {
            SentiscopeError::not_found(format!(
                "{} class directory under {}",
                label.as_str(),
                split_dir.display()
            ))
        })
}

/// Keep the `.txt` files among directory entries, sorted by file name.
///
/// Entries that cannot be read are logged and counted, not fatal.
fn review_files<I>(entries: I) -> (Vec<PathBuf>, usize)
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut paths = Vec::new();
    let mut unreadable = 0;
    for entry in entries {
        match entry {
            Ok(path) => {
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("txt") {
                    paths.push(path);
                }
            }
            Err(e) => {
                log::warn!("Skipping unreadable directory entry: {e}");
                unreadable += 1;
            }
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    (paths, unreadable)
}

fn read_review(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| SentiscopeError::parse(format!("not UTF-8: {e}")))
}
