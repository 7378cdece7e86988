//! String-to-string rewrites applied before tokenization.
//!
//! The review normalizer is nothing more than a fixed chain of these.
//!
//! ```
//! use sentiscope::analysis::char_filter::CharFilter;
//! use sentiscope::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let strip_tags = PatternReplaceCharFilter::new(r"<[^>]*>", " ").unwrap();
//! assert_eq!(strip_tags.filter("great<br />film"), "great film");
//! ```

pub mod lowercase;
pub mod pattern_replace;

pub trait CharFilter: Send + Sync {
    fn filter(&self, input: &str) -> String;

    fn name(&self) -> &'static str;
}
