//! A composable analyzer: char filters rewrite the text, one tokenizer splits
//! it, then token filters run in insertion order.
//!
//! ```
//! use std::sync::Arc;
//!
//! use sentiscope::analysis::analyzer::analyzer::Analyzer;
//! use sentiscope::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use sentiscope::analysis::token_filter::stop::StopFilter;
//! use sentiscope::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(["the", "and"])));
//!
//! assert_eq!(
//!     analyzer.terms("hello the world and test").unwrap(),
//!     vec!["hello", "world", "test"]
//! );
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::char_filter::CharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

#[derive(Clone)]
pub struct PipelineAnalyzer {
    name: String,
    char_filters: Vec<Arc<dyn CharFilter>>,
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// A pipeline with no filters, named after its tokenizer until renamed.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.name()),
            char_filters: Vec::new(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_char_filter(self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.add_char_filters([char_filter])
    }

    pub fn add_char_filters<I>(mut self, char_filters: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn CharFilter>>,
    {
        self.char_filters.extend(char_filters);
        self
    }

    pub fn add_filter(self, filter: Arc<dyn Filter>) -> Self {
        self.add_filters([filter])
    }

    pub fn add_filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn Filter>>,
    {
        self.filters.extend(filters);
        self
    }

    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The configured name; [`Analyzer::name`] can only return a static one.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let tokens = match self.char_filters.as_slice() {
            [] => self.tokenizer.tokenize(text)?,
            char_filters => {
                let rewritten = char_filters
                    .iter()
                    .fold(text.to_string(), |acc, char_filter| char_filter.filter(&acc));
                self.tokenizer.tokenize(&rewritten)?
            }
        };

        self.filters
            .iter()
            .try_fold(tokens, |stream, filter| filter.filter(stream))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let char_filters: Vec<_> = self.char_filters.iter().map(|c| c.name()).collect();
        let filters: Vec<_> = self.filters.iter().map(|t| t.name()).collect();
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("char_filters", &char_filters)
            .field("tokenizer", &self.tokenizer.name())
            .field("filters", &filters)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::char_filter::lowercase::LowercaseCharFilter;
    use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
    use crate::analysis::token::Token;
    use crate::analysis::token_filter::stem::StemFilter;
    use crate::analysis::token_filter::stop::StopFilter;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    #[test]
    fn test_positions_survive_filtering() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StopFilter::from_words(["the", "and"])));

        let tokens: Vec<Token> = analyzer
            .analyze("hello the world and test")
            .unwrap()
            .collect();

        let positions: Vec<usize> = tokens.iter().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 2, 4]);
    }

    #[test]
    fn test_pipeline_with_char_filters() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"-", " ").unwrap()))
            .add_char_filter(Arc::new(LowercaseCharFilter::new()));

        let tokens: Vec<Token> = analyzer.analyze("Must-See MOVIE").unwrap().collect();

        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["must", "see", "movie"]);
    }

    #[test]
    fn test_filters_apply_in_order() {
        // Stemming first would turn "this" into "thi", which is no stop word.
        let stop_then_stem = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(StemFilter::new()));
        let stem_then_stop = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .add_filter(Arc::new(StopFilter::new()));

        assert_eq!(stop_then_stem.terms("this movie").unwrap(), vec!["movi"]);
        assert_eq!(stem_then_stop.terms("this movie").unwrap(), vec!["thi", "movi"]);
    }

    #[test]
    fn test_terms_skip_stopped_tokens() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StopFilter::from_words(["the"]).mark_only()));

        assert_eq!(analyzer.analyze("the end").unwrap().count(), 2);
        assert_eq!(analyzer.terms("the end").unwrap(), vec!["end"]);
    }

    #[test]
    fn test_debug_and_names() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StemFilter::new()));

        assert_eq!(analyzer.name(), "pipeline");
        assert_eq!(analyzer.pipeline_name(), "pipeline_whitespace");

        let debug = format!("{analyzer:?}");
        assert!(debug.contains("whitespace"));
        assert!(debug.contains("stem"));
    }
}
