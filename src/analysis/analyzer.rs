//! Analyzers combine char filters, a tokenizer and token filters into one
//! text-to-tokens pipeline.
//!
//! - [`analyzer::Analyzer`] - the common interface
//! - [`pipeline::PipelineAnalyzer`] - configurable chain of components
//! - [`strategy::TokenizerKind`] - the plain / stem / lemmatize variants

#[allow(clippy::module_inception)]
pub mod analyzer;
pub mod pipeline;
pub mod strategy;
