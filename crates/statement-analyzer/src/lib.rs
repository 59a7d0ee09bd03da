//! Statement analysis pipeline: document bytes -> text stream -> fact table
//! -> ratio set -> advisories -> LLM context.
//!
//! The pipeline is a pure, synchronous chain; nothing is cached or shared
//! across invocations beyond the load-once pattern library, so each call
//! owns its own fact table and ratio set.

use async_trait::async_trait;
use chrono::Utc;
use statement_core::{AnalysisError, StatementAnalysis, StatementAnalyzer};
use tracing::info;

pub struct StatementAnalysisEngine;

impl StatementAnalysisEngine {
    pub fn new() -> Self {
        Self
    }

    /// Analyze a pre-flattened text stream (the document text source has
    /// already run).
    pub fn analyze_text(&self, text: &str) -> Result<StatementAnalysis, AnalysisError> {
        let facts = metric_extraction::extract(text)?;
        let ratios = ratio_analysis::compute(&facts);
        let advisories = ratio_analysis::advise(&ratios);
        let context = llm_client::metrics_to_context(&facts, &ratios);

        info!(
            labels = facts.len(),
            ratios = ratios.len(),
            advisories = advisories.len(),
            "statement analysis complete"
        );

        Ok(StatementAnalysis {
            timestamp: Utc::now(),
            facts,
            ratios,
            advisories,
            context,
        })
    }

    /// Full pipeline from raw PDF bytes.
    pub fn analyze_document(&self, document: &[u8]) -> Result<StatementAnalysis, AnalysisError> {
        let text = pdf_ingest::document_text(document)?;
        self.analyze_text(&text)
    }
}

impl Default for StatementAnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatementAnalyzer for StatementAnalysisEngine {
    async fn analyze(&self, document: &[u8]) -> Result<StatementAnalysis, AnalysisError> {
        self.analyze_document(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statement_core::Severity;

    const SAMPLE: &str = "\
Total operating income   1,000   900
General and administrative expenses   (550)   (500)
Profit for the period   300   280
Gross loans and receivables   10,000   9,400
Total of credit impaired loans and receivables   800   700
Less: Expected credit losses   (720)   (680)
";

    #[test]
    fn test_pipeline_produces_full_analysis() {
        let engine = StatementAnalysisEngine::new();
        let analysis = engine.analyze_text(SAMPLE).unwrap();

        assert_eq!(analysis.facts.current("Total Operating Income"), Some(1000.0));
        assert_eq!(analysis.ratios.len(), 11);
        // 0.55 cost-to-income and 0.08 NPL and 0.9 coverage all flag.
        assert_eq!(analysis.advisories.len(), 3);
        assert!(analysis
            .advisories
            .iter()
            .all(|a| a.severity == Severity::Warning));
        assert!(analysis.context.starts_with("Key metrics & ratios:"));
        assert!(analysis.context.contains("Cost-to-Income: 55.00%"));
    }

    #[test]
    fn test_pipeline_refuses_empty_text() {
        let engine = StatementAnalysisEngine::new();
        assert!(matches!(
            engine.analyze_text("  \n "),
            Err(AnalysisError::EmptyDocument)
        ));
    }

    #[test]
    fn test_unreadable_document_is_fatal() {
        let engine = StatementAnalysisEngine::new();
        assert!(matches!(
            engine.analyze_document(b"not a pdf"),
            Err(AnalysisError::DocumentRead(_))
        ));
    }
}
