use crate::{AnalysisError, StatementAnalysis};
use async_trait::async_trait;

/// Trait for statement analysis pipelines
#[async_trait]
pub trait StatementAnalyzer: Send + Sync {
    async fn analyze(&self, document: &[u8]) -> Result<StatementAnalysis, AnalysisError>;
}
