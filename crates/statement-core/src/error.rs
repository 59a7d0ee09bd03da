use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Document read error: {0}")]
    DocumentRead(String),

    #[error("Document produced no extractable text")]
    EmptyDocument,

    #[error("Unknown error: {0}")]
    Unknown(String),
}
