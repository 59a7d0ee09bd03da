//! Statement Analysis API Routes
//!
//! Endpoints for uploading statement PDFs, re-displaying stored analyses
//! and asking grounded follow-up questions.

use axum::{
    extract::{Multipart, Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use statement_core::{AnalysisError, StatementAnalysis};
use uuid::Uuid;

use crate::{ApiResponse, AppError, AppState};

#[derive(Serialize)]
pub struct UploadResult {
    pub id: Uuid,
    pub analysis: StatementAnalysis,
}

#[derive(Deserialize)]
pub struct AskRequest {
    pub prompt: String,
}

#[derive(Serialize)]
pub struct AskResult {
    pub answer: String,
}

#[derive(Serialize)]
pub struct ClearResult {
    pub cleared: bool,
}

#[derive(Serialize)]
pub struct DebugInfo {
    pub sessions: usize,
    pub llm_configured: bool,
}

pub fn statement_routes() -> Router<AppState> {
    Router::new()
        .route("/api/statements", post(upload_statement))
        .route(
            "/api/statements/:id",
            get(get_statement).delete(clear_statement),
        )
        .route("/api/statements/:id/ask", post(ask_statement))
        .route("/api/debug", get(debug_info))
}

fn map_analysis_error(err: AnalysisError) -> AppError {
    match err {
        AnalysisError::DocumentRead(_) | AnalysisError::EmptyDocument => {
            AppError::unprocessable(err.to_string())
        }
        AnalysisError::Unknown(_) => AppError::internal(err.to_string()),
    }
}

async fn upload_statement(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<UploadResult>>, AppError> {
    let mut pdf_bytes: Option<Vec<u8>> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("pdf_file") {
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::bad_request(format!("Failed to read upload: {e}")))?;
            pdf_bytes = Some(data.to_vec());
            break;
        }
    }
    let pdf_bytes =
        pdf_bytes.ok_or_else(|| AppError::bad_request("Please attach a PDF as 'pdf_file'"))?;

    // PDF parsing and extraction are CPU-bound; keep them off the async workers.
    let analyzer = state.analyzer.clone();
    let analysis = tokio::task::spawn_blocking(move || analyzer.analyze_document(&pdf_bytes))
        .await
        .map_err(|e| AppError::internal(format!("Analysis task failed: {e}")))?
        .map_err(map_analysis_error)?;

    let id = Uuid::new_v4();
    state.sessions.insert(id, analysis.clone());
    tracing::info!(%id, "statement analyzed and stored");

    Ok(Json(ApiResponse::success(UploadResult { id, analysis })))
}

async fn get_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<StatementAnalysis>>, AppError> {
    state
        .sessions
        .get(&id)
        .map(|entry| Json(ApiResponse::success(entry.clone())))
        .ok_or_else(|| AppError::not_found("No analysis stored under this id"))
}

async fn ask_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AskRequest>,
) -> Result<Json<ApiResponse<AskResult>>, AppError> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(AppError::bad_request("Prompt must not be empty"));
    }
    if !state.chat.is_configured() {
        return Err(AppError::service_unavailable("LLM_API_KEY not configured"));
    }

    let context = state
        .sessions
        .get(&id)
        .map(|entry| entry.context.clone())
        .ok_or_else(|| AppError::not_found("Upload a statement first"))?;

    let answer = state
        .chat
        .ask(Some(&context), prompt)
        .await
        .map_err(|e| AppError::service_unavailable(format!("LLM error: {e}")))?;

    Ok(Json(ApiResponse::success(AskResult { answer })))
}

async fn clear_statement(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Json<ApiResponse<ClearResult>> {
    let cleared = state.sessions.remove(&id).is_some();
    Json(ApiResponse::success(ClearResult { cleared }))
}

async fn debug_info(State(state): State<AppState>) -> Json<ApiResponse<DebugInfo>> {
    Json(ApiResponse::success(DebugInfo {
        sessions: state.sessions.len(),
        llm_configured: state.chat.is_configured(),
    }))
}
