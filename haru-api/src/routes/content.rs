//! Daily Content Endpoints
//!
//! One thin handler per content kind. Each supplies the kind's
//! `ResolveOptions` to the orchestrator and translates the result into an
//! HTTP response; everything interesting happens in the pipeline.

use axum::{extract::State, Json};
use serde_json::Value;

use haru_content::kinds;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/generate - today's vocabulary list
#[utoipa::path(
    get,
    path = "/api/generate",
    tag = "Content",
    responses(
        (status = 200, description = "Today's vocabulary list", body = haru_core::VocabularyRecord),
        (status = 429, description = "Provider quota exhausted", body = crate::error::ErrorBody),
        (status = 500, description = "Generation failed or credentials missing", body = crate::error::ErrorBody),
        (status = 503, description = "Document store unreachable", body = crate::error::ErrorBody),
    ),
)]
pub async fn vocabulary(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let options = kinds::vocabulary(state.clock.day_of_year());
    let record = state.orchestrator.resolve(&options).await?;
    Ok(Json(record))
}

/// GET /api/history - today's history briefing
#[utoipa::path(
    get,
    path = "/api/history",
    tag = "Content",
    responses(
        (status = 200, description = "Today's history briefing", body = haru_core::HistoryRecord),
        (status = 429, description = "Provider quota exhausted", body = crate::error::ErrorBody),
        (status = 500, description = "Generation failed or credentials missing", body = crate::error::ErrorBody),
        (status = 503, description = "Document store unreachable", body = crate::error::ErrorBody),
    ),
)]
pub async fn history(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let options = kinds::history();
    let record = state.orchestrator.resolve(&options).await?;
    Ok(Json(record))
}

/// GET /api/literature - today's literature excerpt
#[utoipa::path(
    get,
    path = "/api/literature",
    tag = "Content",
    responses(
        (status = 200, description = "Today's literature excerpt", body = haru_core::LiteratureRecord),
        (status = 429, description = "Provider quota exhausted", body = crate::error::ErrorBody),
        (status = 500, description = "Generation failed or credentials missing", body = crate::error::ErrorBody),
        (status = 503, description = "Document store unreachable", body = crate::error::ErrorBody),
    ),
)]
pub async fn literature(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let options = kinds::literature();
    let record = state.orchestrator.resolve(&options).await?;
    Ok(Json(record))
}
