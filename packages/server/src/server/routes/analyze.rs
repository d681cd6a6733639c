use axum::{extract::State, Json};

use crate::domains::analysis::{analyze_topic, AnalysisError, AnalyzeRequest, AnalyzeResponse};
use crate::server::app::AppState;

/// Analyze endpoint
///
/// Fetches recent articles for the topic and returns per-source sentiment,
/// subjectivity and emotion summaries ranked by article count.
pub async fn analyze_handler(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AnalysisError> {
    let response = analyze_topic(request, &state.deps).await?;
    Ok(Json(response))
}
