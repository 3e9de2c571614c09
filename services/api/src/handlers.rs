//! Axum Handlers for the REST API
//!
//! This module contains the logic for handling content generation requests.
//! It uses `utoipa` doc comments to generate OpenAPI documentation.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use eduassist_core::DifficultyTier;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    models::{
        ContentRequest, ContentResponse, ErrorResponse, ExplanationResponse, LevelsResponse,
        QuizResponse, StudyPlanResponse, TopicsResponse,
    },
    state::AppState,
};

/// Message returned when the topic is missing or whitespace-only.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please enter a learning topic to continue.";

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                warn!(%message, "Rejected request");
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { message })).into_response()
            }
        }
    }
}

/// Validates the topic and resolves the level, falling back to Beginner.
fn resolve(payload: &ContentRequest) -> Result<DifficultyTier, ApiError> {
    if payload.topic.trim().is_empty() {
        return Err(ApiError::BadRequest(EMPTY_TOPIC_MESSAGE.to_string()));
    }
    if !DifficultyTier::is_known_label(&payload.level) {
        warn!(level = %payload.level, "Unknown level requested, falling back to Beginner");
    }
    Ok(DifficultyTier::from_label(&payload.level))
}

/// Generate the explanation, quiz and study plan for a topic.
#[utoipa::path(
    post,
    path = "/content",
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Generated learning content", body = ContentResponse),
        (status = 400, description = "Empty topic", body = ErrorResponse)
    )
)]
pub async fn generate_content(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<ContentResponse>, ApiError> {
    let tier = resolve(&payload)?;
    info!(
        topic = %payload.topic,
        %tier,
        known_topic = state.knowledge.contains(&payload.topic),
        "Generating learning content"
    );

    let content = state.generator.generate_all(&payload.topic, tier);

    Ok(Json(ContentResponse {
        topic: payload.topic,
        level: tier.label().to_string(),
        explanation: content.explanation,
        quiz: content.quiz.into_iter().map(Into::into).collect(),
        study_plan: content.study_plan,
    }))
}

/// Generate only the explanation for a topic.
#[utoipa::path(
    post,
    path = "/content/explanation",
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Generated explanation", body = ExplanationResponse),
        (status = 400, description = "Empty topic", body = ErrorResponse)
    )
)]
pub async fn generate_explanation(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<ExplanationResponse>, ApiError> {
    let tier = resolve(&payload)?;
    let explanation = state.generator.explanation(&payload.topic, tier);
    Ok(Json(ExplanationResponse {
        topic: payload.topic,
        level: tier.label().to_string(),
        explanation,
    }))
}

/// Generate only the five-question quiz for a topic.
#[utoipa::path(
    post,
    path = "/content/quiz",
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Generated quiz", body = QuizResponse),
        (status = 400, description = "Empty topic", body = ErrorResponse)
    )
)]
pub async fn generate_quiz(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let tier = resolve(&payload)?;
    let quiz = state.generator.quiz(&payload.topic, tier);
    Ok(Json(QuizResponse {
        topic: payload.topic,
        level: tier.label().to_string(),
        quiz: quiz.into_iter().map(Into::into).collect(),
    }))
}

/// Generate only the study plan for a topic.
#[utoipa::path(
    post,
    path = "/content/study-plan",
    request_body = ContentRequest,
    responses(
        (status = 200, description = "Generated study plan", body = StudyPlanResponse),
        (status = 400, description = "Empty topic", body = ErrorResponse)
    )
)]
pub async fn generate_study_plan(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<StudyPlanResponse>, ApiError> {
    let tier = resolve(&payload)?;
    let study_plan = state.generator.study_plan(&payload.topic, tier);
    Ok(Json(StudyPlanResponse {
        topic: payload.topic,
        level: tier.label().to_string(),
        study_plan,
    }))
}

/// List the topics that have dedicated content.
#[utoipa::path(
    get,
    path = "/topics",
    responses(
        (status = 200, description = "Known topics", body = TopicsResponse)
    )
)]
pub async fn list_topics(State(state): State<Arc<AppState>>) -> Json<TopicsResponse> {
    let topics = state
        .knowledge
        .topics()
        .into_iter()
        .map(str::to_string)
        .collect();
    Json(TopicsResponse { topics })
}

/// List the supported difficulty levels.
#[utoipa::path(
    get,
    path = "/levels",
    responses(
        (status = 200, description = "Supported levels", body = LevelsResponse)
    )
)]
pub async fn list_levels() -> Json<LevelsResponse> {
    let levels = DifficultyTier::ALL
        .iter()
        .map(|tier| tier.label().to_string())
        .collect();
    Json(LevelsResponse { levels })
}
