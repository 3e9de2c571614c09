//! Axum Router Configuration
//!
//! This module defines the complete HTTP routing for the application,
//! including the REST API and OpenAPI documentation.

use crate::{
    handlers,
    models::{
        ContentRequest, ContentResponse, ErrorResponse, ExplanationResponse, LevelsResponse,
        QuizQuestion, QuizResponse, StudyPlanResponse, TopicsResponse,
    },
    state::AppState,
};

use axum::{
    Router,
    routing::{get, post},
};
use std::path::Path;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::generate_content,
        handlers::generate_explanation,
        handlers::generate_quiz,
        handlers::generate_study_plan,
        handlers::list_topics,
        handlers::list_levels,
    ),
    components(
        schemas(
            ContentRequest,
            ContentResponse,
            ExplanationResponse,
            QuizResponse,
            StudyPlanResponse,
            QuizQuestion,
            TopicsResponse,
            LevelsResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "EduAssist API", description = "Template-driven explanations, quizzes and study plans")
    )
)]
pub struct ApiDoc;

/// Writes the pretty-printed OpenAPI document to `path`.
pub fn write_openapi(path: &Path) -> anyhow::Result<()> {
    let spec_json = ApiDoc::openapi().to_pretty_json()?;
    std::fs::write(path, spec_json)?;
    Ok(())
}

/// Creates the main Axum router for the application.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_router = Router::new()
        .route("/content", post(handlers::generate_content))
        .route("/content/explanation", post(handlers::generate_explanation))
        .route("/content/quiz", post(handlers::generate_quiz))
        .route("/content/study-plan", post(handlers::generate_study_plan))
        .route("/topics", get(handlers::list_topics))
        .route("/levels", get(handlers::list_levels))
        .with_state(app_state);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_router)
}
