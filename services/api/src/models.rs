//! API Models
//!
//! This module defines the request and response bodies of the REST API and
//! derives their OpenAPI schemas with `utoipa`.

use eduassist_core::{DifficultyTier, QuizItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_level() -> String {
    DifficultyTier::Beginner.label().to_string()
}

#[derive(Deserialize, ToSchema, Debug, Clone)]
pub struct ContentRequest {
    #[schema(example = "Photosynthesis")]
    pub topic: String,
    /// One of Beginner, Intermediate or Advanced (case-insensitive).
    /// Anything else is treated as Beginner.
    #[serde(default = "default_level")]
    #[schema(example = "Intermediate")]
    pub level: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    #[schema(example = "B")]
    pub correct_answer: String,
}

impl From<QuizItem> for QuizQuestion {
    fn from(item: QuizItem) -> Self {
        Self {
            question: item.question,
            options: item.options,
            correct_answer: item.correct_answer.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ContentResponse {
    pub topic: String,
    /// The tier the content was generated for, after fallback.
    #[schema(example = "Intermediate")]
    pub level: String,
    pub explanation: String,
    pub quiz: Vec<QuizQuestion>,
    pub study_plan: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ExplanationResponse {
    pub topic: String,
    pub level: String,
    pub explanation: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct QuizResponse {
    pub topic: String,
    pub level: String,
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct StudyPlanResponse {
    pub topic: String,
    pub level: String,
    pub study_plan: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LevelsResponse {
    pub levels: Vec<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}
