//! Content Generation Service
//!
//! This module ties the three builders together behind a single seam. Front
//! ends (the HTTP service, the command line) depend on the
//! [`ContentGenerator`] trait rather than on the builders directly, so a
//! different backing store or a test double can be swapped in.

use crate::explanation::ExplanationBuilder;
use crate::knowledge::KnowledgeStore;
use crate::quiz::{QuizBuilder, QuizItem};
use crate::study_plan::StudyPlanBuilder;
use crate::tier::DifficultyTier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Everything produced for one (topic, tier) request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GeneratedContent {
    /// Markdown explanation.
    pub explanation: String,
    /// Exactly five questions.
    pub quiz: Vec<QuizItem>,
    /// Markdown study plan.
    pub study_plan: String,
}

/// Defines the contract for anything that can produce learning content.
///
/// None of the operations can fail: unknown topics and tiers degrade to
/// default content.
pub trait ContentGenerator: Send + Sync {
    /// A tier-appropriate explanation of `topic`.
    fn explanation(&self, topic: &str, tier: DifficultyTier) -> String;

    /// Five multiple-choice questions about `topic`.
    fn quiz(&self, topic: &str, tier: DifficultyTier) -> Vec<QuizItem>;

    /// A rendered week-by-week study plan for `topic`.
    fn study_plan(&self, topic: &str, tier: DifficultyTier) -> String;

    /// Runs all three generators with the same inputs.
    fn generate_all(&self, topic: &str, tier: DifficultyTier) -> GeneratedContent {
        GeneratedContent {
            explanation: self.explanation(topic, tier),
            quiz: self.quiz(topic, tier),
            study_plan: self.study_plan(topic, tier),
        }
    }
}

/// The template-backed [`ContentGenerator`].
#[derive(Debug, Clone)]
pub struct ContentFacade {
    store: Arc<KnowledgeStore>,
}

impl ContentFacade {
    /// Creates a facade over a custom knowledge store.
    pub fn new(store: Arc<KnowledgeStore>) -> Self {
        Self { store }
    }

    /// Creates a facade over the built-in knowledge table.
    pub fn builtin() -> Self {
        Self::new(Arc::new(KnowledgeStore::builtin().clone()))
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Convenience wrapper around [`ContentGenerator::generate_all`] that
    /// resolves a raw level label first.
    pub fn build_all(&self, topic: &str, level: &str) -> GeneratedContent {
        let tier = DifficultyTier::from_label(level);
        info!(topic, %tier, known_topic = self.store.contains(topic), "Generating learning content");
        self.generate_all(topic, tier)
    }
}

impl Default for ContentFacade {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContentGenerator for ContentFacade {
    fn explanation(&self, topic: &str, tier: DifficultyTier) -> String {
        ExplanationBuilder::new(&self.store).build(topic, tier)
    }

    fn quiz(&self, topic: &str, tier: DifficultyTier) -> Vec<QuizItem> {
        QuizBuilder.build(topic, tier)
    }

    fn study_plan(&self, topic: &str, tier: DifficultyTier) -> String {
        StudyPlanBuilder.build(topic, tier)
    }
}
