//! Template-driven learning content.
//!
//! Given a topic and a difficulty tier, this crate produces an explanation, a
//! five-question quiz and a multi-week study plan from static tables. Every
//! operation is a pure function of its inputs and never fails: unknown topics
//! use default records and unknown tiers resolve to `Beginner`.

pub mod content;
pub mod explanation;
pub mod knowledge;
pub mod quiz;
pub mod study_plan;
pub mod tier;

pub use content::{ContentFacade, ContentGenerator, GeneratedContent};
pub use knowledge::{KnowledgeError, KnowledgeStore, TopicRecord};
pub use quiz::{AnswerLabel, QuizItem};
pub use study_plan::{Milestone, StudyPlan, StudyWeek};
pub use tier::DifficultyTier;
