//! Shared Application State
//!
//! This module defines the `AppState` struct, which holds the read-only
//! knowledge table and the content generator shared by every handler.

use eduassist_core::{ContentFacade, ContentGenerator, KnowledgeStore};
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
/// All fields are public to be accessible from other modules.
#[derive(Clone)]
pub struct AppState {
    pub knowledge: Arc<KnowledgeStore>,
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    /// Builds a state whose generator is the template facade over `knowledge`.
    pub fn with_knowledge(knowledge: Arc<KnowledgeStore>) -> Self {
        Self {
            generator: Arc::new(ContentFacade::new(knowledge.clone())),
            knowledge,
        }
    }
}
