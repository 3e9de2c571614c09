//! Difficulty tiers.
//!
//! Every template set in the crate is keyed by one of three tiers. Labels
//! coming from the outside world are resolved leniently: anything that is not
//! a known tier falls back to [`DifficultyTier::Beginner`] rather than failing.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// The closed set of learning levels that selects which templates are used.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
    JsonSchema,
)]
pub enum DifficultyTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    /// All tiers in ascending order of difficulty.
    pub const ALL: [DifficultyTier; 3] = [
        DifficultyTier::Beginner,
        DifficultyTier::Intermediate,
        DifficultyTier::Advanced,
    ];

    /// Resolves a user-supplied label, case- and whitespace-insensitively.
    ///
    /// Unrecognized labels resolve to `Beginner`; this never fails.
    pub fn from_label(label: &str) -> Self {
        match Self::parse_known(label) {
            Some(tier) => tier,
            None => {
                debug!(label, "Unrecognized difficulty label, using Beginner");
                DifficultyTier::Beginner
            }
        }
    }

    /// Returns `true` when `label` names one of the three tiers.
    pub fn is_known_label(label: &str) -> bool {
        Self::parse_known(label).is_some()
    }

    fn parse_known(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "beginner" => Some(DifficultyTier::Beginner),
            "intermediate" => Some(DifficultyTier::Intermediate),
            "advanced" => Some(DifficultyTier::Advanced),
            _ => None,
        }
    }

    /// Display name, e.g. `"Intermediate"`.
    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "Beginner",
            DifficultyTier::Intermediate => "Intermediate",
            DifficultyTier::Advanced => "Advanced",
        }
    }

    /// Lowercase key used in knowledge documents.
    pub fn key(self) -> &'static str {
        match self {
            DifficultyTier::Beginner => "beginner",
            DifficultyTier::Intermediate => "intermediate",
            DifficultyTier::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
