//! Knowledge Store
//!
//! This module holds the read-only table of topic records that every builder
//! draws from. A store maps a normalized topic name to one record per
//! [`DifficultyTier`], plus a default record set that is substituted whenever a
//! topic is not present. Lookups never fail.
//!
//! The built-in table is embedded at compile time and parsed once on first use.
//! A replacement table with the same JSON shape can be loaded from disk at
//! startup via [`KnowledgeStore::load`].

use crate::tier::DifficultyTier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::debug;

const BUILTIN_KNOWLEDGE: &str = include_str!("../data/knowledge.json");

static BUILTIN_STORE: LazyLock<KnowledgeStore> = LazyLock::new(|| {
    KnowledgeStore::from_json(BUILTIN_KNOWLEDGE).expect("embedded knowledge.json must be valid")
});

/// Errors raised while loading a knowledge document.
#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("Failed to read knowledge file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid knowledge document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Knowledge document contains an empty topic name")]
    EmptyTopicKey,
    #[error("Topic '{0}' is defined more than once")]
    DuplicateTopic(String),
    #[error("Topic '{topic}' has an incomplete {tier} record: {reason}")]
    IncompleteRecord {
        topic: String,
        tier: DifficultyTier,
        reason: &'static str,
    },
}

/// The content for a single (topic, tier) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TopicRecord {
    pub definition: String,
    pub key_points: Vec<String>,
}

/// One [`TopicRecord`] for each tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TierRecords {
    pub beginner: TopicRecord,
    pub intermediate: TopicRecord,
    pub advanced: TopicRecord,
}

impl TierRecords {
    pub fn get(&self, tier: DifficultyTier) -> &TopicRecord {
        match tier {
            DifficultyTier::Beginner => &self.beginner,
            DifficultyTier::Intermediate => &self.intermediate,
            DifficultyTier::Advanced => &self.advanced,
        }
    }

    fn validate(&self, topic: &str) -> Result<(), KnowledgeError> {
        for tier in DifficultyTier::ALL {
            let record = self.get(tier);
            let reason = if record.definition.trim().is_empty() {
                Some("definition is empty")
            } else if record.key_points.is_empty() {
                Some("no key points")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(KnowledgeError::IncompleteRecord {
                    topic: topic.to_string(),
                    tier,
                    reason,
                });
            }
        }
        Ok(())
    }
}

/// On-disk shape of a knowledge document.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct KnowledgeDocument {
    default: TierRecords,
    #[serde(default)]
    topics: HashMap<String, TierRecords>,
}

/// An immutable topic → tier → record table with a default fallback.
#[derive(Debug, Clone)]
pub struct KnowledgeStore {
    default: TierRecords,
    topics: HashMap<String, TierRecords>,
}

/// Case-folds and trims a topic so it can be used as a store key.
pub fn normalize_topic(topic: &str) -> String {
    topic.trim().to_lowercase()
}

impl KnowledgeStore {
    /// The store built from the embedded knowledge table.
    pub fn builtin() -> &'static KnowledgeStore {
        &BUILTIN_STORE
    }

    /// Parses and validates a knowledge document.
    ///
    /// Topic names are normalized on the way in, so `"Photosynthesis"` and
    /// `" photosynthesis"` in the same document are reported as duplicates.
    pub fn from_json(json: &str) -> Result<Self, KnowledgeError> {
        let document: KnowledgeDocument = serde_json::from_str(json)?;
        document.default.validate("default")?;

        let mut topics = HashMap::with_capacity(document.topics.len());
        for (name, records) in document.topics {
            let key = normalize_topic(&name);
            if key.is_empty() {
                return Err(KnowledgeError::EmptyTopicKey);
            }
            records.validate(&key)?;
            if topics.insert(key.clone(), records).is_some() {
                return Err(KnowledgeError::DuplicateTopic(key));
            }
        }

        Ok(Self {
            default: document.default,
            topics,
        })
    }

    /// Reads a knowledge document from `path`.
    pub fn load(path: &Path) -> Result<Self, KnowledgeError> {
        let json = std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Returns the record for `(topic, tier)`, or the default record for
    /// `tier` when the topic is unknown.
    pub fn lookup(&self, topic: &str, tier: DifficultyTier) -> &TopicRecord {
        let key = normalize_topic(topic);
        match self.topics.get(&key) {
            Some(records) => records.get(tier),
            None => {
                debug!(topic = %key, %tier, "Topic not in knowledge store, using default record");
                self.default.get(tier)
            }
        }
    }

    /// Whether `topic` has its own records (after normalization).
    pub fn contains(&self, topic: &str) -> bool {
        self.topics.contains_key(&normalize_topic(topic))
    }

    /// Known topic keys in sorted order.
    pub fn topics(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.topics.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn default_records(&self) -> &TierRecords {
        &self.default
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn record_json(definition: &str) -> String {
        format!(r#"{{"definition": "{definition}", "key_points": ["one", "two"]}}"#)
    }

    fn tiers_json(prefix: &str) -> String {
        format!(
            r#"{{"beginner": {}, "intermediate": {}, "advanced": {}}}"#,
            record_json(&format!("{prefix} beginner")),
            record_json(&format!("{prefix} intermediate")),
            record_json(&format!("{prefix} advanced")),
        )
    }

    #[test]
    fn test_builtin_store_loads() {
        let store = KnowledgeStore::builtin();
        assert_eq!(store.topics(), vec!["photosynthesis"]);
        assert!(store.contains("Photosynthesis"));
    }

    #[test]
    fn test_known_topic_returns_its_own_record() {
        let store = KnowledgeStore::builtin();
        for tier in DifficultyTier::ALL {
            let record = store.lookup("photosynthesis", tier);
            assert_ne!(record, store.default_records().get(tier));
            assert!(record.definition.starts_with("Photosynthesis is"));
        }
    }

    #[test]
    fn test_intermediate_photosynthesis_record() {
        let record =
            KnowledgeStore::builtin().lookup("photosynthesis", DifficultyTier::Intermediate);
        assert_eq!(
            record.definition,
            "Photosynthesis is a biochemical process where plants convert light energy into chemical energy stored in glucose."
        );
        assert_eq!(record.key_points.len(), 4);
        assert_eq!(
            record.key_points[3],
            "Overall equation: 6CO₂ + 6H₂O + light → C₆H₁₂O₆ + 6O₂"
        );
    }

    #[test]
    fn test_unknown_topic_uses_default_record() {
        let store = KnowledgeStore::builtin();
        for tier in DifficultyTier::ALL {
            assert_eq!(
                store.lookup("Quantum Entanglement", tier),
                store.default_records().get(tier)
            );
        }
        assert_eq!(
            store.lookup("", DifficultyTier::Advanced).definition,
            "This topic involves complex theoretical frameworks and advanced analysis."
        );
    }

    #[test]
    fn test_lookup_normalizes_topic() {
        let store = KnowledgeStore::builtin();
        assert_eq!(
            store.lookup(" Photosynthesis ", DifficultyTier::from_label("Beginner")),
            store.lookup("photosynthesis", DifficultyTier::from_label("BEGINNER"))
        );
        assert_eq!(normalize_topic("  PhotoSynthesis\t"), "photosynthesis");
    }

    #[test]
    fn test_from_json_normalizes_keys() {
        let json = format!(
            r#"{{"default": {}, "topics": {{" Cell Biology ": {}}}}}"#,
            tiers_json("default"),
            tiers_json("cells")
        );
        let store = KnowledgeStore::from_json(&json).unwrap();
        assert_eq!(store.topics(), vec!["cell biology"]);
        assert_eq!(
            store.lookup("CELL BIOLOGY", DifficultyTier::Advanced).definition,
            "cells advanced"
        );
    }

    #[test]
    fn test_from_json_without_topics() {
        let json = format!(r#"{{"default": {}}}"#, tiers_json("default"));
        let store = KnowledgeStore::from_json(&json).unwrap();
        assert!(store.topics().is_empty());
        assert_eq!(
            store.lookup("anything", DifficultyTier::Beginner).definition,
            "default beginner"
        );
    }

    #[test]
    fn test_from_json_rejects_duplicate_topics() {
        let json = format!(
            r#"{{"default": {}, "topics": {{"Algebra": {}, "algebra": {}}}}}"#,
            tiers_json("d"),
            tiers_json("a"),
            tiers_json("b")
        );
        let err = KnowledgeStore::from_json(&json).unwrap_err();
        assert!(matches!(err, KnowledgeError::DuplicateTopic(ref t) if t == "algebra"));
    }

    #[test]
    fn test_from_json_rejects_empty_topic_key() {
        let json = format!(
            r#"{{"default": {}, "topics": {{"   ": {}}}}}"#,
            tiers_json("d"),
            tiers_json("a")
        );
        let err = KnowledgeStore::from_json(&json).unwrap_err();
        assert!(matches!(err, KnowledgeError::EmptyTopicKey));
    }

    #[test]
    fn test_from_json_rejects_missing_tier() {
        let json = format!(
            r#"{{"default": {{"beginner": {}, "intermediate": {}}}}}"#,
            record_json("b"),
            record_json("i")
        );
        let err = KnowledgeStore::from_json(&json).unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_incomplete_record() {
        let json = format!(
            r#"{{"default": {}, "topics": {{"optics": {{"beginner": {}, "intermediate": {}, "advanced": {{"definition": "x", "key_points": []}}}}}}}}"#,
            tiers_json("d"),
            record_json("b"),
            record_json("i")
        );
        let err = KnowledgeStore::from_json(&json).unwrap_err();
        match err {
            KnowledgeError::IncompleteRecord { topic, tier, .. } => {
                assert_eq!(topic, "optics");
                assert_eq!(tier, DifficultyTier::Advanced);
            }
            other => panic!("Expected IncompleteRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = format!(
            r#"{{"default": {}, "topics": {{"geology": {}}}}}"#,
            tiers_json("d"),
            tiers_json("rocks")
        );
        file.write_all(json.as_bytes()).unwrap();

        let store = KnowledgeStore::load(file.path()).unwrap();
        assert!(store.contains("Geology"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = KnowledgeStore::load(Path::new("/nonexistent/knowledge.json")).unwrap_err();
        assert!(matches!(err, KnowledgeError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/knowledge.json"));
    }
}
