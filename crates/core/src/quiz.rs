//! Quiz Builder
//!
//! Each tier has a fixed catalogue of five multiple-choice question
//! templates. The topic is substituted into the question text only; options
//! and answers are static per template. Output order is catalogue order.

use crate::tier::DifficultyTier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of questions produced per request.
pub const QUESTIONS_PER_QUIZ: usize = 5;
/// Number of options on every question.
pub const OPTIONS_PER_QUESTION: usize = 4;

const TOPIC_PLACEHOLDER: &str = "{topic}";

/// The letter of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum AnswerLabel {
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerLabel::A => "A",
            AnswerLabel::B => "B",
            AnswerLabel::C => "C",
            AnswerLabel::D => "D",
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single rendered quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct QuizItem {
    pub question: String,
    /// Option texts, each prefixed with its letter (`"A) ..."`).
    pub options: Vec<String>,
    pub correct_answer: AnswerLabel,
}

struct QuestionTemplate {
    question: &'static str,
    options: [&'static str; OPTIONS_PER_QUESTION],
    correct_answer: AnswerLabel,
}

impl QuestionTemplate {
    fn render(&self, topic: &str) -> QuizItem {
        QuizItem {
            question: self.question.replace(TOPIC_PLACEHOLDER, topic),
            options: self.options.iter().map(|o| o.to_string()).collect(),
            correct_answer: self.correct_answer,
        }
    }
}

static BEGINNER_QUESTIONS: [QuestionTemplate; QUESTIONS_PER_QUIZ] = [
    QuestionTemplate {
        question: "What is {topic}?",
        options: [
            "A) A process or concept in the subject area",
            "B) A type of measurement tool",
            "C) A mathematical formula",
            "D) A historical event",
        ],
        correct_answer: AnswerLabel::A,
    },
    QuestionTemplate {
        question: "Why is {topic} important?",
        options: [
            "A) It has no practical use",
            "B) It helps us understand fundamental concepts",
            "C) It only matters for advanced students",
            "D) It is outdated knowledge",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "Where do we commonly encounter {topic}?",
        options: [
            "A) Only in laboratories",
            "B) In everyday life and nature",
            "C) Only in textbooks",
            "D) Nowhere in the real world",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "What is the first step in learning about {topic}?",
        options: [
            "A) Memorizing complex formulas",
            "B) Understanding the basic definition",
            "C) Conducting advanced research",
            "D) Ignoring the fundamentals",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "How can you practice {topic}?",
        options: [
            "A) By doing simple exercises and examples",
            "B) By avoiding all practice",
            "C) Only through theoretical study",
            "D) It cannot be practiced",
        ],
        correct_answer: AnswerLabel::A,
    },
];

static INTERMEDIATE_QUESTIONS: [QuestionTemplate; QUESTIONS_PER_QUIZ] = [
    QuestionTemplate {
        question: "What are the key mechanisms involved in {topic}?",
        options: [
            "A) Simple one-step processes",
            "B) Complex interactions between multiple components",
            "C) No mechanisms are involved",
            "D) Only theoretical concepts",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "How does {topic} relate to other concepts in the field?",
        options: [
            "A) It exists in complete isolation",
            "B) It connects to and influences related concepts",
            "C) It has no relationship to anything else",
            "D) Only beginners need to know connections",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "What is a practical application of {topic}?",
        options: [
            "A) It has no real-world applications",
            "B) It solves problems and creates solutions in various fields",
            "C) Only theoretical exercises",
            "D) Applications are unknown",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "What level of understanding is needed to work with {topic}?",
        options: [
            "A) Only memorization is required",
            "B) Deep conceptual understanding and analytical skills",
            "C) No understanding is necessary",
            "D) Basic awareness is sufficient",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "How would you explain {topic} to someone else?",
        options: [
            "A) By using technical jargon only",
            "B) By breaking it down into understandable parts with examples",
            "C) It cannot be explained",
            "D) By avoiding all details",
        ],
        correct_answer: AnswerLabel::B,
    },
];

static ADVANCED_QUESTIONS: [QuestionTemplate; QUESTIONS_PER_QUIZ] = [
    QuestionTemplate {
        question: "What are the theoretical foundations of {topic}?",
        options: [
            "A) There are no theoretical foundations",
            "B) Complex principles and established research frameworks",
            "C) Only practical observations",
            "D) Simple assumptions",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "How does current research approach {topic}?",
        options: [
            "A) Research has concluded on this topic",
            "B) Through interdisciplinary methods and advanced analysis",
            "C) Only through basic observation",
            "D) Research ignores this topic",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "What are the limitations of current understanding of {topic}?",
        options: [
            "A) Everything is fully understood",
            "B) There are ongoing debates and areas requiring further investigation",
            "C) No limitations exist",
            "D) The topic is too simple to have limitations",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "How can {topic} be applied to solve complex problems?",
        options: [
            "A) It cannot solve complex problems",
            "B) Through systematic analysis and integration with other advanced concepts",
            "C) Only through guesswork",
            "D) Simple application is sufficient",
        ],
        correct_answer: AnswerLabel::B,
    },
    QuestionTemplate {
        question: "What future developments are expected in {topic}?",
        options: [
            "A) No future developments are anticipated",
            "B) Continued research and technological advances will expand understanding",
            "C) The field is stagnant",
            "D) Future developments are impossible",
        ],
        correct_answer: AnswerLabel::B,
    },
];

fn catalogue(tier: DifficultyTier) -> &'static [QuestionTemplate; QUESTIONS_PER_QUIZ] {
    match tier {
        DifficultyTier::Beginner => &BEGINNER_QUESTIONS,
        DifficultyTier::Intermediate => &INTERMEDIATE_QUESTIONS,
        DifficultyTier::Advanced => &ADVANCED_QUESTIONS,
    }
}

/// Produces the fixed five-question quiz for a tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizBuilder;

impl QuizBuilder {
    pub fn build(&self, topic: &str, tier: DifficultyTier) -> Vec<QuizItem> {
        catalogue(tier).iter().map(|t| t.render(topic)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_tier_yields_five_well_formed_items() {
        for tier in DifficultyTier::ALL {
            let quiz = QuizBuilder.build("Photosynthesis", tier);
            assert_eq!(quiz.len(), QUESTIONS_PER_QUIZ);
            for item in &quiz {
                assert_eq!(item.options.len(), OPTIONS_PER_QUESTION);
                assert!(item.question.contains("Photosynthesis"));
                assert!(!item.question.contains(TOPIC_PLACEHOLDER));
                for (option, letter) in item.options.iter().zip(["A)", "B)", "C)", "D)"]) {
                    assert!(option.starts_with(letter), "{option} should start with {letter}");
                }
            }
        }
    }

    #[test]
    fn test_quiz_is_deterministic() {
        let first = QuizBuilder.build("Photosynthesis", DifficultyTier::from_label("Beginner"));
        let second = QuizBuilder.build("Photosynthesis", DifficultyTier::from_label("Beginner"));
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_beginner_catalogue_order_and_answers() {
        let quiz = QuizBuilder.build("Gravity", DifficultyTier::Beginner);
        assert_eq!(quiz[0].question, "What is Gravity?");
        assert_eq!(quiz[4].question, "How can you practice Gravity?");
        let answers: Vec<AnswerLabel> = quiz.iter().map(|q| q.correct_answer).collect();
        assert_eq!(
            answers,
            vec![
                AnswerLabel::A,
                AnswerLabel::B,
                AnswerLabel::B,
                AnswerLabel::B,
                AnswerLabel::A
            ]
        );
    }

    #[test]
    fn test_intermediate_and_advanced_answers_are_b() {
        for tier in [DifficultyTier::Intermediate, DifficultyTier::Advanced] {
            assert!(
                QuizBuilder
                    .build("Optics", tier)
                    .iter()
                    .all(|q| q.correct_answer == AnswerLabel::B)
            );
        }
    }

    #[test]
    fn test_no_question_is_shared_between_tiers() {
        let questions: HashSet<String> = DifficultyTier::ALL
            .iter()
            .flat_map(|&tier| QuizBuilder.build("X", tier))
            .map(|q| q.question)
            .collect();
        assert_eq!(questions.len(), 15);
    }

    #[test]
    fn test_unknown_tier_uses_beginner_catalogue() {
        assert_eq!(
            QuizBuilder.build("Optics", DifficultyTier::from_label("Expert")),
            QuizBuilder.build("Optics", DifficultyTier::Beginner)
        );
    }

    #[test]
    fn test_answer_label_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&AnswerLabel::C).unwrap(), "\"C\"");
        assert_eq!(AnswerLabel::D.to_string(), "D");
    }
}
