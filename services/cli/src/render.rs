//! Terminal rendering of generated content, as text or as JSON.

use eduassist_core::{GeneratedContent, QuizItem};
use serde_json::{Value, json};
use std::fmt::Write;

/// Which part of the generated content to print.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    All,
    Explanation,
    Quiz,
    Plan,
}

/// Renders the quiz with numbered questions and the answer after each one.
pub fn render_quiz(quiz: &[QuizItem]) -> String {
    let mut out = String::new();
    for (idx, item) in quiz.iter().enumerate() {
        let _ = writeln!(out, "Question {}: {}", idx + 1, item.question);
        for option in &item.options {
            let _ = writeln!(out, "    {}", option);
        }
        let _ = writeln!(out, "Correct Answer: {}", item.correct_answer);
        out.push('\n');
    }
    out
}

/// Renders the requested section(s) with headings between them.
pub fn render(content: &GeneratedContent, section: Section) -> String {
    match section {
        Section::Explanation => content.explanation.clone(),
        Section::Quiz => render_quiz(&content.quiz),
        Section::Plan => content.study_plan.clone(),
        Section::All => format!(
            "## 📖 Personalized Explanation\n\n{}\n\n---\n\n## 📝 Self-Assessment Quiz\n\n{}---\n\n## 📅 Recommended Study Plan\n\n{}",
            content.explanation,
            render_quiz(&content.quiz),
            content.study_plan
        ),
    }
}

/// Serializes the requested section(s). A single section is wrapped in an
/// object keyed the same way as in the full document.
pub fn to_json(content: &GeneratedContent, section: Section) -> serde_json::Result<Value> {
    Ok(match section {
        Section::All => serde_json::to_value(content)?,
        Section::Explanation => json!({ "explanation": content.explanation }),
        Section::Quiz => json!({ "quiz": serde_json::to_value(&content.quiz)? }),
        Section::Plan => json!({ "study_plan": content.study_plan }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eduassist_core::{ContentFacade, ContentGenerator, DifficultyTier};

    #[test]
    fn test_render_quiz_layout() {
        let content =
            ContentFacade::builtin().generate_all("Photosynthesis", DifficultyTier::Beginner);
        let text = render_quiz(&content.quiz);

        assert!(text.starts_with(
            "Question 1: What is Photosynthesis?\n    A) A process or concept in the subject area\n"
        ));
        assert!(text.contains("Correct Answer: A\n"));
        assert!(text.contains("Question 5: How can you practice Photosynthesis?"));
        assert_eq!(text.matches("Correct Answer:").count(), 5);
    }

    #[test]
    fn test_render_sections() {
        let content =
            ContentFacade::builtin().generate_all("Optics", DifficultyTier::Intermediate);

        assert_eq!(render(&content, Section::Explanation), content.explanation);
        assert_eq!(render(&content, Section::Plan), content.study_plan);

        let all = render(&content, Section::All);
        let explanation = all.find("Personalized Explanation").unwrap();
        let quiz = all.find("Self-Assessment Quiz").unwrap();
        let plan = all.find("Recommended Study Plan").unwrap();
        assert!(explanation < quiz && quiz < plan);
    }

    #[test]
    fn test_json_sections() {
        let content =
            ContentFacade::builtin().generate_all("Photosynthesis", DifficultyTier::Advanced);

        let quiz = to_json(&content, Section::Quiz).unwrap();
        assert_eq!(quiz.as_object().unwrap().len(), 1);
        assert_eq!(quiz["quiz"].as_array().unwrap().len(), 5);
        assert_eq!(quiz["quiz"][0]["correct_answer"], "B");

        let plan = to_json(&content, Section::Plan).unwrap();
        assert_eq!(plan, json!({ "study_plan": content.study_plan }));

        let explanation = to_json(&content, Section::Explanation).unwrap();
        assert_eq!(explanation, json!({ "explanation": content.explanation }));

        let all = to_json(&content, Section::All).unwrap();
        assert_eq!(all, serde_json::to_value(&content).unwrap());
    }
}
