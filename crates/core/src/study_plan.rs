//! Study Plan Builder
//!
//! Selects a fixed week-by-week skeleton per tier (2, 4 or 6 weeks), fills
//! the topic into the activities that mention it and renders the result as a
//! Markdown document: header, weeks, recommended resources, then milestones.

use crate::tier::DifficultyTier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

const TOPIC_PLACEHOLDER: &str = "{topic}";
const ACTIVITIES_PER_WEEK: usize = 4;

/// One week of a study plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudyWeek {
    /// 1-based week number.
    pub index: u32,
    pub focus: String,
    pub activities: Vec<String>,
}

/// A checkpoint the learner should reach by the end of `week`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Milestone {
    pub week: u32,
    pub statement: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudyPlan {
    pub tier: DifficultyTier,
    pub topic: String,
    pub duration: String,
    pub weeks: Vec<StudyWeek>,
    pub resources: Vec<String>,
    pub milestones: Vec<Milestone>,
}

impl StudyPlan {
    /// Renders the plan as a Markdown document.
    pub fn render(&self) -> String {
        let mut out = format!(
            "# 📅 {} Study Plan for {}\n\n",
            self.tier.label(),
            self.topic
        );
        out.push_str(&format!("**Duration:** {}\n\n", self.duration));
        out.push_str("---\n\n");

        for week in &self.weeks {
            out.push_str(&format!("## Week {}: {}\n\n", week.index, week.focus));
            for activity in &week.activities {
                out.push_str(&format!("- {}\n", activity));
            }
            out.push('\n');
        }

        out.push_str("---\n\n");
        out.push_str("## 📚 Recommended Resources\n\n");
        for resource in &self.resources {
            out.push_str(&format!("- {}\n", resource));
        }

        out.push_str("\n---\n\n");
        out.push_str("## ✅ Assessment Milestones\n\n");
        for milestone in &self.milestones {
            out.push_str(&format!(
                "- **Week {}:** {}\n",
                milestone.week, milestone.statement
            ));
        }
        out
    }
}

struct WeekTemplate {
    focus: &'static str,
    activities: [&'static str; ACTIVITIES_PER_WEEK],
}

struct PlanSkeleton {
    duration: &'static str,
    weeks: &'static [WeekTemplate],
    resources: &'static [&'static str],
    milestones: &'static [(u32, &'static str)],
}

static BEGINNER_PLAN: PlanSkeleton = PlanSkeleton {
    duration: "2 weeks",
    weeks: &[
        WeekTemplate {
            focus: "Understanding Basics",
            activities: [
                "Learn the definition and purpose of {topic}",
                "Watch introductory videos or read beginner-friendly articles",
                "Create flashcards for key terms",
                "Complete simple practice exercises",
            ],
        },
        WeekTemplate {
            focus: "Practice and Application",
            activities: [
                "Work through example problems",
                "Explain {topic} to someone else in your own words",
                "Take practice quizzes",
                "Review and summarize what you've learned",
            ],
        },
    ],
    resources: &[
        "Khan Academy or similar educational platforms",
        "YouTube educational channels",
        "Beginner-level textbooks or online courses",
        "Study groups or online forums",
    ],
    milestones: &[
        (1, "Can define key terms and explain basic concepts"),
        (2, "Can solve simple problems and explain to others"),
    ],
};

static INTERMEDIATE_PLAN: PlanSkeleton = PlanSkeleton {
    duration: "3-4 weeks",
    weeks: &[
        WeekTemplate {
            focus: "Core Concepts Review",
            activities: [
                "Review fundamental principles of {topic}",
                "Identify knowledge gaps from beginner level",
                "Read intermediate-level materials",
                "Create concept maps showing relationships",
            ],
        },
        WeekTemplate {
            focus: "Deep Dive into Mechanisms",
            activities: [
                "Study how {topic} works in detail",
                "Analyze case studies and examples",
                "Practice problem-solving with moderate difficulty",
                "Connect concepts to real-world applications",
            ],
        },
        WeekTemplate {
            focus: "Application and Integration",
            activities: [
                "Work on projects or practical exercises",
                "Explore how {topic} relates to other concepts",
                "Participate in discussions or study groups",
                "Complete comprehensive practice problems",
            ],
        },
        WeekTemplate {
            focus: "Assessment and Mastery",
            activities: [
                "Take practice tests",
                "Review challenging areas",
                "Teach the concept to others",
                "Prepare summary notes for future reference",
            ],
        },
    ],
    resources: &[
        "University-level textbooks",
        "Academic journals (introductory articles)",
        "Online courses (Coursera, edX)",
        "Professional forums and communities",
    ],
    milestones: &[
        (2, "Can explain mechanisms and processes in detail"),
        (3, "Can apply concepts to real-world scenarios"),
        (4, "Can teach the topic and solve complex problems"),
    ],
};

static ADVANCED_PLAN: PlanSkeleton = PlanSkeleton {
    duration: "4-6 weeks",
    weeks: &[
        WeekTemplate {
            focus: "Theoretical Foundations",
            activities: [
                "Study the theoretical framework of {topic}",
                "Review seminal papers and research",
                "Analyze mathematical or conceptual models",
                "Identify current debates in the field",
            ],
        },
        WeekTemplate {
            focus: "Advanced Mechanisms",
            activities: [
                "Deep dive into complex processes",
                "Study advanced methodologies",
                "Analyze research papers critically",
                "Explore interdisciplinary connections",
            ],
        },
        WeekTemplate {
            focus: "Research and Analysis",
            activities: [
                "Conduct literature review",
                "Identify gaps in current understanding of {topic}",
                "Design hypothetical experiments or studies",
                "Engage with cutting-edge research",
            ],
        },
        WeekTemplate {
            focus: "Synthesis and Application",
            activities: [
                "Work on advanced projects or research",
                "Apply concepts to novel problems",
                "Collaborate with peers or mentors",
                "Present findings or insights",
            ],
        },
        WeekTemplate {
            focus: "Critical Evaluation",
            activities: [
                "Critique existing research and theories",
                "Develop original perspectives",
                "Write comprehensive analysis papers",
                "Participate in academic discussions",
            ],
        },
        WeekTemplate {
            focus: "Mastery and Future Directions",
            activities: [
                "Complete comprehensive assessment",
                "Identify areas for continued study",
                "Explore career or research opportunities",
                "Contribute to the field (publications, projects)",
            ],
        },
    ],
    resources: &[
        "Advanced textbooks and monographs",
        "Peer-reviewed academic journals",
        "Research databases (PubMed, IEEE, arXiv)",
        "Academic conferences and seminars",
        "Mentorship from experts in the field",
    ],
    milestones: &[
        (2, "Can analyze and critique research papers"),
        (4, "Can design original research or projects"),
        (6, "Can contribute original insights to the field"),
    ],
};

fn skeleton(tier: DifficultyTier) -> &'static PlanSkeleton {
    match tier {
        DifficultyTier::Beginner => &BEGINNER_PLAN,
        DifficultyTier::Intermediate => &INTERMEDIATE_PLAN,
        DifficultyTier::Advanced => &ADVANCED_PLAN,
    }
}

/// Produces the fixed study plan for a tier.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudyPlanBuilder;

impl StudyPlanBuilder {
    /// The structured plan for `topic` at `tier`.
    pub fn plan(&self, topic: &str, tier: DifficultyTier) -> StudyPlan {
        let skeleton = skeleton(tier);
        let weeks = skeleton
            .weeks
            .iter()
            .zip(1u32..)
            .map(|(week, index)| StudyWeek {
                index,
                focus: week.focus.to_string(),
                activities: week
                    .activities
                    .iter()
                    .map(|a| a.replace(TOPIC_PLACEHOLDER, topic))
                    .collect(),
            })
            .collect();

        StudyPlan {
            tier,
            topic: topic.to_string(),
            duration: skeleton.duration.to_string(),
            weeks,
            resources: skeleton.resources.iter().map(|r| r.to_string()).collect(),
            milestones: skeleton
                .milestones
                .iter()
                .map(|&(week, statement)| Milestone {
                    week,
                    statement: statement.to_string(),
                })
                .collect(),
        }
    }

    /// The rendered Markdown plan for `topic` at `tier`.
    pub fn build(&self, topic: &str, tier: DifficultyTier) -> String {
        self.plan(topic, tier).render()
    }
}
