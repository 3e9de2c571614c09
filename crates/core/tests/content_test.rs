use eduassist_core::{
    AnswerLabel, ContentFacade, ContentGenerator, DifficultyTier, KnowledgeStore,
    study_plan::StudyPlanBuilder,
};

#[test]
fn test_intermediate_photosynthesis_end_to_end() {
    let content = ContentFacade::builtin().build_all("Photosynthesis", "Intermediate");

    assert!(content.explanation.contains(
        "Photosynthesis is a biochemical process where plants convert light energy into chemical energy stored in glucose."
    ));

    assert_eq!(content.quiz.len(), 5);
    assert_eq!(
        content.quiz[0].question,
        "What are the key mechanisms involved in Photosynthesis?"
    );
    assert_eq!(
        content.quiz[4].question,
        "How would you explain Photosynthesis to someone else?"
    );

    let week_headers: Vec<&str> = content
        .study_plan
        .lines()
        .filter(|l| l.starts_with("## Week "))
        .collect();
    assert_eq!(
        week_headers,
        vec![
            "## Week 1: Core Concepts Review",
            "## Week 2: Deep Dive into Mechanisms",
            "## Week 3: Application and Integration",
            "## Week 4: Assessment and Mastery",
        ]
    );
}

#[test]
fn test_unknown_topic_advanced_end_to_end() {
    let facade = ContentFacade::builtin();
    let content = facade.build_all("Quantum Entanglement", "Advanced");

    assert!(!facade.store().contains("Quantum Entanglement"));
    assert!(content.explanation.contains(
        "**Definition:** This topic involves complex theoretical frameworks and advanced analysis."
    ));
    assert_eq!(
        content.quiz[0].question,
        "What are the theoretical foundations of Quantum Entanglement?"
    );
    assert!(
        content
            .study_plan
            .contains("- Study the theoretical framework of Quantum Entanglement")
    );
    assert!(
        content
            .study_plan
            .contains("- Identify gaps in current understanding of Quantum Entanglement")
    );
    assert_eq!(
        content.study_plan.lines().filter(|l| l.starts_with("## Week ")).count(),
        6
    );
}

#[test]
fn test_quiz_shape_holds_for_any_topic_and_tier() {
    let facade = ContentFacade::builtin();
    for topic in ["Photosynthesis", "World War II", "", "  python  "] {
        for tier in DifficultyTier::ALL {
            let quiz = facade.quiz(topic, tier);
            assert_eq!(quiz.len(), 5);
            for item in quiz {
                assert_eq!(item.options.len(), 4);
                assert!(matches!(
                    item.correct_answer,
                    AnswerLabel::A | AnswerLabel::B | AnswerLabel::C | AnswerLabel::D
                ));
            }
        }
    }
}

#[test]
fn test_unknown_level_falls_back_to_beginner_everywhere() {
    let facade = ContentFacade::builtin();
    let expert = facade.build_all("Photosynthesis", "Expert");
    let beginner = facade.build_all("Photosynthesis", "Beginner");

    assert_eq!(expert, beginner);
    assert!(expert.explanation.starts_with("Let's learn about **Photosynthesis**"));
    assert_eq!(
        StudyPlanBuilder
            .plan("Photosynthesis", DifficultyTier::from_label("Expert"))
            .weeks
            .len(),
        2
    );
}

#[test]
fn test_known_topics_never_use_default_records() {
    let store = KnowledgeStore::builtin();
    for topic in store.topics() {
        for tier in DifficultyTier::ALL {
            assert_ne!(store.lookup(topic, tier), store.default_records().get(tier));
        }
    }
}

#[test]
fn test_generators_are_shareable_across_threads() {
    let facade = std::sync::Arc::new(ContentFacade::builtin());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let facade = facade.clone();
            std::thread::spawn(move || {
                let tier = DifficultyTier::ALL[i % 3];
                facade.generate_all("Photosynthesis", tier)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let content = handle.join().unwrap();
        let tier = DifficultyTier::ALL[i % 3];
        assert_eq!(content, facade.generate_all("Photosynthesis", tier));
    }
}
