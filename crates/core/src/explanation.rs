//! Explanation Builder
//!
//! Turns a topic record into a short Markdown explanation: a tier-specific
//! introduction, the definition, a numbered list of key concepts and a
//! tier-specific closing remark.

use crate::knowledge::KnowledgeStore;
use crate::tier::DifficultyTier;

/// Builds explanations from the records of a [`KnowledgeStore`].
#[derive(Debug, Clone, Copy)]
pub struct ExplanationBuilder<'a> {
    store: &'a KnowledgeStore,
}

impl<'a> ExplanationBuilder<'a> {
    pub fn new(store: &'a KnowledgeStore) -> Self {
        Self { store }
    }

    /// Renders the explanation for `topic` at `tier`.
    ///
    /// `topic` is echoed verbatim in the introduction and closing; only the
    /// store lookup normalizes it.
    pub fn build(&self, topic: &str, tier: DifficultyTier) -> String {
        let record = self.store.lookup(topic, tier);

        let mut explanation = format!("{}\n\n", introduction(topic, tier));
        explanation.push_str(&format!("**Definition:** {}\n\n", record.definition));
        explanation.push_str("**Key Concepts:**\n");
        for (i, point) in record.key_points.iter().enumerate() {
            explanation.push_str(&format!("{}. {}\n", i + 1, point));
        }
        explanation.push('\n');
        explanation.push_str(&closing(topic, tier));
        explanation
    }
}

fn introduction(topic: &str, tier: DifficultyTier) -> String {
    match tier {
        DifficultyTier::Beginner => format!("Let's learn about **{}** in a simple way!", topic),
        DifficultyTier::Intermediate => format!(
            "Understanding **{}** requires exploring its key mechanisms and applications.",
            topic
        ),
        DifficultyTier::Advanced => format!(
            "An advanced analysis of **{}** involves examining complex theoretical frameworks.",
            topic
        ),
    }
}

fn closing(topic: &str, tier: DifficultyTier) -> String {
    match tier {
        DifficultyTier::Beginner => format!(
            "**Remember:** {} is an important concept that you'll use as you continue learning!",
            capitalize(topic)
        ),
        DifficultyTier::Intermediate => format!(
            "**Application:** Understanding {} helps you connect theory with practical applications in the field.",
            topic
        ),
        DifficultyTier::Advanced => format!(
            "**Research Direction:** Advanced study of {} opens pathways to cutting-edge research and innovation.",
            topic
        ),
    }
}

/// Title-cases the first character of the whole string and lowercases the
/// rest, so `"quantum Entanglement"` becomes `"Quantum entanglement"` and
/// `"ßeta"` becomes `"Sseta"`.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            push_titlecase(&mut out, first);
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Appends the title-case mapping of `c`. Only digraphs, ligatures, Georgian
/// and Greek letters with a subscript iota title-case differently from their
/// upper case.
fn push_titlecase(out: &mut String, c: char) {
    let mapped = match c {
        'Ǆ' | 'ǅ' | 'ǆ' => "ǅ",
        'Ǉ' | 'ǈ' | 'ǉ' => "ǈ",
        'Ǌ' | 'ǋ' | 'ǌ' => "ǋ",
        'Ǳ' | 'ǲ' | 'ǳ' => "ǲ",
        'ß' => "Ss",
        'ﬀ' => "Ff",
        'ﬁ' => "Fi",
        'ﬂ' => "Fl",
        'ﬃ' => "Ffi",
        'ﬄ' => "Ffl",
        'ﬅ' | 'ﬆ' => "St",
        'և' => "Եւ",
        'ﬓ' => "Մն",
        'ﬔ' => "Մե",
        'ﬕ' => "Մի",
        'ﬖ' => "Վն",
        'ﬗ' => "Մխ",
        'ᾳ' | 'ᾼ' => "ᾼ",
        'ῃ' | 'ῌ' => "ῌ",
        'ῳ' | 'ῼ' => "ῼ",
        '\u{1FB2}' => "\u{1FBA}\u{0345}",
        '\u{1FB4}' => "\u{0386}\u{0345}",
        '\u{1FB7}' => "\u{0391}\u{0342}\u{0345}",
        '\u{1FC2}' => "\u{1FCA}\u{0345}",
        '\u{1FC4}' => "\u{0389}\u{0345}",
        '\u{1FC7}' => "\u{0397}\u{0342}\u{0345}",
        '\u{1FF2}' => "\u{1FFA}\u{0345}",
        '\u{1FF4}' => "\u{038F}\u{0345}",
        '\u{1FF7}' => "\u{03A9}\u{0342}\u{0345}",
        // Lowercase forms with ypogegrammeni sit 8 below their title forms.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            out.extend(char::from_u32(c as u32 + 8));
            return;
        }
        // Georgian Mkhedruli has no title form distinct from itself.
        '\u{1F88}'..='\u{1F8F}'
        | '\u{1F98}'..='\u{1F9F}'
        | '\u{1FA8}'..='\u{1FAF}'
        | '\u{10D0}'..='\u{10FA}'
        | '\u{10FD}'..='\u{10FF}' => {
            out.push(c);
            return;
        }
        _ => {
            out.extend(c.to_uppercase());
            return;
        }
    };
    out.push_str(mapped);
}
