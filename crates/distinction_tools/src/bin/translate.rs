//! Dual-vocabulary structural-equivalence demo.
//!
//! Two independent engines build the same concept topology under different
//! symbolic labels. Because identifiers are content-derived, identical
//! structures produce identical identifiers regardless of labels, so the
//! overlap of the two vocabularies is a zero-shot translation dictionary —
//! no graph traversal required.

use distinction_core::Engine;
use distinction_data::{Distinction, DistinctionId};
use std::collections::HashMap;

/// One symbolic system: an engine plus a label for every distinction it has
/// named so far.
struct Vocabulary {
    language: &'static str,
    engine: Engine,
    labels: HashMap<DistinctionId, String>,
    concepts: HashMap<String, DistinctionId>,
}

impl Vocabulary {
    fn new(language: &'static str, zero: &str, one: &str) -> Self {
        let engine = Engine::new();
        let d0 = engine.d0().id.clone();
        let d1 = engine.d1().id.clone();
        let mut vocabulary = Self {
            language,
            engine,
            labels: HashMap::new(),
            concepts: HashMap::new(),
        };
        vocabulary.label(d0, zero);
        vocabulary.label(d1, one);
        vocabulary
    }

    fn label(&mut self, id: DistinctionId, word: &str) {
        self.labels.insert(id.clone(), word.to_string());
        self.concepts.insert(word.to_string(), id);
    }

    /// Synthesizes two labeled concepts and names the result.
    fn ponder(&mut self, a: &str, b: &str, word: &str) -> anyhow::Result<Distinction> {
        let id_a = self
            .concepts
            .get(a)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown concept: {a}"))?;
        let id_b = self
            .concepts
            .get(b)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("unknown concept: {b}"))?;
        let distinction = self.engine.synthesize(&id_a, &id_b)?;
        println!("[{}] '{}' + '{}' -> '{}'", self.language, a, b, word);
        self.label(distinction.id.clone(), word);
        Ok(distinction)
    }
}

fn main() -> anyhow::Result<()> {
    println!("Dual-Vocabulary Topology Experiment");
    println!("{}", "=".repeat(60));

    let mut english = Vocabulary::new("ENGLISH", "Void", "Energy");
    let mut japanese = Vocabulary::new("JAPANESE", "無", "気");

    println!("\nEnglish conceptualization:");
    english.ponder("Void", "Energy", "Existence")?;
    english.ponder("Existence", "Void", "Stasis")?;
    english.ponder("Existence", "Energy", "Flux")?;
    english.ponder("Stasis", "Flux", "Nature")?;

    println!("\nJapanese conceptualization:");
    japanese.ponder("無", "気", "存在")?;
    japanese.ponder("存在", "無", "静")?;
    japanese.ponder("存在", "気", "動")?;
    japanese.ponder("静", "動", "自然")?;

    println!("\nTopological mapping:");
    println!("{}", "-".repeat(60));
    println!("{:<20} | {:<15} | {:<15}", "IDENTIFIER", "ENGLISH", "JAPANESE");
    println!("{}", "-".repeat(60));

    let mut matches = 0;
    for (id, english_word) in &english.labels {
        if let Some(japanese_word) = japanese.labels.get(id) {
            println!(
                "{:<20} | {:<15} | {:<15}",
                format!("{}...", id.short()),
                english_word,
                japanese_word
            );
            matches += 1;
        }
    }

    println!("{}", "-".repeat(60));
    if matches == english.labels.len() {
        println!("Translation accuracy: 100%");
        println!("Semantic mapping achieved via structural identity.");
    } else {
        println!(
            "Translation incomplete: {matches}/{} matches.",
            english.labels.len()
        );
    }

    Ok(())
}
