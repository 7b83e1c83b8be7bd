//! Static content tables.
//!
//! All tables are `&'static` literals, built into the binary and never
//! mutated. `ContentTables` bundles references to them so the query layer
//! can be handed an alternative set in tests.

mod phrases;
mod slang;
mod substitutions;
pub mod templates;

pub use phrases::{FACTS, PHRASES, TOPICS};
pub use slang::SLANG;
pub use substitutions::SUBSTITUTIONS;

use crate::types::{SlangEntry, SubstitutionRule};

/// Read-only view over every table the query operations use.
#[derive(Debug, Clone, Copy)]
pub struct ContentTables {
    pub phrases: &'static [&'static str],
    pub slang: &'static [SlangEntry],
    pub facts: &'static [&'static str],
    pub topics: &'static [&'static str],
    pub topic_setups: &'static [&'static str],
    pub opinion_intros: &'static [&'static str],
    pub opinion_closers: &'static [&'static str],
    pub substitutions: &'static [SubstitutionRule],
}

impl ContentTables {
    /// The tables shipped with the server.
    pub fn builtin() -> Self {
        Self {
            phrases: PHRASES,
            slang: SLANG,
            facts: FACTS,
            topics: TOPICS,
            topic_setups: templates::TOPIC_SETUPS,
            opinion_intros: templates::OPINION_INTROS,
            opinion_closers: templates::OPINION_CLOSERS,
            substitutions: SUBSTITUTIONS,
        }
    }
}

impl Default for ContentTables {
    fn default() -> Self {
        Self::builtin()
    }
}
