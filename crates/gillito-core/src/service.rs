//! Query layer: the nine content operations, each answering with text.
//!
//! `ContentService` is cheap to clone and holds no mutable state, so one
//! instance is shared by every connection.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::config::ContentConfig;
use crate::content::ContentTables;
use crate::error::{CoreError, CoreResult};
use crate::generation;
use crate::lookup::Lexicon;
use crate::random::{RandomSource, ThreadRandom};
use crate::render;
use crate::substitution::substitute;

#[derive(Clone)]
pub struct ContentService {
    tables: ContentTables,
    lexicon: Lexicon,
    random: Arc<dyn RandomSource>,
    config: ContentConfig,
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService")
            .field("lexicon_len", &self.lexicon.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ContentService {
    pub fn new(tables: ContentTables, random: Arc<dyn RandomSource>, config: ContentConfig) -> Self {
        Self {
            lexicon: Lexicon::new(tables.slang),
            tables,
            random,
            config,
        }
    }

    /// Builtin tables with the thread-local random source.
    pub fn with_defaults(config: ContentConfig) -> Self {
        Self::new(ContentTables::builtin(), Arc::new(ThreadRandom), config)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn random_phrase(&self) -> CoreResult<String> {
        generation::random_phrase(&self.tables, self.random.as_ref())
            .map(render::phrase)
            .ok_or_else(|| empty_table("phrases"))
    }

    pub fn slang_lookup(&self, term: &str) -> String {
        let result = self
            .lexicon
            .lookup_with_limit(term, self.config.max_partial_matches);
        debug!(term = %term, found = result.is_found(), "slang_lookup");
        render::lookup(term, &result)
    }

    /// `None` falls back to the configured default tier.
    pub fn slang_listing(&self, tier: Option<&str>) -> String {
        let tier = tier.unwrap_or(self.config.default_tier.as_str());
        let listing = self.lexicon.list_by_tier(tier);
        debug!(tier = %tier, count = listing.len(), "slang_listing");
        render::listing(tier, &listing)
    }

    pub fn random_fact(&self) -> CoreResult<String> {
        generation::random_fact(&self.tables, self.random.as_ref())
            .map(render::fact)
            .ok_or_else(|| empty_table("facts"))
    }

    pub fn random_topic(&self) -> CoreResult<String> {
        generation::random_topic(&self.tables, self.random.as_ref())
            .map(|topic| render::topic(&topic))
            .ok_or_else(|| empty_table("topics"))
    }

    pub fn compose_opinion(&self, topic: &str) -> CoreResult<String> {
        generation::compose_opinion(&self.tables, self.random.as_ref(), topic)
            .map(|opinion| render::opinion(&opinion))
            .ok_or_else(|| empty_table("opinion templates"))
    }

    pub fn substitute_text(&self, text: &str) -> String {
        render::substitution(&substitute(self.tables.substitutions, text))
    }

    pub fn static_info(&self) -> String {
        render::static_info().to_string()
    }

    pub fn status_snapshot(&self) -> String {
        render::status_snapshot(Utc::now())
    }
}

fn empty_table(name: &str) -> CoreError {
    CoreError::Internal(format!("content table '{}' is empty", name))
}
