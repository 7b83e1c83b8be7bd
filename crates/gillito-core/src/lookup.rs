//! Slang dictionary lookup.
//!
//! Resolution order:
//! 1. Exact match on the canonical term.
//! 2. Partial match: the query contains the term or the term contains the
//!    query. Candidates keep table-declaration order and are capped.
//! 3. Nothing.

use crate::types::SlangEntry;

/// Default cap on partial-match candidates.
pub const MAX_PARTIAL_MATCHES: usize = 3;

/// Outcome of a dictionary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    Found(&'static SlangEntry),
    PartialMatches(Vec<&'static SlangEntry>),
    NotFound,
}

impl LookupResult {
    pub fn is_found(&self) -> bool {
        matches!(self, LookupResult::Found(_))
    }
}

/// Canonical form used for all matching: trimmed and lowercased.
pub fn normalize(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Read-only view over a slang table.
#[derive(Debug, Clone, Copy)]
pub struct Lexicon {
    entries: &'static [SlangEntry],
}

impl Lexicon {
    pub fn new(entries: &'static [SlangEntry]) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &'static [SlangEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up `query` with the default partial-match cap.
    pub fn lookup(&self, query: &str) -> LookupResult {
        self.lookup_with_limit(query, MAX_PARTIAL_MATCHES)
    }

    /// Look up `query`, returning at most `limit` partial matches.
    pub fn lookup_with_limit(&self, query: &str, limit: usize) -> LookupResult {
        let needle = normalize(query);

        if let Some(entry) = self.entries.iter().find(|e| e.term == needle) {
            return LookupResult::Found(entry);
        }

        let candidates: Vec<&'static SlangEntry> = self
            .entries
            .iter()
            .filter(|e| e.term.contains(needle.as_str()) || needle.contains(e.term))
            .take(limit)
            .collect();

        if candidates.is_empty() {
            LookupResult::NotFound
        } else {
            LookupResult::PartialMatches(candidates)
        }
    }
}
