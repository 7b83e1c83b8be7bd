//! Tier-filtered dictionary listing.

use crate::lookup::Lexicon;
use crate::types::{SlangEntry, TierFilter};

/// Outcome of a listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// Matching entries, sorted ascending by canonical term.
    Entries(Vec<&'static SlangEntry>),
    /// Nothing matched, including tier names that match no tier at all.
    EmptyResult,
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Listing::Entries(entries) => entries.len(),
            Listing::EmptyResult => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Lexicon {
    /// List entries of the given tier, or every entry for the wildcard.
    ///
    /// An unrecognized tier is not an error: it simply matches nothing.
    pub fn list_by_tier(&self, tier: &str) -> Listing {
        let Some(filter) = TierFilter::parse(tier) else {
            return Listing::EmptyResult;
        };
        self.list(filter)
    }

    /// List entries matching an already parsed filter.
    pub fn list(&self, filter: TierFilter) -> Listing {
        let mut entries: Vec<&'static SlangEntry> = self
            .entries()
            .iter()
            .filter(|e| filter.matches(e.tier))
            .collect();

        if entries.is_empty() {
            return Listing::EmptyResult;
        }

        entries.sort_by(|a, b| a.term.cmp(b.term));
        Listing::Entries(entries)
    }
}
