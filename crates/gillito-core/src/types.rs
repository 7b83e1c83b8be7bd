//! Domain types for the content tables.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Difficulty/familiarity classification of a slang entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Intermediate,
    Advanced,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Intermediate, Tier::Advanced];

    /// Canonical English name, as accepted by slang_listing.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Basic => "basic",
            Tier::Intermediate => "intermediate",
            Tier::Advanced => "advanced",
        }
    }

    /// Label shown in rendered entries.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Basic => "básico",
            Tier::Intermediate => "intermedio",
            Tier::Advanced => "avanzado",
        }
    }

    /// Exact name match after normalization. Spanish labels are accepted too.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "basic" | "básico" | "basico" => Some(Tier::Basic),
            "intermediate" | "intermedio" => Some(Tier::Intermediate),
            "advanced" | "avanzado" => Some(Tier::Advanced),
            _ => None,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed slang_listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierFilter {
    All,
    Only(Tier),
}

impl TierFilter {
    /// Values suggested to callers after an empty listing.
    pub const ACCEPTED: [&'static str; 4] = ["basic", "intermediate", "advanced", "all"];

    /// Parse a caller-supplied tier. `None` means the value names no tier.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "all" | "todos" => Some(TierFilter::All),
            other => Tier::parse(other).map(TierFilter::Only),
        }
    }

    pub fn matches(self, tier: Tier) -> bool {
        match self {
            TierFilter::All => true,
            TierFilter::Only(wanted) => wanted == tier,
        }
    }
}

/// One dictionary entry. `term` is the canonical lowercase key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlangEntry {
    pub term: &'static str,
    pub definition: &'static str,
    pub example: &'static str,
    pub tier: Tier,
}

impl SlangEntry {
    pub const fn new(
        term: &'static str,
        definition: &'static str,
        example: &'static str,
        tier: Tier,
    ) -> Self {
        Self {
            term,
            definition,
            example,
            tier,
        }
    }
}

/// One-directional source -> target rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubstitutionRule {
    pub source: &'static str,
    pub target: &'static str,
}

impl SubstitutionRule {
    pub const fn new(source: &'static str, target: &'static str) -> Self {
        Self { source, target }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_parse_accepts_both_languages() {
        assert_eq!(Tier::parse("basic"), Some(Tier::Basic));
        assert_eq!(Tier::parse(" Básico "), Some(Tier::Basic));
        assert_eq!(Tier::parse("INTERMEDIO"), Some(Tier::Intermediate));
        assert_eq!(Tier::parse("advanced"), Some(Tier::Advanced));
        assert_eq!(Tier::parse("adv"), None);
        assert_eq!(Tier::parse(""), None);
    }

    #[test]
    fn test_tier_filter_parse() {
        assert_eq!(TierFilter::parse("all"), Some(TierFilter::All));
        assert_eq!(TierFilter::parse("  TODOS"), Some(TierFilter::All));
        assert_eq!(
            TierFilter::parse("avanzado"),
            Some(TierFilter::Only(Tier::Advanced))
        );
        assert_eq!(TierFilter::parse("nonexistent-tier"), None);
    }

    #[test]
    fn test_tier_filter_matches() {
        assert!(TierFilter::All.matches(Tier::Advanced));
        assert!(TierFilter::Only(Tier::Basic).matches(Tier::Basic));
        assert!(!TierFilter::Only(Tier::Basic).matches(Tier::Intermediate));
    }

    #[test]
    fn test_tier_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Tier::Intermediate).unwrap(), "\"intermediate\"");
        assert_eq!(Tier::Advanced.to_string(), "advanced");
    }
}
