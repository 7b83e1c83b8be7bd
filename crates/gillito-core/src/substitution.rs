//! Sequential keyword substitution.
//!
//! The input is lowercased, then every rule is tried in declaration order
//! against the text as rewritten so far. A rule that fires replaces every
//! occurrence of its source. Matching is plain substring search: a short
//! source inside a longer word is rewritten too ("basurero" -> "zafacónro").

use crate::types::SubstitutionRule;

/// Outcome of a substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionResult {
    Rewritten {
        text: String,
        applied: Vec<SubstitutionRule>,
    },
    /// No rule fired. The input is deliberately not echoed back.
    NoChangeApplied,
}

/// Run one pass of `rules` over `text`.
pub fn substitute(rules: &[SubstitutionRule], text: &str) -> SubstitutionResult {
    let mut working = text.to_lowercase();
    let mut applied = Vec::new();

    for rule in rules {
        if rule.source.is_empty() || !working.contains(rule.source) {
            continue;
        }
        working = working.replace(rule.source, rule.target);
        applied.push(*rule);
    }

    if applied.is_empty() {
        SubstitutionResult::NoChangeApplied
    } else {
        SubstitutionResult::Rewritten {
            text: working,
            applied,
        }
    }
}
