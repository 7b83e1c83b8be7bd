//! Text rendering of query outcomes.
//!
//! Every tool answers with a single string. The phrasing here is what MCP
//! clients see, so the wording is stable and covered by tests.

use chrono::{DateTime, Utc};

use crate::content::templates::{BIOGRAPHY, STATUS_BODY};
use crate::generation::{ComedyTopic, Opinion};
use crate::listing::Listing;
use crate::lookup::LookupResult;
use crate::substitution::SubstitutionResult;
use crate::types::{SlangEntry, TierFilter};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Format used for the status snapshot timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn phrase(phrase: &str) -> String {
    format!("🎤 Gillito dice: \"{}\"", phrase)
}

pub fn slang_entry(entry: &SlangEntry) -> String {
    format!(
        "🇵🇷 **{}**\n📖 Significado: {}\n💬 Ejemplo: \"{}\"\n📊 Nivel: {}",
        entry.term,
        entry.definition,
        entry.example,
        entry.tier.label()
    )
}

/// Render a lookup outcome. `query` is echoed as the caller typed it.
pub fn lookup(query: &str, result: &LookupResult) -> String {
    match result {
        LookupResult::Found(entry) => slang_entry(entry),
        LookupResult::PartialMatches(entries) => {
            let mut out = format!("No encontré '{}' exacto, pero mira estas:", query);
            for entry in entries {
                out.push_str(&format!("\n• **{}**: {}", entry.term, entry.definition));
            }
            out
        }
        LookupResult::NotFound => format!(
            "¡Ay bendito! No tengo '{}' en mi diccionario. \
             Puede que sea tan callejera que ni Gillito la conoce. 😅",
            query
        ),
    }
}

/// Render a listing. `tier` is the caller's filter value, trimmed.
pub fn listing(tier: &str, listing: &Listing) -> String {
    let tier = tier.trim();
    match listing {
        Listing::Entries(entries) => {
            let mut lines = vec![format!("🇵🇷 Diccionario Boricua - Nivel: {}\n", tier)];
            lines.extend(
                entries
                    .iter()
                    .map(|e| format!("• **{}** — {}", e.term, e.definition)),
            );
            lines.push(format!("\nTotal: {} palabras", entries.len()));
            lines.join("\n")
        }
        Listing::EmptyResult => {
            let (choices, last) = TierFilter::ACCEPTED.split_at(TierFilter::ACCEPTED.len() - 1);
            format!(
                "No hay palabras de nivel '{}'. Usa: {}, o {}.",
                tier,
                choices.join(", "),
                last.join("")
            )
        }
    }
}

pub fn fact(fact: &str) -> String {
    format!("🏝️ ¿Sabías que...? {}", fact)
}

pub fn topic(topic: &ComedyTopic) -> String {
    format!("🎭 Tema: {}\n💡 {}", topic.topic, topic.setup)
}

pub fn opinion(opinion: &Opinion) -> String {
    format!("🎤 {}\n\n{}\n\n{}", opinion.intro, opinion.body, opinion.closer)
}

pub fn substitution(result: &SubstitutionResult) -> String {
    match result {
        SubstitutionResult::Rewritten { text, applied } => {
            let changes: Vec<String> = applied
                .iter()
                .map(|rule| format!("  • '{}' → '{}'", rule.source, rule.target))
                .collect();
            format!(
                "🇵🇷 **Versión boricua:**\n{}\n\n**Cambios hechos:**\n{}",
                text,
                changes.join("\n")
            )
        }
        SubstitutionResult::NoChangeApplied => "Ese texto ya suena bastante normal, pero pa' darle \
             sabor boricua le faltaría un '¡Wepa!' al principio y un \
             '¿tú me entiendes?' al final. 😄"
            .to_string(),
    }
}

pub fn static_info() -> &'static str {
    BIOGRAPHY
}

pub fn status_snapshot(now: DateTime<Utc>) -> String {
    format!(
        "🤖 **Estado del Bot - Mi Pana Gillito**\n{}\n🕐 Consultado: {}\n\n{}",
        RULE,
        now.format(TIMESTAMP_FORMAT),
        STATUS_BODY
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{SLANG, SUBSTITUTIONS};
    use crate::lookup::Lexicon;
    use crate::substitution::substitute;
    use chrono::TimeZone;

    #[test]
    fn test_phrase_and_fact() {
        assert_eq!(phrase("¡Wepa!"), "🎤 Gillito dice: \"¡Wepa!\"");
        assert_eq!(fact("x"), "🏝️ ¿Sabías que...? x");
    }

    #[test]
    fn test_found_entry() {
        let lexicon = Lexicon::new(SLANG);
        let text = lookup("  CHINA ", &lexicon.lookup("  CHINA "));
        assert!(text.starts_with("🇵🇷 **china**\n📖 Significado: "));
        assert!(text.ends_with("📊 Nivel: básico"));
    }

    #[test]
    fn test_partial_matches_listed() {
        let lexicon = Lexicon::new(SLANG);
        let text = lookup("chin", &lexicon.lookup("chin"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "No encontré 'chin' exacto, pero mira estas:");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("• **bochinche**: "));
        assert!(lines[2].starts_with("• **china**: "));
    }

    #[test]
    fn test_not_found_echoes_query() {
        let text = lookup("Xyzzy", &LookupResult::NotFound);
        assert!(text.starts_with("¡Ay bendito! No tengo 'Xyzzy' en mi diccionario."));
    }

    #[test]
    fn test_listing_layout() {
        let lexicon = Lexicon::new(SLANG);
        let text = listing(" advanced ", &lexicon.list_by_tier("advanced"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "🇵🇷 Diccionario Boricua - Nivel: advanced");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("• **cafre** — "));
        assert_eq!(lines.last().copied(), Some("Total: 3 palabras"));
    }

    #[test]
    fn test_empty_listing_suggests_tiers() {
        assert_eq!(
            listing("legendario", &Listing::EmptyResult),
            "No hay palabras de nivel 'legendario'. Usa: basic, intermediate, advanced, o all."
        );
        assert!(listing("  legendario ", &Listing::EmptyResult).contains("nivel 'legendario'."));
    }

    #[test]
    fn test_substitution_changes_listed() {
        let text = substitution(&substitute(SUBSTITUTIONS, "mi amigo no tiene dinero"));
        assert_eq!(
            text,
            "🇵🇷 **Versión boricua:**\nmi pana no tiene chavos\n\n**Cambios hechos:**\n  \
             • 'dinero' → 'chavos'\n  • 'amigo' → 'pana'"
        );
    }

    #[test]
    fn test_no_change_message_does_not_echo_input() {
        let text = substitution(&SubstitutionResult::NoChangeApplied);
        assert!(text.starts_with("Ese texto ya suena bastante normal"));
    }

    #[test]
    fn test_topic_and_opinion_layout() {
        let topic = ComedyTopic {
            topic: "la LUMA",
            setup: "setup".to_string(),
        };
        assert_eq!(super::topic(&topic), "🎭 Tema: la LUMA\n💡 setup");

        let opinion = Opinion {
            intro: "intro".to_string(),
            body: "[body]",
            closer: "closer",
        };
        assert_eq!(super::opinion(&opinion), "🎤 intro\n\n[body]\n\ncloser");
    }

    #[test]
    fn test_status_snapshot_timestamp() {
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 59).single().expect("valid date");
        let text = status_snapshot(now);
        assert!(text.starts_with("🤖 **Estado del Bot - Mi Pana Gillito**\n"));
        assert!(text.contains("\n🕐 Consultado: 2024-03-09 07:05 UTC\n\n**Plataformas activas:**"));
        assert!(text.ends_with("🏝️ Cultura y humor boricua"));
    }

    #[test]
    fn test_static_info_is_biography() {
        assert!(static_info().starts_with("🎤 **Gilberto de Jesús Casas"));
    }
}
