//! Legacy tool names.
//!
//! The first release of the server exposed Spanish tool names. They keep
//! working and resolve to the canonical English names.
//!
//! | Legacy Name | Canonical Name |
//! |-------------|----------------|
//! | frase_de_gillito | random_phrase |
//! | buscar_jerga | slang_lookup |
//! | diccionario_completo | slang_listing |
//! | dato_de_puerto_rico | random_fact |
//! | tema_de_comedia | random_topic |
//! | generar_opinion_gillito | compose_opinion |
//! | traducir_a_boricua | substitute_text |
//! | info_gillito | static_info |
//! | estado_bot | status_snapshot |

use super::names;

/// Every legacy name accepted by [`resolve_alias`].
pub const LEGACY_NAMES: &[&str] = &[
    "frase_de_gillito",
    "buscar_jerga",
    "diccionario_completo",
    "dato_de_puerto_rico",
    "tema_de_comedia",
    "generar_opinion_gillito",
    "traducir_a_boricua",
    "info_gillito",
    "estado_bot",
];

/// Resolve a tool name to its canonical form.
///
/// Names without an alias are returned unchanged.
#[inline]
pub fn resolve_alias(name: &str) -> &str {
    match name {
        "frase_de_gillito" => names::RANDOM_PHRASE,
        "buscar_jerga" => names::SLANG_LOOKUP,
        "diccionario_completo" => names::SLANG_LISTING,
        "dato_de_puerto_rico" => names::RANDOM_FACT,
        "tema_de_comedia" => names::RANDOM_TOPIC,
        "generar_opinion_gillito" => names::COMPOSE_OPINION,
        "traducir_a_boricua" => names::SUBSTITUTE_TEXT,
        "info_gillito" => names::STATIC_INFO,
        "estado_bot" => names::STATUS_SNAPSHOT,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buscar_jerga_alias() {
        assert_eq!(resolve_alias("buscar_jerga"), "slang_lookup");
    }

    #[test]
    fn test_traducir_alias() {
        assert_eq!(resolve_alias("traducir_a_boricua"), "substitute_text");
    }

    #[test]
    fn test_canonical_name_unchanged() {
        assert_eq!(resolve_alias("slang_lookup"), "slang_lookup");
        assert_eq!(resolve_alias("status_snapshot"), "status_snapshot");
    }

    #[test]
    fn test_unknown_name_unchanged() {
        assert_eq!(resolve_alias("unknown_tool"), "unknown_tool");
        assert_eq!(resolve_alias(""), "");
    }
}
