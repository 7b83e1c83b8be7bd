//! Tool names as constants for dispatch matching.

// ========== CONTENT TOOLS ==========

pub const RANDOM_PHRASE: &str = "random_phrase";
pub const RANDOM_FACT: &str = "random_fact";
pub const RANDOM_TOPIC: &str = "random_topic";
pub const COMPOSE_OPINION: &str = "compose_opinion";

// ========== DICTIONARY TOOLS ==========

pub const SLANG_LOOKUP: &str = "slang_lookup";
pub const SLANG_LISTING: &str = "slang_listing";
pub const SUBSTITUTE_TEXT: &str = "substitute_text";

// ========== INFO TOOLS ==========

pub const STATIC_INFO: &str = "static_info";
pub const STATUS_SNAPSHOT: &str = "status_snapshot";
