//! Mi Pana Gillito core library
//!
//! Static Puerto Rican slang and trivia tables, and the query operations
//! served over them.
//!
//! # Architecture
//!
//! This crate defines:
//! - Content tables (`content`), immutable and built into the binary
//! - The lookup, listing and substitution engines
//! - Random picks through an injectable `RandomSource`
//! - Text rendering of every query outcome
//! - `ContentService`, the query layer used by the MCP server
//! - Error types and configuration
//!
//! # Example
//!
//! ```
//! use gillito_core::content::SLANG;
//! use gillito_core::{Lexicon, LookupResult};
//!
//! let lexicon = Lexicon::new(SLANG);
//! assert!(matches!(lexicon.lookup("  Wepa "), LookupResult::Found(_)));
//! ```

pub mod config;
pub mod content;
pub mod error;
pub mod generation;
pub mod listing;
pub mod lookup;
pub mod random;
pub mod render;
pub mod service;
pub mod substitution;
pub mod types;

// Re-exports for convenience
pub use config::Config;
pub use content::ContentTables;
pub use error::{CoreError, CoreResult};
pub use listing::Listing;
pub use lookup::{Lexicon, LookupResult};
pub use random::{RandomSource, ThreadRandom};
pub use service::ContentService;
pub use substitution::{substitute, SubstitutionResult};
pub use types::{SlangEntry, SubstitutionRule, Tier, TierFilter};
