//! pinmatch-core
//!
//! Fuzzy candidate matching for boundary-free pinyin input: turn a partial
//! romanization buffer ("nih", "nh", "zg") into a ranked list of dictionary
//! entries without requiring syllable separators.
//!
//! Two small algorithms feed one ranking pipeline:
//! - `initialism` infers syllable-start letters inside an unsegmented
//!   string, recovering the abbreviation a typist would use.
//! - `subsequence` tests ordered (non-contiguous) containment and scores
//!   how spread out the match is.
//! - `candidates::get_candidates` runs exact / prefix / initialism /
//!   subsequence passes in strict tier order, sorts within tiers and
//!   flattens matched keys into a deduplicated token list. It is a pure
//!   function: identical inputs always produce identical output.
//!
//! `Engine` wraps the pipeline with what a keystroke-driven caller needs:
//! char + phrase dictionaries, a priority table, and a bounded LRU cache
//! keyed by query string.
//!
//! Public API:
//! - `get_candidates` / `MatchOptions` - the ranking pipeline
//! - `Dictionary` / `KeyPriority` - caller-owned lookup tables
//! - `Engine` - cached dual-dictionary front-end
//! - `CandidateList` - paged view for UIs
//! - `Config` - tunables with TOML round-trip

use serde::{Deserialize, Serialize};

pub mod initialism;
pub use initialism::{initialism, is_vowel};

pub mod subsequence;
pub use subsequence::{subsequence_info, SubsequenceInfo};

pub mod candidates;
pub use candidates::{get_candidates, MatchOptions, MatchTier, DEFAULT_RESULT_LIMIT};

pub mod dictionary;
pub use dictionary::{Dictionary, KeyPriority};

pub mod engine;
pub use engine::Engine;

pub mod candidate;
pub use candidate::CandidateList;

/// Default bound on the engine's per-query result cache.
pub const DEFAULT_CACHE_SIZE: usize = 500;

/// Engine configuration.
///
/// Scoring weights are deliberately not configurable: changing them would
/// change ranked output for existing callers (see `candidates` constants).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Cap on the flattened result list per dictionary.
    pub max_results: usize,

    /// Cap on each dictionary's contribution when the engine merges the
    /// character and phrase pools.
    pub pool_limit: usize,

    /// Maximum number of entries in the query -> candidates cache.
    pub max_cache_size: usize,

    /// Candidates per UI page.
    pub page_size: usize,

    /// Return the raw query as the sole candidate when nothing matches,
    /// so the caller always has something to commit.
    pub echo_unmatched: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_results: DEFAULT_RESULT_LIMIT,
            pool_limit: 50,
            max_cache_size: DEFAULT_CACHE_SIZE,
            page_size: 9,
            echo_unmatched: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Load configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
