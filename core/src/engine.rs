// core/src/engine.rs
//
// Cached front-end over the ranking pipeline. The pipeline itself is a
// pure function; this struct owns what a real caller threads through it
// on every keystroke: the character dictionary, an optional phrase
// dictionary, the priority table, and a bounded per-query result cache.

use std::cell::RefCell;
use std::num::NonZeroUsize;

use crate::candidates::{get_candidates, MatchOptions};
use crate::dictionary::{Dictionary, KeyPriority};
use crate::Config;

/// Candidate engine combining a character dictionary and an optional
/// phrase dictionary behind an LRU query cache.
///
/// Lookup merges both dictionaries' ranked results into capped pools with
/// cross-pool deduplication. When the query is an exact character-dict key
/// the character pool leads; otherwise phrases lead, so multi-syllable
/// input surfaces whole phrases before per-character fallbacks.
pub struct Engine {
    chars: Dictionary,
    phrases: Option<Dictionary>,
    priority: KeyPriority,
    config: Config,
    cache: RefCell<lru::LruCache<String, Vec<String>>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl Engine {
    /// Create an engine over a character dictionary.
    pub fn new(chars: Dictionary, config: Config) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            chars,
            phrases: None,
            priority: KeyPriority::new(),
            config,
            cache: RefCell::new(lru::LruCache::new(capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    /// Attach a phrase dictionary merged into every lookup.
    pub fn with_phrases(mut self, phrases: Dictionary) -> Self {
        self.phrases = Some(phrases);
        self
    }

    /// Replace the per-key priority table. Clears the cache: cached
    /// results were ranked under the old priorities.
    pub fn set_priority(&mut self, priority: KeyPriority) {
        self.priority = priority;
        self.clear_cache();
    }

    /// Bump one key's priority, e.g. after the user picks its candidate.
    /// Clears the cache for the same reason as [`Engine::set_priority`].
    pub fn boost(&mut self, key: &str, delta: i64) {
        self.priority.boost(key, delta);
        self.clear_cache();
    }

    /// Ranked, deduplicated candidates for `query`.
    ///
    /// Empty queries yield an empty list without touching the cache. When
    /// nothing matches and `Config::echo_unmatched` is set, the raw query
    /// itself is returned as the sole candidate so the caller always has
    /// something to commit.
    pub fn lookup(&self, query: &str) -> Vec<String> {
        if query.is_empty() {
            return Vec::new();
        }

        if let Some(cached) = self.cache.borrow_mut().get(query) {
            *self.cache_hits.borrow_mut() += 1;
            tracing::debug!(query, "candidate cache hit");
            return cached.clone();
        }
        *self.cache_misses.borrow_mut() += 1;

        let opts = MatchOptions {
            key_priority: Some(&self.priority),
            limit: self.config.max_results,
        };
        let char_matches = get_candidates(query, &self.chars, &opts);
        let phrase_matches = self
            .phrases
            .as_ref()
            .map(|dict| get_candidates(query, dict, &opts))
            .unwrap_or_default();

        let mut out: Vec<String> = Vec::new();
        let mut seen: ahash::AHashSet<String> = ahash::AHashSet::new();
        let pool_limit = self.config.pool_limit;
        let max_results = self.config.max_results;
        let mut push_pool = |pool: Vec<String>| {
            let mut taken = 0;
            for token in pool {
                if taken >= pool_limit || out.len() >= max_results {
                    break;
                }
                if seen.insert(token.clone()) {
                    out.push(token);
                    taken += 1;
                }
            }
        };

        if self.chars.contains_key(query) {
            push_pool(char_matches);
            push_pool(phrase_matches);
        } else {
            push_pool(phrase_matches);
            push_pool(char_matches);
        }

        if out.is_empty() && self.config.echo_unmatched {
            out.push(query.to_string());
        }

        tracing::debug!(query, results = out.len(), "candidate lookup");
        self.cache.borrow_mut().put(query.to_string(), out.clone());
        out
    }

    /// Cache accesses so far as a `(hits, misses)` pair.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }

    /// Number of cached queries.
    pub fn cache_size(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Maximum number of cached queries.
    pub fn cache_capacity(&self) -> usize {
        self.cache.borrow().cap().get()
    }

    /// Drop all cached results and reset the hit/miss counters.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
        *self.cache_hits.borrow_mut() = 0;
        *self.cache_misses.borrow_mut() = 0;
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_engine() -> Engine {
        let mut chars = Dictionary::new();
        chars.insert_entry("ni", vec!["你".into()]);
        chars.insert_entry("hao", vec!["好".into()]);
        let mut phrases = Dictionary::new();
        phrases.insert_entry("nihao", vec!["你好".into()]);
        Engine::new(chars, Config::default()).with_phrases(phrases)
    }

    #[test]
    fn exact_char_key_leads_with_characters() {
        let engine = demo_engine();
        let out = engine.lookup("ni");
        assert_eq!(out[0], "你");
        assert!(out.contains(&"你好".to_string()));
    }

    #[test]
    fn phrase_pool_leads_without_exact_char_key() {
        let engine = demo_engine();
        let out = engine.lookup("nihao");
        assert_eq!(out[0], "你好");
    }

    #[test]
    fn unmatched_query_echoes_back() {
        let engine = demo_engine();
        assert_eq!(engine.lookup("xyz"), vec!["xyz".to_string()]);

        let mut config = Config::default();
        config.echo_unmatched = false;
        let silent = Engine::new(Dictionary::new(), config);
        assert!(silent.lookup("xyz").is_empty());
    }

    #[test]
    fn boost_reorders_and_invalidates_cache() {
        let mut chars = Dictionary::new();
        chars.insert_entry("haode", vec!["好的".into()]);
        chars.insert_entry("haoma", vec!["号码".into()]);
        let mut engine = Engine::new(chars, Config::default());

        assert_eq!(engine.lookup("hao")[0], "好的");
        assert_eq!(engine.cache_size(), 1);

        engine.boost("haoma", 5);
        assert_eq!(engine.cache_size(), 0);
        assert_eq!(engine.lookup("hao")[0], "号码");
    }

    #[test]
    fn pool_limit_caps_each_dictionary() {
        let mut chars = Dictionary::new();
        let mut phrases = Dictionary::new();
        for i in 0..10 {
            chars.insert_entry(format!("ba{i}"), vec![format!("c{i}")]);
            phrases.insert_entry(format!("bo{i}"), vec![format!("p{i}")]);
        }
        let mut config = Config::default();
        config.pool_limit = 3;
        let engine = Engine::new(chars, config).with_phrases(phrases);

        let out = engine.lookup("b");
        assert_eq!(out.len(), 6);
    }
}
