// core/src/candidates.rs
//
// The ranking pipeline: classify dictionary keys into four mutually
// exclusive match tiers, score and sort them, then flatten matched keys
// into a deduplicated token list.
//
// Tier order is a strict priority band: exact < prefix < initialism <
// subsequence. A key belongs to at most one tier; the first pass to claim
// it is authoritative and later passes skip it. For a fixed dictionary,
// priority table and query the output is fully deterministic: the sort key
// (tier, priority, score, key) is a total order over distinct keys.

use crate::dictionary::{Dictionary, KeyPriority};
use crate::initialism::{initialism, is_vowel};
use crate::subsequence::subsequence_info;

/// Flat cost added when the key's initialism merely starts with the query
/// instead of equalling it.
pub const PARTIAL_INITIALISM_PENALTY: u32 = 200;
/// Cost per syllable the key's initialism implies beyond the query.
pub const EXTRA_SYLLABLE_PENALTY: u32 = 50;
/// Per-unit cost of the distance a subsequence match spreads across.
pub const SPAN_WEIGHT: u32 = 120;
/// Per-unit cost of characters interposed inside a subsequence match.
pub const GAP_WEIGHT: u32 = 20;

/// Default cap on the flattened result list.
pub const DEFAULT_RESULT_LIMIT: usize = 100;

/// Pure-consonant queries of this length range are treated as
/// abbreviation-style input and unlock the initialism and subsequence
/// tiers. Shorter runs are too ambiguous, longer ones are almost
/// certainly spelled-out syllables with a typo.
const ABBREV_QUERY_LEN: std::ops::RangeInclusive<usize> = 2..=4;

/// The four match strategies, in ranking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Key equals the query.
    Exact,
    /// Key starts with the query.
    Prefix,
    /// Key's initialism starts with the (pure-consonant) query.
    Initialism,
    /// Query is an ordered subsequence of the key, anchored at index 0.
    Subsequence,
}

/// One dictionary key claimed by a tier during a single query evaluation.
#[derive(Debug, Clone)]
struct RankedKey<'a> {
    key: &'a str,
    tier: MatchTier,
    score: u32,
    priority: i64,
}

/// Per-call knobs for [`get_candidates`].
#[derive(Debug, Clone, Copy)]
pub struct MatchOptions<'a> {
    /// Tie-break boost per key, applied within a tier. `None` means every
    /// key has priority 0.
    pub key_priority: Option<&'a KeyPriority>,
    /// Cap on the flattened result list.
    pub limit: usize,
}

impl Default for MatchOptions<'_> {
    fn default() -> Self {
        Self {
            key_priority: None,
            limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

/// Rank dictionary entries against a boundary-free query and return their
/// output tokens, best match first, deduplicated by token value.
///
/// An empty query (or a zero limit) yields an empty result with no work
/// performed. An unmatched query yields an empty result; fallback display
/// is the caller's concern.
pub fn get_candidates(query: &str, dict: &Dictionary, options: &MatchOptions) -> Vec<String> {
    if options.limit == 0 {
        return Vec::new();
    }
    // Empty query: nothing to do.
    let Some(query_first) = query.chars().next() else {
        return Vec::new();
    };
    let query_len = query.chars().count();

    let is_initial_query = !query.chars().any(is_vowel);
    let allow_abbrev = is_initial_query && ABBREV_QUERY_LEN.contains(&query_len);

    let priority_of = |key: &str| options.key_priority.map_or(0, |p| p.get(key));

    let mut ranked: Vec<RankedKey> = Vec::new();

    if dict.contains_key(query) {
        ranked.push(RankedKey {
            key: query,
            tier: MatchTier::Exact,
            score: 0,
            priority: priority_of(query),
        });
    }

    for key in dict.keys() {
        if key == query || !key.starts_with(query_first) {
            continue;
        }
        if key.starts_with(query) {
            ranked.push(RankedKey {
                key,
                tier: MatchTier::Prefix,
                score: key.chars().count() as u32,
                priority: priority_of(key),
            });
        }
    }

    if allow_abbrev {
        for key in dict.keys() {
            if key == query || !key.starts_with(query_first) || key.starts_with(query) {
                continue;
            }
            let initials = initialism(key);
            if initials.starts_with(query) {
                let extra = initials.chars().count().saturating_sub(query_len) as u32;
                let base = if initials == query {
                    0
                } else {
                    PARTIAL_INITIALISM_PENALTY
                };
                ranked.push(RankedKey {
                    key,
                    tier: MatchTier::Initialism,
                    score: base + EXTRA_SYLLABLE_PENALTY * extra + key.chars().count() as u32,
                    priority: priority_of(key),
                });
            }
        }

        for key in dict.keys() {
            if key == query || !key.starts_with(query_first) || key.starts_with(query) {
                continue;
            }
            // Keys whose initials line up were already claimed above.
            if initialism(key).starts_with(query) {
                continue;
            }
            let Some(info) = subsequence_info(query, key) else {
                continue;
            };
            if info.first_index != 0 {
                continue;
            }
            ranked.push(RankedKey {
                key,
                tier: MatchTier::Subsequence,
                score: SPAN_WEIGHT * info.span as u32
                    + GAP_WEIGHT * info.gap_cost as u32
                    + key.chars().count() as u32,
                priority: priority_of(key),
            });
        }
    }

    ranked.sort_by(|a, b| {
        a.tier
            .cmp(&b.tier)
            .then_with(|| b.priority.cmp(&a.priority))
            .then_with(|| a.score.cmp(&b.score))
            .then_with(|| a.key.cmp(b.key))
    });

    tracing::trace!(query, ranked = ranked.len(), "ranked dictionary keys");

    let mut seen: ahash::AHashSet<&str> = ahash::AHashSet::new();
    let mut out: Vec<String> = Vec::new();
    'flatten: for item in &ranked {
        let Some(tokens) = dict.lookup(item.key) else {
            continue;
        };
        for token in tokens {
            if !seen.insert(token.as_str()) {
                continue;
            }
            out.push(token.clone());
            if out.len() >= options.limit {
                break 'flatten;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_dict() -> Dictionary {
        let mut dict = Dictionary::new();
        dict.insert_entry("ni", vec!["你".into()]);
        dict.insert_entry("nihao", vec!["你好".into()]);
        dict.insert_entry("nide", vec!["你的".into()]);
        dict.insert_entry("hao", vec!["好".into()]);
        dict.insert_entry("zhongguo", vec!["中国".into()]);
        dict.insert_entry("zhang", vec!["张".into()]);
        dict
    }

    #[test]
    fn empty_query_yields_empty_result() {
        let dict = demo_dict();
        assert!(get_candidates("", &dict, &MatchOptions::default()).is_empty());
    }

    #[test]
    fn exact_match_comes_first() {
        let dict = demo_dict();
        let out = get_candidates("ni", &dict, &MatchOptions::default());
        assert_eq!(out[0], "你");
        // Prefix completions follow, shorter key first.
        assert_eq!(out[1], "你的");
        assert_eq!(out[2], "你好");
    }

    #[test]
    fn initialism_query_matches_abbreviated_key() {
        let dict = demo_dict();
        let out = get_candidates("nh", &dict, &MatchOptions::default());
        assert_eq!(out, vec!["你好".to_string()]);
    }

    #[test]
    fn subsequence_tier_catches_misaligned_initials() {
        // initialism("zhongguo") is "zngg", which does not start with
        // "zg", so the key is only reachable through the subsequence tier.
        // "zhang" matches the same way with an equal span; its shorter
        // key length ranks it first.
        let dict = demo_dict();
        let out = get_candidates("zg", &dict, &MatchOptions::default());
        assert_eq!(out, vec!["张".to_string(), "中国".to_string()]);
    }

    #[test]
    fn vowel_bearing_abbreviation_never_reaches_lower_tiers() {
        // "ih" occurs in order inside "nihao" but contains a vowel, so the
        // abbreviation tiers stay off; it is no prefix either.
        let dict = demo_dict();
        assert!(get_candidates("ih", &dict, &MatchOptions::default()).is_empty());
    }

    #[test]
    fn single_letter_query_skips_abbreviation_tiers() {
        let mut dict = Dictionary::new();
        dict.insert_entry("zhongguo", vec!["中国".into()]);
        // "z" is a pure-consonant query but below the length window; only
        // exact and prefix apply, and "zhongguo" is a prefix match anyway.
        let out = get_candidates("z", &dict, &MatchOptions::default());
        assert_eq!(out, vec!["中国".to_string()]);

        // A single consonant that prefixes nothing misses entirely, even
        // though "h" is an anchored subsequence of "hao".
        let mut dict = Dictionary::new();
        dict.insert_entry("hao", vec!["好".into()]);
        assert!(get_candidates("g", &dict, &MatchOptions::default()).is_empty());
    }

    #[test]
    fn vowel_query_never_uses_abbreviation_tiers() {
        let mut dict = Dictionary::new();
        dict.insert_entry("nahong", vec!["纳红".into()]);
        // "na" is a prefix hit; "nh"-style abbreviation logic must not run
        // for "no" (contains a vowel, matches nothing as a prefix).
        assert!(get_candidates("no", &dict, &MatchOptions::default()).is_empty());
    }

    #[test]
    fn priority_breaks_ties_within_a_tier() {
        let mut dict = Dictionary::new();
        dict.insert_entry("haoma", vec!["号码".into()]);
        dict.insert_entry("haode", vec!["好的".into()]);

        // Same tier (prefix) and same score (key length 5): lexicographic
        // order puts 好的 first.
        let out = get_candidates("hao", &dict, &MatchOptions::default());
        assert_eq!(out, vec!["好的".to_string(), "号码".to_string()]);

        // A boosted key overrides the lexicographic tie-break.
        let mut prio = KeyPriority::new();
        prio.set("haoma", 10);
        let opts = MatchOptions {
            key_priority: Some(&prio),
            ..Default::default()
        };
        let out = get_candidates("hao", &dict, &opts);
        assert_eq!(out, vec!["号码".to_string(), "好的".to_string()]);
    }

    #[test]
    fn tokens_are_deduplicated_across_keys() {
        let mut dict = Dictionary::new();
        dict.insert_entry("hao", vec!["好".into()]);
        dict.insert_entry("haode", vec!["好".into(), "好的".into()]);
        let out = get_candidates("hao", &dict, &MatchOptions::default());
        assert_eq!(out, vec!["好".to_string(), "好的".to_string()]);
    }

    #[test]
    fn limit_caps_the_flattened_output() {
        let mut dict = Dictionary::new();
        for i in 0..20 {
            dict.insert_entry(format!("ka{i:02}"), vec![format!("tok{i:02}")]);
        }
        let opts = MatchOptions {
            limit: 5,
            ..Default::default()
        };
        let out = get_candidates("ka", &dict, &opts);
        assert_eq!(out.len(), 5);
        // Keys share a tier and score; lexicographic order decides.
        assert_eq!(out[0], "tok00");
        assert_eq!(out[4], "tok04");
    }

    #[test]
    fn zero_limit_short_circuits() {
        let dict = demo_dict();
        assert!(get_candidates("ni", &dict, &MatchOptions { limit: 0, ..Default::default() })
            .is_empty());
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let dict = demo_dict();
        let first = get_candidates("nh", &dict, &MatchOptions::default());
        for _ in 0..10 {
            assert_eq!(get_candidates("nh", &dict, &MatchOptions::default()), first);
        }
    }
}
