// core/src/dictionary.rs
//
// Caller-owned lookup tables consumed by the ranking pipeline: the
// romanization dictionary (key -> output tokens) and the optional per-key
// priority table. Both are read-only for the duration of a query; the
// engine never mutates them.

use ahash::AHashMap;
use anyhow::Context;
use std::collections::HashMap;
use std::path::Path;

/// Maps a romanization key (full or partial pinyin spelling, e.g. "nihao")
/// to an ordered list of output tokens (characters or phrases).
///
/// Keys are unique; tokens keep their stored order through flattening, so
/// the order of insertion is meaningful.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    map: AHashMap<String, Vec<String>>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    /// Append a single token under `key`, creating the entry if needed.
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, token: V) {
        self.map.entry(key.into()).or_default().push(token.into());
    }

    /// Replace the token list stored under `key`.
    pub fn insert_entry<K: Into<String>>(&mut self, key: K, tokens: Vec<String>) {
        self.map.insert(key.into(), tokens);
    }

    /// Tokens stored under `key`, in their original order.
    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.map.get(key).map(|v| v.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Iterate over all keys. Iteration order is unspecified; the ranking
    /// pipeline imposes a total order downstream.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Load a dictionary from a JSON object of the shape
    /// `{"ni": ["你", "尼"], "nihao": ["你好"]}`.
    pub fn load_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read dictionary {}", path.display()))?;
        Self::from_json_str(&content)
    }

    /// Parse a dictionary from a JSON string (see [`Dictionary::load_json`]).
    pub fn from_json_str(content: &str) -> anyhow::Result<Self> {
        let raw: HashMap<String, Vec<String>> =
            serde_json::from_str(content).context("parse dictionary JSON")?;
        let mut dict = Self::new();
        for (key, tokens) in raw {
            dict.insert_entry(key, tokens);
        }
        Ok(dict)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (key, token) in iter {
            dict.insert(key, token);
        }
        dict
    }
}

/// Per-key tie-break boost applied within a ranking tier. Absent keys
/// default to priority 0; higher sorts earlier.
#[derive(Debug, Clone, Default)]
pub struct KeyPriority {
    map: AHashMap<String, i64>,
}

impl KeyPriority {
    pub fn new() -> Self {
        Self {
            map: AHashMap::new(),
        }
    }

    /// Set the priority of `key` outright.
    pub fn set<K: Into<String>>(&mut self, key: K, priority: i64) {
        self.map.insert(key.into(), priority);
    }

    /// Add `delta` to the priority of `key` (from 0 if unset).
    pub fn boost<K: Into<String>>(&mut self, key: K, delta: i64) {
        *self.map.entry(key.into()).or_insert(0) += delta;
    }

    /// Priority of `key`, 0 when unset.
    pub fn get(&self, key: &str) -> i64 {
        self.map.get(key).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
