use std::any::TypeId;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::value::FromToken;

/// A resolved lookup result, tagged with the type it was requested as.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    /// `type_id` keeps two enum types from answering each other's lookups.
    Enum { type_id: TypeId, bits: i64 },
}

#[derive(Debug, Clone)]
struct CachedEntry {
    key: String,
    key_hash: u64,
    value: CachedValue,
}

/// Memoized `(key, type)` results. Keys compare case-insensitively.
#[derive(Debug, Default)]
pub struct Cache {
    entries: Vec<CachedEntry>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get<T: FromToken>(&self, key: &str) -> Option<T> {
        let hash = fold_hash(key);
        self.entries
            .iter()
            .filter(|e| e.key_hash == hash && keys_equal(&e.key, key))
            .find_map(|e| T::from_cached(&e.value))
    }

    /// Store `value` unless an entry for this key and type already exists.
    pub fn insert<T: FromToken>(&mut self, key: &str, value: &T) {
        if self.get::<T>(key).is_some() {
            return;
        }
        self.entries.push(CachedEntry {
            key: key.to_string(),
            key_hash: fold_hash(key),
            value: value.to_cached(),
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Ordinal comparison after upper-case folding of each character.
pub fn keys_equal(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

// Simple case mapping: characters whose upper case expands (`ß`, `ﬁ`) stay as-is.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn fold_hash(key: &str) -> u64 {
    let mut h = DefaultHasher::new();
    for c in key.chars().map(fold_char) {
        c.hash(&mut h);
    }
    h.finish()
}
