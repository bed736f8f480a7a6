//! Date pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::ast::DatePattern;

/// Global cache for parsed date patterns.
static CACHE: Mutex<Option<LruCache<String, DatePattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(64) {
    Some(size) => size,
    None => panic!("cache size must be non-zero"),
};

/// Get or parse a date pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> DatePattern {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(pattern) {
        return parsed.clone();
    }

    tracing::trace!(pattern, "date pattern cache miss");
    let parsed = DatePattern::parse(pattern);
    cache.put(pattern.to_string(), parsed.clone());
    parsed
}
