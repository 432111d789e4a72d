//! 分析结果缓存
//!
//! 分析是输入的纯函数，相同表达式的结果可以在线程间共享

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crossbeam_utils::CachePadded;
use dashmap::DashMap;
use tracing::trace;

use crate::analyzer::{analyze, Analysis};
use crate::config::LexerConfig;
use crate::error::LexResult;

/// 共享的分析结果
pub type SharedResult = Arc<LexResult<Analysis>>;

/// 缓存统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

/// 并发缓存，绑定一份 LexerConfig
pub struct AnalysisCache {
    config: LexerConfig,
    entries: DashMap<String, SharedResult>,
    hits: CachePadded<AtomicUsize>,
    misses: CachePadded<AtomicUsize>,
}

impl AnalysisCache {
    pub fn new(config: LexerConfig) -> Self {
        Self {
            config,
            entries: DashMap::new(),
            hits: CachePadded::new(AtomicUsize::new(0)),
            misses: CachePadded::new(AtomicUsize::new(0)),
        }
    }

    /// 取缓存结果，没有则分析并写入
    pub fn get_or_analyze(&self, source: &str) -> SharedResult {
        if let Some(entry) = self.entries.get(source) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(source, "cache hit");
            return Arc::clone(entry.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let result = Arc::new(analyze(source, &self.config));
        // 并发写入同一个 key 时保留先到的结果
        let entry = self
            .entries
            .entry(source.to_string())
            .or_insert(result);
        Arc::clone(entry.value())
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    #[test]
    fn test_cache_hit_and_miss() {
        let cache = AnalysisCache::new(LexerConfig::default());
        let first = cache.get_or_analyze("a + b");
        let second = cache.get_or_analyze("a + b");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_stores_errors() {
        let cache = AnalysisCache::new(LexerConfig::default());
        let result = cache.get_or_analyze("(1");
        assert_eq!(*result, Err(LexError::UnmatchedOpeningParen(0)));
        cache.get_or_analyze("(1");
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_clear() {
        let cache = AnalysisCache::new(LexerConfig::default());
        cache.get_or_analyze("x");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), CacheStats::default());
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(AnalysisCache::new(LexerConfig::default()));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        let source = format!("x{} + 1", i % 5);
                        assert!(cache.get_or_analyze(&source).is_ok());
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 5);
        let stats = cache.stats();
        assert_eq!(stats.hits + stats.misses, 200);
    }
}
