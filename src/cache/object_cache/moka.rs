use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

#[derive(Clone)]
struct CacheEntry {
    value: String,
    ttl: Duration,
}

/// 按条目自身的 ttl 过期
struct EntryExpiry;

impl Expiry<String, CacheEntry> for EntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &CacheEntry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, CacheEntry>,
    default_ttl: Duration,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        if config.cache.default_ttl == 0 {
            return Err("cache.default_ttl must be greater than 0".to_string());
        }

        let inner = Cache::builder()
            .max_capacity(config.cache.memory.max_capacity)
            .expire_after(EntryExpiry)
            .build();

        debug!(
            "MokaCacheWrapper initialized with max capacity: {}",
            config.cache.memory.max_capacity
        );
        Ok(Self {
            inner,
            default_ttl: Duration::from_secs(config.cache.default_ttl),
        })
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(entry) if entry.value.is_empty() => CacheResult::ExistsButNoValue,
            Some(entry) => {
                debug!("Successfully retrieved key: {}", key);
                CacheResult::Found(entry.value)
            }
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 {
            self.default_ttl
        } else {
            Duration::from_secs(ttl)
        };
        self.inner.insert(key, CacheEntry { value, ttl }).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = MokaCacheWrapper::new().unwrap();
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);

        cache.insert_raw("k".into(), "v".into(), 0).await;
        assert_eq!(cache.get_raw("k").await, CacheResult::Found("v".into()));

        // 空值视为存在但无内容
        cache.insert_raw("empty".into(), String::new(), 0).await;
        assert_eq!(cache.get_raw("empty").await, CacheResult::ExistsButNoValue);
    }

    #[tokio::test]
    async fn test_per_entry_ttl() {
        let cache = MokaCacheWrapper::new().unwrap();
        cache.insert_raw("short".into(), "1".into(), 1).await;
        tokio::time::sleep(Duration::from_millis(1200)).await;
        assert_eq!(cache.get_raw("short").await, CacheResult::NotFound);
    }
}
