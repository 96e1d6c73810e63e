use async_trait::async_trait;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;

    /// 写入缓存，`ttl` 为秒，0 表示使用默认过期时间
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
}
