//! 对象缓存
//!
//! 缓存后端以插件形式注册，启动时按 `cache.type` 选择。
//! 目前用于保存已注销的访问令牌。

pub mod object_cache;
pub mod register;
pub mod traits;

pub use traits::{CacheResult, ObjectCache};

/// 声明一个缓存插件，程序加载时自动注册到插件表
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:expr, $ty:ty) => {
        #[ctor::ctor]
        unsafe fn __register_object_cache_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new().map_err(|e| {
                            $crate::errors::SchoolAdminError::cache_connection(e)
                        })?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}
