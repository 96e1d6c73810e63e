use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::{AppConfig, DEFAULT_JWT_SECRET};
use crate::errors::{Result, SchoolAdminError};
use crate::models::auth::entities::AdminCredentials;
use crate::storage::Storage;
use crate::utils::password::{generate_random_password, hash_password};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
    pub admin: AdminCredentials,
}

/// 创建缓存实例
async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let config = AppConfig::get();
    let cache_type = &config.cache.cache_type;

    warn!("Attempting to create {} cache backend", cache_type);

    if let Some(constructor) = get_object_cache_plugin(cache_type) {
        match constructor().await {
            Ok(cache) => {
                warn!("Successfully created {} cache backend", cache_type);
                return Ok(Arc::from(cache));
            }
            Err(e) => {
                warn!("Failed to create {} cache: {}", cache_type, e);
            }
        }
    } else {
        warn!("Cache backend '{}' not found in registry", cache_type);
    }

    // 配置的缓存不可用时回退到内存缓存
    if cache_type != "moka"
        && let Some(fallback_constructor) = get_object_cache_plugin("moka")
    {
        warn!("Falling back to default memory cache");
        let cache = fallback_constructor().await?;
        warn!("Successfully created fallback Moka (in-memory) cache backend");
        return Ok(Arc::from(cache));
    }

    // 插件表为空时（例如链接时丢弃了注册函数）直接构造内存缓存
    warn!(
        "No usable cache plugin (tried: {}, registered: {:?}), constructing Moka directly",
        cache_type,
        crate::cache::register::registered_object_cache_plugins()
    );
    let cache = MokaCacheWrapper::new().map_err(SchoolAdminError::cache_plugin_not_found)?;
    Ok(Arc::new(cache))
}

/// 解析管理员凭据
///
/// 优先使用配置中的 argon2 哈希；没有配置时读取 `ADMIN_PASSWORD`，
/// 仍然没有则生成随机密码并打印一次。
pub fn resolve_admin_credentials(config: &AppConfig) -> Result<AdminCredentials> {
    let username = config.admin.username.trim().to_string();
    if username.is_empty() {
        return Err(SchoolAdminError::validation("admin.username must not be empty"));
    }

    if !config.admin.password_hash.is_empty() {
        debug!("Using configured admin password hash for '{}'", username);
        return Ok(AdminCredentials {
            username,
            password_hash: config.admin.password_hash.clone(),
        });
    }

    // 获取密码：优先从环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Admin username: {}", username);
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    Ok(AdminCredentials {
        password_hash: hash_password(&password)?,
        username,
    })
}

/// 准备服务器启动的上下文
/// 包括存储、缓存和管理员凭据
pub async fn prepare_server_startup() -> Result<StartupContext> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .map_err(|_| SchoolAdminError::validation("Failed to install rustls crypto provider"))?;

    let config = AppConfig::get();

    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
        debug!("Debug mode: Cache registry is enabled");
    }

    if config.is_production() && config.jwt.secret == DEFAULT_JWT_SECRET {
        warn!("JWT secret is the built-in development value; set JWT_SECRET in production");
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    let admin = resolve_admin_credentials(config)?;
    warn!("Admin account '{}' ready", admin.username);

    // 创建缓存实例
    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext {
        storage,
        cache,
        admin,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_hash_is_used_verbatim() {
        let mut config = AppConfig::load().unwrap();
        config.admin.username = " principal ".to_string();
        config.admin.password_hash = "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string();

        let admin = resolve_admin_credentials(&config).unwrap();
        assert_eq!(admin.username, "principal");
        assert_eq!(admin.password_hash, config.admin.password_hash);
    }

    #[test]
    fn test_empty_username_rejected() {
        let mut config = AppConfig::load().unwrap();
        config.admin.username = "  ".to_string();
        assert!(resolve_admin_credentials(&config).is_err());
    }
}
