use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 开发用默认 JWT 密钥，生产环境必须覆盖
pub const DEFAULT_JWT_SECRET: &str = "schooladmin-development-secret";

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "School Admin")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 10000)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 8)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 1_048_576)?
            .set_default("jwt.secret", DEFAULT_JWT_SECRET)?
            .set_default("jwt.access_token_expiry", 120)?
            .set_default("database.url", "database.db")?
            .set_default("database.pool_size", 5)?
            .set_default("database.timeout", 30)?
            .set_default("cache.type", "moka")?
            .set_default("cache.default_ttl", 7200)?
            .set_default("cache.memory.max_capacity", 10_000)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("cors.allowed_methods", Vec::<String>::new())?
            .set_default("cors.allowed_headers", Vec::<String>::new())?
            .set_default("cors.max_age", 3600)?
            .set_default("argon2.memory_cost", 19_456)?
            .set_default("argon2.time_cost", 2)?
            .set_default("argon2.parallelism", 1)?
            .set_default("admin.username", "admin")?
            .set_default("admin.password_hash", "")?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("SCHOOLADMIN")
                    .separator("_")
                    .try_parsing(true),
            );

        // 支持从环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("admin.username", std::env::var("ADMIN_USERNAME").ok())?
            .set_override_option(
                "admin.password_hash",
                std::env::var("ADMIN_PASSWORD_HASH").ok(),
            )?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_config_file() {
        let config = AppConfig::load().expect("defaults should deserialize");
        assert!(config.server.workers >= 1);
        assert!(config.server.workers <= config.server.max_workers);
        assert!(!config.admin.username.is_empty());
        assert!(config.jwt.access_token_expiry > 0);
    }
}
