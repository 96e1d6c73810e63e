use crate::config::AppConfig;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const BEARER_PREFIX: &str = "Bearer ";
pub const AUTHORIZATION_HEADER: &str = "Authorization";

pub const ADMIN_ROLE: &str = "admin";
const ACCESS_TOKEN_TYPE: &str = "access";

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,        // Subject (管理员用户名)
    pub role: String,       // 角色，目前只有 admin
    pub token_type: String, // token类型
    pub exp: usize,         // Expiration time (时间戳)
    pub iat: usize,         // Issued at (签发时间)
}

pub struct JwtUtils;

impl JwtUtils {
    // 获取 JWT 密钥
    fn get_secret() -> String {
        AppConfig::get().jwt.secret.clone()
    }

    // 生成 Access Token
    pub fn generate_access_token(username: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let config = AppConfig::get();
        Self::generate_token_with_expiry(
            username,
            ADMIN_ROLE,
            ACCESS_TOKEN_TYPE,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        )
    }

    // 生成带自定义过期时间的 Token
    pub fn generate_token_with_expiry(
        username: &str,
        role: &str,
        token_type: &str,
        expiry_duration: chrono::Duration,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let expiration = now + expiry_duration;

        let claims = Claims {
            sub: username.to_string(),
            role: role.to_string(),
            token_type: token_type.to_string(),
            exp: expiration.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let secret = Self::get_secret();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&Header::default(), &claims, &encoding_key)
    }

    // 验证 JWT token
    pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let secret = Self::get_secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<Claims>(token, &decoding_key, &validation).map(|token_data| token_data.claims)
    }

    // 验证 Access Token：类型与角色都必须匹配
    pub fn verify_access_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = Self::verify_token(token)?;
        if claims.token_type != ACCESS_TOKEN_TYPE || claims.role != ADMIN_ROLE {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }
        Ok(claims)
    }

    /// 从 Authorization 头中提取 Bearer token
    pub fn extract_bearer_token(req: &actix_web::HttpRequest) -> Option<String> {
        req.headers()
            .get(AUTHORIZATION_HEADER)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.strip_prefix(BEARER_PREFIX))
            .map(|s| s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_round_trip() {
        let token = JwtUtils::generate_access_token("admin").unwrap();
        let claims = JwtUtils::verify_access_token(&token).unwrap();
        assert_eq!(claims.sub, "admin");
        assert_eq!(claims.role, ADMIN_ROLE);
    }

    #[test]
    fn test_wrong_token_type_rejected() {
        let token = JwtUtils::generate_token_with_expiry(
            "admin",
            ADMIN_ROLE,
            "refresh",
            chrono::Duration::minutes(5),
        )
        .unwrap();
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // 超出默认 60 秒的 leeway
        let token = JwtUtils::generate_token_with_expiry(
            "admin",
            ADMIN_ROLE,
            ACCESS_TOKEN_TYPE,
            chrono::Duration::minutes(-5),
        )
        .unwrap();
        assert!(JwtUtils::verify_access_token(&token).is_err());
    }
}
