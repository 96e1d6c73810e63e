/*!
 * 速率限制中间件
 *
 * 按客户端 IP 限制请求频率，用于登录和公开入学接口。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::web;
 * use crate::middlewares::RateLimit;
 *
 * web::resource("/login")
 *     .wrap(RateLimit::login())  // 5次/分钟
 *     .route(web::post().to(login_handler));
 * ```
 *
 * ## 限制规则
 *
 * - 窗口从某个键的第一次请求开始计时，窗口内计数不重置
 * - 超过限制返回 429 Too Many Requests
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::Expiry;
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// 某个键在当前窗口内的计数
#[derive(Clone, Copy)]
struct WindowCounter {
    count: u32,
    window: Duration,
}

/// 窗口从第一次写入开始计时，后续更新不延长
struct WindowExpiry;

impl Expiry<String, WindowCounter> for WindowExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &WindowCounter,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.window)
    }
}

/// 全局速率限制缓存
/// 键: 前缀:ip:地址
static RATE_LIMIT_CACHE: Lazy<Cache<String, WindowCounter>> = Lazy::new(|| {
    Cache::builder()
        .max_capacity(100_000)
        .expire_after(WindowExpiry)
        .build()
});

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    /// 创建新的速率限制器
    ///
    /// # 参数
    /// - `max_requests`: 时间窗口内允许的最大请求数
    /// - `window_secs`: 时间窗口（秒）
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录端点限制：5次/分钟/IP
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 入学申请限制：10次/分钟/IP
    pub fn admission() -> Self {
        Self::new(10, 60).with_prefix("admission")
    }
}

/// 从请求中提取客户端 IP
///
/// 安全注意事项：
/// - 如果服务部署在反向代理后面，需要在反向代理中配置正确的 X-Forwarded-For / X-Real-IP 头
/// - 此实现会验证 IP 格式，防止伪造的无效头导致问题
/// - 在不可信网络中直接暴露服务时，攻击者可能伪造转发头来绕过限制
fn extract_client_ip(req: &ServiceRequest) -> String {
    // 尝试从连接信息获取真实 IP（最可信）
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    // 如果连接信息有有效 IP，优先使用
    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 从 X-Forwarded-For 头获取（用于反向代理场景）
    // 只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    // 从 X-Real-IP 头获取
    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    // 如果都没有有效 IP，使用连接信息的默认值
    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

/// 验证 IP 地址格式是否有效
fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "请求过于频繁，请稍后再试",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            // 构建限制键
            let identifier = format!("ip:{}", extract_client_ip(&req));

            let cache_key = if key_prefix.is_empty() {
                identifier
            } else {
                format!("{}:{}", key_prefix, identifier)
            };

            // 获取当前计数
            let current_count = RATE_LIMIT_CACHE
                .get(&cache_key)
                .await
                .map(|counter| counter.count)
                .unwrap_or(0);

            // 检查是否超过限制
            if current_count >= max_requests {
                warn!(
                    "Rate limit exceeded for key: {} (count: {}/{})",
                    cache_key, current_count, max_requests
                );
                return Ok(req
                    .into_response(create_rate_limit_response(window_secs).map_into_right_body()));
            }

            // 增加计数
            RATE_LIMIT_CACHE
                .insert(
                    cache_key.clone(),
                    WindowCounter {
                        count: current_count + 1,
                        window: Duration::from_secs(window_secs),
                    },
                )
                .await;

            let remaining = max_requests.saturating_sub(current_count + 1);

            // 继续处理请求，并在响应中附带剩余次数
            let mut res = srv.call(req).await?;
            let headers = res.headers_mut();
            headers.insert(
                HeaderName::from_static("x-ratelimit-limit"),
                HeaderValue::from(max_requests),
            );
            headers.insert(
                HeaderName::from_static("x-ratelimit-remaining"),
                HeaderValue::from(remaining),
            );
            Ok(res.map_into_left_body())
        })
    }
}
