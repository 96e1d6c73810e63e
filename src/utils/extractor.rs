//! 路径参数提取器
//!
//! 解析失败时直接返回统一格式的 400 响应，不进入处理函数。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn parse_path_i64(req: &HttpRequest, name: &str) -> Result<i64, actix_web::Error> {
    let raw = req.match_info().get(name).unwrap_or_default();
    raw.parse::<i64>().map_err(|_| {
        let message = format!("Invalid path parameter '{name}': {raw}");
        InternalError::from_response(
            message.clone(),
            HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
        )
        .into()
    })
}

/// `{id}` 路径参数
#[derive(Debug, Clone, Copy)]
pub struct SafeIDI64(pub i64);

impl FromRequest for SafeIDI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(parse_path_i64(req, "id").map(SafeIDI64))
    }
}
