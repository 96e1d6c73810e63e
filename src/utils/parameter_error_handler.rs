use actix_web::{
    HttpRequest, HttpResponse,
    error::{InternalError, JsonPayloadError, QueryPayloadError, UrlencodedError},
};
use tracing::debug;

use crate::models::{ApiResponse, ErrorCode};

fn bad_request(kind: &str, detail: String, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected {} for {}: {}", kind, req.path(), detail);
    let message = format!("Invalid {kind}: {detail}");
    InternalError::from_response(
        message.clone(),
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, message)),
    )
    .into()
}

/// JSON 请求体解析错误处理
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    bad_request("JSON body", err.to_string(), req)
}

/// 查询参数解析错误处理
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    bad_request("query parameters", err.to_string(), req)
}

/// 表单解析错误处理
pub fn form_error_handler(err: UrlencodedError, req: &HttpRequest) -> actix_web::Error {
    bad_request("form body", err.to_string(), req)
}
