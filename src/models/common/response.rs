use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::ErrorCode;

// 统一的API响应结构，code 为 0 表示成功
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "api.ts")]
pub struct ApiResponse<T: TS> {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl<T: TS> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: Some(data),
            timestamp: chrono::Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    pub fn success_empty(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::Success as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn error_empty(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code as i32,
            message: message.into(),
            data: None,
            timestamp: chrono::Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_omits_data() {
        let value =
            serde_json::to_value(ApiResponse::error_empty(ErrorCode::Unauthorized, "no")).unwrap();
        assert_eq!(value["code"], 1001);
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_success_carries_data() {
        let value = serde_json::to_value(ApiResponse::success(3_i64, "ok")).unwrap();
        assert_eq!(value["code"], 0);
        assert_eq!(value["data"], 3);
    }
}
