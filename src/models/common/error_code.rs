use serde::Serialize;

// 业务错误码，随 ApiResponse.code 一起返回
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误 1xxx
    BadRequest = 1000,
    Unauthorized = 1001,
    NotFound = 1004,
    RateLimitExceeded = 1029,

    // 认证 2xxx
    AuthFailed = 2000,
    TokenGenerationFailed = 2001,

    // 学生 3xxx
    StudentNotFound = 3000,
    StudentCreationFailed = 3001,
    StudentDeleteFailed = 3002,

    // 教师 4xxx
    TeacherCreationFailed = 4001,
    TeacherDeleteFailed = 4002,

    // 考勤 5xxx
    AttendanceMarkFailed = 5001,
    AttendanceDeleteFailed = 5002,
    AttendanceFormInvalid = 5003,

    // 缴费 6xxx
    FeeRecordFailed = 6001,
    FeeDeleteFailed = 6002,

    // 报表 7xxx
    ReportQueryFailed = 7001,

    InternalServerError = 9000,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success as i32, 0);
        assert_eq!(ErrorCode::Unauthorized as i32, 1001);
        assert_eq!(ErrorCode::NotFound as i32, 1004);
        assert_eq!(ErrorCode::RateLimitExceeded as i32, 1029);
        assert_eq!(ErrorCode::InternalServerError as i32, 9000);
    }
}
