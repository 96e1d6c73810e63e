//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_school_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum SchoolAdminError {
            $($variant(String),)*
        }

        impl SchoolAdminError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(SchoolAdminError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(SchoolAdminError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl SchoolAdminError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        SchoolAdminError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_school_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    FileOperation("E006", "File Operation Error"),
    Validation("E007", "Validation Error"),
    Serialization("E009", "Serialization Error"),
    DateParse("E010", "Date Parse Error"),
    FormField("E012", "Form Field Error"),
}

impl SchoolAdminError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for SchoolAdminError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for SchoolAdminError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for SchoolAdminError {
    fn from(err: sea_orm::DbErr) -> Self {
        SchoolAdminError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for SchoolAdminError {
    fn from(err: std::io::Error) -> Self {
        SchoolAdminError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for SchoolAdminError {
    fn from(err: serde_json::Error) -> Self {
        SchoolAdminError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for SchoolAdminError {
    fn from(err: chrono::ParseError) -> Self {
        SchoolAdminError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SchoolAdminError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SchoolAdminError::cache_connection("test").code(), "E001");
        assert_eq!(SchoolAdminError::database_config("test").code(), "E003");
        assert_eq!(SchoolAdminError::validation("test").code(), "E007");
        assert_eq!(SchoolAdminError::form_field("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            SchoolAdminError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            SchoolAdminError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = SchoolAdminError::database_operation("attendance insert failed");
        assert_eq!(err.message(), "attendance insert failed");
    }

    #[test]
    fn test_db_error_conversion() {
        let err: SchoolAdminError = sea_orm::DbErr::Custom("disk full".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("disk full"));
    }

    #[test]
    fn test_format_simple() {
        let err = SchoolAdminError::form_field("student_abc");
        let formatted = err.format_simple();
        assert!(formatted.contains("Form Field Error"));
        assert!(formatted.contains("student_abc"));
    }
}
