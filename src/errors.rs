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
macro_rules! define_edututor_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduTutorError {
            $($variant(String),)*
        }

        impl EduTutorError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduTutorError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduTutorError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(EduTutorError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl EduTutorError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduTutorError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_edututor_errors! {
    Configuration("E001", "Configuration Error"),
    DatabaseConfig("E002", "Database Configuration Error"),
    DatabaseConnection("E003", "Database Connection Error"),
    DatabaseOperation("E004", "Database Operation Error"),
    Conflict("E005", "Concurrent Update Conflict"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    Upstream("E009", "Completion API Error"),
    Authentication("E010", "Authentication Error"),
}

impl EduTutorError {
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

    /// 是否为乐观锁冲突
    pub fn is_conflict(&self) -> bool {
        matches!(self, EduTutorError::Conflict(_))
    }
}

impl fmt::Display for EduTutorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduTutorError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for EduTutorError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduTutorError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for EduTutorError {
    fn from(err: serde_json::Error) -> Self {
        EduTutorError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduTutorError>;
