//! 统一错误类型模块
//!
//! 提供 passrs 库中所有操作的错误类型定义。

use std::fmt;

/// passrs 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// passrs 库的错误类型
#[derive(Debug)]
pub enum Error {
    /// 密码生成错误
    Generation(GenerationError),

    /// 验证错误
    Validation(ValidationError),

    /// 加密错误
    Crypto(CryptoError),

    /// 内部错误
    Internal(String),

    /// 其他错误
    Other(String),
}

impl Error {
    /// 创建一个内部错误
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }
}

/// 密码生成相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// 密码长度超出允许范围
    InvalidLength {
        min: usize,
        max: usize,
        actual: usize,
    },
    /// 未启用任何字符类
    EmptyClassSelection,
}

/// 验证相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// 密码为空
    EmptyPassword,
}

/// 加密相关错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// 随机数生成失败
    RngFailed(String),
}

// ============================================================================
// Display 实现
// ============================================================================

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Generation(e) => write!(f, "Generation error: {}", e),
            Error::Validation(e) => write!(f, "Validation error: {}", e),
            Error::Crypto(e) => write!(f, "Crypto error: {}", e),
            Error::Internal(msg) => write!(f, "Internal error: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::InvalidLength { min, max, actual } => {
                write!(
                    f,
                    "invalid password length: expected between {} and {}, got {}",
                    min, max, actual
                )
            }
            GenerationError::EmptyClassSelection => {
                write!(f, "no character class enabled")
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyPassword => write!(f, "password cannot be empty"),
        }
    }
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CryptoError::RngFailed(msg) => {
                write!(f, "random number generation failed: {}", msg)
            }
        }
    }
}

// ============================================================================
// std::error::Error 实现
// ============================================================================

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

impl std::error::Error for GenerationError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for CryptoError {}

// ============================================================================
// From 实现 - 方便错误转换
// ============================================================================

impl From<GenerationError> for Error {
    fn from(err: GenerationError) -> Self {
        Error::Generation(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<CryptoError> for Error {
    fn from(err: CryptoError) -> Self {
        Error::Crypto(err)
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
