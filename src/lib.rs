//! # PassRS
//!
//! 一个安全的密码生成与强度评估库。
//!
//! ## 功能特性
//!
//! - **密码生成**: 按长度与字符类配置生成密码，保证每个启用的字符类至少出现一次
//! - **强度评估**: 对任意密码字符串计算 0-100 分数与三级强度分类
//! - **安全随机数**: 使用操作系统 CSPRNG，随机源失败显式报错
//! - **字符类管理**: 数字、大写、小写、符号四类字符的字母表构建
//!
//! ## Features
//!
//! - `serde` - 为公开类型启用序列化支持
//!
//! ## 密码生成示例
//!
//! ```rust
//! use passrs::{GenerationOptions, generate_password};
//!
//! // 默认配置：长度 12，启用全部字符类
//! let password = generate_password(&GenerationOptions::default()).unwrap();
//! assert_eq!(password.chars().count(), 12);
//!
//! // 自定义配置
//! let options = GenerationOptions::default()
//!     .with_length(24)
//!     .with_symbols(false);
//! let password = generate_password(&options).unwrap();
//! assert_eq!(password.chars().count(), 24);
//! ```
//!
//! ## 强度评估示例
//!
//! ```rust
//! use passrs::{StrengthTier, check_password_strength, score_password};
//!
//! let score = score_password("aB3!xQ9#mK2$").unwrap();
//! assert_eq!(StrengthTier::from_score(score), StrengthTier::Strong);
//!
//! let report = check_password_strength("aaaaaaaaaaaa").unwrap();
//! assert_eq!(report.tier, StrengthTier::Weak);
//! assert!(!report.suggestions.is_empty());
//! ```

pub mod charset;
pub mod error;
pub mod generator;
pub mod random;
pub mod strength;

pub use error::{Error, Result};

// ============================================================================
// 字符类相关导出
// ============================================================================

pub use charset::{CharacterClass, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE, resolve_alphabet};

// ============================================================================
// 密码生成相关导出
// ============================================================================

pub use generator::{GenerationOptions, MAX_LENGTH, MIN_LENGTH, generate, generate_password};

// ============================================================================
// 随机数生成函数导出
// ============================================================================

pub use random::{generate_random_bytes, random_index};

// ============================================================================
// 强度评估相关导出
// ============================================================================

pub use strength::{
    PasswordFeatures, StrengthReport, StrengthTier, check_password_strength, score_password,
};
