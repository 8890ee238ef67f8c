//! 密码强度评估模块
//!
//! 提供密码强度评分 (0-100) 与三级强度分类功能。
//! 评分对任意字符串有效，不要求密码由本库生成。

use crate::error::{Result, ValidationError};

/// 密码强度等级
///
/// 由固定阈值从分数导出：`<= 40` 为 Weak，`41..=50` 为 Ok，`> 50` 为 Strong。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StrengthTier {
    /// 弱 - 不推荐使用
    Weak = 0,
    /// 一般 - 最低可接受
    Ok = 1,
    /// 强 - 推荐使用
    Strong = 2,
}

impl StrengthTier {
    /// 根据分数确定强度等级
    ///
    /// # Example
    ///
    /// ```rust
    /// use passrs::strength::StrengthTier;
    ///
    /// assert_eq!(StrengthTier::from_score(40), StrengthTier::Weak);
    /// assert_eq!(StrengthTier::from_score(41), StrengthTier::Ok);
    /// assert_eq!(StrengthTier::from_score(51), StrengthTier::Strong);
    /// ```
    pub fn from_score(score: u8) -> StrengthTier {
        match score {
            0..=40 => StrengthTier::Weak,
            41..=50 => StrengthTier::Ok,
            _ => StrengthTier::Strong,
        }
    }

    /// 获取等级的显示文本
    pub fn label(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak",
            StrengthTier::Ok => "OK",
            StrengthTier::Strong => "Strong",
        }
    }

    /// 获取等级的描述
    pub fn description(&self) -> &'static str {
        match self {
            StrengthTier::Weak => "Weak - easily cracked",
            StrengthTier::Ok => "OK - minimum acceptable",
            StrengthTier::Strong => "Strong - recommended",
        }
    }
}

/// 密码包含的特性
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordFeatures {
    /// 长度（字符数）
    pub length: usize,
    /// 包含数字
    pub has_digit: bool,
    /// 包含大写字母
    pub has_uppercase: bool,
    /// 包含小写字母
    pub has_lowercase: bool,
    /// 包含符号
    pub has_symbol: bool,
    /// 不同字符的数量
    pub unique_chars: usize,
    /// 是否包含连续字符 (如 abc, 123)
    pub has_sequences: bool,
    /// 是否包含重复字符 (如 aaa, 111)
    pub has_repeats: bool,
}

/// 密码强度评估结果
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrengthReport {
    /// 强度等级
    pub tier: StrengthTier,
    /// 分数 (0-100)
    pub score: u8,
    /// 改进建议
    pub suggestions: Vec<String>,
    /// 密码满足的特性
    pub features: PasswordFeatures,
}

// ============================================================================
// 常见弱密码列表
// ============================================================================

const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "12345678",
    "qwerty",
    "abc123",
    "password1",
    "admin",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "master",
    "login",
    "princess",
    "starwars",
    "freedom",
    "whatever",
    "trustno1",
    "iloveyou",
    "sunshine",
    "shadow",
    "superman",
    "football",
    "baseball",
    "batman",
];

// ============================================================================
// 密码强度分析
// ============================================================================

/// 分析密码的特性
fn analyze_password(password: &str) -> PasswordFeatures {
    let chars: Vec<char> = password.chars().collect();
    let mut features = PasswordFeatures {
        length: chars.len(),
        ..Default::default()
    };

    let mut char_set = std::collections::HashSet::new();

    for (i, c) in chars.iter().enumerate() {
        char_set.insert(*c);

        if c.is_ascii_digit() {
            features.has_digit = true;
        }
        if c.is_uppercase() {
            features.has_uppercase = true;
        }
        if c.is_lowercase() {
            features.has_lowercase = true;
        }
        if is_symbol_char(*c) {
            features.has_symbol = true;
        }

        // 检查重复字符
        if i >= 2 && chars[i] == chars[i - 1] && chars[i] == chars[i - 2] {
            features.has_repeats = true;
        }

        // 检查连续字符
        if i >= 2 {
            let c0 = chars[i - 2] as i32;
            let c1 = chars[i - 1] as i32;
            let c2 = chars[i] as i32;
            if (c1 - c0 == 1 && c2 - c1 == 1) || (c0 - c1 == 1 && c1 - c2 == 1) {
                features.has_sequences = true;
            }
        }
    }

    features.unique_chars = char_set.len();
    features
}

/// 检查字符是否为符号
///
/// 评分面向任意字符串，符号的判定用字符谓词而非生成用的固定符号集
fn is_symbol_char(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace()
}

/// 计算密码强度分数
fn calculate_score(password: &str, features: &PasswordFeatures) -> u8 {
    let mut score: i32 = 0;

    // 基于长度加分，每字符 2 分，最高 40 分
    score += (features.length.min(20) as i32) * 2;

    // 基于字符类型加分
    if features.has_digit {
        score += 10;
    }
    if features.has_uppercase {
        score += 10;
    }
    if features.has_lowercase {
        score += 10;
    }
    if features.has_symbol {
        score += 15;
    }

    // 基于唯一字符加分，最高 10 分
    score += features.unique_chars.min(10) as i32;

    // 扣分项
    if features.has_sequences {
        score -= 10;
    }
    if features.has_repeats {
        score -= 10;
    }

    // 检查是否包含常见密码
    let lower = password.to_lowercase();
    if COMMON_PASSWORDS.iter().any(|p| lower.contains(p)) {
        score -= 25;
    }

    // 确保分数在 0-100 范围内
    score.clamp(0, 100) as u8
}

/// 生成改进建议
fn generate_suggestions(features: &PasswordFeatures) -> Vec<String> {
    let mut suggestions = Vec::new();

    if features.length < 12 {
        suggestions.push("Consider using a longer password (at least 12 characters)".to_string());
    }

    if !features.has_digit {
        suggestions.push("Add numbers".to_string());
    }

    if !features.has_uppercase {
        suggestions.push("Add uppercase letters".to_string());
    }

    if !features.has_lowercase {
        suggestions.push("Add lowercase letters".to_string());
    }

    if !features.has_symbol {
        suggestions.push("Add special characters (e.g., !@#$%^&*)".to_string());
    }

    if features.has_sequences {
        suggestions.push("Avoid sequential characters (e.g., abc, 123)".to_string());
    }

    if features.has_repeats {
        suggestions.push("Avoid repeated characters (e.g., aaa, 111)".to_string());
    }

    if features.unique_chars < features.length / 2 {
        suggestions.push("Use more unique characters".to_string());
    }

    suggestions
}

// ============================================================================
// 公共 API
// ============================================================================

/// 计算密码强度分数
///
/// 分数由长度贡献、字符类多样性和低熵模式扣分组合而成，
/// 相同输入总是产生相同分数。
///
/// # Arguments
///
/// * `password` - 要评分的密码，不能为空
///
/// # Returns
///
/// 返回 0-100 的分数
///
/// # Example
///
/// ```rust
/// use passrs::strength::{StrengthTier, score_password};
///
/// let score = score_password("aB3!xQ9#mK2$").unwrap();
/// assert!(score > 50);
/// assert_eq!(StrengthTier::from_score(score), StrengthTier::Strong);
///
/// // 空密码是调用方错误
/// assert!(score_password("").is_err());
/// ```
pub fn score_password(password: &str) -> Result<u8> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }

    let features = analyze_password(password);
    Ok(calculate_score(password, &features))
}

/// 评估密码强度
///
/// 返回详细的强度评估结果，包括分数、等级、特性分析和改进建议。
///
/// # Arguments
///
/// * `password` - 要评估的密码，不能为空
///
/// # Returns
///
/// 返回 `StrengthReport` 包含完整的评估结果
///
/// # Example
///
/// ```rust
/// use passrs::strength::check_password_strength;
///
/// let report = check_password_strength("aB3!xQ9#mK2$").unwrap();
/// println!("Tier: {:?}", report.tier);
/// println!("Score: {}", report.score);
/// ```
pub fn check_password_strength(password: &str) -> Result<StrengthReport> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }

    let features = analyze_password(password);
    let score = calculate_score(password, &features);
    let tier = StrengthTier::from_score(score);
    let suggestions = generate_suggestions(&features);

    Ok(StrengthReport {
        tier,
        score,
        suggestions,
        features,
    })
}
