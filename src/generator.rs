//! 密码生成模块
//!
//! 根据生成选项从启用的字符类中均匀抽取字符，
//! 并保证每个启用的字符类至少出现一次。

use crate::charset::{CharacterClass, resolve_alphabet};
use crate::error::{GenerationError, Result};
use crate::random::random_index;

/// 密码最小长度
pub const MIN_LENGTH: usize = 5;

/// 密码最大长度
pub const MAX_LENGTH: usize = 127;

/// 密码生成选项
///
/// 不变量：`5 <= length <= 127`，且至少启用一个字符类。
/// 违反不变量属于调用方错误，生成器不做静默修复。
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationOptions {
    /// 密码长度
    pub length: usize,
    /// 包含数字
    pub include_digits: bool,
    /// 包含大写字母
    pub include_uppercase: bool,
    /// 包含小写字母
    pub include_lowercase: bool,
    /// 包含符号
    pub include_symbols: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_digits: true,
            include_uppercase: true,
            include_lowercase: true,
            include_symbols: true,
        }
    }
}

impl GenerationOptions {
    /// 设置密码长度
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// 设置是否包含数字
    pub fn with_digits(mut self, include: bool) -> Self {
        self.include_digits = include;
        self
    }

    /// 设置是否包含大写字母
    pub fn with_uppercase(mut self, include: bool) -> Self {
        self.include_uppercase = include;
        self
    }

    /// 设置是否包含小写字母
    pub fn with_lowercase(mut self, include: bool) -> Self {
        self.include_lowercase = include;
        self
    }

    /// 设置是否包含符号
    pub fn with_symbols(mut self, include: bool) -> Self {
        self.include_symbols = include;
        self
    }

    /// 获取启用的字符类，按固定的字符类顺序排列
    pub fn enabled_classes(&self) -> Vec<CharacterClass> {
        let mut classes = Vec::with_capacity(4);
        if self.include_digits {
            classes.push(CharacterClass::Digits);
        }
        if self.include_uppercase {
            classes.push(CharacterClass::Uppercase);
        }
        if self.include_lowercase {
            classes.push(CharacterClass::Lowercase);
        }
        if self.include_symbols {
            classes.push(CharacterClass::Symbols);
        }
        classes
    }

    /// 校验生成选项的不变量
    ///
    /// # Returns
    ///
    /// 选项合法时返回 `Ok(())`，否则返回对应错误
    pub fn validate(&self) -> Result<()> {
        if self.length < MIN_LENGTH || self.length > MAX_LENGTH {
            return Err(GenerationError::InvalidLength {
                min: MIN_LENGTH,
                max: MAX_LENGTH,
                actual: self.length,
            }
            .into());
        }
        if self.enabled_classes().is_empty() {
            return Err(GenerationError::EmptyClassSelection.into());
        }
        Ok(())
    }

    /// 计算当前配置下生成器的理论熵（比特）
    ///
    /// 熵为 `length * log2(字母表大小)`，反映暴力破解的搜索空间大小。
    ///
    /// # Example
    ///
    /// ```rust
    /// use passrs::generator::GenerationOptions;
    ///
    /// let bits = GenerationOptions::default().entropy_bits().unwrap();
    /// assert!(bits > 70.0);
    /// ```
    pub fn entropy_bits(&self) -> Result<f64> {
        let alphabet = resolve_alphabet(&self.enabled_classes())?;
        Ok(self.length as f64 * (alphabet.len() as f64).log2())
    }
}

/// 根据生成选项生成密码
///
/// 从字母表中独立均匀地抽取 `length` 个字符，随机源为操作系统 CSPRNG。
/// 抽取完成后检查覆盖不变量：每个启用的字符类至少出现一次，
/// 缺失的字符类各执行一次修复，修复步数不超过启用的字符类数量。
///
/// # Arguments
///
/// * `options` - 生成选项
///
/// # Returns
///
/// 返回生成的密码字符串
///
/// # Example
///
/// ```rust
/// use passrs::generator::{GenerationOptions, generate_password};
///
/// let options = GenerationOptions::default();
/// let password = generate_password(&options).unwrap();
/// assert_eq!(password.chars().count(), 12);
/// ```
pub fn generate_password(options: &GenerationOptions) -> Result<String> {
    options.validate()?;

    let classes = options.enabled_classes();
    let alphabet: Vec<char> = resolve_alphabet(&classes)?.chars().collect();

    let mut password = Vec::with_capacity(options.length);
    for _ in 0..options.length {
        password.push(alphabet[random_index(alphabet.len())?]);
    }

    ensure_class_coverage(&mut password, &classes)?;

    Ok(password.into_iter().collect())
}

/// 生成密码的便捷函数
///
/// 与 UI 边界一致的扁平参数形式。
///
/// # Example
///
/// ```rust
/// use passrs::generator::generate;
///
/// let password = generate(16, true, true, true, false).unwrap();
/// assert_eq!(password.chars().count(), 16);
/// ```
pub fn generate(
    length: usize,
    include_digits: bool,
    include_uppercase: bool,
    include_lowercase: bool,
    include_symbols: bool,
) -> Result<String> {
    generate_password(&GenerationOptions {
        length,
        include_digits,
        include_uppercase,
        include_lowercase,
        include_symbols,
    })
}

/// 修复缺失的字符类覆盖
///
/// 每个缺失的字符类用该类中均匀抽取的字符替换一个均匀抽取的位置。
/// 候选位置排除其他启用字符类的唯一代表，修复不会破坏已有覆盖，
/// 因此每类恰好修复一次即可收敛。
fn ensure_class_coverage(password: &mut [char], classes: &[CharacterClass]) -> Result<()> {
    let missing: Vec<CharacterClass> = classes
        .iter()
        .copied()
        .filter(|class| !password.iter().any(|&c| class.contains(c)))
        .collect();

    for class in missing {
        let candidates: Vec<usize> = (0..password.len())
            .filter(|&i| {
                let current = password[i];
                // 不能替换某个启用字符类仅剩的一个字符
                !classes.iter().any(|other| {
                    other.contains(current)
                        && password.iter().filter(|&&c| other.contains(c)).count() == 1
                })
            })
            .collect();

        // length >= 5 且字符类最多 4 个，候选位置始终存在
        let position = candidates[random_index(candidates.len())?];
        let chars: Vec<char> = class.chars().chars().collect();
        password[position] = chars[random_index(chars.len())?];
    }

    Ok(())
}
