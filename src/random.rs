//! 安全随机数生成模块
//!
//! 提供密码学安全的随机数生成功能，用于生成密码等敏感数据。

use rand::{TryRngCore, rngs::OsRng};

use crate::error::{CryptoError, Error, Result};

/// 生成指定长度的随机字节数组
///
/// 使用操作系统提供的密码学安全随机数生成器 (CSPRNG)
///
/// # Arguments
///
/// * `length` - 要生成的字节数
///
/// # Returns
///
/// 返回包含随机字节的 `Vec<u8>`
///
/// # Example
///
/// ```rust
/// use passrs::random::generate_random_bytes;
///
/// let bytes = generate_random_bytes(32).unwrap();
/// assert_eq!(bytes.len(), 32);
/// ```
pub fn generate_random_bytes(length: usize) -> Result<Vec<u8>> {
    let mut bytes = vec![0u8; length];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| Error::Crypto(CryptoError::RngFailed(format!("{:?}", e))))?;
    Ok(bytes)
}

/// 生成密码学安全的随机 u32
///
/// 随机源失败时返回错误，绝不退回到非安全随机源
pub fn random_u32() -> Result<u32> {
    OsRng
        .try_next_u32()
        .map_err(|e| Error::Crypto(CryptoError::RngFailed(format!("{:?}", e))))
}

/// 生成 `[0, bound)` 范围内均匀分布的随机索引
///
/// 使用拒绝采样消除取模偏差，保证每个索引被选中的概率相同。
///
/// # Arguments
///
/// * `bound` - 上界（不包含），必须大于 0
///
/// # Returns
///
/// 返回 `[0, bound)` 范围内的随机索引
///
/// # Example
///
/// ```rust
/// use passrs::random::random_index;
///
/// let idx = random_index(62).unwrap();
/// assert!(idx < 62);
/// ```
pub fn random_index(bound: usize) -> Result<usize> {
    if bound == 0 || bound > u32::MAX as usize {
        return Err(Error::internal(format!(
            "random_index bound out of range: {}",
            bound
        )));
    }

    let bound = bound as u64;
    // [0, 2^32) 中能被 bound 整除的最大前缀，落在前缀外的值重新采样
    let zone = (1u64 << 32) - ((1u64 << 32) % bound);
    loop {
        let value = random_u32()? as u64;
        if value < zone {
            return Ok((value % bound) as usize);
        }
    }
}
