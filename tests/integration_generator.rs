//! 密码生成模块集成测试
//!
//! 测试密码生成的长度、字符集、覆盖保证与错误处理。

use passrs::{
    CharacterClass, Error, GenerationOptions, MAX_LENGTH, MIN_LENGTH, generate, generate_password,
    resolve_alphabet,
};
use passrs::error::GenerationError;

/// 测试生成的密码长度与配置一致
#[test]
fn test_generated_password_has_requested_length() {
    for length in [MIN_LENGTH, 8, 12, 20, 64, MAX_LENGTH] {
        let password = generate(length, true, true, true, true).unwrap();
        assert_eq!(password.chars().count(), length, "length {}", length);
    }
}

/// 测试生成的字符全部来自启用字符类的并集
#[test]
fn test_generated_chars_come_from_enabled_classes() {
    let options = GenerationOptions::default()
        .with_length(64)
        .with_uppercase(false)
        .with_symbols(false);
    let alphabet = resolve_alphabet(&options.enabled_classes()).unwrap();

    let password = generate_password(&options).unwrap();
    for c in password.chars() {
        assert!(alphabet.contains(c), "'{}' not in alphabet", c);
    }
}

/// 测试每个启用的字符类至少出现一次
#[test]
fn test_every_enabled_class_is_represented() {
    // 最短长度配全部四类是覆盖保证最紧的场景
    for _ in 0..100 {
        let password = generate(5, true, true, true, true).unwrap();
        assert_eq!(password.chars().count(), 5);
        for class in CharacterClass::ALL {
            assert!(
                password.chars().any(|c| class.contains(c)),
                "missing {:?} in {:?}",
                class,
                password
            );
        }
    }
}

/// 测试部分字符类组合的覆盖保证
#[test]
fn test_coverage_for_partial_class_selections() {
    for _ in 0..50 {
        let password = generate(6, true, false, true, true).unwrap();
        assert!(password.chars().any(|c| CharacterClass::Digits.contains(c)));
        assert!(password.chars().any(|c| CharacterClass::Lowercase.contains(c)));
        assert!(password.chars().any(|c| CharacterClass::Symbols.contains(c)));
        assert!(!password.chars().any(|c| CharacterClass::Uppercase.contains(c)));
    }
}

/// 测试仅小写字母的最大长度密码
#[test]
fn test_lowercase_only_at_max_length() {
    let password = generate(127, false, false, true, false).unwrap();
    assert_eq!(password.chars().count(), 127);
    assert!(password.chars().all(|c| c.is_ascii_lowercase()));
}

/// 测试重复调用产生不同的密码
#[test]
fn test_repeated_calls_produce_different_passwords() {
    let options = GenerationOptions::default();
    let first = generate_password(&options).unwrap();
    let second = generate_password(&options).unwrap();
    let third = generate_password(&options).unwrap();

    // 长度 12、87 字符的字母表下碰撞概率可以忽略
    assert_ne!(first, second);
    assert_ne!(second, third);
    assert_ne!(first, third);
}

/// 测试长度低于下界时报错
#[test]
fn test_length_below_minimum_fails() {
    let result = generate(4, true, true, true, true);
    match result {
        Err(Error::Generation(GenerationError::InvalidLength { min, max, actual })) => {
            assert_eq!(min, 5);
            assert_eq!(max, 127);
            assert_eq!(actual, 4);
        }
        other => panic!("expected InvalidLength, got {:?}", other),
    }
}

/// 测试长度高于上界时报错
#[test]
fn test_length_above_maximum_fails() {
    let result = generate(128, true, true, true, true);
    assert!(matches!(
        result,
        Err(Error::Generation(GenerationError::InvalidLength { .. }))
    ));
}

/// 测试未启用任何字符类时报错
#[test]
fn test_no_enabled_class_fails() {
    let result = generate(12, false, false, false, false);
    assert!(matches!(
        result,
        Err(Error::Generation(GenerationError::EmptyClassSelection))
    ));
}

/// 测试错误时不返回部分结果
#[test]
fn test_invalid_options_never_return_password() {
    assert!(generate(0, true, true, true, true).is_err());
    assert!(generate(4, false, false, false, false).is_err());
    assert!(generate(1000, true, true, true, true).is_err());
}

/// 测试字母表的构建顺序稳定
#[test]
fn test_alphabet_is_stable_and_ordered() {
    let classes = [CharacterClass::Digits, CharacterClass::Lowercase];
    let a = resolve_alphabet(&classes).unwrap();
    let b = resolve_alphabet(&classes).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, "0123456789abcdefghijklmnopqrstuvwxyz");
}

/// 测试默认配置与 UI 初始状态一致
#[test]
fn test_default_options_match_ui_defaults() {
    let options = GenerationOptions::default();
    assert_eq!(options.length, 12);
    assert_eq!(options.enabled_classes().len(), 4);

    let password = generate_password(&options).unwrap();
    assert_eq!(password.chars().count(), 12);
}

/// 测试理论熵随字母表与长度增长
#[test]
fn test_entropy_grows_with_length_and_classes() {
    let base = GenerationOptions::default()
        .with_length(10)
        .with_digits(false)
        .with_uppercase(false)
        .with_symbols(false);
    let longer = base.clone().with_length(20);
    let wider = base.clone().with_symbols(true);

    let base_bits = base.entropy_bits().unwrap();
    assert!(longer.entropy_bits().unwrap() > base_bits);
    assert!(wider.entropy_bits().unwrap() > base_bits);
}

/// 实际应用场景：配置变化后重新生成
#[test]
fn test_regeneration_after_option_changes() {
    let mut options = GenerationOptions::default();
    let initial = generate_password(&options).unwrap();
    assert_eq!(initial.chars().count(), 12);

    // 模拟 UI 调整长度与关闭符号后重新生成
    options = options.with_length(32).with_symbols(false);
    let regenerated = generate_password(&options).unwrap();
    assert_eq!(regenerated.chars().count(), 32);
    assert!(regenerated.chars().all(|c| c.is_ascii_alphanumeric()));
}
