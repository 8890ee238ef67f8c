//! 密码生成示例
//!
//! 展示不同生成选项下的密码生成与强度评估。
//!
//! 运行: cargo run --example generate_password

use passrs::{GenerationOptions, check_password_strength, generate_password};

fn main() {
    let configs = [
        ("默认配置 (长度 12，全部字符类)", GenerationOptions::default()),
        (
            "长密码 (长度 32)",
            GenerationOptions::default().with_length(32),
        ),
        (
            "仅字母数字 (长度 16)",
            GenerationOptions::default()
                .with_length(16)
                .with_symbols(false),
        ),
        (
            "PIN 风格 (长度 6，仅数字)",
            GenerationOptions::default()
                .with_length(6)
                .with_uppercase(false)
                .with_lowercase(false)
                .with_symbols(false),
        ),
    ];

    for (label, options) in configs {
        println!("=== {} ===", label);

        let password = match generate_password(&options) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("生成失败: {}", e);
                continue;
            }
        };

        let report = match check_password_strength(&password) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("评估失败: {}", e);
                continue;
            }
        };

        println!("密码: {}", password);
        println!(
            "理论熵: {:.1} bits",
            options.entropy_bits().unwrap_or(0.0)
        );
        println!("强度: {} ({}/100)", report.tier.label(), report.score);
        println!();
    }
}
