//! 密码强度评估示例
//!
//! 展示对用户输入密码的完整强度评估报告。
//!
//! 运行: cargo run --example strength_report

use passrs::check_password_strength;

fn main() {
    let samples = [
        "123456",
        "password123",
        "aaaaaaaaaaaa",
        "correcthorse",
        "aB3!xQ9#mK2$",
    ];

    for password in samples {
        let report = match check_password_strength(password) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("评估 {:?} 失败: {}", password, e);
                continue;
            }
        };

        println!("密码: {}", password);
        println!("  分数: {}/100", report.score);
        println!("  等级: {} - {}", report.tier.label(), report.tier.description());
        println!(
            "  特性: 数字={} 大写={} 小写={} 符号={} 唯一字符={}",
            report.features.has_digit,
            report.features.has_uppercase,
            report.features.has_lowercase,
            report.features.has_symbol,
            report.features.unique_chars,
        );
        if report.suggestions.is_empty() {
            println!("  建议: 无");
        } else {
            println!("  建议:");
            for suggestion in &report.suggestions {
                println!("    - {}", suggestion);
            }
        }
        println!();
    }
}
