//! 表单输入解析与结果格式化的公共工具

use chrono::{DateTime, TimeDelta, Utc};

pub use shadowpay_client::lamports_to_sol as sol;
use shadowpay_client::LAMPORTS_PER_SOL;

/// 取第 `index` 个字段值（去除首尾空白），越界时为空串
pub fn field(values: &[String], index: usize) -> &str {
    values.get(index).map_or("", |v| v.trim())
}

/// 空串视为未填写
pub fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// 解析 SOL 金额并换算为 lamports（按 1e9 截断）
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn parse_sol_to_lamports(input: &str) -> Result<i64, String> {
    let amount: f64 = input
        .parse()
        .map_err(|e| format!("invalid amount: {e}"))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(format!(
            "invalid amount: {input} is not a non-negative number"
        ));
    }

    let lamports = amount * LAMPORTS_PER_SOL;
    if lamports >= i64::MAX as f64 {
        return Err(format!("invalid amount: {input} is too large"));
    }
    Ok(lamports as i64)
}

/// 解析代币精度
pub fn parse_decimals(input: &str) -> Result<u8, String> {
    input
        .parse()
        .map_err(|e| format!("invalid decimals: {e}"))
}

/// 将“从现在起的天数”换算为 Unix 时间戳
pub fn parse_valid_until(input: &str, now: DateTime<Utc>) -> Result<i64, String> {
    let days: i64 = input
        .parse()
        .map_err(|e| format!("invalid valid days: {e}"))?;

    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_add_signed(delta))
        .map(|t| t.timestamp())
        .ok_or_else(|| format!("invalid valid days: {days} is out of range"))
}

/// 逗号分隔列表：去除空白，丢弃空项
pub fn split_and_trim(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// 超过 `max` 个字符时截断并追加 `...`
pub fn truncate_display(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Unix 时间戳格式化为 `YYYY-MM-DD HH:MM:SS UTC`
pub fn format_timestamp(ts: i64) -> String {
    DateTime::from_timestamp(ts, 0).map_or_else(
        || ts.to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}
