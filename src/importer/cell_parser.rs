// ==========================================
// 固定资产导入校验 - 单元格解析
// ==========================================
// 职责: 对文本单元格做全函数式解析（返回值或 None，不抛错）
// 约束: 只接受 ASCII 数字
// ==========================================

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;

/// 表格日期序列号中 1970-01-01 对应的值
pub const SERIAL_UNIX_EPOCH: f64 = 25569.0;

/// 每天毫秒数
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

// 正整数或正小数，整数部分不以 0 开头
static CONSTRUCTION_AREA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*(\.[0-9]+)?$").unwrap());

static UNSIGNED_INTEGER_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

// 11 位手机号，以 1 开头
static MOBILE_PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^1[0-9]{10}$").unwrap());

/// 解析建筑面积
///
/// # 返回
/// - Some(f64): 满足正数格式
/// - None: 格式不符（含 0、负数、前导 0、科学计数法）
pub fn parse_construction_area(raw: &str) -> Option<f64> {
    if !CONSTRUCTION_AREA_PATTERN.is_match(raw) {
        return None;
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// 是否为无符号整数文本
pub fn is_unsigned_integer(raw: &str) -> bool {
    UNSIGNED_INTEGER_PATTERN.is_match(raw)
}

/// 是否为 11 位手机号
pub fn is_mobile_phone(raw: &str) -> bool {
    MOBILE_PHONE_PATTERN.is_match(raw)
}

/// 表格日期序列号 → Unix 毫秒
///
/// `epoch_millis = round((serial - 25569) * 86400 * 1000)`，
/// 0.5 向 +∞ 取整。无法解析或超出日期范围时返回 None。
pub fn serial_to_epoch_millis(raw: &str) -> Option<i64> {
    let serial = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    let millis = ((serial - SERIAL_UNIX_EPOCH) * MILLIS_PER_DAY + 0.5).floor();

    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }

    DateTime::from_timestamp_millis(millis as i64).map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_construction_area_pattern() {
        assert_eq!(parse_construction_area("10.5"), Some(10.5));
        assert_eq!(parse_construction_area("89"), Some(89.0));
        assert_eq!(parse_construction_area("0"), None);
        assert_eq!(parse_construction_area("-5"), None);
        assert_eq!(parse_construction_area("0.5"), None);
        assert_eq!(parse_construction_area("012"), None);
        assert_eq!(parse_construction_area("1e5"), None);
        assert_eq!(parse_construction_area("12."), None);
        assert_eq!(parse_construction_area("１２"), None);
    }

    #[test]
    fn test_unsigned_integer() {
        assert!(is_unsigned_integer("25569"));
        assert!(is_unsigned_integer("0"));
        assert!(!is_unsigned_integer("25569.5"));
        assert!(!is_unsigned_integer("2020-01-01"));
        assert!(!is_unsigned_integer(""));
    }

    #[test]
    fn test_mobile_phone() {
        assert!(is_mobile_phone("13800138000"));
        assert!(!is_mobile_phone("12345"));
        assert!(!is_mobile_phone("23800138000"));
        assert!(!is_mobile_phone("138001380001"));
    }

    #[test]
    fn test_serial_epoch() {
        assert_eq!(serial_to_epoch_millis("25569"), Some(0));
        assert_eq!(serial_to_epoch_millis("25570"), Some(86_400_000));

        let expected = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            serial_to_epoch_millis("44197"),
            Some(expected.timestamp_millis())
        );
    }

    #[test]
    fn test_serial_fraction_and_garbage() {
        // 半天
        assert_eq!(serial_to_epoch_millis("25569.5"), Some(43_200_000));
        assert_eq!(serial_to_epoch_millis("abc"), None);
        assert_eq!(serial_to_epoch_millis("1e300"), None);
    }

    #[test]
    fn test_serial_out_of_chrono_range() {
        // i64 毫秒可表示，但超出 chrono 日期范围
        assert_eq!(serial_to_epoch_millis("99999999999"), None);
        // 超出 i64 毫秒范围
        assert_eq!(serial_to_epoch_millis("99999999999999999999"), None);
    }
}
