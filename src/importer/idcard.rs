// ==========================================
// 固定资产导入校验 - 居民身份证号校验
// ==========================================
// 规则: 18 位；前 17 位数字（首位 1-9）；第 7-14 位为合法出生日期；
//       末位为 ISO 7064 MOD 11-2 校验码（0-9 或 X）
// ==========================================

use chrono::NaiveDate;

const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];
const CHECK_CODES: [char; 11] = ['1', '0', 'X', '9', '8', '7', '6', '5', '4', '3', '2'];

/// 校验身份证号
pub fn verify(idcard: &str) -> bool {
    let chars: Vec<char> = idcard.chars().collect();
    if chars.len() != 18 {
        return false;
    }

    let body = &chars[..17];
    if !body.iter().all(|c| c.is_ascii_digit()) || body[0] == '0' {
        return false;
    }

    if birth_date(&body[6..14]).is_none() {
        return false;
    }

    let sum: u32 = body
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(c, w)| c.to_digit(10).unwrap_or(0) * w)
        .sum();

    chars[17].to_ascii_uppercase() == CHECK_CODES[(sum % 11) as usize]
}

/// 出生日期（YYYYMMDD）
fn birth_date(digits: &[char]) -> Option<NaiveDate> {
    let text: String = digits.iter().collect();
    let year = text.get(0..4)?.parse::<i32>().ok()?;
    let month = text.get(4..6)?.parse::<u32>().ok()?;
    let day = text.get(6..8)?.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
