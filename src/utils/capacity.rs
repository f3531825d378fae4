use std::sync::LazyLock;
use regex::Regex;
use crate::error::{Result, SyncError};

pub const MEGABYTE: u64 = 1024 * 1024;
pub const GIGABYTE: u64 = MEGABYTE * 1024;

static CAPACITY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)([mMgG]?)$").expect("容量格式正規表示式無效")
});

/// 解析容量表示式：純位元組數，或加上 M / G 單位（不分大小寫，二進位倍數）
pub fn parse_capacity(input: &str) -> Result<u64> {
    let trimmed = input.trim();
    let invalid = |reason: &str| SyncError::InvalidCapacity {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("容量不可為空"));
    }
    let captures = CAPACITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| invalid("格式須為 N、NM 或 NG"))?;

    let value: u64 = captures[1]
        .parse()
        .map_err(|_| invalid("數值超出範圍"))?;
    let multiplier = match &captures[2] {
        "m" | "M" => MEGABYTE,
        "g" | "G" => GIGABYTE,
        _ => 1,
    };

    value.checked_mul(multiplier).ok_or_else(|| invalid("數值超出範圍"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_bytes() {
        assert_eq!(parse_capacity("100").unwrap(), 100);
        assert_eq!(parse_capacity("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_megabytes_case_insensitive() {
        assert_eq!(parse_capacity("1M").unwrap(), 1_048_576);
        assert_eq!(parse_capacity("1m").unwrap(), 1_048_576);
        assert_eq!(parse_capacity("750M").unwrap(), 750 * 1_048_576);
    }

    #[test]
    fn test_parse_gigabytes() {
        assert_eq!(parse_capacity("2G").unwrap(), 2 * 1_073_741_824);
        assert_eq!(parse_capacity("2g").unwrap(), 2 * 1_073_741_824);
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(parse_capacity(" 10M ").unwrap(), 10 * MEGABYTE);
    }

    #[test]
    fn test_parse_rejects_invalid_input() {
        for input in ["", "   ", "-5", "5X", "M", "1.5G", "10MB", "1 G", "abc", "١٢"] {
            let result = parse_capacity(input);
            assert!(
                matches!(result, Err(SyncError::InvalidCapacity { .. })),
                "expected failure for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        assert!(parse_capacity("99999999999999999999").is_err());
        assert!(parse_capacity("18446744073709551615G").is_err());
    }
}
