use crate::domain::model::{MAX_VALUE, MIN_VALUE};
use crate::utils::error::{RomanError, Result};

pub const INVALID_NUMBER_MESSAGE: &str =
    "Invalid input. Please provide a whole number between 1 and 3999.";
pub const INVALID_RANGE_MESSAGE: &str =
    "Invalid range. Ensure min < max and both are in the range 1-3999.";

/// 解析單一數字：只接受不帶正負號的十進位數字字串，且值必須在 1..=3999。
pub fn validate_and_parse_text(raw: &str) -> Result<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RomanError::invalid_input(INVALID_NUMBER_MESSAGE));
    }

    // 位數過多會溢位，同樣視為無效輸入
    let number: u32 = raw
        .parse()
        .map_err(|_| RomanError::invalid_input(INVALID_NUMBER_MESSAGE))?;

    if !(MIN_VALUE..=MAX_VALUE).contains(&number) {
        return Err(RomanError::invalid_input(INVALID_NUMBER_MESSAGE));
    }

    Ok(number)
}

/// `min == max` 也會被拒絕，區間至少要有兩個數字。
pub fn validate_range(min: i64, max: i64) -> Result<()> {
    if min < i64::from(MIN_VALUE) || max > i64::from(MAX_VALUE) || min >= max {
        return Err(RomanError::invalid_input(INVALID_RANGE_MESSAGE));
    }
    Ok(())
}

pub fn validate_range_size(min: i64, max: i64, limit: usize) -> Result<()> {
    let requested = max - min + 1;
    if requested > limit as i64 {
        return Err(RomanError::invalid_input(format!(
            "Range too large: {} values requested, at most {} are allowed.",
            requested, limit
        )));
    }
    Ok(())
}

/// 區間參數以文字傳入；前後空白會先去除，允許正負號，範圍檢查交給 `validate_range`。
pub fn parse_bound(name: &str, raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        RomanError::invalid_input(format!(
            "Invalid value '{}' for parameter '{}': must be an integer.",
            raw, name
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", 1)]
    #[case("5", 5)]
    #[case("007", 7)]
    #[case("1994", 1994)]
    #[case("3999", 3999)]
    fn test_validate_and_parse_text_accepts(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(validate_and_parse_text(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("4000")]
    #[case("abc")]
    #[case("invalid")]
    #[case("-5")]
    #[case("+5")]
    #[case(" 5")]
    #[case("5 ")]
    #[case("12.5")]
    #[case("99999999999999999999")]
    fn test_validate_and_parse_text_rejects(#[case] raw: &str) {
        let err = validate_and_parse_text(raw).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.user_friendly_message(), INVALID_NUMBER_MESSAGE);
    }

    #[test]
    fn test_validate_range_accepts_full_domain() {
        assert!(validate_range(1, 3999).is_ok());
        assert!(validate_range(1, 2).is_ok());
    }

    #[rstest]
    #[case(5, 3)]
    #[case(3, 3)]
    #[case(0, 10)]
    #[case(-4, 10)]
    #[case(1, 4000)]
    fn test_validate_range_rejects(#[case] min: i64, #[case] max: i64) {
        let err = validate_range(min, max).unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(err.user_friendly_message(), INVALID_RANGE_MESSAGE);
    }

    #[test]
    fn test_validate_range_size() {
        assert!(validate_range_size(1, 3999, 3999).is_ok());
        assert!(validate_range_size(1, 10, 10).is_ok());

        let err = validate_range_size(1, 11, 10).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("11 values requested"));
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("min", "42").unwrap(), 42);
        assert_eq!(parse_bound("min", "-5").unwrap(), -5);
        assert_eq!(parse_bound("min", " 1").unwrap(), 1);
        assert_eq!(parse_bound("max", "5 ").unwrap(), 5);

        let err = parse_bound("max", "abc").unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.to_string().contains("'max'"));
        assert!(parse_bound("max", "").is_err());
    }
}
