use crate::domain::model::{ConversionPair, ConversionResult, NUMERAL_RULES};
use crate::domain::ports::NumeralConverter;

/// 貪婪法轉換：由大到小套用規則表，直到餘數為 0。
/// 呼叫端須保證 `1 <= number <= 3999`。
pub fn convert_to_roman_numeral(number: u32) -> String {
    let mut remaining = number;
    let mut numeral = String::new();

    for (value, symbol) in NUMERAL_RULES {
        while remaining >= value {
            numeral.push_str(symbol);
            remaining -= value;
        }
        if remaining == 0 {
            break;
        }
    }

    numeral
}

/// 呼叫端須先通過 `validate_range(min, max)`。
pub fn convert_range_to_roman(min: u32, max: u32) -> ConversionResult {
    (min..=max)
        .map(|i| ConversionPair::new(i.to_string(), convert_to_roman_numeral(i)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RomanConverter;

impl RomanConverter {
    pub fn new() -> Self {
        Self
    }
}

impl NumeralConverter for RomanConverter {
    fn convert(&self, number: u32) -> String {
        convert_to_roman_numeral(number)
    }

    fn convert_range(&self, min: u32, max: u32) -> ConversionResult {
        convert_range_to_roman(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{MAX_VALUE, MIN_VALUE};
    use rstest::rstest;
    use std::collections::HashSet;

    /// 測試用的反向解碼：較小符號在較大符號前時相減
    fn decode(numeral: &str) -> u32 {
        let values: Vec<i64> = numeral
            .chars()
            .map(|c| match c {
                'M' => 1000,
                'D' => 500,
                'C' => 100,
                'L' => 50,
                'X' => 10,
                'V' => 5,
                'I' => 1,
                other => panic!("unexpected symbol {other}"),
            })
            .collect();

        let mut total = 0i64;
        for (i, value) in values.iter().enumerate() {
            match values.get(i + 1) {
                Some(next) if next > value => total -= value,
                _ => total += value,
            }
        }
        total as u32
    }

    #[rstest]
    #[case(1, "I")]
    #[case(4, "IV")]
    #[case(5, "V")]
    #[case(9, "IX")]
    #[case(14, "XIV")]
    #[case(40, "XL")]
    #[case(90, "XC")]
    #[case(400, "CD")]
    #[case(900, "CM")]
    #[case(1994, "MCMXCIV")]
    #[case(2024, "MMXXIV")]
    #[case(3888, "MMMDCCCLXXXVIII")]
    #[case(3999, "MMMCMXCIX")]
    fn test_convert_known_values(#[case] number: u32, #[case] expected: &str) {
        assert_eq!(convert_to_roman_numeral(number), expected);
    }

    #[test]
    fn test_round_trip_over_domain() {
        for n in MIN_VALUE..=MAX_VALUE {
            let numeral = convert_to_roman_numeral(n);
            assert!(
                numeral.chars().all(|c| "MDCLXVI".contains(c)),
                "{n} produced {numeral}"
            );
            assert_eq!(decode(&numeral), n, "{numeral} does not decode to {n}");
        }
    }

    #[test]
    fn test_length_bounds() {
        let lengths: Vec<usize> = (MIN_VALUE..=MAX_VALUE)
            .map(|n| convert_to_roman_numeral(n).len())
            .collect();
        assert!(lengths.iter().all(|len| (1..=15).contains(len)));
        assert_eq!(lengths.iter().max(), Some(&15));
    }

    #[test]
    fn test_outputs_are_distinct() {
        let outputs: HashSet<String> = (MIN_VALUE..=MAX_VALUE)
            .map(convert_to_roman_numeral)
            .collect();
        assert_eq!(outputs.len(), MAX_VALUE as usize);
    }

    #[test]
    fn test_convert_range_small() {
        assert_eq!(
            convert_range_to_roman(1, 2),
            vec![ConversionPair::new("1", "I"), ConversionPair::new("2", "II")]
        );
    }

    #[test]
    fn test_convert_range_order_and_length() {
        let pairs = convert_range_to_roman(10, 50);
        assert_eq!(pairs.len(), 41);
        for (offset, pair) in pairs.iter().enumerate() {
            let expected = 10 + offset as u32;
            assert_eq!(pair.input, expected.to_string());
            assert_eq!(pair.output, convert_to_roman_numeral(expected));
        }
    }

    #[test]
    fn test_roman_converter_delegates() {
        let converter = RomanConverter::new();
        assert_eq!(converter.convert(5), "V");
        assert_eq!(converter.convert_range(1, 3999).len(), 3999);
    }
}
