use serde::{Deserialize, Serialize};

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 3999;

/// 依數值遞減排列的減法記數規則表
pub const NUMERAL_RULES: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionPair {
    pub input: String,
    pub output: String,
}

impl ConversionPair {
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

pub type ConversionResult = Vec<ConversionPair>;

/// 區間轉換的回應外層：`{"conversions": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub conversions: ConversionResult,
}

impl From<ConversionResult> for ConversionResponse {
    fn from(conversions: ConversionResult) -> Self {
        Self { conversions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_strictly_decreasing() {
        assert!(NUMERAL_RULES.windows(2).all(|w| w[0].0 > w[1].0));
        assert_eq!(NUMERAL_RULES.last(), Some(&(1, "I")));
    }

    #[test]
    fn test_response_serialization() {
        let response = ConversionResponse::from(vec![
            ConversionPair::new("1", "I"),
            ConversionPair::new("2", "II"),
        ]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "conversions": [
                    {"input": "1", "output": "I"},
                    {"input": "2", "output": "II"}
                ]
            })
        );
    }
}
