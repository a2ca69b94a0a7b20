//! Integer fields that clients send either as numbers or as numeric strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Str(String),
}

/// Accepts `3`, `"3"` and `null`; any other string is an error.
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(n)) => Ok(Some(n)),
        Some(IntOrString::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(IntOrString::Str(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {:?}", s))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "opt_i64")]
        value: Option<i64>,
    }

    fn probe(json: &str) -> Result<Option<i64>, serde_json::Error> {
        serde_json::from_str::<Probe>(json).map(|p| p.value)
    }

    #[test]
    fn test_accepts_number_and_numeric_string() {
        assert_eq!(probe(r#"{"value": 4}"#).unwrap(), Some(4));
        assert_eq!(probe(r#"{"value": " 4 "}"#).unwrap(), Some(4));
    }

    #[test]
    fn test_missing_null_and_blank_are_none() {
        assert_eq!(probe("{}").unwrap(), None);
        assert_eq!(probe(r#"{"value": null}"#).unwrap(), None);
        assert_eq!(probe(r#"{"value": ""}"#).unwrap(), None);
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(probe(r#"{"value": "four"}"#).is_err());
        assert!(probe(r#"{"value": 1.5}"#).is_err());
    }
}
