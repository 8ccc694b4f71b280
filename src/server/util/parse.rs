use serde::{Deserialize, Deserializer};

/// Deserializes an optional integer that may arrive as a JSON number or a
/// numeric string. Admin panels tend to submit ordering fields as strings,
/// so both forms are accepted.
pub fn int_or_string<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntOrString {
        Int(i32),
        Str(String),
    }

    match Option::<IntOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IntOrString::Int(value)) => Ok(Some(value)),
        Some(IntOrString::Str(value)) => value
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Payload {
        #[serde(default, deserialize_with = "super::int_or_string")]
        order: Option<i32>,
    }

    #[test]
    fn accepts_number() {
        let payload: Payload = serde_json::from_str(r#"{"order": 3}"#).unwrap();
        assert_eq!(payload.order, Some(3));
    }

    #[test]
    fn accepts_numeric_string() {
        let payload: Payload = serde_json::from_str(r#"{"order": " 7 "}"#).unwrap();
        assert_eq!(payload.order, Some(7));
    }

    #[test]
    fn defaults_to_none_when_absent() {
        let payload: Payload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.order, None);
    }

    #[test]
    fn rejects_non_numeric_string() {
        let result: Result<Payload, _> = serde_json::from_str(r#"{"order": "first"}"#);
        assert!(result.is_err());
    }
}
