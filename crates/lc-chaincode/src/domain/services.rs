//! # Domain Services
//!
//! Record codec: pure functions between domain entities and their
//! canonical byte encoding. No state access happens here.

use crate::domain::entities::{LetterOfCredit, RecordIndex, RECORD_FIELDS};
use crate::errors::ChaincodeError;

// =============================================================================
// LETTER OF CREDIT CODEC
// =============================================================================

/// Decode a letter of credit from its JSON payload.
///
/// Missing or `null` string fields default to empty and unknown fields are
/// ignored. Field names match case-insensitively (`"CUSIP"` fills the id);
/// an exact-case key wins over a differently-cased duplicate. The id is
/// required: a payload without a non-empty `cusip` is rejected.
///
/// # Errors
///
/// Returns `ChaincodeError::Decode` if the payload is not a JSON object of
/// the record shape or carries no id.
pub fn decode_record(payload: &[u8]) -> Result<LetterOfCredit, ChaincodeError> {
    let value: serde_json::Value =
        serde_json::from_slice(payload).map_err(|e| ChaincodeError::Decode(e.to_string()))?;

    // Derived struct deserialization would also accept positional arrays
    let serde_json::Value::Object(fields) = value else {
        return Err(ChaincodeError::Decode("expected a JSON object".to_string()));
    };

    let record: LetterOfCredit = serde_json::from_value(serde_json::Value::Object(fold_field_names(fields)))
        .map_err(|e| ChaincodeError::Decode(e.to_string()))?;

    if record.id.is_empty() {
        return Err(ChaincodeError::Decode("missing cusip".to_string()));
    }

    Ok(record)
}

/// Rename differently-cased record keys to their wire names.
///
/// Exact-case keys are kept as given and shadow any folded duplicate.
/// Keys that match no record field pass through and are ignored later.
fn fold_field_names(
    fields: serde_json::Map<String, serde_json::Value>,
) -> serde_json::Map<String, serde_json::Value> {
    let mut exact = serde_json::Map::new();
    let mut folded = serde_json::Map::new();

    for (key, value) in fields {
        let lower = key.to_lowercase();
        if lower != key && RECORD_FIELDS.contains(&lower.as_str()) {
            folded.insert(lower, value);
        } else {
            exact.insert(key, value);
        }
    }

    for (key, value) in folded {
        if !exact.contains_key(&key) {
            exact.insert(key, value);
        }
    }
    exact
}

/// Encode a letter of credit canonically (compact JSON, fixed field order).
///
/// # Errors
///
/// Returns `ChaincodeError::Encode` if serialization fails.
pub fn encode_record(record: &LetterOfCredit) -> Result<Vec<u8>, ChaincodeError> {
    serde_json::to_vec(record).map_err(|e| ChaincodeError::Encode(e.to_string()))
}

// =============================================================================
// INDEX CODEC
// =============================================================================

/// Decode a stored index value.
///
/// Empty bytes (absent key) decode to an empty index.
///
/// # Errors
///
/// Returns `ChaincodeError::Decode` if the bytes are present but are not a
/// JSON array of strings.
pub fn decode_index(bytes: &[u8]) -> Result<RecordIndex, ChaincodeError> {
    if bytes.is_empty() {
        return Ok(RecordIndex::new());
    }
    serde_json::from_slice(bytes).map_err(|e| ChaincodeError::Decode(e.to_string()))
}

/// Encode the index as a JSON array of strings.
///
/// # Errors
///
/// Returns `ChaincodeError::Encode` if serialization fails.
pub fn encode_index(index: &RecordIndex) -> Result<Vec<u8>, ChaincodeError> {
    serde_json::to_vec(index).map_err(|e| ChaincodeError::Encode(e.to_string()))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const ACME: &str = r#"{"cusip":"LC1","name":"Acme","conracttype":"standby","vendor":"V1","price":"1000","bank":"B1","date":"2016-01-01"}"#;

    #[test]
    fn test_decode_full_record() {
        let lc = decode_record(ACME.as_bytes()).unwrap();
        assert_eq!(lc.id, "LC1");
        assert_eq!(lc.name, "Acme");
        assert_eq!(lc.contract_type, "standby");
        assert_eq!(lc.vendor, "V1");
        assert_eq!(lc.price, "1000");
        assert_eq!(lc.bank, "B1");
        assert_eq!(lc.date, "2016-01-01");
    }

    #[test]
    fn test_canonical_encoding_matches_wire_order() {
        let lc = decode_record(ACME.as_bytes()).unwrap();
        let bytes = encode_record(&lc).unwrap();
        assert_eq!(bytes, ACME.as_bytes());
    }

    #[test]
    fn test_canonical_encoding_normalizes_layout() {
        let spaced = r#"{ "date": "d", "cusip": "LC9", "extra": 1 }"#;
        let lc = decode_record(spaced.as_bytes()).unwrap();
        let bytes = encode_record(&lc).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"cusip":"LC9","name":"","conracttype":"","vendor":"","price":"","bank":"","date":"d"}"#
        );
    }

    #[test]
    fn test_price_is_not_parsed() {
        let lc = decode_record(br#"{"cusip":"LC2","price":"12.3400000000000000001"}"#).unwrap();
        assert_eq!(lc.price, "12.3400000000000000001");
    }

    #[test]
    fn test_decode_rejects_malformed_payloads() {
        let payloads: &[&[u8]] = &[
            b"not json",
            b"",
            b"[]",
            br#"["LC1","Acme"]"#,
            b"\"LC1\"",
            br#"{"cusip":5}"#,
            br#"{"name":"no id"}"#,
            br#"{"cusip":""}"#,
        ];
        for payload in payloads {
            assert!(
                matches!(decode_record(payload), Err(ChaincodeError::Decode(_))),
                "payload {:?} should be rejected",
                String::from_utf8_lossy(payload)
            );
        }
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let lc = decode_record(br#"{"cusip":"LC1","name":null,"price":"1","date":null}"#).unwrap();
        assert_eq!(lc.id, "LC1");
        assert_eq!(lc.name, "");
        assert_eq!(lc.price, "1");
        assert_eq!(lc.date, "");
    }

    #[test]
    fn test_null_id_is_rejected_as_missing() {
        assert!(matches!(
            decode_record(br#"{"cusip":null,"name":"Acme"}"#),
            Err(ChaincodeError::Decode(_))
        ));
    }

    #[test]
    fn test_field_names_match_case_insensitively() {
        let lc = decode_record(br#"{"CUSIP":"LC1","Name":"Acme","ConractType":"standby"}"#)
            .unwrap();
        assert_eq!(lc.id, "LC1");
        assert_eq!(lc.name, "Acme");
        assert_eq!(lc.contract_type, "standby");
        assert_eq!(
            encode_record(&lc).unwrap(),
            br#"{"cusip":"LC1","name":"Acme","conracttype":"standby","vendor":"","price":"","bank":"","date":""}"#
        );
    }

    #[test]
    fn test_exact_case_key_wins_over_folded_duplicate() {
        let lc = decode_record(br#"{"Name":"folded","cusip":"LC1","name":"exact"}"#).unwrap();
        assert_eq!(lc.name, "exact");
    }

    #[test]
    fn test_empty_index_bytes_decode_to_empty() {
        assert!(decode_index(b"").unwrap().is_empty());
        assert!(decode_index(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_index_decode_rejects_non_list() {
        assert!(decode_index(b"seed").is_err());
        assert!(decode_index(br#"{"a":1}"#).is_err());
    }

    #[test]
    fn test_index_encoding() {
        let mut index = decode_index(br#"["LC1"]"#).unwrap();
        index.push("LC2");
        assert_eq!(encode_index(&index).unwrap(), br#"["LC1","LC2"]"#);
    }
}
