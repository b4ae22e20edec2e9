//! Validator Property Tests
//!
//! - Every required field that is absent or "" yields exactly one message
//! - Messages follow the order the fields were requested in
//! - Falsy values other than "" count as present
//! - Validation is deterministic

use serde_json::json;
use votetally::schema::{validate, NewCandidate, NewVote, Payload, ValidationError};

const CANDIDATE_FIELDS: &[&str] = &["first_name", "last_name", "industry_connected"];

/// Absent and empty fields are both reported, in request order.
#[test]
fn test_one_message_per_missing_field() {
    let payload = json!({"first_name": "", "industry_connected": 1});
    let result = validate(&payload, CANDIDATE_FIELDS);

    assert!(!result.is_valid());
    assert_eq!(
        result.messages(),
        &["No first_name specified.", "No last_name specified."]
    );
}

#[test]
fn test_single_missing_field() {
    let payload = json!({"first_name": "A"});
    let result = validate(&payload, &["first_name", "last_name"]);
    assert_eq!(result.messages(), &["No last_name specified."]);
}

#[test]
fn test_falsy_values_are_present() {
    let payload = json!({"first_name": "Ada", "last_name": "Byron", "industry_connected": 0});
    assert!(validate(&payload, CANDIDATE_FIELDS).is_valid());

    let payload = json!({"first_name": "Ada", "last_name": "Byron", "industry_connected": false});
    assert!(validate(&payload, CANDIDATE_FIELDS).is_valid());
}

/// Whitespace is not the empty string.
#[test]
fn test_whitespace_is_present() {
    let payload = json!({"email": " "});
    assert!(validate(&payload, &["email"]).is_valid());
}

#[test]
fn test_non_object_payload_misses_everything() {
    for payload in [json!(null), json!([]), json!("voter_id")] {
        let result = validate(&payload, &["voter_id", "candidate_id"]);
        assert_eq!(result.messages().len(), 2);
    }
}

#[test]
fn test_no_required_fields_is_always_valid() {
    assert!(validate(&json!({}), &[]).is_valid());
}

#[test]
fn test_validation_is_deterministic() {
    let payload = json!({"last_name": "Woolf"});
    let first = validate(&payload, CANDIDATE_FIELDS);
    for _ in 0..100 {
        assert_eq!(validate(&payload, CANDIDATE_FIELDS), first);
    }
}

/// Multiple messages are joined by single spaces for the error envelope.
#[test]
fn test_error_text_joins_messages() {
    let err = NewVote::from_payload(&json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "No voter_id specified. No candidate_id specified."
    );
}

#[test]
fn test_wrong_type_is_malformed() {
    let payload = json!({"first_name": "Ada", "last_name": "Byron", "industry_connected": "yes"});
    let err = NewCandidate::from_payload(&payload).unwrap_err();
    assert!(matches!(err, ValidationError::Malformed(_)));
}

/// Form bodies deliver every value as a string.
#[test]
fn test_string_encoded_values_accepted() {
    let vote = NewVote::from_payload(&json!({"voter_id": "4", "candidate_id": "2"})).unwrap();
    assert_eq!(vote.voter_id, 4);
    assert_eq!(vote.candidate_id, 2);

    let payload = json!({"first_name": "Ada", "last_name": "Byron", "industry_connected": "0"});
    assert!(!NewCandidate::from_payload(&payload).unwrap().industry_connected);
}
