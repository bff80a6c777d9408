//! Pulling the JSON payload out of a free-form model reply.
//!
//! Models asked for "JSON only" still wrap the object in prose often enough
//! that we cannot just parse the reply. Strategy: strict parse of the whole
//! trimmed reply first (accepted only when it yields a JSON object), then
//! fall back to the substring from the first `{` through the last `}`.
//! A reply with no braces, or whose delimited slice is not valid JSON,
//! fails; it never panics.

use serde_json::Value;

use crate::error::ApiError;

/// Parse the model reply into a JSON value.
///
/// No schema validation happens here: any reply that parses as a JSON
/// object is passed through unchanged, whatever its shape.
pub fn extract_payload(raw: &str) -> Result<Value, ApiError> {
  let trimmed = raw.trim();
  if let Ok(v) = serde_json::from_str::<Value>(trimmed) {
    if v.is_object() {
      return Ok(v);
    }
  }

  if let (Some(start), Some(end)) = (raw.find('{'), raw.rfind('}')) {
    if start < end {
      if let Ok(v) = serde_json::from_str::<Value>(&raw[start..=end]) {
        return Ok(v);
      }
    }
  }

  Err(ApiError::MalformedModelOutput { raw: raw.to_string() })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::{McqQuestion, McqSet};
  use serde_json::json;

  fn sample_set() -> McqSet {
    McqSet {
      title: "phonics".into(),
      questions: vec![McqQuestion {
        question: "Which word starts with the 'ph' sound?".into(),
        options: vec!["phone".into(), "dog".into(), "sun".into()],
        answer: 0,
        fun_fact: Some("The letters 'ph' together sound like 'f'!".into()),
      }],
    }
  }

  #[test]
  fn clean_json_round_trips() {
    let set = sample_set();
    let raw = serde_json::to_string(&set).unwrap();
    let v = extract_payload(&raw).unwrap();
    let back: McqSet = serde_json::from_value(v).unwrap();
    assert_eq!(back, set);
  }

  #[test]
  fn prose_wrapped_json_still_extracts() {
    let set = sample_set();
    let raw = format!(
      "Sure! Here are your questions: {} Hope that helps!",
      serde_json::to_string(&set).unwrap()
    );
    let v = extract_payload(&raw).unwrap();
    let back: McqSet = serde_json::from_value(v).unwrap();
    assert_eq!(back, set);
  }

  #[test]
  fn wrong_shape_is_passed_through_unchanged() {
    let v = extract_payload(r#"{"totally": "different", "shape": 1}"#).unwrap();
    assert_eq!(v, json!({"totally": "different", "shape": 1}));
  }

  #[test]
  fn replies_without_braces_fail() {
    for raw in ["I could not generate questions today.", "", "42"] {
      match extract_payload(raw) {
        Err(ApiError::MalformedModelOutput { .. }) => {}
        other => panic!("expected MalformedModelOutput for {raw:?}, got {other:?}"),
      }
    }
  }

  #[test]
  fn unbalanced_braces_fail() {
    let raw = r#"Here is your quiz: {"title": "grammar", "questions": ["#;
    assert!(matches!(
      extract_payload(raw),
      Err(ApiError::MalformedModelOutput { .. })
    ));
  }

  #[test]
  fn multiple_json_blocks_in_prose_fail() {
    // Known limitation of the first-to-last brace heuristic.
    let raw = r#"First {"a": 1} and second {"b": 2} block"#;
    assert!(matches!(
      extract_payload(raw),
      Err(ApiError::MalformedModelOutput { .. })
    ));
  }

  #[test]
  fn malformed_error_carries_the_raw_reply() {
    let raw = "nothing useful here";
    match extract_payload(raw) {
      Err(ApiError::MalformedModelOutput { raw: kept }) => assert_eq!(kept, raw),
      other => panic!("unexpected: {other:?}"),
    }
  }
}
