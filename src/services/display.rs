//! Turns a raw backend reply into the text shown to the user.

use serde_json::Value;

/// Fields checked in order for the answer text.
const ANSWER_FIELDS: [&str; 2] = ["answer", "result"];

/// Derive the display text for a successful reply body.
///
/// A JSON object yields its `answer` field, then its `result` field, then the
/// whole object pretty-printed. Anything that is not a JSON object is shown
/// verbatim.
pub fn reply_text(raw: &str) -> String {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
        return raw.to_string();
    };

    if let Some(value) = ANSWER_FIELDS.iter().find_map(|field| map.get(*field)) {
        return field_text(value);
    }

    serde_json::to_string_pretty(&Value::Object(map)).unwrap_or_else(|_| raw.to_string())
}

fn field_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_wins_over_result() {
        assert_eq!(reply_text(r#"{"answer": "42"}"#), "42");
        assert_eq!(reply_text(r#"{"result": "ok", "answer": "first"}"#), "first");
    }

    #[test]
    fn result_used_without_answer() {
        assert_eq!(reply_text(r#"{"result": "ok"}"#), "ok");
    }

    #[test]
    fn other_objects_are_pretty_printed() {
        assert_eq!(reply_text(r#"{"x":1}"#), "{\n  \"x\": 1\n}");
    }

    #[test]
    fn pretty_print_keeps_key_order() {
        assert_eq!(
            reply_text(r#"{"zeta": 1, "alpha": 2}"#),
            "{\n  \"zeta\": 1,\n  \"alpha\": 2\n}"
        );
    }

    #[test]
    fn non_object_bodies_are_verbatim() {
        assert_eq!(reply_text("plain text"), "plain text");
        assert_eq!(reply_text("[1, 2]"), "[1, 2]");
        assert_eq!(reply_text(""), "");
    }

    #[test]
    fn non_string_fields_render_as_json() {
        assert_eq!(reply_text(r#"{"answer": 42}"#), "42");
        assert_eq!(reply_text(r#"{"result": {"a": true}}"#), r#"{"a":true}"#);
    }
}
