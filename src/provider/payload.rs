//! Decoding of the platform's JSON error bodies.

// self
use crate::_prelude::*;

/// Error payload found in a failed response body.
///
/// The shape is decided once, when the body is inspected, so message formatting is a plain
/// match over the variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorPayload {
	/// `{"error": {"type": .., "message": .., "field"?: ..}}`
	Structured {
		/// Error type, such as `request`.
		kind: String,
		/// Human-readable message.
		message: String,
		/// Offending request field, if any.
		field: Option<String>,
	},
	/// `{"error": "..."}`, or an `error` object missing `type` or `message`.
	Simple {
		/// Raw error value; non-string values keep their JSON text.
		message: String,
		/// Offending request field, if any.
		field: Option<String>,
	},
	/// No usable `error` member.
	Absent,
}
impl ErrorPayload {
	/// Inspects a parsed response body.
	///
	/// A missing or `null` `error` member, and bodies that are not JSON objects, yield
	/// [`ErrorPayload::Absent`].
	pub fn from_body(body: &JsonValue) -> Self {
		let Some(error) = body.get("error").filter(|value| !value.is_null()) else {
			return Self::Absent;
		};

		match error {
			JsonValue::Object(members) => {
				let field = members.get("field").and_then(scalar_text);

				match (
					members.get("type").and_then(scalar_text),
					members.get("message").and_then(scalar_text),
				) {
					(Some(kind), Some(message)) => Self::Structured { kind, message, field },
					_ => Self::Simple { message: error.to_string(), field },
				}
			},
			other => Self::Simple {
				message: scalar_text(other).unwrap_or_else(|| other.to_string()),
				field: None,
			},
		}
	}

	/// Offending request field, when the payload names one.
	pub fn field(&self) -> Option<&str> {
		match self {
			Self::Structured { field, .. } | Self::Simple { field, .. } => field.as_deref(),
			Self::Absent => None,
		}
	}

	/// Assembles the diagnostic message, using `reason_phrase` when no payload is present.
	pub fn to_message(&self, reason_phrase: &str) -> String {
		let mut message = match self {
			Self::Structured { kind, message, .. } => format!("[{kind}] {message}"),
			Self::Simple { message, .. } => message.clone(),
			Self::Absent => reason_phrase.to_owned(),
		};

		if let Some(field) = self.field() {
			message.push_str(&format!(" (field: {field})"));
		}

		message
	}
}

fn scalar_text(value: &JsonValue) -> Option<String> {
	match value {
		JsonValue::String(text) => Some(text.clone()),
		JsonValue::Number(number) => Some(number.to_string()),
		JsonValue::Bool(flag) => Some(flag.to_string()),
		JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use serde_json::json;
	// self
	use super::*;

	#[test]
	fn structured_errors_format_type_message_and_field() {
		let payload = ErrorPayload::from_body(&json!({
			"error": { "type": "invalid_request", "message": "bad field", "field": "amount" }
		}));

		assert_eq!(
			payload,
			ErrorPayload::Structured {
				kind: "invalid_request".into(),
				message: "bad field".into(),
				field: Some("amount".into()),
			}
		);
		assert_eq!(payload.to_message("ignored"), "[invalid_request] bad field (field: amount)");
	}

	#[test]
	fn simple_errors_use_raw_value() {
		let payload = ErrorPayload::from_body(&json!({ "error": "something broke" }));

		assert_eq!(payload.to_message("ignored"), "something broke");

		let payload = ErrorPayload::from_body(&json!({ "error": 503 }));

		assert_eq!(payload.to_message("ignored"), "503");
	}

	#[test]
	fn incomplete_objects_fall_back_to_json_text_and_keep_field() {
		let payload =
			ErrorPayload::from_body(&json!({ "error": { "field": "id", "message": "no type" } }));

		assert!(matches!(payload, ErrorPayload::Simple { .. }));
		assert_eq!(payload.field(), Some("id"));
		assert_eq!(
			payload.to_message("ignored"),
			"{\"field\":\"id\",\"message\":\"no type\"} (field: id)"
		);
	}

	#[test]
	fn missing_or_null_errors_use_reason_phrase() {
		for body in [json!({}), json!({ "error": null }), json!("<html>"), json!([1, 2])] {
			let payload = ErrorPayload::from_body(&body);

			assert_eq!(payload, ErrorPayload::Absent);
			assert_eq!(payload.to_message("Unprocessable Entity"), "Unprocessable Entity");
		}
	}
}
