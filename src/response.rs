//! Response interpretation.
//!
//! Renren signals logical failures inside a successful HTTP response: the
//! body is a JSON object carrying an `error_code` (and an `error_msg`). List
//! shaped results never carry that convention and are always successes.
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{ApiError, Error, ParseError};

/// Name of the field carrying the error code.
pub const ERROR_CODE: &str = "error_code";

/// Name of the field carrying the error message.
pub const ERROR_MSG: &str = "error_msg";

/// Code reported when `error_code` is set but is not a number.
pub const UNKNOWN_ERROR_CODE: i64 = -1;

/// Parses `raw` as JSON and separates success payloads from API errors.
///
/// - arrays are returned as they are, whatever they contain;
/// - objects with a truthy `error_code` become an [`ApiError`];
/// - anything else is returned as the success payload.
///
/// `error_code` values of `0`, `""`, `false`, `null` or an empty
/// collection count as "no error".
pub fn interpret(raw: &str) -> Result<Value, Error> {
	let value: Value = serde_json::from_str(raw).map_err(ParseError::new)?;

	if let Value::Object(fields) = &value {
		if let Some(e) = api_error(fields) {
			return Err(e.into());
		}
	}

	Ok(value)
}

/// Interprets `raw` and deserializes the success payload into `T`.
pub fn interpret_as<T: DeserializeOwned>(raw: &str) -> Result<T, Error> {
	let value = interpret(raw)?;
	Ok(serde_json::from_value(value).map_err(ParseError::new)?)
}

fn api_error(fields: &Map<String, Value>) -> Option<ApiError> {
	let code = fields.get(ERROR_CODE).filter(|v| is_truthy(v))?;

	let code_number = match code {
		Value::Number(n) => n
			.as_i64()
			.or_else(|| n.as_f64().map(|f| f as i64))
			.unwrap_or(UNKNOWN_ERROR_CODE),
		Value::String(s) => s.trim().parse().unwrap_or(UNKNOWN_ERROR_CODE),
		Value::Bool(true) => 1,
		_ => UNKNOWN_ERROR_CODE,
	};

	let message = match fields.get(ERROR_MSG) {
		Some(Value::String(s)) => s.clone(),
		Some(Value::Null) | None => match code {
			Value::String(s) if code_number == UNKNOWN_ERROR_CODE => s.clone(),
			_ => String::new(),
		},
		Some(other) => other.to_string(),
	};

	Some(ApiError::new(code_number, message))
}

fn is_truthy(value: &Value) -> bool {
	match value {
		Value::Null => false,
		Value::Bool(b) => *b,
		Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
		Value::String(s) => !s.is_empty(),
		Value::Array(a) => !a.is_empty(),
		Value::Object(o) => !o.is_empty(),
	}
}
