//! Request parameters and their form encoding.
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::EncodingError;

/// Named request parameters, each held in its text form.
///
/// Inserting a name that is already present replaces its value, which is how
/// protocol parameters take precedence over caller supplied ones.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Params(BTreeMap<String, String>);

impl Params {
	pub fn new() -> Self {
		Self::default()
	}

	/// Converts a struct or map into parameters.
	///
	/// Values must be strings, numbers or booleans. `null` values (e.g.
	/// `None` fields) are skipped. Any nested array or object has no text
	/// form and fails with an [`EncodingError`].
	pub fn from_serialize<T>(value: &T) -> Result<Self, EncodingError>
	where
		T: ?Sized + Serialize,
	{
		let fields = match serde_json::to_value(value).map_err(EncodingError::new)? {
			Value::Object(fields) => fields,
			Value::Null => return Ok(Self::new()),
			other => {
				return Err(EncodingError::new(format!(
					"expected named parameters, found {other}"
				)));
			}
		};

		let mut params = Self::new();
		for (key, value) in fields {
			let text = match value {
				Value::Null => continue,
				Value::String(s) => s,
				Value::Bool(b) => b.to_string(),
				Value::Number(n) => n.to_string(),
				Value::Array(_) | Value::Object(_) => {
					return Err(EncodingError::new(format!(
						"parameter `{key}` has no text representation"
					)));
				}
			};

			params.0.insert(key, text);
		}

		Ok(params)
	}

	/// Sets a parameter, returning the value it replaced.
	pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) -> Option<String> {
		self.0.insert(key.into(), value.to_string())
	}

	pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
		self.insert(key, value);
		self
	}

	pub fn remove(&mut self, key: &str) -> Option<String> {
		self.0.remove(key)
	}

	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.get(key).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Copies every parameter of `other` into `self`, overriding on
	/// conflict.
	pub fn extend(&mut self, other: Params) {
		self.0.extend(other.0)
	}

	/// Encodes the parameters as an `application/x-www-form-urlencoded`
	/// string.
	///
	/// Pairs are joined with `&` in key order. Reserved characters are
	/// percent-encoded and spaces become `+`.
	pub fn encode(&self) -> Result<String, EncodingError> {
		log::trace!("encoding {} parameters", self.0.len());
		serde_html_form::to_string(&self.0).map_err(EncodingError::new)
	}
}

impl<K, V> FromIterator<(K, V)> for Params
where
	K: Into<String>,
	V: ToString,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = Self::new();
		for (k, v) in iter {
			params.insert(k, v);
		}
		params
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use serde_with::skip_serializing_none;

	use super::*;

	#[test]
	fn encode_escapes_reserved_characters() {
		let params = Params::new()
			.with("redirect_uri", "http://cb/?a=1&b=2")
			.with("name", "张三");

		assert_eq!(
			params.encode().unwrap(),
			"name=%E5%BC%A0%E4%B8%89&redirect_uri=http%3A%2F%2Fcb%2F%3Fa%3D1%26b%3D2"
		);
	}

	#[test]
	fn encode_spaces_as_plus() {
		let params = Params::new().with("scope", "read write");
		assert_eq!(params.encode().unwrap(), "scope=read+write");
	}

	#[test]
	fn encode_empty() {
		assert_eq!(Params::new().encode().unwrap(), "");
	}

	#[test]
	fn primitives_use_their_text_form() {
		let params = Params::new()
			.with("uid", 222209506u64)
			.with("page", -1)
			.with("ratio", 0.5)
			.with("x_renew", true);

		assert_eq!(params.get("uid"), Some("222209506"));
		assert_eq!(params.get("page"), Some("-1"));
		assert_eq!(params.get("ratio"), Some("0.5"));
		assert_eq!(params.get("x_renew"), Some("true"));
	}

	#[test]
	fn insert_replaces() {
		let mut params = Params::new().with("method", "users.getInfo");
		let old = params.insert("method", "friends.get");
		assert_eq!(old.as_deref(), Some("users.getInfo"));
		assert_eq!(params.len(), 1);
	}

	#[test]
	fn extend_overrides() {
		let mut params = Params::new().with("format", "XML").with("uids", "1,2");
		params.extend(Params::new().with("format", "JSON"));
		assert_eq!(params.get("format"), Some("JSON"));
		assert_eq!(params.get("uids"), Some("1,2"));
	}

	#[test]
	fn from_serialize_struct() {
		#[skip_serializing_none]
		#[derive(Serialize)]
		struct GetInfo<'a> {
			uids: &'a str,
			fields: Option<&'a str>,
			count: u32,
			with_mutual: bool,
		}

		let params = Params::from_serialize(&GetInfo {
			uids: "1,2,3",
			fields: None,
			count: 10,
			with_mutual: false,
		})
		.unwrap();

		assert_eq!(params.len(), 3);
		assert_eq!(params.get("uids"), Some("1,2,3"));
		assert_eq!(params.get("count"), Some("10"));
		assert_eq!(params.get("with_mutual"), Some("false"));
		assert_eq!(params.get("fields"), None);
	}

	#[test]
	fn from_serialize_skips_null() {
		let params = Params::from_serialize(&serde_json::json!({"a": null, "b": 1})).unwrap();
		assert_eq!(params, Params::new().with("b", 1));
	}

	#[test]
	fn from_serialize_rejects_nested_values() {
		let err = Params::from_serialize(&serde_json::json!({"uids": [1, 2]})).unwrap_err();
		assert!(err.0.contains("uids"));

		assert!(Params::from_serialize(&serde_json::json!({"user": {"id": 1}})).is_err());
	}

	#[test]
	fn from_serialize_rejects_non_maps() {
		assert!(Params::from_serialize("users.getInfo").is_err());
		assert!(Params::from_serialize(&[1, 2]).is_err());
		assert!(Params::from_serialize(&()).unwrap().is_empty());
	}

	#[derive(Debug, Clone)]
	enum Primitive {
		Text(String),
		Int(i64),
		Flag(bool),
	}

	impl std::fmt::Display for Primitive {
		fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
			match self {
				Self::Text(s) => f.write_str(s),
				Self::Int(i) => write!(f, "{i}"),
				Self::Flag(b) => write!(f, "{b}"),
			}
		}
	}

	fn primitive() -> impl Strategy<Value = Primitive> {
		prop_oneof![
			any::<String>().prop_map(Primitive::Text),
			any::<i64>().prop_map(Primitive::Int),
			any::<bool>().prop_map(Primitive::Flag),
		]
	}

	proptest! {
		#![proptest_config(ProptestConfig::with_cases(64))]

		#[test]
		fn prop_encode_then_decode_preserves_pairs(
			entries in prop::collection::btree_map("[a-z_]{1,12}", primitive(), 0..8),
		) {
			let params: Params = entries.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
			let encoded = params.encode().unwrap();

			let mut decoded: Vec<(String, String)> = serde_html_form::from_str(&encoded).unwrap();
			decoded.sort();

			let mut expected: Vec<(String, String)> = entries
				.into_iter()
				.map(|(k, v)| (k, v.to_string()))
				.collect();
			expected.sort();

			prop_assert_eq!(decoded, expected);
		}
	}
}
