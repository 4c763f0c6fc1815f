//! API server method calls.
use std::{
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use serde_json::Value;

use crate::{
	AccessToken,
	endpoints::SendRequest,
	error::{EncodingError, Error},
	params::Params,
	response::interpret,
};

/// Response format requested from the API server.
pub const FORMAT_JSON: &str = "JSON";

/// A call to a named API method, e.g. `users.getInfo`.
///
/// The protocol parameters (`method`, `access_token`, `call_id`, `v` and
/// `format`) always win over caller parameters of the same name.
#[derive(Debug, Clone)]
pub struct MethodCall<'a> {
	pub method: &'a str,
	pub access_token: Option<&'a AccessToken>,
	pub call_id: u64,
	pub version: &'a str,
	pub params: Params,
}

impl SendRequest for MethodCall<'_> {
	type Response = Value;

	fn build_params(&self) -> Result<Params, EncodingError> {
		let mut params = self.params.clone();

		params.insert("method", self.method);
		params.insert("call_id", self.call_id);
		params.insert("v", self.version);
		params.insert("format", FORMAT_JSON);

		match self.access_token {
			Some(token) => {
				params.insert("access_token", token.as_str());
			}
			None => {
				params.remove("access_token");
			}
		}

		Ok(params)
	}

	fn parse_response(&self, raw: &str) -> Result<Self::Response, Error> {
		interpret(raw)
	}
}

/// Source of strictly increasing call identifiers.
///
/// Identifiers are the current Unix time in milliseconds. When the clock has
/// not moved (or went backwards) since the last call, the previous identifier
/// plus one is used instead.
#[derive(Debug, Default)]
pub struct CallIdGenerator {
	last: AtomicU64,
}

impl CallIdGenerator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn next_id(&self) -> u64 {
		let now = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.map(|d| d.as_millis() as u64)
			.unwrap_or_default();

		let next = |last: u64| now.max(last.saturating_add(1));

		// The closure never returns `None`, so both arms carry the previous value.
		let last = match self
			.last
			.fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| Some(next(last)))
		{
			Ok(last) | Err(last) => last,
		};

		next(last)
	}
}
