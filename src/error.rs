//! Error taxonomy.
//!
//! Failures fall in two families that callers usually handle differently:
//!
//! - [`ApiError`]: the remote understood the request and refused it. It
//!   carries Renren's numeric code and message.
//! - [`TransportError`], [`ParseError`] and [`EncodingError`]: something went
//!   wrong locally or on the wire. These are typically retryable by the
//!   caller's own policy.
//!
//! The library never retries nor swallows any of them.
use crate::endpoints::token::OAuthErrorResponse;

/// Any failure of a client operation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Transport(#[from] TransportError),

	#[error(transparent)]
	Parse(#[from] ParseError),

	#[error(transparent)]
	Api(#[from] ApiError),

	#[error(transparent)]
	Encoding(#[from] EncodingError),
}

impl Error {
	/// Returns the API error if the remote reported a logical failure.
	pub fn api(&self) -> Option<&ApiError> {
		match self {
			Self::Api(e) => Some(e),
			_ => None,
		}
	}

	pub fn is_api(&self) -> bool {
		matches!(self, Self::Api(_))
	}
}

/// Failure reported by the remote through the `error_code` convention.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("APIError: {code}: {message}")]
pub struct ApiError {
	pub code: i64,
	pub message: String,
}

impl ApiError {
	pub fn new(code: i64, message: impl Into<String>) -> Self {
		let message = message.into();
		log::error!("API error {code}: {message}");
		Self { code, message }
	}
}

/// Network level failure.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
	/// The request could not be sent or no response came back (DNS,
	/// connection refused, timeout, ...).
	#[error("unable to send request: {0}")]
	Request(String),

	/// The response arrived but its body could not be read or decoded.
	#[error("unable to receive response: {0}")]
	Response(String),

	/// The server answered with a non-2xx status.
	#[error("server responded with status code: {status}")]
	Status {
		status: http::StatusCode,
		body: String,
	},
}

impl TransportError {
	pub fn request(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("request error: {msg}");
		Self::Request(msg)
	}

	pub fn response(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("response error: {msg}");
		Self::Response(msg)
	}

	pub fn status(status: http::StatusCode, body: String) -> Self {
		log::error!("unexpected server response status: {status}");
		Self::Status { status, body }
	}

	/// Decodes the OAuth error body of a failed token request.
	///
	/// The token endpoint rejects bad grants with `400 Bad Request` and a
	/// JSON body such as `{"error":"invalid_grant", ...}`. Returns `None` for
	/// any other kind of failure.
	pub fn oauth_error(&self) -> Option<OAuthErrorResponse> {
		match self {
			Self::Status { body, .. } => serde_json::from_str(body).ok(),
			_ => None,
		}
	}
}

/// The response body is not valid JSON, or does not have the expected shape.
#[derive(Debug, thiserror::Error)]
#[error("unable to parse response: {0}")]
pub struct ParseError(#[source] pub serde_json::Error);

impl ParseError {
	pub fn new(e: serde_json::Error) -> Self {
		log::error!("parse error: {e}");
		Self(e)
	}
}

/// A request parameter has no text representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to encode parameters: {0}")]
pub struct EncodingError(pub String);

impl EncodingError {
	pub fn new(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("encoding error: {msg}");
		Self(msg)
	}
}
