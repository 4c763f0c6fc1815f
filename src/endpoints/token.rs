//! Token endpoint: authorization code and refresh token grants.
use iref::UriBuf;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{DisplayFromStr, PickFirst, serde_as, skip_serializing_none};

use crate::{
	AccessTokenBuf, RefreshTokenBuf, Scope,
	endpoints::SendRequest,
	error::{EncodingError, Error},
	params::Params,
	response::interpret_as,
};

/// Token Request with Authorization Code Grant.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.3>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "grant_type", rename = "authorization_code")]
pub struct AuthorizationCodeTokenRequest<'a> {
	pub code: &'a str,

	pub client_id: &'a str,

	pub client_secret: &'a str,

	pub redirect_uri: &'a str,
}

impl SendRequest for AuthorizationCodeTokenRequest<'_> {
	type Response = TokenResponse;

	fn build_params(&self) -> Result<Params, EncodingError> {
		Params::from_serialize(self)
	}

	fn parse_response(&self, raw: &str) -> Result<Self::Response, Error> {
		interpret_as(raw)
	}
}

/// Token Request with Refresh Token Grant.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-6>
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "grant_type", rename = "refresh_token")]
pub struct RefreshTokenRequest<'a> {
	pub refresh_token: &'a str,

	pub client_id: &'a str,

	pub client_secret: &'a str,
}

impl SendRequest for RefreshTokenRequest<'_> {
	type Response = TokenResponse;

	fn build_params(&self) -> Result<Params, EncodingError> {
		Params::from_serialize(self)
	}

	fn parse_response(&self, raw: &str) -> Result<Self::Response, Error> {
		interpret_as(raw)
	}
}

/// Successful token endpoint response.
///
/// Any 200 response without an `error_code` is a grant, so the optional
/// fields are read leniently: `expires_in` may come as a numeric string and
/// `scope` is kept as sent.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
	pub access_token: AccessTokenBuf,

	/// Lifetime in seconds of the access token.
	#[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub expires_in: Option<u64>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<RefreshTokenBuf>,

	/// Permissions actually granted, which may differ from the requested
	/// ones. See [`granted_scope`](Self::granted_scope).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scope: Option<String>,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token_type: Option<String>,

	/// Remaining fields, such as the `user` object Renren attaches to the
	/// response.
	#[serde(flatten)]
	pub ext: Map<String, Value>,
}

impl TokenResponse {
	/// Returns the `user` object sent along with the token, if any.
	pub fn user(&self) -> Option<&Map<String, Value>> {
		self.ext.get("user").and_then(Value::as_object)
	}

	/// Returns the granted scope, or `None` when it is absent or not a
	/// well-formed scope.
	pub fn granted_scope(&self) -> Option<&Scope> {
		Scope::new(self.scope.as_deref()?).ok()
	}
}

/// OAuth error body returned with a non-2xx status by the token endpoint.
///
/// See: <https://datatracker.ietf.org/doc/html/rfc6749#section-5.2>
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthErrorResponse {
	/// A single error code string, e.g. `invalid_grant`.
	pub error: String,

	pub error_description: Option<String>,

	pub error_uri: Option<UriBuf>,
}
