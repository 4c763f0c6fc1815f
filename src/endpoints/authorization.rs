//! Authorize page request.
//!
//! See: <https://datatracker.ietf.org/doc/html/rfc6749#section-4.1.1>
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{
	ClientId, Scope,
	endpoints::Redirect,
	error::EncodingError,
	params::Params,
};

/// Default `response_type`, asking for an authorization code.
pub const RESPONSE_TYPE_CODE: &str = "code";

/// Query of the authorize page the user is redirected to.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorizationRequest<'a> {
	pub client_id: &'a str,

	pub redirect_uri: &'a str,

	pub response_type: &'a str,

	/// Space separated permissions. Omitted when nothing is requested.
	pub scope: Option<&'a str>,

	/// Renren extension: forces the login form even if the user already has
	/// a session.
	pub x_renew: Option<bool>,
}

impl<'a> AuthorizationRequest<'a> {
	pub fn new(client_id: &'a ClientId, redirect_uri: &'a str, response_type: &'a str) -> Self {
		Self {
			client_id: client_id.as_str(),
			redirect_uri,
			response_type,
			scope: None,
			x_renew: None,
		}
	}

	pub fn with_scope(self, scope: Option<&'a Scope>) -> Self {
		Self {
			scope: scope.map(|s| s.as_str()),
			..self
		}
	}

	pub fn with_force_relogin(self, force_relogin: bool) -> Self {
		Self {
			x_renew: force_relogin.then_some(true),
			..self
		}
	}
}

impl Redirect for AuthorizationRequest<'_> {
	fn build_query(&self) -> Result<Params, EncodingError> {
		Params::from_serialize(self)
	}
}

#[cfg(test)]
mod tests {
	use iref::uri;

	use super::*;
	use crate::ScopeBuf;

	#[test]
	fn minimal_query() {
		let request = AuthorizationRequest::new(ClientId::new("K").unwrap(), "http://cb", "code");
		let query = request.build_query().unwrap();

		assert_eq!(query.len(), 3);
		assert_eq!(query.get("client_id"), Some("K"));
		assert_eq!(query.get("redirect_uri"), Some("http://cb"));
		assert_eq!(query.get("response_type"), Some("code"));
	}

	#[test]
	fn full_redirect_uri() {
		let scope = ScopeBuf::parse_list(["read", "write"]).unwrap();
		let request = AuthorizationRequest::new(ClientId::new("K").unwrap(), "http://cb", "code")
			.with_scope(scope.as_deref())
			.with_force_relogin(true);

		let uri = request
			.redirect_uri(uri!("https://graph.renren.com/oauth/authorize"))
			.unwrap();

		assert_eq!(
			uri.as_str(),
			"https://graph.renren.com/oauth/authorize?client_id=K&redirect_uri=http%3A%2F%2Fcb&response_type=code&scope=read+write&x_renew=true"
		);
	}

	#[test]
	fn no_relogin_omits_x_renew() {
		let request = AuthorizationRequest::new(ClientId::new("K").unwrap(), "http://cb", "token")
			.with_force_relogin(false);

		assert_eq!(request.build_query().unwrap().get("x_renew"), None);
	}
}
