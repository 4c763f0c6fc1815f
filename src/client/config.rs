use iref::UriBuf;

use crate::endpoints::authorization::RESPONSE_TYPE_CODE;

/// Renren authorize page.
pub const AUTHORIZE_URI: &str = "https://graph.renren.com/oauth/authorize";

/// Renren token endpoint.
pub const TOKEN_URI: &str = "https://graph.renren.com/oauth/token";

/// Renren API server.
pub const API_SERVER: &str = "https://api.renren.com/restserver.do";

/// API version sent with every method call.
pub const API_VERSION: &str = "1.0";

/// Endpoints and protocol constants used by an [`ApiClient`](super::ApiClient).
///
/// The default targets the Renren production servers. Overriding the
/// endpoints is mostly useful to point the client at a test server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
	pub authorize_uri: UriBuf,
	pub token_uri: UriBuf,
	pub api_server: UriBuf,
	pub api_version: String,
	pub response_type: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			authorize_uri: builtin_uri(AUTHORIZE_URI),
			token_uri: builtin_uri(TOKEN_URI),
			api_server: builtin_uri(API_SERVER),
			api_version: API_VERSION.to_owned(),
			response_type: RESPONSE_TYPE_CODE.to_owned(),
		}
	}
}

fn builtin_uri(uri: &str) -> UriBuf {
	// UNWRAP SAFETY: only called with the constants above.
	UriBuf::new(uri.as_bytes().to_vec()).unwrap()
}

impl ClientConfig {
	pub fn with_authorize_uri(self, authorize_uri: UriBuf) -> Self {
		Self {
			authorize_uri,
			..self
		}
	}

	pub fn with_token_uri(self, token_uri: UriBuf) -> Self {
		Self { token_uri, ..self }
	}

	pub fn with_api_server(self, api_server: UriBuf) -> Self {
		Self { api_server, ..self }
	}

	pub fn with_api_version(self, api_version: impl Into<String>) -> Self {
		Self {
			api_version: api_version.into(),
			..self
		}
	}

	/// Sets the `response_type` of the authorize request (`code` by
	/// default).
	pub fn with_response_type(self, response_type: impl Into<String>) -> Self {
		Self {
			response_type: response_type.into(),
			..self
		}
	}
}

#[cfg(test)]
mod tests {
	use iref::uri;

	use super::*;

	#[test]
	fn defaults_target_renren() {
		let config = ClientConfig::default();
		assert_eq!(config.authorize_uri.as_str(), "https://graph.renren.com/oauth/authorize");
		assert_eq!(config.token_uri.as_str(), "https://graph.renren.com/oauth/token");
		assert_eq!(config.api_server.as_str(), "https://api.renren.com/restserver.do");
		assert_eq!(config.api_version, "1.0");
		assert_eq!(config.response_type, "code");
	}

	#[test]
	fn overrides() {
		let config = ClientConfig::default()
			.with_api_server(uri!("http://127.0.0.1:1234/rest").to_owned())
			.with_api_version("2.0")
			.with_response_type("token");

		assert_eq!(config.api_server.as_str(), "http://127.0.0.1:1234/rest");
		assert_eq!(config.api_version, "2.0");
		assert_eq!(config.response_type, "token");
		assert_eq!(config.token_uri.as_str(), TOKEN_URI);
	}
}
