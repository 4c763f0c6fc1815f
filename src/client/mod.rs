//! The Renren API client.
use iref::{Uri, UriBuf};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
	AccessTokenBuf, Code, RefreshToken, Scope,
	endpoints::{
		Redirect, SendRequest,
		authorization::AuthorizationRequest,
		method::{CallIdGenerator, MethodCall},
		token::{AuthorizationCodeTokenRequest, RefreshTokenRequest, TokenResponse},
	},
	error::{Error, ParseError},
	params::Params,
	transport::HttpClient,
};

mod config;
mod credentials;
mod session;

pub use config::*;
pub use credentials::*;
pub use session::*;

/// Client for the Renren OAuth endpoints and API server.
///
/// Every operation performs at most one blocking HTTP round trip through the
/// `H` backend. Token exchanges and [`set_access_token`](Self::set_access_token)
/// take `&mut self`; method calls only read the session.
///
/// # Example
///
/// ```no_run
/// use renren_oauth2::{ClientIdBuf, Code, client::{ApiClient, Credentials}, params::Params};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new(
///     ClientIdBuf::new("my-app-key".to_owned()).unwrap(),
///     "my-app-secret",
///     iref::UriBuf::new(b"https://example.com/callback".to_vec()).unwrap(),
/// );
/// let mut client = ApiClient::new(credentials)?;
///
/// let url = client.authorize_url(None, None, false)?;
/// println!("open {url}");
///
/// let code = Code::new("code-from-the-callback").unwrap();
/// client.request_access_token(code, None)?;
///
/// let user = client.call_method("users.getInfo", Params::new().with("fields", "name"))?;
/// println!("{user}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient<H> {
	http_client: H,
	credentials: Credentials,
	config: ClientConfig,
	session: Option<Session>,
	call_ids: CallIdGenerator,
}

#[cfg(feature = "reqwest")]
impl ApiClient<reqwest::blocking::Client> {
	/// Creates a client backed by a default `reqwest` blocking client.
	pub fn new(credentials: Credentials) -> Result<Self, Error> {
		let http_client = reqwest::blocking::Client::builder()
			.build()
			.map_err(crate::error::TransportError::request)?;

		Ok(Self::with_http_client(http_client, credentials))
	}
}

impl<H> ApiClient<H> {
	pub fn with_http_client(http_client: H, credentials: Credentials) -> Self {
		Self {
			http_client,
			credentials,
			config: ClientConfig::default(),
			session: None,
			call_ids: CallIdGenerator::new(),
		}
	}

	pub fn with_config(self, config: ClientConfig) -> Self {
		Self { config, ..self }
	}

	pub fn http_client(&self) -> &H {
		&self.http_client
	}

	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Current session, `None` until a token is obtained or set.
	pub fn session(&self) -> Option<&Session> {
		self.session.as_ref()
	}

	/// Records an access token valid for `expires_in` seconds.
	pub fn set_access_token(&mut self, access_token: AccessTokenBuf, expires_in: u64) {
		self.session = Some(Session::new(access_token, expires_in));
	}

	/// Forgets the current access token.
	pub fn clear_access_token(&mut self) -> Option<Session> {
		self.session.take()
	}

	/// Builds the URL of the authorize page to send the user to.
	///
	/// `redirect_uri` defaults to the one in the credentials. `scope` is
	/// omitted when `None`, and `force_relogin` adds `x_renew=true` to make
	/// Renren show the login form again.
	pub fn authorize_url(
		&self,
		redirect_uri: Option<&Uri>,
		scope: Option<&Scope>,
		force_relogin: bool,
	) -> Result<UriBuf, Error> {
		let redirect_uri = redirect_uri.unwrap_or(self.credentials.redirect_uri());

		let request = AuthorizationRequest::new(
			self.credentials.app_key(),
			redirect_uri.as_str(),
			&self.config.response_type,
		)
		.with_scope(scope)
		.with_force_relogin(force_relogin);

		Ok(request.redirect_uri(&self.config.authorize_uri)?)
	}
}

impl<H: HttpClient> ApiClient<H> {
	/// Exchanges an authorization code for an access token.
	///
	/// On success the client starts using the new token, unless the response
	/// lacks `expires_in`. The current session is then kept and the caller
	/// may install the token with [`set_access_token`](Self::set_access_token).
	pub fn request_access_token(
		&mut self,
		code: &Code,
		redirect_uri: Option<&Uri>,
	) -> Result<TokenResponse, Error> {
		let redirect_uri = redirect_uri.unwrap_or(self.credentials.redirect_uri());

		log::debug!("exchanging authorization code");
		let response = AuthorizationCodeTokenRequest {
			code: code.as_str(),
			client_id: self.credentials.app_key().as_str(),
			client_secret: self.credentials.app_secret().expose(),
			redirect_uri: redirect_uri.as_str(),
		}
		.send(&self.config.token_uri, &self.http_client)?;

		self.start_session(&response);
		Ok(response)
	}

	/// Obtains a new access token from a refresh token.
	///
	/// Updates the session like
	/// [`request_access_token`](Self::request_access_token).
	pub fn refresh_token(&mut self, refresh_token: &RefreshToken) -> Result<TokenResponse, Error> {
		log::debug!("refreshing access token");
		let response = RefreshTokenRequest {
			refresh_token: refresh_token.as_str(),
			client_id: self.credentials.app_key().as_str(),
			client_secret: self.credentials.app_secret().expose(),
		}
		.send(&self.config.token_uri, &self.http_client)?;

		self.start_session(&response);
		Ok(response)
	}

	fn start_session(&mut self, response: &TokenResponse) {
		match Session::from_token_response(response) {
			Some(session) => self.session = Some(session),
			None => log::warn!("token response without `expires_in`, session left unchanged"),
		}
	}

	/// Calls the API method `method` with `params`.
	///
	/// Arrays always come back as success; objects carrying an `error_code`
	/// become [`Error::Api`].
	pub fn call_method(&self, method: &str, params: Params) -> Result<Value, Error> {
		let access_token = self.session.as_ref().map(Session::access_token);
		if access_token.is_none() {
			log::warn!("calling `{method}` without an access token");
		}

		let call_id = self.call_ids.next_id();
		log::debug!("calling `{method}` (call_id {call_id})");

		MethodCall {
			method,
			access_token,
			call_id,
			version: &self.config.api_version,
			params,
		}
		.send(&self.config.api_server, &self.http_client)
	}

	/// Typed variant of [`call_method`](Self::call_method).
	///
	/// `params` must serialize to a flat map of primitive values.
	pub fn call<T, R>(&self, method: &str, params: &T) -> Result<R, Error>
	where
		T: ?Sized + Serialize,
		R: DeserializeOwned,
	{
		let value = self.call_method(method, Params::from_serialize(params)?)?;
		Ok(serde_json::from_value(value).map_err(ParseError::new)?)
	}
}
