//! Request bodies of the three Renren endpoints.
//!
//! - [`authorization`]: the user facing authorize page (a redirect, no
//!   network call from this library).
//! - [`token`]: code and refresh token exchange.
//! - [`method`]: the RPC style API server.
use iref::{Uri, UriBuf};

use crate::{
	error::{EncodingError, Error},
	params::Params,
	transport::{self, HttpClient},
	util::extend_uri_query,
};

pub mod authorization;
pub mod method;
pub mod token;

/// Request sent by redirecting the user agent.
pub trait Redirect {
	fn build_query(&self) -> Result<Params, EncodingError>;

	/// Returns `endpoint` with the request appended to its query.
	fn redirect_uri(&self, endpoint: &Uri) -> Result<UriBuf, EncodingError> {
		let mut uri = endpoint.to_owned();
		extend_uri_query(&mut uri, &self.build_query()?)?;
		Ok(uri)
	}
}

/// Request POSTed to an endpoint as a form body.
pub trait SendRequest {
	type Response;

	fn build_params(&self) -> Result<Params, EncodingError>;

	fn parse_response(&self, raw: &str) -> Result<Self::Response, Error>;

	/// Encodes, POSTs and interprets the request in a single round trip.
	fn send(&self, endpoint: &Uri, http_client: &impl HttpClient) -> Result<Self::Response, Error> {
		let params = self.build_params()?;
		let raw = transport::post(http_client, endpoint, &params)?;
		log::trace!("response from {endpoint}: {raw}");
		self.parse_response(&raw)
	}
}
