use crate::error::TransportError;

#[cfg(feature = "reqwest")]
mod reqwest;

/// Blocking HTTP backend.
///
/// Implementations send exactly one request per call and do not retry.
/// Timeouts, proxies and TLS are the implementation's own configuration.
pub trait HttpClient {
	fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError>;
}

impl<T> HttpClient for &T
where
	T: ?Sized + HttpClient,
{
	fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError> {
		T::send(*self, request)
	}
}

impl<T> HttpClient for Box<T>
where
	T: ?Sized + HttpClient,
{
	fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError> {
		T::send(self, request)
	}
}
