use crate::{error::TransportError, transport::HttpClient};

impl HttpClient for reqwest::blocking::Client {
	fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, TransportError> {
		log::debug!("HTTP request to: {}", request.uri());
		log::trace!("HTTP request: {request:?}");

		let response = self
			.execute(request.try_into().map_err(TransportError::request)?)
			.map_err(TransportError::request)?;

		let mut builder = http::Response::builder()
			.status(response.status())
			.version(response.version());

		for (name, value) in response.headers().iter() {
			builder = builder.header(name, value);
		}

		let response = builder
			.body(
				response
					.bytes()
					.map_err(TransportError::response)?
					.to_vec(),
			)
			.map_err(TransportError::response)?;

		log::trace!("HTTP response: {response:?}");

		Ok(response)
	}
}
