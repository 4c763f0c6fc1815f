//! HTTP transport: one form-encoded POST per call, gzip aware.
use std::io::Read;

use flate2::read::GzDecoder;
use http::{HeaderMap, HeaderValue, header};
use iref::Uri;

use crate::{
	error::{Error, TransportError},
	params::Params,
};

mod client;

pub use client::*;

/// `Content-Type: application/x-www-form-urlencoded` header value.
pub const APPLICATION_X_WWW_FORM_URLENCODED: HeaderValue =
	HeaderValue::from_static("application/x-www-form-urlencoded");

/// `Accept-Encoding: gzip` header value.
pub const GZIP: HeaderValue = HeaderValue::from_static("gzip");

/// Builds the POST request carrying `params` as its form body.
pub fn post_request(uri: &Uri, params: &Params) -> Result<http::Request<Vec<u8>>, Error> {
	let body = params.encode()?;

	http::Request::builder()
		.method(http::Method::POST)
		.uri(uri.as_str())
		.header(header::CONTENT_TYPE, APPLICATION_X_WWW_FORM_URLENCODED)
		.header(header::ACCEPT_ENCODING, GZIP)
		.body(body.into_bytes())
		.map_err(|e| TransportError::request(e).into())
}

/// POSTs `params` to `uri` and returns the response body as text.
///
/// Gzip encoded bodies are decompressed. A non-2xx status fails with
/// [`TransportError::Status`] carrying whatever body came back.
pub fn post(http_client: &impl HttpClient, uri: &Uri, params: &Params) -> Result<String, Error> {
	let request = post_request(uri, params)?;
	let response = http_client.send(request)?;
	Ok(read_body(response)?)
}

/// Decodes the body of a response received for a [`post_request`].
pub fn read_body(response: http::Response<Vec<u8>>) -> Result<String, TransportError> {
	let (parts, body) = response.into_parts();
	let gzipped = is_gzip(&parts.headers);

	if !parts.status.is_success() {
		let body = if gzipped {
			gunzip(&body).unwrap_or(body)
		} else {
			body
		};

		return Err(TransportError::status(
			parts.status,
			String::from_utf8_lossy(&body).into_owned(),
		));
	}

	let body = if gzipped {
		log::trace!("decompressing {} byte gzip body", body.len());
		gunzip(&body).map_err(TransportError::response)?
	} else {
		body
	};

	String::from_utf8(body).map_err(TransportError::response)
}

fn is_gzip(headers: &HeaderMap) -> bool {
	headers
		.get(header::CONTENT_ENCODING)
		.and_then(|v| v.to_str().ok())
		.map(|v| {
			let v = v.trim();
			v.eq_ignore_ascii_case("gzip") || v.eq_ignore_ascii_case("x-gzip")
		})
		.unwrap_or(false)
}

fn gunzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
	let mut decoder = GzDecoder::new(data);
	let mut decompressed = Vec::new();
	decoder.read_to_end(&mut decompressed)?;
	Ok(decompressed)
}

#[cfg(test)]
mod tests {
	use std::{cell::RefCell, io::Write};

	use flate2::{Compression, write::GzEncoder};
	use iref::uri;

	use super::*;

	fn gzip(data: &[u8]) -> Vec<u8> {
		let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
		encoder.write_all(data).unwrap();
		encoder.finish().unwrap()
	}

	fn response(status: u16, encoding: Option<&str>, body: Vec<u8>) -> http::Response<Vec<u8>> {
		let mut builder = http::Response::builder().status(status);
		if let Some(encoding) = encoding {
			builder = builder.header(header::CONTENT_ENCODING, encoding);
		}
		builder.body(body).unwrap()
	}

	/// Records requests and replays a canned response.
	struct Canned {
		requests: RefCell<Vec<http::Request<Vec<u8>>>>,
		reply: fn() -> Result<http::Response<Vec<u8>>, TransportError>,
	}

	impl HttpClient for Canned {
		fn send(
			&self,
			request: http::Request<Vec<u8>>,
		) -> Result<http::Response<Vec<u8>>, TransportError> {
			self.requests.borrow_mut().push(request);
			(self.reply)()
		}
	}

	#[test]
	fn request_shape() {
		let params = Params::new().with("method", "users.getInfo").with("v", "1.0");
		let request = post_request(uri!("https://api.renren.com/restserver.do"), &params).unwrap();

		assert_eq!(request.method(), http::Method::POST);
		assert_eq!(request.uri(), "https://api.renren.com/restserver.do");
		assert_eq!(
			request.headers()[header::CONTENT_TYPE],
			APPLICATION_X_WWW_FORM_URLENCODED
		);
		assert_eq!(request.headers()[header::ACCEPT_ENCODING], "gzip");
		assert_eq!(request.body(), b"method=users.getInfo&v=1.0");
	}

	#[test]
	fn plain_body() {
		let body = read_body(response(200, None, b"[1,2]".to_vec())).unwrap();
		assert_eq!(body, "[1,2]");
	}

	#[test]
	fn gzip_body_is_decompressed() {
		let raw = r#"{"uid":222209506,"name":"张三"}"#;
		let body = read_body(response(200, Some("gzip"), gzip(raw.as_bytes()))).unwrap();
		assert_eq!(body, raw);

		let body = read_body(response(200, Some("GZIP"), gzip(b"{}"))).unwrap();
		assert_eq!(body, "{}");
	}

	#[test]
	fn other_encodings_are_left_alone() {
		let body = read_body(response(200, Some("identity"), b"{}".to_vec())).unwrap();
		assert_eq!(body, "{}");
	}

	#[test]
	fn corrupt_gzip_is_a_response_error() {
		let err = read_body(response(200, Some("gzip"), b"not gzip".to_vec())).unwrap_err();
		assert!(matches!(err, TransportError::Response(_)));
	}

	#[test]
	fn invalid_utf8_is_a_response_error() {
		let err = read_body(response(200, None, vec![0xff, 0xfe])).unwrap_err();
		assert!(matches!(err, TransportError::Response(_)));
	}

	#[test]
	fn non_success_status_keeps_body() {
		let err = read_body(response(
			400,
			Some("gzip"),
			gzip(br#"{"error":"invalid_grant"}"#),
		))
		.unwrap_err();

		match err {
			TransportError::Status { status, body } => {
				assert_eq!(status, http::StatusCode::BAD_REQUEST);
				assert_eq!(body, r#"{"error":"invalid_grant"}"#);
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn post_sends_exactly_one_request() {
		let client = Canned {
			requests: RefCell::new(Vec::new()),
			reply: || Ok(response(200, None, b"{\"ok\":1}".to_vec())),
		};

		let body = post(
			&client,
			uri!("https://graph.renren.com/oauth/token"),
			&Params::new().with("grant_type", "refresh_token"),
		)
		.unwrap();

		assert_eq!(body, "{\"ok\":1}");
		let requests = client.requests.borrow();
		assert_eq!(requests.len(), 1);
		assert_eq!(requests[0].body(), b"grant_type=refresh_token");
	}

	#[test]
	fn post_propagates_backend_failure() {
		let client = Canned {
			requests: RefCell::new(Vec::new()),
			reply: || Err(TransportError::request("dns error: no such host")),
		};

		let err = post(
			&client,
			uri!("https://api.renren.com/restserver.do"),
			&Params::new(),
		)
		.unwrap_err();

		assert!(matches!(err, Error::Transport(TransportError::Request(_))));
		assert_eq!(client.requests.borrow().len(), 1);
	}
}
