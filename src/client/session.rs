use std::time::{Duration, SystemTime};

use crate::{AccessToken, AccessTokenBuf, endpoints::token::TokenResponse};

/// Access token currently used for method calls, with its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
	access_token: AccessTokenBuf,
	expires_in: u64,
	issued_at: SystemTime,
}

impl Session {
	/// Starts a session with a token valid for `expires_in` seconds from now.
	pub fn new(access_token: AccessTokenBuf, expires_in: u64) -> Self {
		Self {
			access_token,
			expires_in,
			issued_at: SystemTime::now(),
		}
	}

	/// Starts a session from a token endpoint response.
	///
	/// Returns `None` when the response does not say how long the token
	/// lives.
	pub fn from_token_response(response: &TokenResponse) -> Option<Self> {
		response
			.expires_in
			.map(|expires_in| Self::new(response.access_token.clone(), expires_in))
	}

	pub fn access_token(&self) -> &AccessToken {
		&self.access_token
	}

	/// Lifetime in seconds the token was issued with.
	pub fn expires_in(&self) -> u64 {
		self.expires_in
	}

	/// Instant the token expires, `None` if it lies beyond what
	/// `SystemTime` can represent.
	pub fn expires_at(&self) -> Option<SystemTime> {
		self.issued_at
			.checked_add(Duration::from_secs(self.expires_in))
	}

	/// Returns `true` once the token lifetime has elapsed.
	pub fn is_expired(&self) -> bool {
		self.issued_at
			.elapsed()
			.is_ok_and(|elapsed| elapsed >= Duration::from_secs(self.expires_in))
	}
}
