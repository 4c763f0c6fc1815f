use std::fmt;

use iref::{Uri, UriBuf};
use zeroize::Zeroize;

use crate::{ClientId, ClientIdBuf};

/// Application secret issued along with the application key.
///
/// Never printed by `Debug` and wiped from memory on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
	pub fn new(secret: impl Into<String>) -> Self {
		Self(secret.into())
	}

	pub fn expose(&self) -> &str {
		&self.0
	}
}

impl From<String> for AppSecret {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for AppSecret {
	fn from(value: &str) -> Self {
		Self(value.to_owned())
	}
}

impl fmt::Debug for AppSecret {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("AppSecret(***)")
	}
}

impl Drop for AppSecret {
	fn drop(&mut self) {
		self.0.zeroize();
	}
}

/// Application credentials. Fixed for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct Credentials {
	app_key: ClientIdBuf,
	app_secret: AppSecret,
	redirect_uri: UriBuf,
}

impl Credentials {
	pub fn new(app_key: ClientIdBuf, app_secret: impl Into<AppSecret>, redirect_uri: UriBuf) -> Self {
		Self {
			app_key,
			app_secret: app_secret.into(),
			redirect_uri,
		}
	}

	pub fn app_key(&self) -> &ClientId {
		&self.app_key
	}

	pub fn app_secret(&self) -> &AppSecret {
		&self.app_secret
	}

	/// Redirect URI registered for the application, used whenever an
	/// operation is not given one explicitly.
	pub fn redirect_uri(&self) -> &Uri {
		&self.redirect_uri
	}
}
