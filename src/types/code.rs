use str_newtype::StrNewType;

use super::all_vschar;

/// Authorization code handed to the redirect URI after the user approves the
/// application (borrowed).
///
/// The code is exchanged once at the token endpoint, see
/// [`ApiClient::request_access_token`](crate::client::ApiClient::request_access_token).
///
/// # Grammar
///
/// ```abnf
/// code = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(CodeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Code(str);

impl Code {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}
}
