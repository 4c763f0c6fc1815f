use str_newtype::StrNewType;

use super::all_vschar;

/// Access token authorizing API calls on behalf of a user (borrowed).
///
/// # Grammar
///
/// ```abnf
/// access-token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(AccessTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct AccessToken(str);

impl AccessToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}
}

/// Long-lived credential used to obtain a new access token without sending
/// the user through the authorize page again (borrowed).
///
/// # Grammar
///
/// ```abnf
/// refresh-token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(RefreshTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct RefreshToken(str);

impl RefreshToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}
}
