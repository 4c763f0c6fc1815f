use str_newtype::StrNewType;

use super::all_vschar;

/// Application key issued by Renren when an application is registered
/// (borrowed).
///
/// Sent as the OAuth `client_id` parameter on both the authorize and the
/// token endpoint.
///
/// # Grammar
///
/// ```abnf
/// client_id = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ClientIdBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ClientId(str);

impl ClientId {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		all_vschar(bytes, 1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn hex_app_key_is_valid() {
		assert!(ClientId::new("fee11992a4ac4caabfca7800d233f814").is_ok());
		assert!(ClientIdBuf::new("105380".to_owned()).is_ok());
	}

	#[test]
	fn empty_app_key_is_invalid() {
		assert!(ClientId::new("").is_err());
	}

	#[test]
	fn app_key_rejects_control_chars() {
		assert!(ClientId::new("key\n").is_err());
		assert!(ClientId::new("\x7f").is_err());
	}
}
