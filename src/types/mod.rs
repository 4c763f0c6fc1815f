//! OAuth vocabulary used by the Renren API.
//!
//! Every value that crosses the authorization boundary (the application key,
//! authorization codes, access and refresh tokens, scopes) gets its own
//! validated string type. Each comes as a borrowed/owned pair (e.g.
//! [`AccessToken`] / [`AccessTokenBuf`]) in the same way as [`str`] /
//! [`String`].
mod client_id;
mod code;
mod scope;
mod token;

pub use client_id::*;
pub use code::*;
pub use scope::*;
pub use token::*;

/// Returns `true` if the byte is a VSCHAR, i.e. in `0x20..=0x7E`.
const fn is_vschar(c: u8) -> bool {
	c >= 0x20 && c <= 0x7e
}

/// Returns `true` if the byte is a NQCHAR: any VSCHAR except space, `"` and
/// `\`.
const fn is_nqchar(c: u8) -> bool {
	c == 0x21 || (c >= 0x23 && c <= 0x5b) || (c >= 0x5d && c <= 0x7e)
}

/// Returns `true` if every byte is a VSCHAR and there are at least `min`
/// of them.
const fn all_vschar(bytes: &[u8], min: usize) -> bool {
	let mut i = 0;

	while i < bytes.len() {
		if !is_vschar(bytes[i]) {
			return false;
		}

		i += 1
	}

	i >= min
}
