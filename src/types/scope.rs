use str_newtype::StrNewType;

use super::is_nqchar;

/// A single permission name, such as `read_user_album` or `publish_feed`
/// (borrowed).
///
/// # Grammar
///
/// ```abnf
/// scope-token = 1*NQCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(ScopeTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct ScopeToken(str);

impl ScopeToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		while i < bytes.len() {
			if !is_nqchar(bytes[i]) {
				return false;
			}

			i += 1;
		}

		i > 0
	}
}

/// Space-separated list of permissions requested on the authorize page or
/// granted with a token (borrowed).
///
/// # Grammar
///
/// ```abnf
/// scope       = scope-token *( SP scope-token )
/// scope-token = 1*NQCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(serde, owned(ScopeBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash)))]
pub struct Scope(str);

impl Scope {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;
		let mut token_len = 0;

		while i < bytes.len() {
			match bytes[i] {
				b' ' => {
					if token_len == 0 {
						return false;
					}

					token_len = 0;
				}
				c if is_nqchar(c) => token_len += 1,
				_ => return false,
			}

			i += 1;
		}

		token_len > 0
	}

	/// Returns `true` if this scope grants the given permission.
	pub fn contains(&self, token: &ScopeToken) -> bool {
		self.iter().any(|t| t == token)
	}

	/// Iterates over the individual permissions.
	pub fn iter(&self) -> ScopeIter<'_> {
		ScopeIter(self.0.split(' '))
	}
}

impl<'a> IntoIterator for &'a Scope {
	type IntoIter = ScopeIter<'a>;
	type Item = &'a ScopeToken;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

pub struct ScopeIter<'a>(std::str::Split<'a, char>);

impl<'a> Iterator for ScopeIter<'a> {
	type Item = &'a ScopeToken;

	fn next(&mut self) -> Option<Self::Item> {
		// SAFETY: a valid scope only ever splits into valid tokens.
		self.0
			.next()
			.map(|t| unsafe { ScopeToken::new_unchecked(t) })
	}
}

/// A permission name that is not a valid scope token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scope token: {0:?}")]
pub struct ScopeListError(pub String);

impl ScopeBuf {
	/// Builds a scope from plain permission names.
	///
	/// Returns `Ok(None)` for an empty list, and fails on the first name that
	/// is not a valid scope token.
	pub fn parse_list<S>(names: impl IntoIterator<Item = S>) -> Result<Option<Self>, ScopeListError>
	where
		S: AsRef<str>,
	{
		let mut result = String::new();

		for name in names {
			let name = name.as_ref();
			if !ScopeToken::validate_str(name) {
				return Err(ScopeListError(name.to_owned()));
			}

			if !result.is_empty() {
				result.push(' ');
			}

			result.push_str(name);
		}

		if result.is_empty() {
			Ok(None)
		} else {
			Ok(Some(Self(result)))
		}
	}
}

impl<'a> IntoIterator for &'a ScopeBuf {
	type IntoIter = ScopeIter<'a>;
	type Item = &'a ScopeToken;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
