//! URI query string utilities.
use iref::{UriBuf, uri::QueryBuf};

use crate::{error::EncodingError, params::Params};

/// Appends `params`, form encoded, to the query of `uri`.
///
/// Existing query parameters on the URI are preserved.
pub fn extend_uri_query(uri: &mut UriBuf, params: &Params) -> Result<(), EncodingError> {
	let query = concat_query(
		uri.query().map(ToOwned::to_owned).unwrap_or_default(),
		&params.encode()?,
	)?;

	if !query.is_empty() {
		uri.set_query(Some(&query));
	}

	Ok(())
}

/// Concatenates a query with more form encoded pairs, using `&` as
/// separator.
///
/// If either side is empty, the other is returned without a separator.
pub fn concat_query(query: QueryBuf, other: &str) -> Result<QueryBuf, EncodingError> {
	let mut query = query.into_string();

	if !query.is_empty() && !other.is_empty() {
		query.push('&')
	}

	query.push_str(other);

	QueryBuf::new(query.into_bytes()).map_err(|_| EncodingError::new("invalid URI query"))
}
