//! Client for the [Renren] API.
//!
//! Renren authorizes applications with OAuth 2.0 ([RFC 6749][rfc6749]) and
//! exposes its API as JSON over HTTP: every call is a form-encoded POST naming
//! the remote method to run. This crate covers the whole exchange:
//!
//! 1. build the authorize page URL to send the user to,
//! 2. exchange the authorization code (or a refresh token) for an access
//!    token,
//! 3. call any API method with the current token.
//!
//! # Modules
//!
//! - [`client`]: the [`ApiClient`](client::ApiClient), its credentials,
//!   configuration and session state.
//! - [`endpoints`]: request bodies of the authorize, token and API endpoints.
//! - [`params`]: request parameters and their form encoding.
//! - [`transport`]: the HTTP backend trait and the gzip aware POST.
//! - [`response`]: JSON decoding and the `error_code` convention.
//! - [`error`]: the error taxonomy.
//! - [`util`]: URI query string utilities.
//!
//! OAuth string types ([`AccessToken`], [`ClientId`], [`Code`], [`Scope`],
//! etc.) are re-exported at the crate root.
//!
//! The `reqwest` feature (enabled by default) provides a blocking `reqwest`
//! backend and [`ApiClient::new`](client::ApiClient::new).
//!
//! [Renren]: https://www.renren.com
//! [rfc6749]: https://datatracker.ietf.org/doc/html/rfc6749
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;
pub use iref;

pub mod client;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod response;
pub mod transport;
mod types;
pub mod util;

pub use error::Error;
pub use types::*;
