//! Authorization code extraction from the provider's redirect.
//!
//! Only the `code` parameter matters. A denied consent screen redirects with `error`,
//! `error_reason`, and `error_description` instead; those are logged and otherwise treated the
//! same as any callback without a code.

// crates.io
use oauth2::AuthorizationCode;
// self
use crate::{
	_prelude::*,
	obs::{self, FlowKind},
};

const CODE: &str = "code";
const ERROR_REASON: &str = "error_reason";
const ERROR: &str = "error";

/// Reads the authorization code from the callback URL the provider redirected to.
pub fn extract_authorization_code(callback: &Url) -> Result<AuthorizationCode> {
	obs::observe(FlowKind::Callback, "extract_authorization_code", || {
		code_from_pairs(callback.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())))
	})
}

/// Reads the authorization code from a raw callback query string (with or without `?`).
pub fn extract_authorization_code_from_query(query: &str) -> Result<AuthorizationCode> {
	let query = query.strip_prefix('?').unwrap_or(query);

	obs::observe(FlowKind::Callback, "extract_authorization_code_from_query", || {
		code_from_pairs(url::form_urlencoded::parse(query.as_bytes()).into_owned())
	})
}

fn code_from_pairs(pairs: impl Iterator<Item = (String, String)>) -> Result<AuthorizationCode> {
	let mut code = None;
	let mut reason = None;

	for (key, value) in pairs {
		match key.as_str() {
			CODE if code.is_none() => code = Some(value),
			ERROR_REASON => reason = Some(value),
			ERROR if reason.is_none() => reason = Some(value),
			_ => {},
		}
	}

	match code.filter(|code| !code.is_empty()) {
		Some(code) => Ok(AuthorizationCode::new(code)),
		None => {
			obs::callback_without_code(reason.as_deref());

			Err(Error::MissingCode)
		},
	}
}
