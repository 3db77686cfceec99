//! Immutable application credentials supplied by the caller.

// crates.io
use oauth2::{ClientId, ClientSecret};
// self
use crate::_prelude::*;

/// Facebook app registration used by every login step.
///
/// The value is built once and never mutated; flows only read from it. The secret is held
/// in [`ClientSecret`] so it stays out of `Debug` output.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClientConfig {
	app_id: ClientId,
	app_secret: ClientSecret,
	redirect_url: String,
	scope: String,
}
impl ClientConfig {
	/// Creates a configuration from the app id, app secret, redirect target, and permission list.
	///
	/// `scope` is forwarded verbatim, so comma-join multiple permissions
	/// (`"email,user_birthday"`) the way the login dialog expects.
	pub fn new(
		app_id: impl Into<String>,
		app_secret: impl Into<String>,
		redirect_url: impl Into<String>,
		scope: impl Into<String>,
	) -> Self {
		Self {
			app_id: ClientId::new(app_id.into()),
			app_secret: ClientSecret::new(app_secret.into()),
			redirect_url: redirect_url.into(),
			scope: scope.into(),
		}
	}

	/// App identifier sent as `client_id`.
	pub fn app_id(&self) -> &str {
		self.app_id.as_str()
	}

	/// App secret sent as `client_secret`. Callers must avoid logging this string.
	pub fn app_secret(&self) -> &str {
		self.app_secret.secret()
	}

	/// Redirect target sent as `redirect_uri`.
	pub fn redirect_url(&self) -> &str {
		&self.redirect_url
	}

	/// Requested permissions sent as `scope`.
	pub fn scope(&self) -> &str {
		&self.scope
	}
}
