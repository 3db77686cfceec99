//! Authorization code → access token exchange.
//!
//! [`GraphClient::exchange_code`] issues one GET against the Graph token endpoint and validates
//! the answer. Codes are single-use at the provider, so callers must not replay a code after
//! any outcome; the client never retries on its own.

// crates.io
use oauth2::AuthorizationCode;
// self
use crate::{
	_prelude::*,
	auth::AccessToken,
	flows::{GraphClient, callback},
	http::GraphHttpClient,
	obs::{self, FlowKind},
	provider,
	response::TokenResponse,
};

impl<C> GraphClient<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Trades an authorization code for an access token.
	pub fn exchange_code(&self, code: &AuthorizationCode) -> Result<AccessToken> {
		obs::observe(FlowKind::TokenExchange, "exchange_code", || {
			let url = provider::access_token_url(&self.config, &self.endpoints, code.secret());
			let body = self.http_client.get(&url).map_err(|e| Error::Transport(e.into()))?;
			let token = TokenResponse::from_body(&body)?.validate()?;

			Ok(token)
		})
	}

	/// Extracts the code from the provider's redirect and exchanges it in one step.
	pub fn exchange_callback(&self, callback: &Url) -> Result<AccessToken> {
		let code = callback::extract_authorization_code(callback)?;

		self.exchange_code(&code)
	}
}
