//! Login flow orchestration: callback parsing, token exchange, and profile fetch.

pub mod callback;
pub mod stage;

mod exchange;
mod profile;

pub use callback::*;
pub use stage::*;

// self
use crate::{
	_prelude::*,
	config::ClientConfig,
	http::GraphHttpClient,
	provider::{self, GraphEndpoints},
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestGraphClient = GraphClient<ReqwestHttpClient>;

/// Drives a Facebook login against one app registration.
///
/// The client owns the HTTP transport, app configuration, and endpoint set so each flow only
/// deals with its own request and response. It holds no mutable state: every method is a pure
/// function of its inputs plus exactly one transport call, so a client can be shared freely
/// across threads.
#[derive(Clone)]
pub struct GraphClient<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// HTTP client used for every outbound provider request.
	pub http_client: Arc<C>,
	/// App credentials, redirect target, and requested permissions.
	pub config: ClientConfig,
	/// Dialog and Graph hosts.
	pub endpoints: GraphEndpoints,
}
impl<C> GraphClient<C>
where
	C: ?Sized + GraphHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		config: ClientConfig,
		endpoints: GraphEndpoints,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), config, endpoints }
	}

	/// Login dialog URL to redirect the end user to.
	pub fn authorization_url(&self) -> Url {
		provider::dialog_url(&self.config, &self.endpoints)
	}
}
#[cfg(feature = "reqwest")]
impl GraphClient<ReqwestHttpClient> {
	/// Creates a client for Facebook's production hosts backed by a default reqwest transport.
	pub fn new(config: ClientConfig) -> Self {
		Self::with_http_client(config, GraphEndpoints::default(), ReqwestHttpClient::default())
	}
}
impl<C> Debug for GraphClient<C>
where
	C: ?Sized + GraphHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("GraphClient")
			.field("config", &self.config)
			.field("endpoints", &self.endpoints)
			.finish()
	}
}
