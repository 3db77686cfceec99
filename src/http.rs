//! Transport primitives for Graph API calls.
//!
//! [`GraphHttpClient`] is the crate's only dependency on an HTTP stack: a blocking GET that
//! returns the response body. Implementations report non-success statuses as errors, so flows
//! never inspect status codes themselves. [`ReqwestHttpClient`] is the default implementation.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::{_prelude::*, error::TransportError};

/// Abstraction over blocking HTTP transports capable of issuing Graph API GET requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared across
/// independent [`GraphClient`](crate::flows::GraphClient) instances behind an `Arc`. Timeouts,
/// pooling, and proxies are properties of the implementation; the flows issue exactly one call
/// per operation and never retry.
pub trait GraphHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type Error: StdError + Into<TransportError>;

	/// Issues a GET request and returns the raw response body.
	///
	/// Any non-success outcome (network failure, non-2xx status) must be returned as an error.
	fn get(&self, url: &Url) -> Result<Vec<u8>, Self::Error>;
}

/// Thin wrapper around the blocking [`ReqwestClient`] so shared HTTP behavior lives in one
/// place. Graph endpoints answer directly, so any custom client may safely disable redirect
/// following.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing blocking reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl GraphHttpClient for ReqwestHttpClient {
	type Error = ReqwestError;

	fn get(&self, url: &Url) -> Result<Vec<u8>, Self::Error> {
		let response = self.0.get(url.clone()).send()?.error_for_status()?;

		Ok(response.bytes()?.to_vec())
	}
}
