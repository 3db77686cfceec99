//! Optional observability helpers for login flows.
//!
//! # Feature Flags
//!
//! - Enable `tracing` (on by default) to emit structured spans named `fb_login.flow` with the
//!   `flow` and `stage` fields, plus the warning raised when a birthday cannot be parsed.
//! - Enable `metrics` to increment the `fb_login_flow_total` counter for every
//!   attempt/success/failure, labeled by `flow` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Login operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowKind {
	/// Reading the authorization code from the redirect callback.
	Callback,
	/// Trading the authorization code for an access token.
	TokenExchange,
	/// Fetching the user profile with an access token.
	ProfileFetch,
}
impl FlowKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowKind::Callback => "callback",
			FlowKind::TokenExchange => "token_exchange",
			FlowKind::ProfileFetch => "profile_fetch",
		}
	}
}
impl Display for FlowKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowOutcome {
	/// Entry to a flow helper.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl FlowOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			FlowOutcome::Attempt => "attempt",
			FlowOutcome::Success => "success",
			FlowOutcome::Failure => "failure",
		}
	}
}
impl Display for FlowOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Runs `op` inside a flow span, recording attempt and outcome around it.
pub(crate) fn observe<T>(
	kind: FlowKind,
	stage: &'static str,
	op: impl FnOnce() -> Result<T>,
) -> Result<T> {
	let _guard = FlowSpan::new(kind, stage).entered();

	record_flow_outcome(kind, FlowOutcome::Attempt);

	let result = op();

	match &result {
		Ok(_) => record_flow_outcome(kind, FlowOutcome::Success),
		Err(e) => {
			flow_failed(kind, e);
			record_flow_outcome(kind, FlowOutcome::Failure);
		},
	}

	result
}
