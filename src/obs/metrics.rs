// self
use crate::obs::{FlowKind, FlowOutcome};

/// Counter incremented once per attempt, success, and failure of every login flow.
pub const FLOW_TOTAL: &str = "fb_login_flow_total";

/// Bumps [`FLOW_TOTAL`] on the installed recorder, labeled by `flow` and `outcome`.
///
/// Without the `metrics` feature this compiles to nothing.
pub fn record_flow_outcome(kind: FlowKind, outcome: FlowOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(FLOW_TOTAL, "flow" => kind.as_str(), "outcome" => outcome.as_str())
			.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}
