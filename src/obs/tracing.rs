// self
use crate::{_prelude::*, obs::FlowKind};

/// A span builder used by login flows.
#[derive(Clone, Debug)]
pub struct FlowSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl FlowSpan {
	/// Creates a new span tagged with the provided flow kind + stage.
	pub fn new(kind: FlowKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("fb_login.flow", flow = kind.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Enters the span for the duration of the returned guard.
	pub fn entered(self) -> FlowSpanGuard {
		#[cfg(feature = "tracing")]
		{
			FlowSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			FlowSpanGuard {}
		}
	}
}

/// RAII guard returned by [`FlowSpan::entered`].
pub struct FlowSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for FlowSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("FlowSpanGuard(..)")
	}
}

/// Logs a flow failure at debug level; the error itself still reaches the caller.
pub(crate) fn flow_failed(kind: FlowKind, error: &Error) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(
			flow = kind.as_str(),
			error_kind = error.kind().as_str(),
			%error,
			"Login flow failed."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (kind, error);
	}
}

/// Notes a callback that arrived without a code, surfacing the provider's denial reason.
pub(crate) fn callback_without_code(reason: Option<&str>) {
	#[cfg(feature = "tracing")]
	{
		tracing::debug!(reason, "Callback carried no authorization code.");
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = reason;
	}
}

/// Warns that a profile birthday was dropped because it did not parse.
pub(crate) fn birthday_unparsed(raw: &str, error: &dyn Display) {
	#[cfg(feature = "tracing")]
	{
		tracing::warn!(
			birthday = raw,
			%error,
			"Profile birthday could not be parsed; leaving it unknown."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (raw, error);
	}
}
