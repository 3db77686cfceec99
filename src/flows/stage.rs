//! Login progress model for callers that track sessions.
//!
//! The crate itself is stateless; a login "session" only exists in the caller's control flow.
//! [`LoginStage`] gives that flow a shared vocabulary and enforces the legal transitions.

// self
use crate::{_prelude::*, error::ErrorKind};

/// Where a single login attempt currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginStage {
	/// Nothing has happened yet.
	Init,
	/// The user was sent to the login dialog.
	AwaitingCallback,
	/// The redirect carried an authorization code.
	CodeReceived,
	/// The code was exchanged for an access token.
	TokenAcquired,
	/// The profile was fetched and validated.
	ProfileFetched,
	/// The attempt ended with an error of the given kind.
	Failed(ErrorKind),
}
impl LoginStage {
	/// Returns a stable label suitable for logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Init => "init",
			Self::AwaitingCallback => "awaiting_callback",
			Self::CodeReceived => "code_received",
			Self::TokenAcquired => "token_acquired",
			Self::ProfileFetched => "profile_fetched",
			Self::Failed(_) => "failed",
		}
	}

	/// Next stage on success, or `None` once the attempt has finished.
	pub const fn advance(self) -> Option<Self> {
		match self {
			Self::Init => Some(Self::AwaitingCallback),
			Self::AwaitingCallback => Some(Self::CodeReceived),
			Self::CodeReceived => Some(Self::TokenAcquired),
			Self::TokenAcquired => Some(Self::ProfileFetched),
			Self::ProfileFetched | Self::Failed(_) => None,
		}
	}

	/// Moves to [`LoginStage::Failed`]; finished attempts keep their final stage.
	pub fn fail(self, error: &Error) -> Self {
		if self.is_terminal() { self } else { Self::Failed(error.kind()) }
	}

	/// Whether no further transition is possible.
	pub const fn is_terminal(self) -> bool {
		matches!(self, Self::ProfileFetched | Self::Failed(_))
	}
}
impl Display for LoginStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		match self {
			Self::Failed(kind) => write!(f, "failed({kind})"),
			other => f.write_str(other.as_str()),
		}
	}
}
