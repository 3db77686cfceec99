//! Login error taxonomy shared by the callback, token, and profile flows.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical login error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Callback carried no usable authorization code (consent denied or malformed redirect).
	#[error("Callback is missing the authorization code.")]
	MissingCode,
	/// Transport failed the request (network failure or non-success status).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be parsed in its expected wire format.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Response parsed but lacked required content.
	#[error(transparent)]
	BadResponse(#[from] BadResponseError),
}
impl Error {
	/// Flattens the error into the category callers usually branch on.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::MissingCode => ErrorKind::MissingCode,
			Self::Transport(_) => ErrorKind::Transport,
			Self::Decode(_) => ErrorKind::Decode,
			Self::BadResponse(_) => ErrorKind::BadResponse,
		}
	}
}

/// Flat error categories, convenient for mapping onto user-facing messages or HTTP statuses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// See [`Error::MissingCode`].
	MissingCode,
	/// See [`Error::Transport`].
	Transport,
	/// See [`Error::Decode`].
	Decode,
	/// See [`Error::BadResponse`].
	BadResponse,
}
impl ErrorKind {
	/// Returns a stable label suitable for logs or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::MissingCode => "missing_code",
			Self::Transport => "transport",
			Self::Decode => "decode",
			Self::BadResponse => "bad_response",
		}
	}
}
impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Transport-level failures (network, IO, non-success status).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a failure.
	#[error("{}", network_message(.status))]
	Network {
		/// HTTP status code, when the transport received one.
		status: Option<u16>,
		/// Transport-specific error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the Graph API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { status: None, source: Box::new(src) }
	}

	/// Wraps a transport-specific error raised for a non-success HTTP status.
	pub fn status(status: u16, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { status: Some(status), source: Box::new(src) }
	}

	/// HTTP status code attached to the failure, if any.
	pub fn http_status(&self) -> Option<u16> {
		match self {
			Self::Network { status, .. } => *status,
			Self::Io(_) => None,
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		match e.status() {
			Some(code) => Self::status(code.as_u16(), e),
			None => Self::network(e),
		}
	}
}

fn network_message(status: &Option<u16>) -> String {
	match status {
		Some(code) => format!("Graph request failed with HTTP status {code}."),
		None => "Network error occurred while calling the Graph API.".into(),
	}
}

/// Wire-format decoding failures.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Body was not valid JSON for the expected shape.
	#[error("The {endpoint} endpoint returned malformed JSON at `{}`.", .source.path())]
	Json {
		/// Endpoint label (`token` or `profile`).
		endpoint: &'static str,
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
	/// Body was form-encoded but carried a broken percent escape, or an escape that decodes to
	/// invalid UTF-8.
	#[error("The {endpoint} endpoint returned malformed form data at byte {offset}.")]
	Form {
		/// Endpoint label (`token` or `profile`).
		endpoint: &'static str,
		/// Byte offset of the offending escape, or of the component that failed to decode.
		offset: usize,
		/// UTF-8 failure in the decoded bytes; `None` for a malformed escape.
		#[source]
		source: Option<std::str::Utf8Error>,
	},
	/// Body was not valid UTF-8 and cannot be form-decoded.
	#[error("The {endpoint} endpoint returned a body that is not valid UTF-8.")]
	Utf8 {
		/// Endpoint label (`token` or `profile`).
		endpoint: &'static str,
		/// Underlying UTF-8 failure.
		#[source]
		source: std::str::Utf8Error,
	},
}

/// Responses that decoded but lack what a login needs.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum BadResponseError {
	/// Token response omitted `access_token` or returned it empty.
	#[error("Token response is missing the access token.")]
	MissingAccessToken,
	/// Token response omitted the expiry.
	#[error("Token response is missing the expiry.")]
	MissingExpiry,
	/// Token response carried an expiry that is not a non-negative integer.
	#[error("Token response expiry `{value}` is not a non-negative integer.")]
	InvalidExpiry {
		/// Raw expiry value as received.
		value: String,
	},
	/// Profile response omitted a field required to establish identity.
	#[error("Profile response is missing the `{field}` field.")]
	MissingProfileField {
		/// Wire name of the missing field.
		field: &'static str,
	},
	/// Provider answered with its error object instead of the expected payload.
	#[error("Graph API rejected the request: {message}.")]
	ProviderRejected {
		/// Human-readable message from the provider.
		message: String,
		/// Provider error type (e.g. `OAuthException`).
		kind: Option<String>,
		/// Provider numeric error code.
		code: Option<i64>,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn kind_flattens_nested_categories() {
		let err = Error::from(BadResponseError::MissingAccessToken);

		assert_eq!(err.kind(), ErrorKind::BadResponse);
		assert_eq!(Error::MissingCode.kind(), ErrorKind::MissingCode);
		assert_eq!(
			Error::from(TransportError::Io(std::io::ErrorKind::TimedOut.into())).kind(),
			ErrorKind::Transport
		);
	}

	#[test]
	fn transport_status_is_reported() {
		let err = TransportError::status(502, std::io::Error::other("bad gateway"));

		assert_eq!(err.http_status(), Some(502));
		assert_eq!(err.to_string(), "Graph request failed with HTTP status 502.");
		assert_eq!(
			TransportError::network(std::io::Error::other("reset")).to_string(),
			"Network error occurred while calling the Graph API."
		);
	}
}
