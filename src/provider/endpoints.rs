//! Dialog + Graph API base URLs shared by all flows.

// self
use crate::_prelude::*;

const DEFAULT_DIALOG_BASE: &str = "https://www.facebook.com/";
const DEFAULT_GRAPH_BASE: &str = "https://graph.facebook.com/";

/// Errors raised while constructing or validating endpoints.
#[derive(Debug, PartialEq, Eq, ThisError)]
pub enum EndpointsError {
	/// Endpoints must use HTTPS.
	#[error("The {endpoint} endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Endpoint cannot carry a path (e.g. `mailto:` or `data:` URLs).
	#[error("The {endpoint} endpoint cannot be used as a base URL: {url}.")]
	CannotBeABase {
		/// Which endpoint failed validation.
		endpoint: &'static str,
		/// Endpoint URL that failed validation.
		url: String,
	},
	/// Graph API version is not of the form `v<major>.<minor>`.
	#[error("Graph API version `{version}` must look like `v19.0`.")]
	InvalidApiVersion {
		/// Rejected version string.
		version: String,
	},
}

/// Hosts the login flows talk to.
///
/// The dialog base serves the consent screen; the Graph base serves token exchange and the
/// profile endpoint. Both default to Facebook's production hosts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEndpoints {
	/// Base URL of the login dialog host.
	pub dialog: Url,
	/// Base URL of the Graph API host.
	pub graph: Url,
	/// Optional version segment (e.g. `v19.0`) prefixed to every action path.
	pub api_version: Option<String>,
}
impl GraphEndpoints {
	/// Creates a new builder seeded with the production hosts.
	pub fn builder() -> GraphEndpointsBuilder {
		GraphEndpointsBuilder::default()
	}

	/// Joins an action (`dialog/oauth`, `me`, ...) onto the configured version prefix.
	///
	/// The result is relative to the base URL's own path, which URL builders keep as a prefix.
	pub(crate) fn action_path(&self, action: &str) -> String {
		match self.api_version.as_deref() {
			Some(version) => format!("/{version}/{action}"),
			None => format!("/{action}"),
		}
	}

	fn validate(&self) -> Result<(), EndpointsError> {
		validate_endpoint("dialog", &self.dialog)?;
		validate_endpoint("graph", &self.graph)?;

		if let Some(version) = self.api_version.as_deref() {
			validate_api_version(version)?;
		}

		Ok(())
	}
}
impl Default for GraphEndpoints {
	fn default() -> Self {
		Self {
			dialog: Url::parse(DEFAULT_DIALOG_BASE)
				.unwrap_or_else(|_| unreachable!("Default dialog base is a valid URL.")),
			graph: Url::parse(DEFAULT_GRAPH_BASE)
				.unwrap_or_else(|_| unreachable!("Default Graph base is a valid URL.")),
			api_version: None,
		}
	}
}

/// Builder for [`GraphEndpoints`] values.
#[derive(Debug, Default)]
pub struct GraphEndpointsBuilder {
	/// Dialog host override.
	pub dialog: Option<Url>,
	/// Graph host override.
	pub graph: Option<Url>,
	/// Version prefix override.
	pub api_version: Option<String>,
}
impl GraphEndpointsBuilder {
	/// Overrides the login dialog host.
	pub fn dialog(mut self, url: Url) -> Self {
		self.dialog = Some(url);

		self
	}

	/// Overrides the Graph API host.
	pub fn graph(mut self, url: Url) -> Self {
		self.graph = Some(url);

		self
	}

	/// Pins every request to a Graph API version (e.g. `v19.0`).
	pub fn api_version(mut self, version: impl Into<String>) -> Self {
		self.api_version = Some(version.into());

		self
	}

	/// Consumes the builder and validates the resulting endpoints.
	pub fn build(self) -> Result<GraphEndpoints, EndpointsError> {
		let defaults = GraphEndpoints::default();
		let endpoints = GraphEndpoints {
			dialog: self.dialog.unwrap_or(defaults.dialog),
			graph: self.graph.unwrap_or(defaults.graph),
			api_version: self.api_version,
		};

		endpoints.validate()?;

		Ok(endpoints)
	}
}

fn validate_endpoint(name: &'static str, url: &Url) -> Result<(), EndpointsError> {
	if url.cannot_be_a_base() {
		return Err(EndpointsError::CannotBeABase { endpoint: name, url: url.to_string() });
	}
	if url.scheme() != "https" {
		return Err(EndpointsError::InsecureEndpoint { endpoint: name, url: url.to_string() });
	}

	Ok(())
}

fn validate_api_version(version: &str) -> Result<(), EndpointsError> {
	let valid = version
		.strip_prefix('v')
		.and_then(|rest| rest.split_once('.'))
		.is_some_and(|(major, minor)| {
			!major.is_empty()
				&& !minor.is_empty()
				&& major.bytes().all(|b| b.is_ascii_digit())
				&& minor.bytes().all(|b| b.is_ascii_digit())
		});

	if valid {
		Ok(())
	} else {
		Err(EndpointsError::InvalidApiVersion { version: version.to_owned() })
	}
}
