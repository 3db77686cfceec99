//! Request URL construction for the dialog, token, and profile endpoints.
//!
//! Every builder collects its parameters in a [`BTreeMap`] before encoding so the query string
//! is ordered by key and byte-for-byte reproducible.

// self
use crate::{_prelude::*, config::ClientConfig, provider::GraphEndpoints};

const DIALOG_ACTION: &str = "dialog/oauth";
const ACCESS_TOKEN_ACTION: &str = "oauth/access_token";
const PROFILE_ACTION: &str = "me";

const CLIENT_ID: &str = "client_id";
const CLIENT_SECRET: &str = "client_secret";
const REDIRECT_URI: &str = "redirect_uri";
const SCOPE: &str = "scope";
const RESPONSE_TYPE: &str = "response_type";
const CODE: &str = "code";
const ACCESS_TOKEN: &str = "access_token";
const FIELDS: &str = "fields";
const RESPONSE_TYPE_CODE: &str = "code";

/// Profile fields requested from the Graph API.
pub const PROFILE_FIELDS: &str = "id,name,birthday,gender,picture.type(large),email";

type Query<'a> = BTreeMap<&'static str, &'a str>;

/// Builds the login dialog URL end users are redirected to.
pub fn dialog_url(config: &ClientConfig, endpoints: &GraphEndpoints) -> Url {
	let mut query = base_query(config);

	query.insert(SCOPE, config.scope());
	query.insert(RESPONSE_TYPE, RESPONSE_TYPE_CODE);

	encode(&endpoints.dialog, &endpoints.action_path(DIALOG_ACTION), &query)
}

/// Builds the Graph URL that trades an authorization code for an access token.
pub fn access_token_url(config: &ClientConfig, endpoints: &GraphEndpoints, code: &str) -> Url {
	let mut query = base_query(config);

	query.insert(CLIENT_SECRET, config.app_secret());
	query.insert(CODE, code);

	encode(&endpoints.graph, &endpoints.action_path(ACCESS_TOKEN_ACTION), &query)
}

/// Builds the Graph URL that returns the authenticated user's profile.
///
/// `client_id` and `redirect_uri` are not accepted by this endpoint and are left out.
pub fn profile_url(config: &ClientConfig, endpoints: &GraphEndpoints, access_token: &str) -> Url {
	let mut query = base_query(config);

	query.remove(CLIENT_ID);
	query.remove(REDIRECT_URI);
	query.insert(ACCESS_TOKEN, access_token);
	query.insert(FIELDS, PROFILE_FIELDS);

	encode(&endpoints.graph, &endpoints.action_path(PROFILE_ACTION), &query)
}

fn base_query(config: &ClientConfig) -> Query<'_> {
	let mut query = BTreeMap::new();

	query.insert(CLIENT_ID, config.app_id());
	query.insert(REDIRECT_URI, config.redirect_url());

	query
}

/// Appends `path` to whatever path the base already carries, so proxied hosts keep their prefix.
fn encode(base: &Url, path: &str, query: &Query) -> Url {
	let mut url = base.clone();
	let joined = format!("{}{path}", base.path().trim_end_matches('/'));

	url.set_path(&joined);
	url.set_fragment(None);
	url.query_pairs_mut().clear().extend_pairs(query.iter());

	url
}
