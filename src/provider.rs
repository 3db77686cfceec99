//! Provider-facing endpoint metadata (data) and URL construction (behavior).
//!
//! `endpoints` exposes validated [`GraphEndpoints`] covering the HTTPS-only dialog and Graph API
//! hosts plus an optional API version. `urls` builds the three request URLs used by the login
//! flows with deterministic, lexicographically ordered query strings.

pub mod endpoints;
pub mod urls;

pub use endpoints::*;
pub use urls::*;
