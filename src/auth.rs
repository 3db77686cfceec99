//! Login results handed back to callers: access tokens and normalized user profiles.

pub mod profile;
pub mod token;

pub use profile::*;
pub use token::*;
