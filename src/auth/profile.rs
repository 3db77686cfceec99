//! Normalized user profile and the provider's birthday format.

// crates.io
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
// self
use crate::_prelude::*;

const BIRTHDAY_PADDED: &[BorrowedFormatItem<'_>] = format_description!("[day]/[month]/[year]");
const BIRTHDAY_UNPADDED: &[BorrowedFormatItem<'_>] =
	format_description!("[day padding:none]/[month padding:none]/[year]");

/// Identity details returned by a successful profile fetch.
///
/// Only `email` and `display_name` are guaranteed non-empty; the other strings are empty when
/// the user withheld them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
	/// Numeric user identifier (app-scoped), when the provider returned one.
	pub id: Option<u64>,
	/// Full display name.
	pub display_name: String,
	/// Gender as free-form provider text.
	pub gender: String,
	/// Primary email address.
	pub email: String,
	/// Profile picture URL.
	pub photo_url: String,
	/// Calendar birthday; `None` when absent or not in `DD/MM/YYYY` form.
	pub birthday: Option<Date>,
}
impl UserProfile {
	/// A profile can establish identity only when both email and display name are present.
	pub fn is_valid(&self) -> bool {
		!self.email.is_empty() && !self.display_name.is_empty()
	}
}

/// Parses a `DD/MM/YYYY` birthday, tolerating surrounding whitespace and unpadded day/month.
pub fn parse_birthday(raw: &str) -> Result<Date, time::error::Parse> {
	let raw = raw.trim();

	Date::parse(raw, BIRTHDAY_PADDED).or_else(|_| Date::parse(raw, BIRTHDAY_UNPADDED))
}
