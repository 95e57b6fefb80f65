//! The safe-markup wrapper type

use std::fmt;

/// Markup that already satisfies the output escaping contract
///
/// Every producer of a `SafeMarkup` asserts that the wrapped string is
/// fully escaped; consumers must splice it verbatim and never re-escape
/// it. Keeping the assertion in the type system (rather than a runtime
/// flag on strings) makes accidental double-escaping a compile error:
/// escaping functions accept `&str` and return `String`, so a
/// `SafeMarkup` never flows back through them unnoticed.
///
/// # Examples
///
/// ```
/// use grappelli_core::SafeMarkup;
///
/// let safe = SafeMarkup::new("<b>Bold</b>");
/// assert_eq!(safe.as_str(), "<b>Bold</b>");
/// assert_eq!(safe.to_string(), "<b>Bold</b>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafeMarkup(String);

impl SafeMarkup {
	/// Wrap a string, asserting it is already escaped
	pub fn new(s: impl Into<String>) -> Self {
		SafeMarkup(s.into())
	}

	/// Get the inner string
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Convert into the inner `String`
	pub fn into_string(self) -> String {
		self.0
	}

	/// Append another piece of safe markup
	///
	/// # Examples
	///
	/// ```
	/// use grappelli_core::SafeMarkup;
	///
	/// let mut out = SafeMarkup::new("<ul>");
	/// out.push(&SafeMarkup::new("<li>one</li>"));
	/// out.push_raw("</ul>");
	/// assert_eq!(out.as_str(), "<ul><li>one</li></ul>");
	/// ```
	pub fn push(&mut self, other: &SafeMarkup) {
		self.0.push_str(&other.0);
	}

	/// Append a raw string the caller vouches for
	pub fn push_raw(&mut self, raw: &str) {
		self.0.push_str(raw);
	}
}

impl From<String> for SafeMarkup {
	fn from(s: String) -> Self {
		SafeMarkup(s)
	}
}

impl From<&str> for SafeMarkup {
	fn from(s: &str) -> Self {
		SafeMarkup(s.to_string())
	}
}

impl From<SafeMarkup> for String {
	fn from(markup: SafeMarkup) -> Self {
		markup.0
	}
}

impl AsRef<str> for SafeMarkup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for SafeMarkup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl PartialEq<str> for SafeMarkup {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for SafeMarkup {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for SafeMarkup {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_safe_markup_roundtrip() {
		let safe = SafeMarkup::new("<b>Bold</b>");
		assert_eq!(safe.as_str(), "<b>Bold</b>");
		assert_eq!(safe.into_string(), "<b>Bold</b>");
	}

	#[test]
	fn test_safe_markup_from() {
		let safe1: SafeMarkup = String::from("<b>Bold</b>").into();
		assert_eq!(safe1, "<b>Bold</b>");

		let safe2: SafeMarkup = "<i>Italic</i>".into();
		assert_eq!(safe2, "<i>Italic</i>");

		let back: String = safe2.into();
		assert_eq!(back, "<i>Italic</i>");
	}

	#[test]
	fn test_safe_markup_push() {
		let mut out = SafeMarkup::new("<p>");
		out.push(&SafeMarkup::new("hi"));
		out.push_raw("</p>");
		assert_eq!(out, "<p>hi</p>");
	}

	#[test]
	fn test_safe_markup_display() {
		let safe = SafeMarkup::new("<hr />");
		assert_eq!(format!("{safe}"), "<hr />");
	}
}
