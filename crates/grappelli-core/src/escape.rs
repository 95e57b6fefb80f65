//! HTML escaping with escape-once semantics

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

static ENTITY_REFERENCE: OnceLock<Regex> = OnceLock::new();

// Matches a valid-looking entity reference at the start of the slice:
// either a named entity (&amp;) or a decimal character reference (&#38;).
fn entity_reference() -> &'static Regex {
	ENTITY_REFERENCE.get_or_init(|| Regex::new(r"^&(?:[a-zA-Z]+|#[0-9]+);").unwrap())
}

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use grappelli_core::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Escape HTML without affecting existing entity references
///
/// Escapes `"`, `<` and `>` unconditionally. A `&` is escaped only when it
/// does not begin a valid-looking entity reference (a run of ASCII letters
/// terminated by `;`, or `#` followed by digits terminated by `;`).
/// Single quotes pass through untouched.
///
/// The function is idempotent: running it on its own output is a no-op.
///
/// # Examples
///
/// ```
/// use grappelli_core::escape_once;
///
/// assert_eq!(escape_once("1 < 2 &amp; 3"), "1 &lt; 2 &amp; 3");
/// assert_eq!(escape_once("&lt;&lt; Accept & Checkout"),
///            "&lt;&lt; Accept &amp; Checkout");
/// assert_eq!(escape_once(&escape_once("a & b")), escape_once("a & b"));
/// ```
pub fn escape_once(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for (i, ch) in text.char_indices() {
		match ch {
			'"' => result.push_str("&quot;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'&' if !entity_reference().is_match(&text[i..]) => result.push_str("&amp;"),
			_ => result.push(ch),
		}
	}
	result
}

/// Normalize malformed byte sequences to valid UTF-8
///
/// Invalid sequences become U+FFFD, so downstream escaping always operates
/// on well-formed text and never fails.
///
/// # Examples
///
/// ```
/// use grappelli_core::clean_utf8;
///
/// assert_eq!(clean_utf8(b"hello"), "hello");
/// assert_eq!(clean_utf8(&[0x66, 0xFF, 0x6F]), "f\u{FFFD}o");
/// ```
pub fn clean_utf8(bytes: &[u8]) -> Cow<'_, str> {
	String::from_utf8_lossy(bytes)
}

/// Normalize byte input, then apply [`escape_once`]
///
/// # Examples
///
/// ```
/// use grappelli_core::escape_once_bytes;
///
/// assert_eq!(escape_once_bytes(b"a < b"), "a &lt; b");
/// assert_eq!(escape_once_bytes(&[0x3C, 0xFF]), "&lt;\u{FFFD}");
/// ```
pub fn escape_once_bytes(bytes: &[u8]) -> String {
	escape_once(&clean_utf8(bytes))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_escape() {
		assert_eq!(
			escape("<script>alert('XSS')</script>"),
			"&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;"
		);
		assert_eq!(escape("5 < 10 & 10 > 5"), "5 &lt; 10 &amp; 10 &gt; 5");
		assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
		assert_eq!(escape(""), "");
	}

	#[test]
	fn test_escape_once_mixed_entities() {
		assert_eq!(
			escape_once("1 < 2 & 3 &amp; 4"),
			"1 &lt; 2 &amp; 3 &amp; 4"
		);
	}

	#[rstest]
	#[case("&amp;", "&amp;")]
	#[case("&#38;", "&#38;")]
	#[case("&quot;", "&quot;")]
	#[case("& loose", "&amp; loose")]
	#[case("&;", "&amp;;")]
	#[case("&#x27;", "&amp;#x27;")] // hex references are not recognized
	#[case("&amp", "&amp;amp")] // unterminated
	fn test_escape_once_ampersands(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_once(input), expected);
	}

	#[test]
	fn test_escape_once_leaves_single_quotes() {
		assert_eq!(escape_once("it's"), "it's");
	}

	#[test]
	fn test_escape_once_trailing_ampersand() {
		assert_eq!(escape_once("fish &"), "fish &amp;");
	}

	#[test]
	fn test_escape_once_multibyte() {
		assert_eq!(escape_once("こんにちは<>&"), "こんにちは&lt;&gt;&amp;");
	}

	#[test]
	fn test_clean_utf8_valid_input_borrows() {
		assert!(matches!(clean_utf8(b"plain"), Cow::Borrowed(_)));
	}

	#[test]
	fn test_escape_once_bytes_invalid_sequence() {
		let out = escape_once_bytes(&[b'<', 0xC3, 0x28, b'>']);
		assert!(out.starts_with("&lt;"));
		assert!(out.ends_with("&gt;"));
		assert!(out.contains('\u{FFFD}'));
	}
}

#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_escape_no_special_chars(s in "\\PC*") {
			let escaped = escape(&s);
			assert!(!escaped.contains('<'));
			assert!(!escaped.contains('>'));
			assert!(!escaped.contains('"'));
			assert!(!escaped.contains('\''));
		}

		#[test]
		fn prop_escape_once_idempotent(s in "\\PC*") {
			let once = escape_once(&s);
			assert_eq!(escape_once(&once), once);
		}

		#[test]
		fn prop_escape_once_no_raw_specials(s in "\\PC*") {
			let escaped = escape_once(&s);
			assert!(!escaped.contains('<'));
			assert!(!escaped.contains('>'));
			assert!(!escaped.contains('"'));
		}

		#[test]
		fn prop_escape_once_bytes_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
			let out = escape_once_bytes(&bytes);
			assert_eq!(escape_once(&out), out);
		}
	}
}
