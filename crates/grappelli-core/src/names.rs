//! Element and attribute name escaping
//!
//! Tag names are escaped against the XML 1.0 `Name` production and
//! attribute names against the HTML attribute-name syntax. Both escapes
//! substitute `_` for illegal characters instead of failing, so callers
//! always get a deterministic, syntactically valid name back.

// XML 1.0 fifth edition, production [4] NameStartChar.
fn is_name_start_char(ch: char) -> bool {
	matches!(ch,
		':' | '_'
		| 'A'..='Z'
		| 'a'..='z'
		| '\u{C0}'..='\u{D6}'
		| '\u{D8}'..='\u{F6}'
		| '\u{F8}'..='\u{2FF}'
		| '\u{370}'..='\u{37D}'
		| '\u{37F}'..='\u{1FFF}'
		| '\u{200C}'..='\u{200D}'
		| '\u{2070}'..='\u{218F}'
		| '\u{2C00}'..='\u{2FEF}'
		| '\u{3001}'..='\u{D7FF}'
		| '\u{F900}'..='\u{FDCF}'
		| '\u{FDF0}'..='\u{FFFD}'
		| '\u{10000}'..='\u{EFFFF}'
	)
}

// XML 1.0 fifth edition, production [4a] NameChar.
fn is_name_char(ch: char) -> bool {
	is_name_start_char(ch)
		|| matches!(ch,
			'-' | '.'
			| '0'..='9'
			| '\u{B7}'
			| '\u{300}'..='\u{36F}'
			| '\u{203F}'..='\u{2040}'
		)
}

/// Escape a string for use as an XML element or attribute name
///
/// Characters illegal in an XML `Name` are replaced with `_`, as is a
/// leading character that cannot start a `Name`. The XML name grammar is
/// applied to tag names because it is less restrictive than the HTML
/// spec while still preventing markup injection.
///
/// Empty input yields empty output; any non-empty input yields a valid
/// name.
///
/// # Examples
///
/// ```
/// use grappelli_core::xml_name_escape;
///
/// assert_eq!(xml_name_escape("br"), "br");
/// assert_eq!(xml_name_escape("foo bar"), "foo_bar");
/// assert_eq!(xml_name_escape("1invalid"), "_invalid");
/// assert_eq!(xml_name_escape("<script>"), "_script_");
/// ```
pub fn xml_name_escape(name: &str) -> String {
	let mut chars = name.chars();
	let mut result = String::with_capacity(name.len());
	if let Some(first) = chars.next() {
		result.push(if is_name_start_char(first) { first } else { '_' });
	}
	for ch in chars {
		result.push(if is_name_char(ch) { ch } else { '_' });
	}
	result
}

/// Escape a string for use as an HTML attribute name
///
/// The HTML syntax is applied to attribute names because it is less
/// restrictive on names than the XML spec while still preventing
/// injection: whitespace, control characters and `" ' < > / =` are
/// replaced with `_`.
///
/// # Examples
///
/// ```
/// use grappelli_core::attribute_name_escape;
///
/// assert_eq!(attribute_name_escape("data-id"), "data-id");
/// assert_eq!(attribute_name_escape("on click"), "on_click");
/// assert_eq!(attribute_name_escape("a=\"b\""), "a__b_");
/// ```
pub fn attribute_name_escape(name: &str) -> String {
	name.chars()
		.map(|ch| match ch {
			_ if ch.is_control() => '_',
			' ' | '"' | '\'' | '<' | '>' | '/' | '=' => '_',
			_ => ch,
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("div", "div")]
	#[case("my-tag", "my-tag")]
	#[case("ns:tag", "ns:tag")]
	#[case("_private", "_private")]
	#[case("foo bar", "foo_bar")]
	#[case("1digit", "_digit")]
	#[case("-leading-dash", "_leading-dash")]
	#[case(".leading-dot", "_leading-dot")]
	#[case("a<b>c", "a_b_c")]
	#[case("", "")]
	fn test_xml_name_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(xml_name_escape(input), expected);
	}

	#[test]
	fn test_xml_name_escape_multibyte() {
		// CJK is valid anywhere in a Name
		assert_eq!(xml_name_escape("タグ"), "タグ");
	}

	#[test]
	fn test_xml_name_escape_is_deterministic() {
		let escaped = xml_name_escape("<weird name>");
		assert_eq!(xml_name_escape("<weird name>"), escaped);
		// Escaped names are already valid, so escaping is idempotent
		assert_eq!(xml_name_escape(&escaped), escaped);
	}

	#[rstest]
	#[case("type", "type")]
	#[case("data-value", "data-value")]
	#[case("key=value", "key_value")]
	#[case("key/slash", "key_slash")]
	#[case("tab\there", "tab_here")]
	#[case("quote\"name", "quote_name")]
	fn test_attribute_name_escape(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(attribute_name_escape(input), expected);
	}

	#[test]
	fn test_attribute_name_escape_control_chars() {
		assert_eq!(attribute_name_escape("a\nb\rc"), "a_b_c");
		assert_eq!(attribute_name_escape("\u{7F}"), "_");
	}
}
