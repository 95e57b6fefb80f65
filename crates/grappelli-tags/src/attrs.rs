//! Attribute values, maps and serialization

use grappelli_core::{attribute_name_escape, escape_once};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Attributes whose presence alone conveys meaning
///
/// A truthy value renders as `key="key"`; anything falsy omits the
/// attribute entirely.
pub const BOOLEAN_ATTRIBUTES: &[&str] = &["checked", "disabled", "multiple", "readonly"];

/// Whether `key` has presence semantics rather than value semantics
///
/// Keys are matched case-insensitively, so `DISABLED` and `disabled`
/// behave the same.
///
/// # Examples
///
/// ```
/// use grappelli_tags::is_boolean_attribute;
///
/// assert!(is_boolean_attribute("disabled"));
/// assert!(is_boolean_attribute("Checked"));
/// assert!(!is_boolean_attribute("type"));
/// ```
pub fn is_boolean_attribute(key: &str) -> bool {
	BOOLEAN_ATTRIBUTES
		.iter()
		.any(|name| key.eq_ignore_ascii_case(name))
}

/// An attribute value: text, a boolean flag, or nothing
///
/// `Null` entries are dropped from rendered output entirely, in both
/// escape modes. Numbers convert through their canonical `Display` form.
///
/// # Examples
///
/// ```
/// use grappelli_tags::AttrValue;
///
/// assert_eq!(AttrValue::from("text"), AttrValue::Text("text".to_string()));
/// assert_eq!(AttrValue::from(42), AttrValue::Text("42".to_string()));
/// assert_eq!(AttrValue::from(true), AttrValue::Flag(true));
/// assert_eq!(AttrValue::from(None::<&str>), AttrValue::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
	/// A boolean flag, meaningful for keys in [`BOOLEAN_ATTRIBUTES`]
	Flag(bool),
	/// An arbitrary text value
	Text(String),
	/// No value; the attribute is omitted from output
	Null,
}

impl AttrValue {
	/// Whether this value omits its attribute entirely
	pub fn is_null(&self) -> bool {
		matches!(self, AttrValue::Null)
	}

	/// Truthiness for boolean-attribute rendering
	///
	/// Only `Flag(false)` and `Null` are falsy; any text value counts as
	/// present.
	pub fn is_truthy(&self) -> bool {
		!matches!(self, AttrValue::Flag(false) | AttrValue::Null)
	}

	/// The value's text form (`Null` stringifies to the empty string)
	pub fn to_text(&self) -> Cow<'_, str> {
		match self {
			AttrValue::Flag(flag) => Cow::Owned(flag.to_string()),
			AttrValue::Text(text) => Cow::Borrowed(text),
			AttrValue::Null => Cow::Borrowed(""),
		}
	}
}

impl From<bool> for AttrValue {
	fn from(flag: bool) -> Self {
		AttrValue::Flag(flag)
	}
}

impl From<&str> for AttrValue {
	fn from(text: &str) -> Self {
		AttrValue::Text(text.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(text: String) -> Self {
		AttrValue::Text(text)
	}
}

impl From<&String> for AttrValue {
	fn from(text: &String) -> Self {
		AttrValue::Text(text.clone())
	}
}

impl<T> From<Option<T>> for AttrValue
where
	T: Into<AttrValue>,
{
	fn from(value: Option<T>) -> Self {
		match value {
			Some(inner) => inner.into(),
			None => AttrValue::Null,
		}
	}
}

macro_rules! attr_value_from_display {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Text(value.to_string())
				}
			}
		)*
	};
}

attr_value_from_display!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, isize, f32, f64, char);

/// An attribute map
///
/// Keys are normalized to plain `String`s on insertion; iteration order
/// does not matter because rendered tokens are sorted. Duplicate keys are
/// kept as given and each renders its own token.
///
/// # Examples
///
/// ```
/// use grappelli_tags::{render_attributes, Attrs};
///
/// let attrs = Attrs::new().set("type", "text").set("disabled", true);
/// assert_eq!(
/// 	render_attributes(&attrs, true).unwrap(),
/// 	r#" disabled="disabled" type="text""#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs(Vec<(String, AttrValue)>);

impl Attrs {
	/// Create an empty attribute map
	pub fn new() -> Self {
		Attrs(Vec::new())
	}

	/// Builder-style insertion
	pub fn set(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.insert(key, value);
		self
	}

	/// Insert an entry
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
		self.0.push((key.into(), value.into()));
	}

	/// Whether the map has no entries
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Number of entries
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Iterate over entries in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.0.iter().map(|(key, value)| (key.as_str(), value))
	}
}

impl<K, V> FromIterator<(K, V)> for Attrs
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Attrs(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		)
	}
}

impl<K, V, const N: usize> From<[(K, V); N]> for Attrs
where
	K: Into<String>,
	V: Into<AttrValue>,
{
	fn from(entries: [(K, V); N]) -> Self {
		entries.into_iter().collect()
	}
}

/// Serialize an attribute map to a `key="value"` list
///
/// Returns `None` when no attribute survives filtering, so callers can
/// distinguish "no attributes" from "attributes present but all
/// filtered". `Some` output carries a single leading space and its
/// tokens sorted lexicographically, making the result deterministic
/// regardless of insertion order.
///
/// With `escape` set, keys in [`BOOLEAN_ATTRIBUTES`] render as
/// `key="key"` when truthy and vanish otherwise; all other keys go
/// through attribute-name escaping and their values through
/// `escape_once`. With `escape` unset, only literal double quotes in
/// values are rewritten, a deliberately weaker mode for callers that
/// pre-trust their input. `Null` values are dropped in both modes.
///
/// # Examples
///
/// ```
/// use grappelli_tags::{render_attributes, Attrs};
///
/// let attrs = Attrs::new().set("src", "open & shut.png");
/// assert_eq!(
/// 	render_attributes(&attrs, true).unwrap(),
/// 	r#" src="open &amp; shut.png""#
/// );
/// // Pre-escaped input stays untouched in the trusted mode
/// let attrs = Attrs::new().set("src", "open &amp; shut.png");
/// assert_eq!(
/// 	render_attributes(&attrs, false).unwrap(),
/// 	r#" src="open &amp; shut.png""#
/// );
///
/// assert_eq!(render_attributes(&Attrs::new(), true), None);
/// ```
pub fn render_attributes(attrs: &Attrs, escape: bool) -> Option<String> {
	if attrs.is_empty() {
		return None;
	}
	let mut tokens = Vec::with_capacity(attrs.len());
	for (key, value) in attrs.iter() {
		if escape {
			if is_boolean_attribute(key) {
				if value.is_truthy() {
					tokens.push(format!(r#"{key}="{key}""#));
				}
			} else if !value.is_null() {
				let key = attribute_name_escape(key);
				let value = escape_once(&value.to_text());
				tokens.push(format!(r#"{key}="{value}""#));
			}
		} else if !value.is_null() {
			let value = value.to_text().replace('"', "&quot;");
			tokens.push(format!(r#"{key}="{value}""#));
		}
	}
	if tokens.is_empty() {
		return None;
	}
	tokens.sort_unstable();
	Some(format!(" {}", tokens.join(" ")))
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_null_never_rendered(key in "[a-z][a-z0-9-]{0,12}") {
			let attrs = Attrs::new().set(key.clone(), AttrValue::Null);
			prop_assert_eq!(render_attributes(&attrs, true), None);
			prop_assert_eq!(render_attributes(&attrs, false), None);
		}

		#[test]
		fn prop_escaped_values_contain_no_raw_quotes(value in "\\PC*") {
			let attrs = Attrs::new().set("v", value);
			if let Some(rendered) = render_attributes(&attrs, true) {
				// exactly the two delimiting quotes around the value
				prop_assert_eq!(rendered.matches('"').count(), 2);
			}
		}

		#[test]
		fn prop_output_independent_of_order(
			pairs in proptest::collection::vec(("[a-z]{1,8}", "[a-zA-Z0-9 ]{0,8}"), 0..6)
		) {
			let forward: Attrs = pairs.clone().into_iter().collect();
			let mut shuffled = pairs;
			shuffled.reverse();
			let reverse: Attrs = shuffled.into_iter().collect();
			prop_assert_eq!(
				render_attributes(&forward, true),
				render_attributes(&reverse, true)
			);
		}
	}
}
