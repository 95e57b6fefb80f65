//! Tag construction
//!
//! Every operation comes in two forms: one returning a fresh
//! [`SafeMarkup`] and one appending to a caller-supplied `String`
//! buffer. The caller picks explicitly; nothing is detected at runtime.

use crate::attrs::{render_attributes, Attrs};
use grappelli_core::{xml_name_escape, SafeMarkup};
use std::borrow::Cow;
use thiserror::Error;
use tracing::trace;

/// How a void tag is terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoidStyle {
	/// XHTML-compliant self-closing tag: `<br />`
	#[default]
	SelfClosing,
	/// HTML 4.0-style unterminated open tag: `<br>`
	Open,
}

/// Errors from the checked constructors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkupError {
	/// CDATA content may not contain its own terminator
	#[error("CDATA content contains the \"]]>\" terminator sequence")]
	CdataTerminator,
}

fn escaped_name(name: &str, escape: bool) -> Cow<'_, str> {
	if !escape {
		return Cow::Borrowed(name);
	}
	let escaped = xml_name_escape(name);
	if escaped == name {
		Cow::Borrowed(name)
	} else {
		trace!(original = name, escaped = %escaped, "tag name rewritten during escaping");
		Cow::Owned(escaped)
	}
}

/// Append an empty (void) tag to `out`
///
/// Buffer-appending form of [`tag`].
pub fn write_tag(out: &mut String, name: &str, attrs: &Attrs, style: VoidStyle, escape: bool) {
	let name = escaped_name(name, escape);
	out.push('<');
	out.push_str(&name);
	if let Some(rendered) = render_attributes(attrs, escape) {
		out.push_str(&rendered);
	}
	out.push_str(match style {
		VoidStyle::SelfClosing => " />",
		VoidStyle::Open => ">",
	});
}

/// Build an empty (void) tag
///
/// With `escape` set, the tag name goes through XML name escaping; the
/// attribute list is serialized and sorted by
/// [`render_attributes`](crate::render_attributes). An empty attribute
/// map renders nothing, and unknown attribute keys are accepted
/// opaquely.
///
/// # Examples
///
/// ```
/// use grappelli_tags::{tag, Attrs, VoidStyle};
///
/// assert_eq!(tag("br", &Attrs::new(), VoidStyle::SelfClosing, true), "<br />");
/// assert_eq!(tag("br", &Attrs::new(), VoidStyle::Open, true), "<br>");
///
/// let img = tag(
/// 	"img",
/// 	&Attrs::new().set("src", "open & shut.png"),
/// 	VoidStyle::SelfClosing,
/// 	true,
/// );
/// assert_eq!(img, r#"<img src="open &amp; shut.png" />"#);
/// ```
pub fn tag(name: &str, attrs: &Attrs, style: VoidStyle, escape: bool) -> SafeMarkup {
	let mut out = String::new();
	write_tag(&mut out, name, attrs, style, escape);
	SafeMarkup::new(out)
}

/// Append a content tag to `out`
///
/// Buffer-appending form of [`content_tag`].
pub fn write_content_tag(
	out: &mut String,
	name: &str,
	content: impl AsRef<str>,
	attrs: &Attrs,
	escape: bool,
) {
	let name = escaped_name(name, escape);
	out.push('<');
	out.push_str(&name);
	if let Some(rendered) = render_attributes(attrs, escape) {
		out.push_str(&rendered);
	}
	out.push('>');
	out.push_str(content.as_ref());
	out.push_str("</");
	out.push_str(&name);
	out.push('>');
}

/// Build a tag pair wrapping `content`
///
/// The content is spliced verbatim and never re-escaped here, so
/// pre-rendered markup from a nested call passes through intact;
/// escaping plain-text content is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use grappelli_tags::{content_tag, Attrs};
///
/// let p = content_tag("p", "Hello world!", &Attrs::new(), true);
/// assert_eq!(p, "<p>Hello world!</p>");
///
/// let select = content_tag(
/// 	"select",
/// 	"<option>1</option>",
/// 	&Attrs::new().set("multiple", true),
/// 	true,
/// );
/// assert_eq!(select, r#"<select multiple="multiple"><option>1</option></select>"#);
/// ```
pub fn content_tag(
	name: &str,
	content: impl AsRef<str>,
	attrs: &Attrs,
	escape: bool,
) -> SafeMarkup {
	let mut out = String::new();
	write_content_tag(&mut out, name, content, attrs, escape);
	SafeMarkup::new(out)
}

/// Build a content tag from deferred content
///
/// `content_fn` is invoked exactly once, synchronously, before the final
/// string is assembled. Useful when the inner markup is itself built up
/// from nested calls.
///
/// # Examples
///
/// ```
/// use grappelli_tags::{content_tag, content_tag_with, Attrs};
///
/// let div = content_tag_with("div", &Attrs::new().set("class", "strong"), true, || {
/// 	content_tag("p", "Hello world!", &Attrs::new(), true)
/// });
/// assert_eq!(div, r#"<div class="strong"><p>Hello world!</p></div>"#);
/// ```
pub fn content_tag_with<F>(name: &str, attrs: &Attrs, escape: bool, content_fn: F) -> SafeMarkup
where
	F: FnOnce() -> SafeMarkup,
{
	content_tag(name, content_fn(), attrs, escape)
}

/// Append a content tag built from deferred content to `out`
pub fn write_content_tag_with<F>(
	out: &mut String,
	name: &str,
	attrs: &Attrs,
	escape: bool,
	content_fn: F,
) where
	F: FnOnce() -> SafeMarkup,
{
	write_content_tag(out, name, content_fn(), attrs, escape);
}

/// Wrap content in a CDATA section
///
/// The content is passed through verbatim, with no escaping; it is the
/// caller's responsibility that it contains no `]]>` terminator. See
/// [`checked_cdata_section`] for a variant that verifies this.
///
/// # Examples
///
/// ```
/// use grappelli_tags::cdata_section;
///
/// assert_eq!(cdata_section("<hello>"), "<![CDATA[<hello>]]>");
/// ```
pub fn cdata_section(content: &str) -> SafeMarkup {
	SafeMarkup::new(format!("<![CDATA[{content}]]>"))
}

/// Wrap content in a CDATA section, rejecting unterminatable content
///
/// # Examples
///
/// ```
/// use grappelli_tags::{checked_cdata_section, MarkupError};
///
/// assert_eq!(checked_cdata_section("<hello>").unwrap(), "<![CDATA[<hello>]]>");
/// assert_eq!(
/// 	checked_cdata_section("bad ]]> content").unwrap_err(),
/// 	MarkupError::CdataTerminator
/// );
/// ```
pub fn checked_cdata_section(content: &str) -> Result<SafeMarkup, MarkupError> {
	if content.contains("]]>") {
		return Err(MarkupError::CdataTerminator);
	}
	Ok(cdata_section(content))
}
