//! # Grappelli Tags
//!
//! Programmatic construction of HTML/XML markup: void tags, content tags
//! and CDATA sections, with attribute serialization on top of the
//! escaping policy from `grappelli-core`.
//!
//! All output is [`SafeMarkup`]: already escaped, to be spliced verbatim
//! by downstream renderers. Content passed to [`content_tag`] is never
//! re-escaped; escaping content is the caller's responsibility, which is
//! what lets nested calls compose.
//!
//! ## Example
//!
//! ```rust
//! use grappelli_tags::{content_tag, tag, Attrs, VoidStyle};
//!
//! let br = tag("br", &Attrs::new(), VoidStyle::SelfClosing, true);
//! assert_eq!(br, "<br />");
//!
//! let input = tag(
//! 	"input",
//! 	&Attrs::new().set("type", "text").set("disabled", true),
//! 	VoidStyle::SelfClosing,
//! 	true,
//! );
//! assert_eq!(input, r#"<input disabled="disabled" type="text" />"#);
//!
//! let inner = content_tag("p", "Hello world!", &Attrs::new(), true);
//! let outer = content_tag("div", &inner, &Attrs::new().set("class", "strong"), true);
//! assert_eq!(outer, r#"<div class="strong"><p>Hello world!</p></div>"#);
//! ```

pub mod attrs;
pub mod builder;

pub use attrs::{is_boolean_attribute, render_attributes, AttrValue, Attrs, BOOLEAN_ATTRIBUTES};
pub use builder::{
	cdata_section, checked_cdata_section, content_tag, content_tag_with, tag, write_content_tag,
	write_content_tag_with, write_tag, MarkupError, VoidStyle,
};

pub use grappelli_core::SafeMarkup;
