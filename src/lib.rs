//! # Grappelli
//!
//! Programmatic HTML and XML tag generation with escape-once semantics.
//!
//! Grappelli builds well-formed markup strings from a tag name, an
//! optional attribute map and an escaping mode. It is deliberately
//! small: no HTML parsing or validation, no template engine, just the
//! construction and escaping rules needed to emit trustworthy markup.
//!
//! ## Core Principles
//!
//! - **Type-carried trust**: output is [`SafeMarkup`], a wrapper type
//!   asserting "already escaped"; downstream consumers splice it
//!   verbatim and must never re-escape it
//! - **Escape once**: value escaping is idempotent, so escaping
//!   already-escaped input is a no-op
//! - **Substitute, don't fail**: malformed tag and attribute names are
//!   rewritten into valid ones deterministically; no operation raises
//!   for malformed values
//! - **Pure functions**: every operation is synchronous and free of
//!   shared mutable state, safe to call from any number of threads
//!
//! ## Quick Example
//!
//! ```rust
//! use grappelli::prelude::*;
//!
//! let field = tag(
//! 	"input",
//! 	&Attrs::new().set("type", "text").set("disabled", true),
//! 	VoidStyle::SelfClosing,
//! 	true,
//! );
//! assert_eq!(field, r#"<input disabled="disabled" type="text" />"#);
//!
//! let label = content_tag("label", "Name", &Attrs::new().set("for", "name"), true);
//! assert_eq!(label, r#"<label for="name">Name</label>"#);
//! ```

pub use grappelli_core::{
	attribute_name_escape, clean_utf8, escape, escape_once, escape_once_bytes, xml_name_escape,
	SafeMarkup,
};
pub use grappelli_tags::{
	cdata_section, checked_cdata_section, content_tag, content_tag_with, is_boolean_attribute,
	render_attributes, tag, write_content_tag, write_content_tag_with, write_tag, AttrValue, Attrs,
	MarkupError, VoidStyle, BOOLEAN_ATTRIBUTES,
};

/// Commonly used items
pub mod prelude {
	pub use crate::{
		cdata_section, content_tag, content_tag_with, escape_once, tag, AttrValue, Attrs,
		SafeMarkup, VoidStyle,
	};
}
