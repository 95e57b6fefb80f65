//! # Grappelli Core
//!
//! Escaping policy and the safe-markup wrapper shared by the grappelli
//! tag-generation crates.
//!
//! ## Features
//!
//! - Idempotent HTML escaping (`escape_once`) that leaves existing entity
//!   references untouched
//! - Lossy normalization of malformed byte input before escaping
//! - XML name and HTML attribute-name escaping that substitute rather
//!   than fail
//! - [`SafeMarkup`], a wrapper type carrying the "already escaped, do not
//!   re-escape" contract
//!
//! ## Example
//!
//! ```rust
//! use grappelli_core::{escape_once, SafeMarkup};
//!
//! let escaped = escape_once("1 < 2 &amp; 3");
//! assert_eq!(escaped, "1 &lt; 2 &amp; 3");
//!
//! let markup = SafeMarkup::new(format!("<b>{}</b>", escaped));
//! assert_eq!(markup.as_str(), "<b>1 &lt; 2 &amp; 3</b>");
//! ```

pub mod escape;
pub mod names;
pub mod safe;

pub use escape::{clean_utf8, escape, escape_once, escape_once_bytes};
pub use names::{attribute_name_escape, xml_name_escape};
pub use safe::SafeMarkup;
