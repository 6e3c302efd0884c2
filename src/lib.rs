//! # snapfmt
//!
//! Deterministic, human-readable value rendering for snapshot test
//! expectations.
//!
//! ## What is a snapshot?
//!
//! A snapshot is a persisted, previously-accepted textual rendering of a
//! value, used as the expected output for future test runs. For that to
//! work, rendering has to be canonical: running the same test twice on
//! unchanged data must produce byte-identical text, across process restarts
//! and platforms.
//!
//! ## Key Features
//!
//! - **Deterministic**: mapping keys are sorted before rendering, text is
//!   always a single-line literal, and identity addresses in opaque
//!   representations are replaced with a fixed sentinel
//! - **Total**: every value renders; the default rule set ends with a
//!   catch-all, so unrecognized shapes degrade gracefully instead of failing
//! - **Extensible**: dispatch is an ordered, first-match-wins rule list;
//!   custom rules and whole custom registries plug in at renderer
//!   construction
//! - **Serde Compatible**: snapshot any `T: Serialize` via
//!   `#[derive(Serialize)]`, no hand-built value trees required
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use snapfmt::render;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! let user = User { id: 7, name: "Alice".to_string() };
//! let snapshot = render(&user).unwrap();
//! assert_eq!(snapshot, "{\n    'id': 7,\n    'name': 'Alice'\n}");
//! ```
//!
//! ### Dynamic values with the snap! macro
//!
//! ```rust
//! use snapfmt::{render_value, snap};
//!
//! let value = snap!({
//!     "b": 1,
//!     "a": [true, null]
//! });
//!
//! // Keys render sorted, independent of construction order.
//! assert_eq!(
//!     render_value(&value).unwrap(),
//!     "{\n    'a': [\n        True,\n        None\n    ],\n    'b': 1\n}"
//! );
//! ```
//!
//! ### Custom rules
//!
//! ```rust
//! use snapfmt::{formatters, FormatRule, FormatterRegistry, RenderOptions, Renderer, Value};
//!
//! // Claim booleans before the standard scalar group and render them bare.
//! let mut rules: Vec<Box<dyn snapfmt::Formatter>> = vec![Box::new(FormatRule::new(
//!     Value::is_bool,
//!     |v, _, _| Ok(if v.as_bool() == Some(true) { "yes" } else { "no" }.to_string()),
//! ))];
//! rules.extend(formatters::default_rules());
//!
//! let renderer = Renderer::with_registry(FormatterRegistry::new(rules), RenderOptions::default());
//! assert_eq!(renderer.render(&Value::from(true)).unwrap(), "yes");
//! ```
//!
//! ## Scope
//!
//! This crate renders values to strings; it deliberately does not read or
//! write snapshot files, integrate with a test framework, or diff
//! mismatches. Those are callers that invoke [`render`] and consume the
//! result.
//!
//! Cyclic or pathologically deep inputs are a caller responsibility: values
//! here are owned trees, so true cycles cannot be constructed, and recursion
//! depth is bounded by the input's own nesting.

pub mod error;
pub mod formatters;
pub mod key;
pub mod macros;
pub mod map;
pub mod options;
pub mod registry;
pub mod render;
pub mod repr;
pub mod ser;
pub mod value;

pub use error::{Error, Result};
pub use key::Key;
pub use map::SnapMap;
pub use options::RenderOptions;
pub use registry::{FormatRule, Formatter, FormatterRegistry};
pub use render::Renderer;
pub use ser::ValueSerializer;
pub use value::{Number, Opaque, Value};

use serde::Serialize;

/// Renders any `T: Serialize` to its canonical snapshot string.
///
/// # Examples
///
/// ```rust
/// use snapfmt::render;
///
/// assert_eq!(render(&vec![1, 2]).unwrap(), "[\n    1,\n    2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be converted into the snapshot value
/// space or if its mapping keys are unorderable.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    render_with_options(value, RenderOptions::default())
}

/// Renders any `T: Serialize` with custom layout options.
///
/// # Examples
///
/// ```rust
/// use snapfmt::{render_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_indent("  ");
/// assert_eq!(render_with_options(&vec![1], options).unwrap(), "[\n  1\n]");
/// ```
///
/// # Errors
///
/// Returns an error under the same conditions as [`render`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_with_options<T>(value: &T, options: RenderOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    Renderer::with_options(options).render(&to_value(value)?)
}

/// Renders an already-built [`Value`] with the default rule set and layout.
///
/// Use this for values constructed via [`snap!`] or [`Value::opaque`], which
/// have no `Serialize` round trip.
///
/// # Errors
///
/// Returns an error if mapping keys are unorderable.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn render_value(value: &Value) -> Result<String> {
    Renderer::new().render(value)
}

/// Converts any `T: Serialize` to a [`Value`].
///
/// # Examples
///
/// ```rust
/// use snapfmt::{to_value, Value};
///
/// let value = to_value(&42).unwrap();
/// assert_eq!(value, Value::from(42));
/// ```
///
/// # Errors
///
/// Returns an error if the value uses unhashable mapping keys or a shape
/// outside the snapshot value space.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}
