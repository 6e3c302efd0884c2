//! The default rendering rules.
//!
//! Each rule is a plain function matching the [`RenderFn`](crate::registry::RenderFn)
//! signature, paired with a shape predicate in [`default_rules`]. The three
//! container rules share one layout: every element on its own line preceded
//! by the line-feed marker and the indent unit repeated `depth + 1` times,
//! elements joined by a bare comma, and the closing bracket re-aligned with
//! the opening construct at `depth`. Empty containers keep the same template
//! with an empty item list (`[\n]`, not `[]`) so stored snapshots stay
//! byte-identical.

use crate::{repr, Error, FormatRule, Formatter, Renderer, Result, Value};
use std::cmp::Ordering;

/// Renders the null value as its literal token.
pub fn format_none(_value: &Value, _indent: usize, _renderer: &Renderer) -> Result<String> {
    Ok("None".to_string())
}

/// Renders text as a single-line quoted literal.
///
/// Line terminators are escaped rather than emitted raw; a multiline literal
/// would be normalized differently across platforms when the snapshot is
/// re-read from storage.
pub fn format_str(value: &Value, _indent: usize, _renderer: &Renderer) -> Result<String> {
    let Value::Str(s) = value else {
        return Err(Error::custom("text rule applied to non-text value"));
    };
    Ok(repr::quote_str(s))
}

/// Renders a standard scalar (integers, floats, complex numbers, booleans,
/// bytes, sets and frozen sets) via its native textual representation.
pub fn format_scalar(value: &Value, _indent: usize, _renderer: &Renderer) -> Result<String> {
    Ok(value.to_string())
}

/// Renders a mapping with keys sorted into ascending order.
///
/// Sorting requires the keys to be mutually comparable; incomparable keys
/// propagate as an error rather than falling back to insertion order, which
/// would break the determinism guarantee. Each key renders at the current
/// depth and its value one level deeper.
pub fn format_map(value: &Value, indent: usize, renderer: &Renderer) -> Result<String> {
    let Value::Map(map) = value else {
        return Err(Error::custom("mapping rule applied to non-mapping value"));
    };

    let mut entries: Vec<_> = map.iter().collect();
    let mut cmp_err = None;
    entries.sort_by(|a, b| match a.0.try_cmp(b.0) {
        Ok(ordering) => ordering,
        Err(e) => {
            cmp_err.get_or_insert(e);
            Ordering::Equal
        }
    });
    if let Some(e) = cmp_err {
        return Err(e);
    }

    let mut items = Vec::with_capacity(entries.len());
    for (key, val) in entries {
        items.push(format!(
            "{}{}{}: {}",
            renderer.newline(),
            renderer.indentation(indent + 1),
            renderer.render_at(&key.to_value(), indent)?,
            renderer.render_at(val, indent + 1)?,
        ));
    }
    Ok(format!(
        "{{{}{}{}}}",
        items.join(","),
        renderer.newline(),
        renderer.indentation(indent)
    ))
}

/// Renders an ordered sequence, preserving element order.
pub fn format_list(value: &Value, indent: usize, renderer: &Renderer) -> Result<String> {
    let Value::List(elems) = value else {
        return Err(Error::custom("list rule applied to non-list value"));
    };
    let items = render_items(elems, indent, renderer)?;
    Ok(format!(
        "[{}{}{}]",
        items.join(","),
        renderer.newline(),
        renderer.indentation(indent)
    ))
}

/// Renders a fixed sequence, preserving element order.
pub fn format_tuple(value: &Value, indent: usize, renderer: &Renderer) -> Result<String> {
    let Value::Tuple(elems) = value else {
        return Err(Error::custom("tuple rule applied to non-tuple value"));
    };
    let items = render_items(elems, indent, renderer)?;
    Ok(format!(
        "({}{}{})",
        items.join(","),
        renderer.newline(),
        renderer.indentation(indent)
    ))
}

fn render_items(elems: &[Value], indent: usize, renderer: &Renderer) -> Result<Vec<String>> {
    let mut items = Vec::with_capacity(elems.len());
    for elem in elems {
        items.push(format!(
            "{}{}{}",
            renderer.newline(),
            renderer.indentation(indent + 1),
            renderer.render_at(elem, indent + 1)?,
        ));
    }
    Ok(items)
}

/// The catch-all rule: claims every value, rendering its native
/// representation with embedded identity addresses replaced by the sentinel.
pub struct GenericFormatter;

impl Formatter for GenericFormatter {
    fn can_format(&self, _value: &Value) -> bool {
        true
    }

    fn format(&self, value: &Value, _indent: usize, _renderer: &Renderer) -> Result<String> {
        Ok(repr::scrub_identity(&value.to_string()))
    }
}

/// The default ordered rule set.
///
/// Order matters. Mapping and sequence checks sit before the scalar group so
/// container shapes never fall through to a generic repr, and the catch-all
/// sits last so every value resolves to some rule.
#[must_use]
pub fn default_rules() -> Vec<Box<dyn Formatter>> {
    vec![
        Box::new(FormatRule::new(Value::is_null, format_none)),
        Box::new(FormatRule::new(Value::is_map, format_map)),
        Box::new(FormatRule::new(Value::is_tuple, format_tuple)),
        Box::new(FormatRule::new(Value::is_list, format_list)),
        Box::new(FormatRule::new(Value::is_str, format_str)),
        Box::new(FormatRule::new(is_standard_scalar, format_scalar)),
        Box::new(GenericFormatter),
    ]
}

fn is_standard_scalar(value: &Value) -> bool {
    value.is_number() || value.is_bool() || value.is_bytes() || value.is_set()
}
