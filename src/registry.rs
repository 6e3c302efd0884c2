//! Rule dispatch for rendering.
//!
//! A [`FormatterRegistry`] holds an ordered sequence of rendering rules and
//! resolves, for a given value, the first rule whose predicate claims it.
//! Resolution is first-match-wins: rules are not assumed mutually exclusive,
//! and only registration order determines precedence when a value could
//! satisfy several predicates.
//!
//! The default registry ends with a catch-all rule, so resolution never
//! fails. A custom registry that omits a catch-all turns an unmatched value
//! into [`Error::NoFormatter`], a configuration error surfaced to the
//! caller rather than a silent fallback.
//!
//! ## Examples
//!
//! ```rust
//! use snapfmt::{FormatRule, FormatterRegistry, Renderer, RenderOptions, Value};
//!
//! // Extend the default rule set with a rule that claims empty lists.
//! let mut registry = FormatterRegistry::new(vec![Box::new(FormatRule::new(
//!     |v| matches!(v, Value::List(items) if items.is_empty()),
//!     |_, _, _| Ok("[]".to_string()),
//! ))]);
//! for rule in snapfmt::formatters::default_rules() {
//!     registry.push(rule);
//! }
//!
//! let renderer = Renderer::with_registry(registry, RenderOptions::default());
//! assert_eq!(renderer.render(&Value::List(vec![])).unwrap(), "[]");
//! ```

use crate::{formatters, Error, Renderer, Result, Value};

/// One dispatch case: a predicate over a value's runtime shape plus a render
/// function.
///
/// Implementations must not hold per-call mutable state; the registry is
/// shared across concurrent render calls.
pub trait Formatter: Send + Sync {
    /// Returns `true` if this rule claims ownership of the value.
    fn can_format(&self, value: &Value) -> bool;

    /// Renders the value at the given indentation depth.
    ///
    /// The rule is fully responsible for recursing into children by calling
    /// back into the `renderer` with `indent + 1` (for contents one level
    /// deeper) or `indent` (for siblings at the same level).
    fn format(&self, value: &Value, indent: usize, renderer: &Renderer) -> Result<String>;
}

impl core::fmt::Debug for dyn Formatter + '_ {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Formatter")
    }
}

/// Predicate half of a [`FormatRule`].
pub type Predicate = fn(&Value) -> bool;

/// Render half of a [`FormatRule`].
pub type RenderFn = fn(&Value, usize, &Renderer) -> Result<String>;

/// A [`Formatter`] built from a predicate and render function pair.
///
/// # Examples
///
/// ```rust
/// use snapfmt::{FormatRule, Formatter, Value};
///
/// let rule = FormatRule::new(
///     |v| v.is_null(),
///     |_, _, _| Ok("None".to_string()),
/// );
/// assert!(rule.can_format(&Value::Null));
/// assert!(!rule.can_format(&Value::from(1)));
/// ```
pub struct FormatRule {
    predicate: Predicate,
    render: RenderFn,
}

impl FormatRule {
    /// Pairs a predicate with a render function.
    #[must_use]
    pub fn new(predicate: Predicate, render: RenderFn) -> Self {
        FormatRule { predicate, render }
    }
}

impl Formatter for FormatRule {
    fn can_format(&self, value: &Value) -> bool {
        (self.predicate)(value)
    }

    fn format(&self, value: &Value, indent: usize, renderer: &Renderer) -> Result<String> {
        (self.render)(value, indent, renderer)
    }
}

/// An ordered sequence of rendering rules resolved front-to-back.
pub struct FormatterRegistry {
    rules: Vec<Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Creates a registry from an ordered rule sequence.
    ///
    /// Earlier rules take precedence. The sequence should end with (or
    /// otherwise guarantee) a catch-all match; see [`FormatterRegistry::resolve`].
    #[must_use]
    pub fn new(rules: Vec<Box<dyn Formatter>>) -> Self {
        FormatterRegistry { rules }
    }

    /// Appends a rule at the lowest priority position.
    pub fn push(&mut self, rule: Box<dyn Formatter>) {
        self.rules.push(rule);
    }

    /// Returns the first rule whose predicate claims the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFormatter`] if no rule matches. With the default
    /// rule set this cannot happen; it signals a custom registry configured
    /// without a catch-all.
    pub fn resolve(&self, value: &Value) -> Result<&dyn Formatter> {
        self.rules
            .iter()
            .find(|rule| rule.can_format(value))
            .map(|rule| &**rule)
            .ok_or_else(|| Error::no_formatter(value.kind()))
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        FormatterRegistry::new(formatters::default_rules())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Key, SnapMap};

    fn probe(label: &'static str) -> Box<dyn Formatter> {
        // A rule that renders its own label, used to observe which rule wins.
        struct Probe(&'static str);
        impl Formatter for Probe {
            fn can_format(&self, _: &Value) -> bool {
                true
            }
            fn format(&self, _: &Value, _: usize, _: &Renderer) -> Result<String> {
                Ok(self.0.to_string())
            }
        }
        Box::new(Probe(label))
    }

    #[test]
    fn test_first_match_wins() {
        let registry = FormatterRegistry::new(vec![probe("first"), probe("second")]);
        let renderer = Renderer::with_registry(registry, crate::RenderOptions::default());
        assert_eq!(renderer.render(&Value::Null).unwrap(), "first");
    }

    #[test]
    fn test_empty_registry_is_a_configuration_error() {
        let registry = FormatterRegistry::new(Vec::new());
        let err = registry.resolve(&Value::Null).unwrap_err();
        assert!(matches!(err, Error::NoFormatter(_)));
    }

    #[test]
    fn test_default_rule_claims() {
        // Pins the documented rule order: containers and text are claimed
        // before the scalar group, booleans by the scalar group, anything
        // else by the catch-all.
        let renderer = Renderer::new();
        assert_eq!(renderer.render(&Value::Null).unwrap(), "None");
        assert_eq!(renderer.render(&Value::from(true)).unwrap(), "True");
        assert_eq!(renderer.render(&Value::from("s")).unwrap(), "'s'");
        assert_eq!(
            renderer.render(&Value::set(vec![Key::from(1)])).unwrap(),
            "{1}"
        );
        assert_eq!(renderer.render(&Value::Map(SnapMap::new())).unwrap(), "{\n}");
        assert_eq!(renderer.render(&Value::List(vec![])).unwrap(), "[\n]");
        assert_eq!(renderer.render(&Value::Tuple(vec![])).unwrap(), "(\n)");
        assert_eq!(
            renderer.render(&Value::opaque_repr("<x>")).unwrap(),
            "<x>"
        );
    }
}
