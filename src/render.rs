//! The recursive rendering engine.
//!
//! [`Renderer`] resolves each value against its [`FormatterRegistry`] and
//! delegates to the matched rule, passing itself back in so rules recurse
//! through the same dispatch for nested values. It holds only immutable
//! configuration after construction, with no per-call state, so one shared
//! instance can serve concurrent render calls without synchronization.
//!
//! ## Examples
//!
//! ```rust
//! use snapfmt::{Renderer, Value};
//!
//! let renderer = Renderer::new();
//! let value = Value::List(vec![Value::from(1), Value::from(2)]);
//! assert_eq!(renderer.render(&value).unwrap(), "[\n    1,\n    2\n]");
//! ```

use crate::{FormatterRegistry, RenderOptions, Result, Value};

/// Renders values into deterministic snapshot text.
pub struct Renderer {
    registry: FormatterRegistry,
    options: RenderOptions,
}

impl Renderer {
    /// Creates a renderer with the default rule set and layout.
    #[must_use]
    pub fn new() -> Self {
        Renderer::with_registry(FormatterRegistry::default(), RenderOptions::default())
    }

    /// Creates a renderer with the default rule set and custom layout.
    #[must_use]
    pub fn with_options(options: RenderOptions) -> Self {
        Renderer::with_registry(FormatterRegistry::default(), options)
    }

    /// Creates a renderer over a custom registry.
    ///
    /// The registry should guarantee a catch-all match; without one,
    /// rendering an unclaimed value is a configuration error.
    #[must_use]
    pub fn with_registry(registry: FormatterRegistry, options: RenderOptions) -> Self {
        Renderer { registry, options }
    }

    /// Renders a value at depth zero.
    ///
    /// # Errors
    ///
    /// Returns an error if no rule claims the value (custom registry without
    /// a catch-all), if mapping keys are unorderable, or if a rule itself
    /// fails.
    pub fn render(&self, value: &Value) -> Result<String> {
        self.render_at(value, 0)
    }

    /// Renders a value at the given indentation depth.
    ///
    /// Rules call back into this for child values, passing `indent + 1` for
    /// contents nested one level deeper.
    pub fn render_at(&self, value: &Value, indent: usize) -> Result<String> {
        self.registry.resolve(value)?.format(value, indent, self)
    }

    /// The line-feed string emitted between container elements.
    #[must_use]
    pub fn newline(&self) -> &str {
        &self.options.newline
    }

    /// The indent unit repeated `depth` times.
    #[must_use]
    pub fn indentation(&self, depth: usize) -> String {
        self.options.indent.repeat(depth)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnapMap;

    #[test]
    fn test_render_starts_at_depth_zero() {
        let renderer = Renderer::new();
        let value = Value::List(vec![Value::from(1)]);
        assert_eq!(renderer.render(&value).unwrap(), "[\n    1\n]");
    }

    #[test]
    fn test_nested_depth_threading() {
        let renderer = Renderer::new();
        let mut inner = SnapMap::new();
        inner.insert("k".into(), Value::from(1));
        let value = Value::List(vec![Value::Map(inner)]);
        assert_eq!(
            renderer.render(&value).unwrap(),
            "[\n    {\n        'k': 1\n    }\n]"
        );
    }

    #[test]
    fn test_custom_layout() {
        let renderer =
            Renderer::with_options(RenderOptions::new().with_indent("\t").with_newline("\n"));
        let value = Value::List(vec![Value::from(1), Value::from(2)]);
        assert_eq!(renderer.render(&value).unwrap(), "[\n\t1,\n\t2\n]");
    }

    #[test]
    fn test_shared_renderer_is_reusable() {
        let renderer = Renderer::new();
        let value = Value::from("x");
        let first = renderer.render(&value).unwrap();
        let second = renderer.render(&value).unwrap();
        assert_eq!(first, second);
    }
}
