//! Layout configuration for rendering.
//!
//! [`RenderOptions`] holds the two layout constants threaded through
//! recursive rendering: the line-feed string emitted before each container
//! element and the indent unit repeated once per nesting level. They are
//! fixed at [`Renderer`](crate::Renderer) construction and never change for
//! the renderer's lifetime, which is what makes shared concurrent use safe.
//!
//! ## Examples
//!
//! ```rust
//! use snapfmt::{render_with_options, RenderOptions};
//!
//! // Default: "\n" line feed, four-space indent unit.
//! let options = RenderOptions::default();
//!
//! // Tab indentation.
//! let options = RenderOptions::new().with_indent("\t");
//! let out = render_with_options(&vec![1], options).unwrap();
//! assert_eq!(out, "[\n\t1\n]");
//! ```

/// Layout configuration for snapshot rendering.
///
/// # Examples
///
/// ```rust
/// use snapfmt::RenderOptions;
///
/// let options = RenderOptions::new()
///     .with_indent("  ")
///     .with_newline("\n");
/// assert_eq!(options.indent, "  ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emitted before each container element and before the closing bracket.
    pub newline: String,
    /// Repeated `depth` times to indent one nesting level.
    pub indent: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            newline: "\n".to_string(),
            indent: "    ".to_string(),
        }
    }
}

impl RenderOptions {
    /// Creates default options (`"\n"` line feed, four-space indent unit).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snapfmt::RenderOptions;
    ///
    /// let options = RenderOptions::new();
    /// assert_eq!(options.indent, "    ");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indent unit repeated once per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: &str) -> Self {
        self.indent = indent.to_string();
        self
    }

    /// Sets the line-feed string emitted between container elements.
    #[must_use]
    pub fn with_newline(mut self, newline: &str) -> Self {
        self.newline = newline.to_string();
        self
    }
}
