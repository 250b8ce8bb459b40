//! Line-oriented builder for manifest source text.

/// Text inserted per indentation level (PSR-12 four spaces).
const INDENT: &str = "    ";

/// Chains lines into a buffer, prefixing each with the current indentation.
///
/// # Example
///
/// ```
/// use packagebuilder_writer::CodeBuilder;
///
/// let code = CodeBuilder::default()
///     .line("return [")
///     .indent()
///     .line("'Foo' => '/src/Foo.php',")
///     .dedent()
///     .line("];")
///     .build();
///
/// assert_eq!(code, "return [\n    'Foo' => '/src/Foo.php',\n];\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Append `s` at the current level, terminated by `\n`.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Append an empty line without indentation.
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Stops at level zero.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// `header`, then the body from `f` one level deeper, then `close`.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Fold `items` into the builder with `f`.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Finish and take the rendered text.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT);
        }
    }
}
