//! Code builder utility for producing indented snippets.

use super::{CodeFragment, Indent, Renderable};

/// Fluent API for building code with proper indentation.
///
/// Supports consuming methods (returning `Self`) for chaining and mutable
/// methods (returning `&mut Self`) for emitting fragments in loops.
///
/// # Example
///
/// ```
/// use stone_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::angular()
///     .line("<div>")
///     .indent()
///     .line("<span>Hello</span>")
///     .dedent()
///     .line("</div>")
///     .build();
///
/// assert_eq!(code, "<div>\n  <span>Hello</span>\n</div>\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn angular() -> Self {
        Self::new(Indent::ANGULAR)
    }

    // =========================================================================
    // Mutable API - methods prefixed with `push_`
    // =========================================================================

    /// Add a line of code with current indentation (mutable).
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (mutable).
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level (mutable).
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level (mutable).
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node (mutable).
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    // =========================================================================
    // Consuming API
    // =========================================================================

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.push_line(s);
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.push_blank();
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.push_indent();
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.push_dedent();
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Emit a Renderable node.
    pub fn fragments(mut self, node: &impl Renderable) -> Self {
        self.emit(node);
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::angular()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::angular().line("ng g m customer").build();
        assert_eq!(code, "ng g m customer\n");
    }

    #[test]
    fn test_block_with_close() {
        let code = CodeBuilder::angular()
            .block_with_close("@Injectable({", "})", |b| b.line("providedIn: 'root',"))
            .build();

        assert_eq!(code, "@Injectable({\n  providedIn: 'root',\n})\n");
    }

    #[test]
    fn test_conditional() {
        let code = CodeBuilder::angular()
            .when(false, |b| b.line("skipped"))
            .when(true, |b| b.line("kept"))
            .build();
        assert_eq!(code, "kept\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::angular().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_emit_nested_blocks() {
        let fragments = vec![CodeFragment::block(
            "<div formGroupName=\"address\">",
            vec![CodeFragment::block(
                "<mat-form-field>",
                vec![CodeFragment::line("<mat-label>Street</mat-label>")],
                "</mat-form-field>",
            )],
            "</div>",
        )];

        let mut builder = CodeBuilder::angular();
        builder.emit(&fragments);
        assert_eq!(
            builder.build(),
            "<div formGroupName=\"address\">\n  <mat-form-field>\n    <mat-label>Street</mat-label>\n  </mat-form-field>\n</div>\n"
        );
    }

    #[test]
    fn test_emit_keeps_current_indentation() {
        let mut builder = CodeBuilder::angular();
        builder
            .push_indent()
            .emit(&vec![CodeFragment::line("a"), CodeFragment::line("b")]);
        assert_eq!(builder.build(), "  a\n  b\n");
    }
}
