//! Line-oriented text buffer for the generated file.

/// Spaces per indentation level.
pub const INDENT: usize = 4;

/// Builds the generated source incrementally.
#[derive(Default)]
pub struct SourceWriter {
    buffer: String,
}

impl SourceWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: String::with_capacity(capacity),
        }
    }

    pub fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    /// Indent to `level`, in units of [`INDENT`] spaces.
    pub fn emit_indent(&mut self, level: usize) {
        for _ in 0..level * INDENT {
            self.buffer.push(' ');
        }
    }

    /// `text` on its own line at `level`. An empty `text` gives a blank line
    /// without trailing spaces.
    pub fn emit_line(&mut self, level: usize, text: &str) {
        if !text.is_empty() {
            self.emit_indent(level);
            self.emit(text);
        }
        self.emit_newline();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Ensure the output ends with exactly one newline.
    pub fn ensure_trailing_newline(&mut self) {
        while self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
        if !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }

    pub fn output(self) -> String {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn lines_and_indentation() {
        let mut writer = SourceWriter::new();
        writer.emit_line(0, "fn f() {");
        writer.emit_line(1, "let x = 1;");
        writer.emit_line(1, "");
        writer.emit_indent(2);
        writer.emit("x");
        writer.emit_newline();
        writer.emit_line(0, "}");
        assert_eq!(writer.output(), "fn f() {\n    let x = 1;\n\n        x\n}\n");
    }

    #[test]
    fn trailing_newline_is_normalized() {
        let mut writer = SourceWriter::with_capacity(8);
        writer.emit("a");
        writer.ensure_trailing_newline();
        assert_eq!(writer.as_str(), "a\n");

        writer.emit("\n\n");
        writer.ensure_trailing_newline();
        assert_eq!(writer.output(), "a\n");
    }
}
