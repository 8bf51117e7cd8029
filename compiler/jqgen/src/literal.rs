//! Printing the returned map literal, one entry per line.

use jq_astgen::printer::{render, render_path};

use crate::shape::CompositeLit;
use crate::writer::SourceWriter;

/// Print `lit` with its opening line at `level`; entries go one level
/// deeper, each followed by a comma. Entries keep the builder's order.
pub fn write_composite(writer: &mut SourceWriter, lit: &CompositeLit, level: usize) {
    let constructor = render_path(&lit.constructor.path);
    writer.emit_line(level, &format!("{constructor}(["));
    for entry in &lit.entries {
        writer.emit_indent(level + 1);
        writer.emit(&render(entry));
        writer.emit(",");
        writer.emit_newline();
    }
    writer.emit_line(level, "])");
}
