//! Assembling the generated file and writing it out.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::bindings::BindingStatement;
use crate::config::Output;
use crate::literal::write_composite;
use crate::shape::CallWithHoistedArgs;
use crate::writer::SourceWriter;
use crate::GenError;

pub const HEADER: &str = "// Code generated by jqgen; DO NOT EDIT.";

/// Name of the generated function.
pub const INIT_FN: &str = "init_builtin_funcs";

/// Full text of the generated file.
pub fn render_file(call: &CallWithHoistedArgs) -> String {
    let mut writer = SourceWriter::with_capacity(64 * 1024);
    writer.emit_line(0, HEADER);
    writer.emit_line(0, "");
    writer.emit_line(0, "use std::collections::BTreeMap;");
    writer.emit_line(0, "");
    writer.emit_line(0, "use jq_ir::*;");
    writer.emit_line(0, "");
    writer.emit_line(
        0,
        &format!("pub(crate) fn {INIT_FN}() -> BTreeMap<&'static str, Query> {{"),
    );
    BindingStatement::from_call(call).write(&mut writer, 1);
    write_composite(&mut writer, &call.body_return_value, 1);
    writer.emit_line(0, "}");
    writer.ensure_trailing_newline();
    writer.output()
}

/// Write `text` to `output`, creating or truncating a file destination.
pub fn write_output(output: &Output, text: &str) -> Result<(), GenError> {
    let io_error = |source: io::Error| GenError::Io {
        destination: output.to_string(),
        source,
    };
    match output {
        Output::Stdout => {
            let stdout = io::stdout();
            write_all(BufWriter::new(stdout.lock()), text).map_err(io_error)?;
        }
        Output::File(path) => {
            let file = File::create(path).map_err(io_error)?;
            write_all(BufWriter::new(file), text).map_err(io_error)?;
        }
    }
    debug!(destination = %output, bytes = text.len(), "wrote generated source");
    Ok(())
}

fn write_all(mut sink: impl Write, text: &str) -> io::Result<()> {
    sink.write_all(text.as_bytes())?;
    sink.flush()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use syn::{parse_quote, Expr};

    use super::*;

    fn call(expr: Expr) -> CallWithHoistedArgs {
        match CallWithHoistedArgs::try_from(expr) {
            Ok(call) => call,
            Err(err) => panic!("rejected: {err}"),
        }
    }

    #[test]
    fn file_template() {
        let text = render_file(&call(parse_quote! {
            (|v0| {
                return BTreeMap::from([("a", Query { term: v0.clone() }), ("b", Query { term: v0.clone() })]);
            })(Some(Box::new(Term { kind: TermKind::Null })))
        }));
        let expected = "\
// Code generated by jqgen; DO NOT EDIT.

use std::collections::BTreeMap;

use jq_ir::*;

pub(crate) fn init_builtin_funcs() -> BTreeMap<&'static str, Query> {
    let v0 = Some(Box::new(Term { kind: TermKind::Null }));
    BTreeMap::from([
        (\"a\", Query { term: v0.clone() }),
        (\"b\", Query { term: v0.clone() }),
    ])
}
";
        assert_eq!(text, expected);
    }

    #[test]
    fn no_bindings_means_no_let() {
        let text = render_file(&call(parse_quote!((|| { return BTreeMap::from([]); })())));
        assert!(!text.contains("let "));
        assert!(text.ends_with("{\n    BTreeMap::from([\n    ])\n}\n"));
    }

    #[test]
    fn writes_and_truncates_files() {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => panic!("tempdir: {err}"),
        };
        let path = dir.path().join("out.rs");
        let output = Output::File(path.clone());

        assert!(write_output(&output, "first version\n").is_ok());
        assert!(write_output(&output, "second\n").is_ok());
        assert_eq!(std::fs::read_to_string(&path).ok().as_deref(), Some("second\n"));
    }

    #[test]
    fn io_failures_name_the_destination() {
        let dir = match tempfile::tempdir() {
            Ok(dir) => dir,
            Err(err) => panic!("tempdir: {err}"),
        };
        let path = dir.path().join("missing").join("out.rs");
        let output = Output::File(path.clone());
        match write_output(&output, "x") {
            Err(GenError::Io { destination, .. }) => {
                assert_eq!(destination, path.display().to_string());
            }
            other => panic!("expected an io error, got {other:?}"),
        }
    }
}
