//! The `let` statement that binds hoisted subtrees.

use jq_astgen::printer::render;
use syn::Ident;

use crate::shape::CallWithHoistedArgs;
use crate::writer::SourceWriter;

/// Parameter names paired with their argument text, in hoisting order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BindingStatement {
    pub bindings: Vec<(String, String)>,
}

impl BindingStatement {
    pub fn from_call(call: &CallWithHoistedArgs) -> Self {
        let bindings = call
            .params
            .iter()
            .map(Ident::to_string)
            .zip(call.args.iter().map(render))
            .collect();
        BindingStatement { bindings }
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Print at `level`. Nothing for zero bindings, a plain `let` for one,
    /// and a tuple pattern with one argument per line otherwise.
    pub fn write(&self, writer: &mut SourceWriter, level: usize) {
        match self.bindings.as_slice() {
            [] => {}
            [(name, value)] => writer.emit_line(level, &format!("let {name} = {value};")),
            bindings => {
                let names: Vec<&str> = bindings.iter().map(|(name, _)| name.as_str()).collect();
                writer.emit_line(level, &format!("let ({}) = (", names.join(", ")));
                for (_, value) in bindings {
                    writer.emit_line(level + 1, &format!("{value},"));
                }
                writer.emit_line(level, ");");
            }
        }
    }
}
