//! Generator for the pre-parsed jq builtin table.
//!
//! A generator run is one straight pipeline:
//!
//! 1. [`loader::load`] parses every definition of the table, keyed by name.
//! 2. [`jq_astgen::build`] turns that map into a Rust expression, hoisting
//!    repeated subtrees into closure parameters.
//! 3. [`CallWithHoistedArgs`] validates the expression's shape once.
//! 4. [`OperatorSymbolizer`] spells in-range operator ordinals by name.
//! 5. [`emit::render_file`] prints the binding statement and the map
//!    literal into the file template.
//!
//! Nothing is written until the whole text exists, so a failure at any
//! step leaves the destination untouched.
//!
//! Enable logging with `RUST_LOG=jqgen=debug` (or `trace`).

pub mod bindings;
pub mod config;
pub mod definitions;
pub mod emit;
mod error;
pub mod literal;
pub mod loader;
pub mod shape;
pub mod symbolize;
pub mod writer;

use std::sync::Once;

use tracing::debug;

pub use config::{Command, Config, ConfigError, Output, USAGE};
pub use definitions::BUILTIN_FUNC_DEFINITIONS;
pub use error::GenError;
pub use shape::{CallWithHoistedArgs, CompositeLit};
pub use symbolize::OperatorSymbolizer;

static TRACING_INIT: Once = Once::new();

/// Install a stderr subscriber when `RUST_LOG` is set.
///
/// Stdout may carry the generated source, so logs never go there. Safe to
/// call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by an embedding
            // program; keep theirs.
            let _ = tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .try_init();
        }
    });
}

/// Generate the full source file for `table`.
#[tracing::instrument(level = "debug", skip_all, fields(definitions = table.len()))]
pub fn generate(table: &[(&str, &str)]) -> Result<String, GenError> {
    let parsed = loader::load(table)?;
    let built = jq_astgen::build(&parsed);
    let mut call = CallWithHoistedArgs::try_from(built)?;
    debug!(
        hoisted = call.params.len(),
        entries = call.body_return_value.entries.len(),
        "validated builder output"
    );

    let mut symbolizer = OperatorSymbolizer::default();
    symbolizer.symbolize(&mut call);

    Ok(emit::render_file(&call))
}

/// Generate from `table` and write the result where `config` says.
pub fn run(config: &Config, table: &[(&str, &str)]) -> Result<(), GenError> {
    let text = generate(table)?;
    emit::write_output(&config.output, &text)
}
