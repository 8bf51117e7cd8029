//! Generates `builtin_funcs.rs` into `OUT_DIR` from jqgen's definition table.

use std::error::Error;
use std::path::PathBuf;
use std::{env, fs};

fn main() -> Result<(), Box<dyn Error>> {
    println!("cargo:rerun-if-changed=build.rs");
    jqgen::init_tracing();

    let text = jqgen::generate(jqgen::BUILTIN_FUNC_DEFINITIONS)?;
    let out_path = PathBuf::from(env::var("OUT_DIR")?).join("builtin_funcs.rs");
    fs::write(&out_path, text)
        .map_err(|err| format!("failed to write {}: {err}", out_path.display()))?;
    Ok(())
}
