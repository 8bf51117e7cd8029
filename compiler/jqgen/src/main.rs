//! jqgen CLI
//!
//! Writes the generated builtin table to stdout, or to the file given
//! with `-o`.

use jqgen::{Command, Config, BUILTIN_FUNC_DEFINITIONS, USAGE};

fn main() {
    jqgen::init_tracing();

    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(Command::Generate(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    if let Err(err) = jqgen::run(&config, BUILTIN_FUNC_DEFINITIONS) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
