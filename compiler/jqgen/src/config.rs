//! Command-line configuration.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

pub const USAGE: &str = "\
Usage: jqgen [-o <path>]

Generates Rust source embedding the parsed jq builtin definitions.

Options:
  -o, --output <path>   Write to <path> instead of stdout
  -h, --help            Print this help";

/// Where the generated source goes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("stdout"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub output: Output,
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate(Config),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("option `{0}` requires a path")]
    MissingOutputPath(String),
    #[error("unexpected argument `{0}`")]
    UnknownArgument(String),
}

impl Config {
    /// Parse arguments, program name excluded.
    ///
    /// `-o` may be repeated; the last one wins. An empty path means stdout.
    pub fn from_args<I>(args: I) -> Result<Command, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let path = match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "-o" | "--output" => args
                    .next()
                    .ok_or_else(|| ConfigError::MissingOutputPath(arg.clone()))?,
                _ => match arg
                    .strip_prefix("-o=")
                    .or_else(|| arg.strip_prefix("--output="))
                {
                    Some(path) => path.to_string(),
                    None => return Err(ConfigError::UnknownArgument(arg)),
                },
            };
            config.output = if path.is_empty() {
                Output::Stdout
            } else {
                Output::File(PathBuf::from(path))
            };
        }
        Ok(Command::Generate(config))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn parse(args: &[&str]) -> Result<Command, ConfigError> {
        Config::from_args(args.iter().map(ToString::to_string))
    }

    fn file(path: &str) -> Command {
        Command::Generate(Config {
            output: Output::File(PathBuf::from(path)),
        })
    }

    #[test]
    fn defaults_to_stdout() {
        assert_eq!(parse(&[]), Ok(Command::Generate(Config::default())));
    }

    #[test]
    fn output_forms() {
        assert_eq!(parse(&["-o", "out.rs"]), Ok(file("out.rs")));
        assert_eq!(parse(&["--output", "out.rs"]), Ok(file("out.rs")));
        assert_eq!(parse(&["-o=out.rs"]), Ok(file("out.rs")));
        assert_eq!(parse(&["-o", "a.rs", "-o", "b.rs"]), Ok(file("b.rs")));
        assert_eq!(
            parse(&["-o", ""]),
            Ok(Command::Generate(Config::default()))
        );
    }

    #[test]
    fn help_wins() {
        assert_eq!(parse(&["-o", "x.rs", "--help"]), Ok(Command::Help));
        assert_eq!(parse(&["-h"]), Ok(Command::Help));
    }

    #[test]
    fn usage_errors() {
        assert_eq!(
            parse(&["-o"]),
            Err(ConfigError::MissingOutputPath("-o".to_string()))
        );
        assert_eq!(
            parse(&["out.rs"]),
            Err(ConfigError::UnknownArgument("out.rs".to_string()))
        );
    }
}
