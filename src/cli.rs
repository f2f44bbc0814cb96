use pico_args::Arguments;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

pub const USAGE: &str = "\
Generate a C header embedding every .glsl shader of a directory as a string constant.

Usage: glslembed <INPUT_DIR> <OUTPUT_FILE>

Arguments:
  <INPUT_DIR>    Directory containing shader files
  <OUTPUT_FILE>  Output header file path

Options:
  -h, --help     Print help
";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Args(#[from] pico_args::Error),
    #[error("unexpected arguments: {0:?}")]
    UnusedArgs(Vec<OsString>),
}

#[derive(Debug, PartialEq)]
pub enum Args {
    Help,
    Generate {
        input_dir: PathBuf,
        output_file: PathBuf,
    },
}

impl Args {
    pub fn parse() -> Result<Args, CliError> {
        Args::from_vec(std::env::args_os().skip(1).collect())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Args, CliError> {
        let mut args = Arguments::from_vec(args);
        if args.contains(["-h", "--help"]) {
            return Ok(Args::Help);
        }
        let input_dir = args.free_from_os_str(to_path)?;
        let output_file = args.free_from_os_str(to_path)?;
        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(CliError::UnusedArgs(remaining));
        }
        Ok(Args::Generate {
            input_dir,
            output_file,
        })
    }
}

fn to_path(arg: &OsStr) -> Result<PathBuf, &'static str> {
    Ok(PathBuf::from(arg))
}

#[cfg(test)]
fn parse(args: &[&str]) -> Result<Args, CliError> {
    Args::from_vec(args.iter().map(OsString::from).collect())
}

#[test]
fn two_positionals() {
    assert_eq!(
        parse(&["shaders", "src/shader_strings.h"]).unwrap(),
        Args::Generate {
            input_dir: PathBuf::from("shaders"),
            output_file: PathBuf::from("src/shader_strings.h"),
        }
    );
}

#[test]
fn help_wins() {
    assert_eq!(parse(&["--help"]).unwrap(), Args::Help);
    assert_eq!(parse(&["shaders", "-h"]).unwrap(), Args::Help);
}

#[test]
fn missing_output() {
    assert!(matches!(
        parse(&["shaders"]),
        Err(CliError::Args(pico_args::Error::MissingArgument))
    ));
}

#[test]
fn extra_arguments() {
    match parse(&["shaders", "out.h", "more", "args"]) {
        Err(CliError::UnusedArgs(rest)) => assert_eq!(rest, ["more", "args"]),
        other => panic!("expected unused arguments, got {other:?}"),
    }
}
