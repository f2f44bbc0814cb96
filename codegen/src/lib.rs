//! Embeds a directory of GLSL shaders into a C header, one `static const char*`
//! string constant per shader.

mod config;
mod error;
mod generate;
mod helper;
mod shaders;

pub use crate::config::{Config, DEFAULT_CONFIG};
pub use crate::error::{Error, ShaderError};
pub use crate::generate::{write_header, Declaration};
pub use crate::helper::derive_identifier;
pub use crate::shaders::{find_shaders, shader_to_literal, text_to_literal, ShaderFile};

use log::{debug, error, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Outcome of a generator run that managed to write its header.
#[derive(Debug, Default)]
pub struct Report {
    /// Identifiers declared in the header, in output order.
    pub written: Vec<String>,
    /// Shaders left out because they could not be read.
    pub failed: Vec<ShaderError>,
}

pub fn generate_header(in_dir: &Path, out_path: &Path) -> Result<Report, Error> {
    generate_header_with(&DEFAULT_CONFIG, in_dir, out_path)
}

pub fn generate_header_with(
    config: &Config,
    in_dir: &Path,
    out_path: &Path,
) -> Result<Report, Error> {
    let mut report = Report::default();
    let mut declarations = Vec::new();
    for shader in find_shaders(config, in_dir)? {
        match shader_to_literal(&shader.path) {
            Ok(literal) if literal.is_empty() => {
                warn!("skipping empty shader {}", shader.path.display());
            }
            Ok(literal) => {
                debug!("embedding {} as {}", shader.file_name, shader.identifier);
                report.written.push(shader.identifier.clone());
                declarations.push(Declaration {
                    identifier: shader.identifier,
                    literal,
                });
            }
            Err(err) => {
                error!("{err}");
                report.failed.push(err);
            }
        }
    }

    let write_error = |source| Error::Write {
        path: out_path.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(File::create(out_path).map_err(write_error)?);
    write_header(&mut out, config, &declarations).map_err(write_error)?;
    out.flush().map_err(write_error)?;
    Ok(report)
}

/// Entry point for `build.rs` scripts of crates that compile the generated
/// header. Panics on fatal errors, which is how build scripts report failure.
pub fn build_script(in_dir: &str, out_path: &str) {
    if let Err(err) = build_script_to(&mut std::io::stdout(), in_dir, out_path) {
        panic!("{err}");
    }
}

/// Runs the generator and writes cargo directives to `out`: one warning per
/// shader that could not be read, then the rerun trigger.
fn build_script_to(
    out: &mut impl Write,
    in_dir: &str,
    out_path: &str,
) -> Result<Report, Error> {
    let report = generate_header(Path::new(in_dir), Path::new(out_path))?;
    let stdout_error = |source| Error::Write {
        path: "<stdout>".into(),
        source,
    };
    for err in &report.failed {
        writeln!(out, "cargo:warning={err}").map_err(stdout_error)?;
    }
    writeln!(out, "cargo:rerun-if-changed={in_dir}").map_err(stdout_error)?;
    Ok(report)
}

#[test]
fn build_script_warns_about_unreadable_shaders() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("good.glsl"), "void main() {}\n").unwrap();
    std::fs::create_dir(dir.path().join("bad.glsl")).unwrap();
    let in_dir = dir.path().to_str().unwrap();
    let out_path = dir.path().join("shader_strings.h");

    let mut directives = Vec::new();
    let report = build_script_to(&mut directives, in_dir, out_path.to_str().unwrap()).unwrap();
    let directives = String::from_utf8(directives).unwrap();

    assert_eq!(report.written, ["good_shader"]);
    let bad = dir.path().join("bad.glsl");
    assert_eq!(
        directives,
        format!(
            "cargo:warning=error reading file: {}\ncargo:rerun-if-changed={in_dir}\n",
            bad.display()
        )
    );
}
