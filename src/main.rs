mod cli;
mod logger;

use crate::cli::{Args, USAGE};
use crate::logger::initialize_logger;
use anyhow::Context;
use glslembed_codegen::generate_header;
use log::{info, warn};

fn main() -> anyhow::Result<()> {
    initialize_logger();
    let (input_dir, output_file) = match Args::parse() {
        Ok(Args::Generate {
            input_dir,
            output_file,
        }) => (input_dir, output_file),
        Ok(Args::Help) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprint!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };
    let report = generate_header(&input_dir, &output_file).with_context(|| {
        format!(
            "failed to generate {} from {}",
            output_file.display(),
            input_dir.display()
        )
    })?;
    info!(
        "wrote {} shaders to {}",
        report.written.len(),
        output_file.display()
    );
    if !report.failed.is_empty() {
        warn!("{} shaders could not be read", report.failed.len());
    }
    Ok(())
}
