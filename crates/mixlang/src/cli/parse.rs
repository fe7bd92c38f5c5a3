//! `mixlang [FILE]` implementation.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use colored::Colorize;
use mixlang::{Config, Pipeline, unsupported_languages};
use tracing::debug;

use super::OutputFormat;
use super::render;

/// Options gathered from the command line.
#[derive(Debug)]
pub struct ParseOptions {
    pub file: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: OutputFormat,
    pub identifiers: bool,
    pub parallel: bool,
    pub strict: bool,
}

/// Run the parse command.
pub fn run(options: &ParseOptions) -> Result<ExitCode, mixlang::Error> {
    let Some(file) = options.file.as_deref() else {
        println!("Please provide a file path.");
        return Ok(ExitCode::SUCCESS);
    };

    let config = load_config(options.config.as_deref())?;
    debug!(?config, "Configuration resolved");

    let pipeline =
        Pipeline::from_config(&config).with_parallel(config.parallel || options.parallel);
    let sections = pipeline.parse_file(file)?;

    let mut stdout = io::stdout().lock();
    match options.format {
        OutputFormat::Text => render::write_text(
            &mut stdout,
            &sections,
            options.identifiers || config.show_identifiers,
        )?,
        OutputFormat::Json => render::write_json(&mut stdout, &sections)?,
    }
    stdout.flush()?;

    if options.strict {
        let unsupported = unsupported_languages(&sections, pipeline.dispatcher());
        if !unsupported.is_empty() {
            for tag in &unsupported {
                eprintln!("{}: unsupported language: {tag:?}", "error".red().bold());
            }
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(explicit: Option<&Path>) -> Result<Config, mixlang::Error> {
    match explicit {
        Some(path) => Config::load(path),
        None => Config::discover(&std::env::current_dir()?),
    }
}
