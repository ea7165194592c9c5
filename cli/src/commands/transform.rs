//! Runs one action over a file or stdin.
//!
//! Without an editor there is no selection, so the whole input is what gets
//! transformed. The output is only written once the action has succeeded:
//! a failed run leaves an in-place input exactly as it was.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use xmlcodec_common::config::Config;
use xmlcodec_common::{success, warn};
use xmlcodec_core::Action;

use crate::terminal::print;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn from_arg(input: Option<PathBuf>) -> Self {
        match input {
            Some(path) if path.as_os_str() != "-" => Source::File(path),
            _ => Source::Stdin,
        }
    }

    fn read(&self) -> anyhow::Result<String> {
        match self {
            Source::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("reading stdin")?;
                Ok(text)
            }
            Source::File(path) => fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }
}

pub fn transform(action: Action, input: Option<PathBuf>, cfg: &Config) -> anyhow::Result<()> {
    let source = Source::from_arg(input);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run(action, &source, cfg, &mut out)
}

pub fn run(action: Action, source: &Source, cfg: &Config, out: &mut dyn Write) -> anyhow::Result<()> {
    if cfg.in_place && source == &Source::Stdin {
        anyhow::bail!("--in-place needs an input file");
    }

    let text: String = source.read()?;
    print::header(action.label(), cfg.quiet);

    let result: String = match action.apply(&text, cfg) {
        Ok(result) => result,
        Err(err) => {
            if cfg.in_place {
                warn!("{} left unchanged", source.describe());
            }
            return Err(err).with_context(|| format!("{} failed on {}", action.label(), source.describe()));
        }
    };

    match source {
        Source::File(path) if cfg.in_place => write_file(path, &result)?,
        _ => {
            out.write_all(result.as_bytes()).context("writing output")?;
            out.flush().context("writing output")?;
        }
    }

    if cfg.quiet < 2 {
        success!(
            "{}: {} bytes in, {} bytes out",
            action.label(),
            text.len(),
            result.len()
        );
    }
    Ok(())
}

fn write_file(path: &Path, text: &str) -> anyhow::Result<()> {
    fs::write(path, text).with_context(|| format!("writing {}", path.display()))
}
