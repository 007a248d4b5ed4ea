//! The `voxtrace` program boundary with its output streams injected.

use crate::args::Args;
use crate::errors::TraversalError;
use crate::logging::init_logger;
use crate::visitor::WriterVisitor;
use crate::voxel_traversal::{traverse, validate};
use clap::error::ErrorKind;
use clap::Parser;
use colored::Colorize;
use log::{debug, error};
use std::ffi::OsString;
use std::io::{self, Write};
use thiserror::Error;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Traversal(#[from] TraversalError),
    #[error("failed to write to the diagnostic stream: {0}")]
    Io(#[from] io::Error),
}

/// Writes every voxel of the requested segment to `diag` and returns how
/// many were written.
pub fn run<W: Write>(args: &Args, diag: &mut W) -> Result<u64, CliError> {
    let start = args.start();
    let delta = args.delta();
    validate(start, delta)?;

    if args.echo {
        writeln!(diag, "start {start}")?;
        writeln!(diag, "delta {delta}")?;
    }

    let mut visitor = WriterVisitor::new(&mut *diag);
    traverse(start, delta, &mut visitor);
    Ok(visitor.finish()?)
}

/// Parses `raw_args` and runs the traversal, returning the process exit code.
///
/// Help and version text go to `out`; voxels, usage errors and failures go
/// to `diag`, which is flushed before returning.
pub fn run_cli<I, T, O, D>(raw_args: I, out: &mut O, diag: &mut D) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    O: Write,
    D: Write,
{
    let code = match Args::try_parse_from(raw_args) {
        Ok(args) => {
            init_logger(args.debug);
            match run(&args, diag) {
                Ok(count) => {
                    debug!("visited {count} voxels");
                    EXIT_SUCCESS
                }
                Err(err) => {
                    report(diag, &err);
                    EXIT_FAILURE
                }
            }
        }
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            match write!(out, "{err}").and_then(|()| out.flush()) {
                Ok(()) => EXIT_SUCCESS,
                Err(io_err) => {
                    report(diag, &CliError::Io(io_err));
                    EXIT_FAILURE
                }
            }
        }
        Err(err) => {
            report(diag, &CliError::Usage(err));
            EXIT_FAILURE
        }
    };

    if let Err(err) = diag.flush() {
        error!("failed to flush the diagnostic stream: {err}");
        return EXIT_FAILURE;
    }
    code
}

fn report<D: Write>(diag: &mut D, err: &CliError) {
    let written = match err {
        // clap renders its own "error:" prefix and usage line
        CliError::Usage(usage) => write!(diag, "{usage}"),
        _ => writeln!(diag, "{}: {}", "Error".red().bold(), err),
    };
    if let Err(io_err) = written {
        error!("could not report '{err}': {io_err}");
    }
}
