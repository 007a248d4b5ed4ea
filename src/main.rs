use std::io::{self, BufWriter};
use std::process::ExitCode;
use voxtrace::cli;

fn main() -> ExitCode {
    let mut out = io::stdout().lock();
    let mut diag = BufWriter::new(io::stderr().lock());
    let code = cli::run_cli(std::env::args_os(), &mut out, &mut diag);
    ExitCode::from(code)
}
