//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use taproute_cli::CliError;

#[expect(
    clippy::print_stderr,
    reason = "the binary reports its single failure line on stderr"
)]
fn main() {
    match taproute_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("taproute: {err}");
            std::process::exit(1);
        }
    }
}
