//! `tactc`, the command line front-end of the Tact parser.

mod cli;
mod ops;

use tact_tracing::println_red_err;

fn main() {
    if let Err(err) = cli::run_cli() {
        println_red_err(&format!("Error: {err:?}"));
        std::process::exit(1);
    }
}
