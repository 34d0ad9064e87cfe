//! Bannerforge - command-line tool for banner codecs and message rendering

use std::process::ExitCode;

use bannerforge::cli;

fn main() -> ExitCode {
    cli::run()
}
