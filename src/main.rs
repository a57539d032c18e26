use std::process::ExitCode;

use clap::Parser;
use console::style;

use lockpick::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run() {
        Ok(code) => code,
        Err(e) => {
            // Configuration errors: nothing was searched, exit distinctly
            eprintln!("{} {e:#}", style("✖").red().bold());
            ExitCode::from(2)
        }
    }
}
