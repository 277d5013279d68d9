use colored::Colorize;
use std::process::ExitCode;

fn main() -> ExitCode {
    match entity_filter::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
