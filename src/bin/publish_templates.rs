use std::process::ExitCode;

use clap::Parser;

use template_release::cli::{self, PublishCli};
use template_release::output;
use template_release::process::SystemRunner;

fn main() -> ExitCode {
    let args = PublishCli::parse();
    output::init(args.color);
    cli::init_logging(args.verbose);

    match cli::publish::run(&args, &SystemRunner) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
