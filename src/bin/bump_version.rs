use std::process::ExitCode;

use clap::Parser;

use template_release::cli::{self, BumpCli};
use template_release::output;
use template_release::process::SystemRunner;

fn main() -> ExitCode {
    let args = BumpCli::parse();
    output::init(args.color);
    cli::init_logging(args.verbose);

    match cli::bump::run(&args, &SystemRunner) {
        Ok(summary) => summary.exit_code(),
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
