use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, OutputFormat};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let result = run::run(&args)?;
    report::print(&result, &args)?;
    report::print_summary(&result, args.verbose);

    Ok(if result.failed_count() > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
