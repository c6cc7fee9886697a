use std::process::ExitCode;

use movescan_report::{analyze_files, AnalyzeOptions, ErrorReport};

use crate::cli::Cli;

pub fn run(cli: Cli) -> ExitCode {
    match try_run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("movescan: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> anyhow::Result<u8> {
    let options = AnalyzeOptions {
        threshold: cli.threshold,
    };

    match analyze_files(&cli.old_file, &cli.new_file, &options) {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(0)
        }
        Err(err) => {
            // Unreadable input still produces a JSON body on stdout;
            // only the exit code signals failure.
            let body = ErrorReport::from_error(&err);
            println!("{}", serde_json::to_string(&body)?);
            Ok(1)
        }
    }
}
