use anyhow::Result;
use clap::Parser;

use utf8conv::cli::{print_summary, Args};
use utf8conv::conversion;
use utf8conv::fs::LocalFs;
use utf8conv::report::ConsoleReporter;

fn main() -> Result<()> {
    let args = Args::parse();

    let request = match args.to_settings().validate() {
        Ok(request) => request,
        Err(report) => {
            for failure in report.failures() {
                eprintln!("✗ {}: {}", failure.field, failure.message);
            }
            anyhow::bail!("invalid configuration ({} failure(s))", report.len());
        }
    };

    let fs = LocalFs;
    let reporter = ConsoleReporter::new(args.quiet);
    let result = conversion::run(&request, &fs, &reporter)
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    if !result.summary.is_clean() && !args.quiet {
        eprintln!(
            "⚠ {} file(s) failed and were tolerated",
            result.summary.files_failed
        );
    }

    if args.stats {
        print_summary(&result.summary, args.stats_format)?;
    }

    Ok(())
}
