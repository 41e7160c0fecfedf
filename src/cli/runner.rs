use tracing::info;

use paircalc::core::params::RunParams;
use paircalc::types::Action;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> paircalc::Result<()> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    // The action string is validated here, before any sink is touched.
    let action: Action = args.action.parse()?;

    let params = RunParams {
        action,
        result_log: args.result_log,
        diagnostic_log: args.diagnostic_log,
    };

    let report = paircalc::api::run_csv(&args.file, &params)?;

    info!(
        "Successfully processed {:?}: {} rows ({} valid, {} invalid)",
        args.file, report.rows, report.valid, report.invalid
    );

    Ok(())
}
