//! nelmon-check-version: report the software version of Cisco IOS and
//! ASA devices.

use clap::Parser;
use nelmon::cli::args::{LogArgs, SnmpArgs};
use nelmon::plugins::version;
use nelmon::report::conclude;
use nelmon::{ClientTransport, Result, Verdict};
use std::process::ExitCode;

/// Read the software version from sysDescr.
///
/// Exits OK with the version string, or UNKNOWN when the device is not a
/// supported platform.
#[derive(Debug, Parser)]
#[command(name = "nelmon-check-version", version = "1.0", about)]
struct Args {
    #[command(flatten)]
    snmp: SnmpArgs,

    #[command(flatten)]
    log: LogArgs,
}

async fn run(args: &Args) -> Result<Verdict> {
    let config = args.snmp.config()?;
    let transport = ClientTransport::connect(&config).await?;
    version::check(&transport).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args: Args = match nelmon::cli::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => return nelmon::cli::usage_exit(e),
    };

    args.log.init_tracing();

    conclude(run(&args).await).emit()
}
