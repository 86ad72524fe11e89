//! nelmon-check-admin-up-oper-down: report interfaces that are
//! administratively up but operationally down.

use clap::Parser;
use nelmon::cli::args::{LogArgs, SnmpArgs};
use nelmon::plugins::admin_up_oper_down::{self, FilterSet, InterfaceCheck};
use nelmon::report::conclude;
use nelmon::{ClientTransport, Result, Verdict};
use std::process::ExitCode;

/// Check for interfaces that are admin up and oper down.
///
/// Exits WARNING (-w) or CRITICAL (-c) when at least one interface
/// survives the filters, OK otherwise.
#[derive(Debug, Parser)]
#[command(name = "nelmon-check-admin-up-oper-down", version = "1.3", about)]
struct Args {
    #[command(flatten)]
    snmp: SnmpArgs,

    /// Report down interfaces as WARNING
    #[arg(short = 'w')]
    warning: bool,

    /// Report down interfaces as CRITICAL (takes precedence over -w)
    #[arg(short = 'c')]
    critical: bool,

    /// Only report interfaces whose ifDescr matches this regex
    #[arg(short = 'd', long = "descr", value_name = "REGEX")]
    descr: Option<String>,

    /// Only report interfaces whose ifAlias matches this regex (also -al)
    #[arg(long = "alias", value_name = "REGEX")]
    alias: Option<String>,

    /// Skip interfaces whose ifDescr matches this regex (also -id)
    #[arg(long = "ignore_descr", value_name = "REGEX")]
    ignore_descr: Option<String>,

    #[command(flatten)]
    log: LogArgs,
}

/// Build the check from the command line; severity is checked before the
/// filter patterns.
fn interface_check(args: &Args) -> Result<InterfaceCheck> {
    let severity = InterfaceCheck::new(args.warning, args.critical, FilterSet::default())?;
    let filters = FilterSet::compile(
        args.descr.as_deref(),
        args.alias.as_deref(),
        args.ignore_descr.as_deref(),
    )?;
    Ok(InterfaceCheck {
        filters,
        ..severity
    })
}

async fn run(args: &Args) -> Result<Verdict> {
    let check = interface_check(args)?;
    let config = args.snmp.config()?;

    let transport = ClientTransport::connect(&config).await?;
    admin_up_oper_down::check(&transport, &check).await
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
