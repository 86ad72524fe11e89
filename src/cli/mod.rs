//! Command-line plumbing shared by the plugin binaries.
//!
//! Enabled by the `cli` feature (on by default).

pub mod args;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use crate::report::Verdict;

/// Single-dash multi-letter options and the long option they stand for.
pub const LEGACY_OPTIONS: &[(&str, &str)] = &[("-al", "--alias"), ("-id", "--ignore_descr")];

/// Rewrite single-dash multi-letter options (`-al`, `-id`) to their long form.
///
/// clap only knows single-character short options, so `-al` would be read
/// as `-a l`. The separate (`-al VALUE`), `=` (`-al=VALUE`) and attached
/// (`-alVALUE`) forms are all rewritten. Arguments after a `--` terminator
/// are left untouched.
pub fn normalize_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut terminated = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg: OsString| {
            if terminated {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                terminated = true;
                return arg;
            }
            for (legacy, long) in LEGACY_OPTIONS {
                match text.strip_prefix(legacy) {
                    Some("") => return OsString::from(*long),
                    Some(rest) => {
                        let value = rest.strip_prefix('=').unwrap_or(rest);
                        return OsString::from(format!("{}={}", long, value));
                    }
                    None => {}
                }
            }
            arg
        })
        .collect()
}

/// Parse plugin arguments after rewriting legacy options.
pub fn parse<P: Parser, I, S>(args: I) -> Result<P, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    P::try_parse_from(normalize_args(args))
}

/// Report a command-line parse failure.
///
/// `--help` and `--version` print their text and exit OK; every other
/// parse error is an UNKNOWN verdict.
pub fn usage_exit(error: clap::Error) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            ExitCode::SUCCESS
        }
        _ => Verdict::unknown(error.to_string().trim_end()).emit(),
    }
}
