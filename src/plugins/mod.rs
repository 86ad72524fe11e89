//! Monitoring checks.
//!
//! Each check is an async function taking a [`SnmpTransport`](crate::transport::SnmpTransport)
//! and returning a [`Verdict`](crate::report::Verdict); the binaries in
//! `src/bin` only parse arguments, connect, and print the verdict.

pub mod admin_up_oper_down;
pub mod version;
