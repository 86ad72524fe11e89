//! # nelmon
//!
//! SNMP monitoring plugins for network devices, following the Nagios
//! plugin convention: one line (or a few) on stdout and an exit code of
//! 0 (OK), 1 (WARNING), 2 (CRITICAL) or 3 (UNKNOWN).
//!
//! ## Plugins
//!
//! - `nelmon-check-admin-up-oper-down`: reports interfaces that are
//!   administratively up but operationally down.
//! - `nelmon-check-version`: reports the software version of Cisco IOS
//!   and ASA devices.
//!
//! ## Library use
//!
//! The checks are plain async functions over the [`SnmpTransport`] trait,
//! so they can run against any SNMP backend:
//!
//! ```rust,no_run
//! use nelmon::plugins::admin_up_oper_down::{self, FilterSet, InterfaceCheck};
//! use nelmon::{ClientTransport, SnmpConfig, config::Credentials};
//! use std::time::Duration;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> nelmon::Result<()> {
//!     let config = SnmpConfig {
//!         host: "192.168.1.1".into(),
//!         port: 161,
//!         credentials: Credentials::Community("public".into()),
//!         timeout: Duration::from_secs(5),
//!         retries: 3,
//!     };
//!     let transport = ClientTransport::connect(&config).await?;
//!     let check = InterfaceCheck::new(false, true, FilterSet::default())?;
//!
//!     let verdict = admin_up_oper_down::check(&transport, &check).await?;
//!     println!("{}", verdict.render());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod mib;
pub mod plugins;
pub mod report;
pub mod transport;

#[cfg(feature = "cli")]
pub mod cli;

pub use config::SnmpConfig;
pub use error::{Error, Result};
pub use report::{Status, Verdict};
pub use transport::{ClientTransport, SnmpTransport};
