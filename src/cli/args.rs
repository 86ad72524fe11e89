//! Command-line argument structures shared by the nelmon plugins.
//!
//! Plugins flatten [`SnmpArgs`] and [`LogArgs`] into their own clap parser
//! and add their check-specific flags next to them.

use clap::Parser;
use std::time::Duration;

use crate::config::{
    AuthProtocol, Credentials, DEFAULT_PORT, PrivProtocol, SecurityLevel, SnmpConfig, SnmpVersion,
};
use crate::error::{Error, Result};

/// SNMP session arguments common to every plugin.
#[derive(Debug, Parser)]
pub struct SnmpArgs {
    /// Target host
    #[arg(short = 'H', value_name = "HOST")]
    pub host: String,

    /// Port number
    #[arg(short = 'p', value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SNMP protocol version
    #[arg(short = 'P', value_name = "VERSION")]
    pub snmp_version: SnmpVersion,

    /// SNMP community string
    #[arg(short = 'C', value_name = "COMMUNITY")]
    pub community: Option<String>,

    /// SNMPv3 security level
    #[arg(short = 'L', value_name = "LEVEL")]
    pub level: Option<SecurityLevel>,

    /// SNMPv3 authentication protocol
    #[arg(short = 'a', value_name = "PROTOCOL")]
    pub auth_protocol: Option<AuthProtocol>,

    /// SNMPv3 privacy protocol
    #[arg(short = 'x', value_name = "PROTOCOL")]
    pub priv_protocol: Option<PrivProtocol>,

    /// SNMPv3 username
    #[arg(short = 'U', value_name = "USERNAME")]
    pub username: Option<String>,

    /// SNMPv3 authentication password
    #[arg(short = 'A', value_name = "PASSWORD")]
    pub auth_password: Option<String>,

    /// SNMPv3 privacy password
    #[arg(short = 'X', value_name = "PASSWORD")]
    pub priv_password: Option<String>,

    /// Request timeout in seconds
    #[arg(short = 't', long = "timeout", default_value = "5")]
    pub timeout: f64,

    /// Retransmissions before giving up on the device
    #[arg(short = 'r', long = "retries", default_value = "3")]
    pub retries: u32,
}

impl SnmpArgs {
    /// Validate the argument combination and build the session config.
    ///
    /// Rules are checked in a fixed order and the first failure is
    /// returned as [`Error::Config`] with an operator-facing message.
    pub fn config(&self) -> Result<SnmpConfig> {
        let credentials = self.credentials()?;

        let timeout = Duration::try_from_secs_f64(self.timeout)
            .ok()
            .filter(|t| !t.is_zero())
            .ok_or_else(|| Error::config("Timeout must be a positive number of seconds"))?;

        Ok(SnmpConfig {
            host: self.host.clone(),
            port: self.port,
            credentials,
            timeout,
            retries: self.retries,
        })
    }

    fn credentials(&self) -> Result<Credentials> {
        match self.snmp_version {
            SnmpVersion::V2c => {
                let community = require(
                    &self.community,
                    "Specify community when using SNMP 2c",
                )?;
                // A security level given alongside 2c is still checked for completeness.
                if let Some(level) = self.level {
                    self.usm_keys(level)?;
                }
                Ok(Credentials::Community(community.clone()))
            }
            SnmpVersion::V3 => {
                let username = require(&self.username, "Specify username when using SNMP 3")?;
                let level = require(&self.level, "Specify security level when using SNMP 3")?;
                let (auth, privacy) = self.usm_keys(*level)?;
                Ok(Credentials::Usm {
                    username: username.clone(),
                    auth,
                    privacy,
                })
            }
        }
    }

    #[allow(clippy::type_complexity)]
    fn usm_keys(
        &self,
        level: SecurityLevel,
    ) -> Result<((AuthProtocol, String), Option<(PrivProtocol, String)>)> {
        let auth_protocol = require(
            &self.auth_protocol,
            format!("Specify authentication protocol when using {}", level),
        )?;
        let auth_password = require(
            &self.auth_password,
            format!("Specify authentication password when using {}", level),
        )?;

        let privacy = match level {
            SecurityLevel::AuthNoPriv => None,
            SecurityLevel::AuthPriv => {
                let priv_protocol = require(
                    &self.priv_protocol,
                    "Specify privacy protocol when using authPriv",
                )?;
                let priv_password = require(
                    &self.priv_password,
                    "Specify privacy password when using authPriv",
                )?;
                Some((*priv_protocol, priv_password.clone()))
            }
        };

        Ok(((*auth_protocol, auth_password.clone()), privacy))
    }
}

fn require<'a, T>(value: &'a Option<T>, message: impl Into<Box<str>>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| Error::config(message))
}

/// Diagnostic logging arguments.
#[derive(Debug, Parser)]
pub struct LogArgs {
    /// Enable debug logging on stderr (nelmon=debug,async_snmp=debug).
    #[arg(long = "debug")]
    pub debug: bool,

    /// Enable trace logging on stderr (nelmon=trace,async_snmp=trace).
    #[arg(long = "trace")]
    pub trace: bool,
}

impl LogArgs {
    /// Initialize tracing based on debug/trace flags.
    ///
    /// Logs always go to stderr; stdout carries only the plugin output.
    pub fn init_tracing(&self) {
        use tracing_subscriber::EnvFilter;

        let filter = if self.trace {
            "nelmon=trace,async_snmp=trace"
        } else if self.debug {
            "nelmon=debug,async_snmp=debug"
        } else {
            "nelmon=warn,async_snmp=warn"
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .try_init();
    }
}
