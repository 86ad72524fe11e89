//! Validated SNMP session configuration.
//!
//! A [`SnmpConfig`] only exists once every required argument combination
//! has been checked (see [`SnmpArgs::config`](crate::cli::args::SnmpArgs::config)),
//! so code downstream never handles a half-filled configuration.

use std::fmt;
use std::net::{SocketAddr, ToSocketAddrs};
use std::time::Duration;

use crate::error::{Error, Result};

/// Default SNMP agent port.
pub const DEFAULT_PORT: u16 = 161;

/// SNMP protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SnmpVersion {
    /// SNMPv2c (community based)
    #[cfg_attr(feature = "cli", value(name = "2c"))]
    V2c,
    /// SNMPv3 (user based security)
    #[cfg_attr(feature = "cli", value(name = "3"))]
    V3,
}

impl fmt::Display for SnmpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2c => write!(f, "2c"),
            Self::V3 => write!(f, "3"),
        }
    }
}

/// SNMPv3 security level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SecurityLevel {
    #[cfg_attr(feature = "cli", value(name = "authNoPriv"))]
    AuthNoPriv,
    #[cfg_attr(feature = "cli", value(name = "authPriv"))]
    AuthPriv,
}

impl fmt::Display for SecurityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthNoPriv => write!(f, "authNoPriv"),
            Self::AuthPriv => write!(f, "authPriv"),
        }
    }
}

/// SNMPv3 authentication protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum AuthProtocol {
    /// HMAC-MD5-96
    #[cfg_attr(feature = "cli", value(name = "MD5"))]
    Md5,
    /// HMAC-SHA-96
    #[cfg_attr(feature = "cli", value(name = "SHA"))]
    Sha,
}

impl From<AuthProtocol> for async_snmp::AuthProtocol {
    fn from(p: AuthProtocol) -> Self {
        match p {
            AuthProtocol::Md5 => async_snmp::AuthProtocol::Md5,
            AuthProtocol::Sha => async_snmp::AuthProtocol::Sha1,
        }
    }
}

/// SNMPv3 privacy protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PrivProtocol {
    /// DES-CBC
    #[cfg_attr(feature = "cli", value(name = "DES"))]
    Des,
    /// AES-128-CFB
    #[cfg_attr(feature = "cli", value(name = "AES"))]
    Aes,
}

impl From<PrivProtocol> for async_snmp::PrivProtocol {
    fn from(p: PrivProtocol) -> Self {
        match p {
            PrivProtocol::Des => async_snmp::PrivProtocol::Des,
            PrivProtocol::Aes => async_snmp::PrivProtocol::Aes128,
        }
    }
}

/// Security parameters for one session.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// SNMPv2c community string.
    Community(String),
    /// SNMPv3 user. Authentication is always present; privacy only for authPriv.
    Usm {
        username: String,
        auth: (AuthProtocol, String),
        privacy: Option<(PrivProtocol, String)>,
    },
}

impl Credentials {
    pub fn version(&self) -> SnmpVersion {
        match self {
            Self::Community(_) => SnmpVersion::V2c,
            Self::Usm { .. } => SnmpVersion::V3,
        }
    }

    pub fn security_level(&self) -> Option<SecurityLevel> {
        match self {
            Self::Community(_) => None,
            Self::Usm { privacy: None, .. } => Some(SecurityLevel::AuthNoPriv),
            Self::Usm {
                privacy: Some(_), ..
            } => Some(SecurityLevel::AuthPriv),
        }
    }
}

// Secrets stay out of debug logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Community(_) => f.debug_tuple("Community").field(&"<redacted>").finish(),
            Self::Usm {
                username,
                auth,
                privacy,
            } => f
                .debug_struct("Usm")
                .field("username", username)
                .field("auth", &auth.0)
                .field("privacy", &privacy.as_ref().map(|p| p.0))
                .finish(),
        }
    }
}

/// A fully validated SNMP session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnmpConfig {
    pub host: String,
    pub port: u16,
    pub credentials: Credentials,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retransmissions performed by the transport before giving up.
    pub retries: u32,
}

impl SnmpConfig {
    pub fn version(&self) -> SnmpVersion {
        self.credentials.version()
    }

    /// Resolve host and port into a socket address.
    pub fn target_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()
            .map_err(|e| Error::transport(format!("invalid target '{}': {}", self.host, e)))?
            .next()
            .ok_or_else(|| Error::transport(format!("could not resolve hostname: {}", self.host)))
    }
}
