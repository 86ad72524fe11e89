//! Software version reported by Cisco IOS and Cisco ASA devices.
//!
//! The version is read from sysDescr.0; sysObjectID.0 is fetched in the
//! same request and only used to describe unsupported devices.

use std::fmt;
use std::sync::LazyLock;

use async_snmp::{Oid, Value, VarBind};
use regex::Regex;

use crate::error::Result;
use crate::mib;
use crate::report::Verdict;
use crate::transport::SnmpTransport;

static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Version ([^,\s]+)").expect("version pattern is valid"));

/// Operating system families the plugin knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// IOS, IOS XE and IOS XR
    Ios,
    /// Adaptive Security Appliance
    Asa,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ios => write!(f, "Cisco IOS"),
            Self::Asa => write!(f, "Cisco ASA"),
        }
    }
}

/// System identification read from the device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    pub sys_descr: Option<String>,
    pub sys_object_id: Option<Oid>,
}

impl HostInfo {
    /// The GET request: sysDescr.0 and sysObjectID.0.
    pub fn request() -> [Oid; 2] {
        [mib::sys_descr(), mib::sys_object_id()]
    }

    pub fn from_varbinds(varbinds: &[VarBind]) -> Self {
        let descr_oid = mib::sys_descr();
        let object_id_oid = mib::sys_object_id();
        let mut info = Self::default();

        for vb in varbinds {
            if vb.oid == descr_oid {
                info.sys_descr = vb
                    .value
                    .as_bytes()
                    .map(|b| String::from_utf8_lossy(b).into_owned());
            } else if vb.oid == object_id_oid
                && let Value::ObjectIdentifier(oid) = &vb.value
            {
                info.sys_object_id = Some(oid.clone());
            }
        }

        info
    }

    pub fn platform(&self) -> Option<Platform> {
        let descr = self.sys_descr.as_deref()?;
        if descr.contains("Cisco Adaptive Security Appliance") {
            Some(Platform::Asa)
        } else if descr.contains("Cisco IOS") {
            Some(Platform::Ios)
        } else {
            None
        }
    }

    /// The token following `Version ` in sysDescr.
    pub fn version(&self) -> Option<&str> {
        let descr = self.sys_descr.as_deref()?;
        VERSION_TOKEN
            .captures(descr)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn is_cisco(&self) -> bool {
        self.sys_object_id
            .as_ref()
            .is_some_and(|oid| oid.starts_with(&mib::cisco_enterprise()))
    }

    /// Turn the host information into the plugin verdict.
    pub fn verdict(&self) -> Verdict {
        match (self.platform(), self.version()) {
            (Some(_), Some(version)) => Verdict::ok(version),
            (Some(platform), None) => {
                Verdict::unknown(format!("Unable to parse {} version from sysDescr", platform))
            }
            (None, _) => Verdict::unknown(self.unsupported_message()),
        }
    }

    fn unsupported_message(&self) -> String {
        match (&self.sys_object_id, self.is_cisco()) {
            (Some(oid), true) => format!("Unsupported Cisco platform (sysObjectID {})", oid),
            (Some(oid), false) => format!("Unsupported device (sysObjectID {})", oid),
            (None, _) if self.sys_descr.is_none() => "Device did not return sysDescr".to_string(),
            (None, _) => "Unsupported device".to_string(),
        }
    }
}

/// Run the version check against a device.
pub async fn check<T: SnmpTransport>(transport: &T) -> Result<Verdict> {
    let response = transport.get(&HostInfo::request()).await?;
    let info = HostInfo::from_varbinds(&response);

    tracing::debug!(target: "nelmon::version", { platform = ?info.platform(), sys_object_id = ?info.sys_object_id }, "host info collected");

    Ok(info.verdict())
}
