//! Interfaces that are administratively up but operationally down.
//!
//! The check walks ifAdminStatus and ifOperStatus together, keeps the
//! indices that are `up(1)` in the first and `down(2)` in the second, then
//! fetches ifDescr/ifAlias for those indices only and narrows the set with
//! the operator's regex filters.
//!
//! # Filter order
//!
//! Filters run in a fixed order:
//!
//! 1. `--descr` keeps the interfaces whose ifDescr matches.
//! 2. `--alias` keeps the interfaces whose ifAlias matches, starting over
//!    from every fetched interface. When both include filters are given,
//!    only the alias filter decides.
//! 3. `--ignore_descr` drops the interfaces whose ifDescr matches.
//!
//! Regexes search anywhere in the string (`Regex::is_match`), no implicit
//! anchoring.

use std::collections::{BTreeMap, BTreeSet};

use async_snmp::{Oid, Value, VarBind};
use regex::Regex;

use crate::error::{Error, Result};
use crate::mib;
use crate::report::{Status, Verdict};
use crate::transport::{Row, SnmpTransport};

/// Message reported when nothing is down.
pub const NO_INTERFACES_DOWN: &str = "No interfaces down";

/// Message reported when no severity was selected.
pub const SEVERITY_REQUIRED: &str = "Use -w or -c";

/// Compiled interface filters.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    /// Keep only interfaces whose ifDescr matches.
    pub include_descr: Option<Regex>,
    /// Keep only interfaces whose ifAlias matches (replaces `include_descr`'s result).
    pub include_alias: Option<Regex>,
    /// Drop interfaces whose ifDescr matches.
    pub exclude_descr: Option<Regex>,
}

impl FilterSet {
    /// Compile the raw patterns given on the command line.
    pub fn compile(
        include_descr: Option<&str>,
        include_alias: Option<&str>,
        exclude_descr: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            include_descr: compile_pattern("--descr", include_descr)?,
            include_alias: compile_pattern("--alias", include_alias)?,
            exclude_descr: compile_pattern("--ignore_descr", exclude_descr)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.include_descr.is_none() && self.include_alias.is_none() && self.exclude_descr.is_none()
    }

    /// Narrow `down` using the interface metadata.
    ///
    /// The result is always a subset of the metadata's indices, and the
    /// include filters pick from those indices rather than from `down`.
    pub fn apply(&self, down: &BTreeSet<u32>, metadata: &InterfaceMetadata) -> BTreeSet<u32> {
        let mut selected = down.clone();

        if let Some(re) = &self.include_descr {
            selected = metadata.matching(|record| record.descr.as_deref(), re);
        }

        if let Some(re) = &self.include_alias {
            selected = metadata.matching(|record| record.alias.as_deref(), re);
        }

        if let Some(re) = &self.exclude_descr {
            self.exclude(&mut selected, metadata, re);
        }

        selected
    }

    fn exclude(&self, selected: &mut BTreeSet<u32>, metadata: &InterfaceMetadata, re: &Regex) {
        for index in metadata.matching(|record| record.descr.as_deref(), re) {
            if selected.remove(&index) {
                tracing::debug!(target: "nelmon::interfaces", { snmp.index = index }, "interface ignored by descr filter");
            }
        }
    }
}

fn compile_pattern(flag: &'static str, pattern: Option<&str>) -> Result<Option<Regex>> {
    pattern
        .map(|p| Regex::new(p).map_err(|source| Error::InvalidPattern { flag, source }.boxed()))
        .transpose()
}

/// Settings for one run of the check.
#[derive(Debug, Clone)]
pub struct InterfaceCheck {
    /// State reported when at least one interface is down.
    pub severity: Status,
    pub filters: FilterSet,
}

impl InterfaceCheck {
    /// Pick the severity from the `-w`/`-c` flags.
    ///
    /// `-c` wins when both are given; neither is a configuration error.
    pub fn new(warning: bool, critical: bool, filters: FilterSet) -> Result<Self> {
        let severity = if critical {
            Status::Critical
        } else if warning {
            Status::Warning
        } else {
            return Err(Error::config(SEVERITY_REQUIRED));
        };
        Ok(Self { severity, filters })
    }
}

/// Indices extracted from the status walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTables {
    pub admin_up: BTreeSet<u32>,
    pub oper_down: BTreeSet<u32>,
}

impl StatusTables {
    /// Sort the walked varbinds into the admin-up and oper-down sets.
    ///
    /// Varbinds outside both columns are ignored.
    pub fn from_varbinds<'a>(varbinds: impl IntoIterator<Item = &'a VarBind>) -> Result<Self> {
        let admin_column = mib::if_admin_status();
        let oper_column = mib::if_oper_status();
        let mut tables = Self::default();

        for vb in varbinds {
            if vb.oid.starts_with(&admin_column) {
                let index = mib::row_index(&vb.oid, &admin_column)?;
                if vb.value.as_i32() == Some(mib::ADMIN_STATUS_UP) {
                    tables.admin_up.insert(index);
                }
            } else if vb.oid.starts_with(&oper_column) {
                let index = mib::row_index(&vb.oid, &oper_column)?;
                if vb.value.as_i32() == Some(mib::OPER_STATUS_DOWN) {
                    tables.oper_down.insert(index);
                }
            }
        }

        Ok(tables)
    }

    pub fn from_rows(rows: &[Row]) -> Result<Self> {
        Self::from_varbinds(rows.iter().flatten())
    }

    /// Indices that are admin up and oper down, in ascending order.
    pub fn down_interfaces(&self) -> BTreeSet<u32> {
        self.admin_up.intersection(&self.oper_down).copied().collect()
    }
}

/// Descriptive fields of one interface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceRecord {
    pub descr: Option<String>,
    pub alias: Option<String>,
}

impl InterfaceRecord {
    /// Report line: `descr`, or `descr - alias` when an alias is set.
    pub fn display(&self, index: u32) -> String {
        let descr = match &self.descr {
            Some(descr) => descr.clone(),
            None => format!("ifIndex {}", index),
        };
        match self.alias.as_deref() {
            Some(alias) if !alias.is_empty() => format!("{} - {}", descr, alias),
            _ => descr,
        }
    }
}

/// ifDescr/ifAlias for the interfaces found down, keyed by ifIndex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceMetadata {
    records: BTreeMap<u32, InterfaceRecord>,
}

impl InterfaceMetadata {
    /// The GET request for the given indices: ifDescr.N and ifAlias.N per index.
    pub fn request(indices: &BTreeSet<u32>) -> Vec<Oid> {
        let descr = mib::if_descr();
        let alias = mib::if_alias();
        indices
            .iter()
            .flat_map(|&index| [mib::instance(&descr, index), mib::instance(&alias, index)])
            .collect()
    }

    /// Build the metadata from the GET response.
    ///
    /// Every requested index gets a record, even if the agent had no value
    /// for it. Exception values leave the field empty.
    pub fn from_varbinds(indices: &BTreeSet<u32>, varbinds: &[VarBind]) -> Result<Self> {
        let descr_column = mib::if_descr();
        let alias_column = mib::if_alias();
        let mut records: BTreeMap<u32, InterfaceRecord> = indices
            .iter()
            .map(|&index| (index, InterfaceRecord::default()))
            .collect();

        for vb in varbinds {
            let (index, is_descr) = if vb.oid.starts_with(&descr_column) {
                (mib::row_index(&vb.oid, &descr_column)?, true)
            } else if vb.oid.starts_with(&alias_column) {
                (mib::row_index(&vb.oid, &alias_column)?, false)
            } else {
                tracing::warn!(target: "nelmon::interfaces", { snmp.oid = %vb.oid }, "ignoring unrequested OID in response");
                continue;
            };

            let Some(record) = records.get_mut(&index) else {
                tracing::warn!(target: "nelmon::interfaces", { snmp.oid = %vb.oid }, "ignoring unrequested OID in response");
                continue;
            };

            let text = value_text(&vb.value);
            if is_descr {
                record.descr = text;
            } else {
                record.alias = text;
            }
        }

        Ok(Self { records })
    }

    pub fn get(&self, index: u32) -> Option<&InterfaceRecord> {
        self.records.get(&index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn matching<F>(&self, field: F, re: &Regex) -> BTreeSet<u32>
    where
        F: Fn(&InterfaceRecord) -> Option<&str>,
    {
        self.records
            .iter()
            .filter(|(_, record)| field(record).is_some_and(|text| re.is_match(text)))
            .map(|(&index, _)| index)
            .collect()
    }
}

impl FromIterator<(u32, InterfaceRecord)> for InterfaceMetadata {
    fn from_iter<I: IntoIterator<Item = (u32, InterfaceRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

fn value_text(value: &Value) -> Option<String> {
    if value.is_exception() {
        return None;
    }
    match value.as_bytes() {
        Some(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        None => Some(value.to_string()),
    }
}

/// Build the verdict for the final set of interfaces.
pub fn render(severity: Status, down: &BTreeSet<u32>, metadata: &InterfaceMetadata) -> Verdict {
    if down.is_empty() {
        return Verdict::ok(NO_INTERFACES_DOWN);
    }

    let mut lines = Vec::with_capacity(down.len() + 1);
    lines.push(format!("{} interfaces down", down.len()));
    for &index in down {
        let line = match metadata.get(index) {
            Some(record) => record.display(index),
            None => InterfaceRecord::default().display(index),
        };
        lines.push(line);
    }

    Verdict::with_lines(severity, lines)
}

/// Run the check against a device.
pub async fn check<T: SnmpTransport>(transport: &T, check: &InterfaceCheck) -> Result<Verdict> {
    let rows = transport
        .get_next_table(&[mib::if_admin_status(), mib::if_oper_status()])
        .await?;
    let tables = StatusTables::from_rows(&rows)?;
    let down = tables.down_interfaces();

    tracing::debug!(target: "nelmon::interfaces", { snmp.admin_up = tables.admin_up.len(), snmp.oper_down = tables.oper_down.len(), snmp.down = down.len() }, "status tables collected");

    if down.is_empty() {
        return Ok(Verdict::ok(NO_INTERFACES_DOWN));
    }

    let response = transport.get(&InterfaceMetadata::request(&down)).await?;
    let metadata = InterfaceMetadata::from_varbinds(&down, &response)?;
    let selected = check.filters.apply(&down, &metadata);

    tracing::debug!(target: "nelmon::interfaces", { snmp.down = down.len(), snmp.reported = selected.len() }, "filters applied");

    Ok(render(check.severity, &selected, &metadata))
}
