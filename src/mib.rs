//! Well-known MIB objects polled by the plugins, and table row indexing.
//!
//! [`Oid`] construction is not `const`, so the objects are exposed as
//! functions returning fresh OIDs.

use async_snmp::{Oid, oid};

use crate::error::{Error, Result};

/// IF-MIB::ifDescr (1.3.6.1.2.1.2.2.1.2)
pub fn if_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 2)
}

/// IF-MIB::ifAdminStatus (1.3.6.1.2.1.2.2.1.7)
pub fn if_admin_status() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 7)
}

/// IF-MIB::ifOperStatus (1.3.6.1.2.1.2.2.1.8)
pub fn if_oper_status() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 8)
}

/// IF-MIB::ifAlias (1.3.6.1.2.1.31.1.1.1.18)
pub fn if_alias() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 31, 1, 1, 1, 18)
}

/// SNMPv2-MIB::sysDescr.0
pub fn sys_descr() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 1, 0)
}

/// SNMPv2-MIB::sysObjectID.0
pub fn sys_object_id() -> Oid {
    oid!(1, 3, 6, 1, 2, 1, 1, 2, 0)
}

/// Cisco enterprise subtree (1.3.6.1.4.1.9).
pub fn cisco_enterprise() -> Oid {
    oid!(1, 3, 6, 1, 4, 1, 9)
}

/// ifAdminStatus value for `up(1)`.
pub const ADMIN_STATUS_UP: i32 = 1;

/// ifOperStatus value for `down(2)`.
pub const OPER_STATUS_DOWN: i32 = 2;

/// Extract the row index from a `<column>.<index>` instance OID.
///
/// The OID must sit directly below `column` with exactly one trailing arc;
/// anything else is reported as [`Error::UnexpectedOid`].
///
/// ```
/// use async_snmp::oid;
/// use nelmon::mib::{if_descr, row_index};
///
/// let index = row_index(&oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 2, 10101), &if_descr()).unwrap();
/// assert_eq!(index, 10101);
/// ```
pub fn row_index(instance: &Oid, column: &Oid) -> Result<u32> {
    match instance.arcs().split_at_checked(column.len()) {
        Some((prefix, &[index])) if prefix == column.arcs() => Ok(index),
        _ => Err(Error::UnexpectedOid {
            oid: instance.clone(),
            column: column.clone(),
        }
        .boxed()),
    }
}

/// Build the instance OID `<column>.<index>`.
pub fn instance(column: &Oid, index: u32) -> Oid {
    column.child(index)
}
