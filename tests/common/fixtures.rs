//! MIB data fixtures.

use async_snmp::{Oid, Value, oid};
use nelmon::mib;
use std::collections::BTreeMap;

/// One ifTable/ifXTable row.
#[derive(Debug, Clone, Copy)]
pub struct Interface {
    pub index: u32,
    pub admin: i32,
    pub oper: i32,
    pub descr: &'static str,
    pub alias: &'static str,
}

impl Interface {
    /// Admin up, oper down.
    pub const fn down(index: u32, descr: &'static str, alias: &'static str) -> Self {
        Self {
            index,
            admin: 1,
            oper: 2,
            descr,
            alias,
        }
    }

    /// Admin up, oper up.
    pub const fn up(index: u32, descr: &'static str) -> Self {
        Self {
            index,
            admin: 1,
            oper: 1,
            descr,
            alias: "",
        }
    }

    /// Admin down, oper down.
    pub const fn shutdown(index: u32, descr: &'static str) -> Self {
        Self {
            index,
            admin: 2,
            oper: 2,
            descr,
            alias: "",
        }
    }
}

/// ifTable and ifXTable entries for the given interfaces.
///
/// ifType (column 3) and ifLastChange (column 9) are included so the
/// status columns have neighbours, as on a real agent.
pub fn interface_table(interfaces: &[Interface]) -> BTreeMap<Oid, Value> {
    let if_type = oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 3);
    let if_last_change = oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 9);
    let mut data = BTreeMap::new();

    for iface in interfaces {
        let i = iface.index;
        data.insert(
            mib::instance(&mib::if_descr(), i),
            Value::OctetString(iface.descr.to_string().into()),
        );
        data.insert(mib::instance(&if_type, i), Value::Integer(6));
        data.insert(
            mib::instance(&mib::if_admin_status(), i),
            Value::Integer(iface.admin),
        );
        data.insert(
            mib::instance(&mib::if_oper_status(), i),
            Value::Integer(iface.oper),
        );
        data.insert(mib::instance(&if_last_change, i), Value::TimeTicks(0));
        data.insert(
            mib::instance(&mib::if_alias(), i),
            Value::OctetString(iface.alias.to_string().into()),
        );
    }

    data
}

/// sysDescr.0 and sysObjectID.0.
pub fn system_mib(descr: &str, object_id: Oid) -> BTreeMap<Oid, Value> {
    let mut data = BTreeMap::new();
    data.insert(
        mib::sys_descr(),
        Value::OctetString(descr.to_string().into()),
    );
    data.insert(mib::sys_object_id(), Value::ObjectIdentifier(object_id));
    data.insert(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), Value::OctetString("sw1".into()));
    data
}
