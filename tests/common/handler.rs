//! BTreeMap-backed MibHandler for the in-process agent.
//!
//! The BTreeMap gives the lexicographic OID order GETNEXT needs.

use async_snmp::handler::{
    BoxFuture, GetNextResult, GetResult, MibHandler, RequestContext, SetResult,
};
use async_snmp::{Oid, Value, VarBind};
use std::collections::BTreeMap;
use std::sync::RwLock;

/// Read-only MIB view over an in-memory table.
pub struct TestHandler {
    data: RwLock<BTreeMap<Oid, Value>>,
}

impl TestHandler {
    pub fn new(initial: BTreeMap<Oid, Value>) -> Self {
        Self {
            data: RwLock::new(initial),
        }
    }

    /// Insert or update a value.
    pub fn set(&self, oid: Oid, value: Value) {
        self.data.write().unwrap().insert(oid, value);
    }
}

impl MibHandler for TestHandler {
    fn get<'a>(&'a self, _ctx: &'a RequestContext, oid: &'a Oid) -> BoxFuture<'a, GetResult> {
        let result = match self.data.read().unwrap().get(oid) {
            Some(v) => GetResult::Value(v.clone()),
            None => GetResult::NoSuchInstance,
        };
        Box::pin(async move { result })
    }

    fn get_next<'a>(
        &'a self,
        _ctx: &'a RequestContext,
        oid: &'a Oid,
    ) -> BoxFuture<'a, GetNextResult> {
        let result = self
            .data
            .read()
            .unwrap()
            .range(oid..)
            .find(|(k, _)| *k > oid)
            .map(|(k, v)| GetNextResult::Value(VarBind::new(k.clone(), v.clone())))
            .unwrap_or(GetNextResult::EndOfMibView);
        Box::pin(async move { result })
    }

    fn test_set<'a>(
        &'a self,
        _ctx: &'a RequestContext,
        _oid: &'a Oid,
        _value: &'a Value,
    ) -> BoxFuture<'a, SetResult> {
        Box::pin(async { SetResult::NotWritable })
    }

    fn commit_set<'a>(
        &'a self,
        _ctx: &'a RequestContext,
        _oid: &'a Oid,
        _value: &'a Value,
    ) -> BoxFuture<'a, SetResult> {
        Box::pin(async { SetResult::NotWritable })
    }

    fn undo_set<'a>(
        &'a self,
        _ctx: &'a RequestContext,
        _oid: &'a Oid,
        _value: &'a Value,
    ) -> BoxFuture<'a, ()> {
        Box::pin(async {})
    }
}
