//! In-memory SnmpTransport.
//!
//! Answers GET and GETNEXT from a BTreeMap, the way an agent would, and
//! records how many requests each operation received.

use async_snmp::{Oid, Value, VarBind};
use nelmon::transport::{Row, SnmpTransport};
use nelmon::{Error, Result};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockTransport {
    data: BTreeMap<Oid, Value>,
    fail_get: Option<String>,
    fail_walk: Option<String>,
    gets: AtomicUsize,
    walks: AtomicUsize,
    last_get: Mutex<Vec<Oid>>,
}

impl MockTransport {
    pub fn new(data: BTreeMap<Oid, Value>) -> Self {
        Self {
            data,
            fail_get: None,
            fail_walk: None,
            gets: AtomicUsize::new(0),
            walks: AtomicUsize::new(0),
            last_get: Mutex::new(Vec::new()),
        }
    }

    /// Every GET fails with this message.
    pub fn failing_get(mut self, message: &str) -> Self {
        self.fail_get = Some(message.to_string());
        self
    }

    /// Every table walk fails with this message.
    pub fn failing_walk(mut self, message: &str) -> Self {
        self.fail_walk = Some(message.to_string());
        self
    }

    pub fn get_count(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn walk_count(&self) -> usize {
        self.walks.load(Ordering::SeqCst)
    }

    /// OIDs of the most recent GET.
    pub fn last_get(&self) -> Vec<Oid> {
        self.last_get.lock().unwrap().clone()
    }

    fn next_after(&self, oid: &Oid) -> Option<VarBind> {
        self.data
            .range(oid..)
            .find(|(k, _)| *k > oid)
            .map(|(k, v)| VarBind::new(k.clone(), v.clone()))
    }
}

impl SnmpTransport for MockTransport {
    async fn get(&self, oids: &[Oid]) -> Result<Vec<VarBind>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        *self.last_get.lock().unwrap() = oids.to_vec();

        if let Some(message) = &self.fail_get {
            return Err(Error::transport(message));
        }

        Ok(oids
            .iter()
            .map(|oid| {
                let value = self
                    .data
                    .get(oid)
                    .cloned()
                    .unwrap_or(Value::NoSuchInstance);
                VarBind::new(oid.clone(), value)
            })
            .collect())
    }

    async fn get_next_table(&self, columns: &[Oid]) -> Result<Vec<Row>> {
        self.walks.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.fail_walk {
            return Err(Error::transport(message));
        }

        let mut cursors: Vec<(usize, Oid)> = columns.iter().cloned().enumerate().collect();
        let mut rows = Vec::new();

        while !cursors.is_empty() {
            let mut row = Vec::new();
            let mut advanced = Vec::new();

            for (column, previous) in cursors {
                if let Some(vb) = self.next_after(&previous)
                    && vb.oid.starts_with(&columns[column])
                {
                    advanced.push((column, vb.oid.clone()));
                    row.push(vb);
                }
            }

            if !row.is_empty() {
                rows.push(row);
            }
            cursors = advanced;
        }

        Ok(rows)
    }
}
