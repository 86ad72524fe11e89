//! SNMP transport seam.
//!
//! Plugins talk to devices only through [`SnmpTransport`]. The production
//! implementation is [`ClientTransport`], a thin wrapper over
//! [`async_snmp::Client`]; tests substitute an in-memory table.

mod client;

pub use client::ClientTransport;

use std::future::Future;

use async_snmp::{Oid, VarBind};

use crate::error::Result;

/// One table row returned by [`SnmpTransport::get_next_table`].
///
/// Holds one varbind per column that has not yet run past its prefix,
/// in the order the columns were requested.
pub type Row = Vec<VarBind>;

/// Request operations the plugins need from an SNMP agent.
pub trait SnmpTransport: Send + Sync {
    /// GET the given instances in a single request.
    ///
    /// Returns one varbind per requested OID, in request order. Missing
    /// instances come back as exception values, not as errors.
    fn get(&self, oids: &[Oid]) -> impl Future<Output = Result<Vec<VarBind>>> + Send;

    /// Walk several table columns side by side with GETNEXT.
    ///
    /// A column stops contributing once the agent answers with an OID
    /// outside its prefix or with an exception value. The walk finishes
    /// when every column has stopped.
    fn get_next_table(&self, columns: &[Oid]) -> impl Future<Output = Result<Vec<Row>>> + Send;
}
