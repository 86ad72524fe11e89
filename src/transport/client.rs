//! [`SnmpTransport`] backed by an `async-snmp` client.

use std::net::SocketAddr;
use std::time::Duration;

use async_snmp::client::Retry;
use async_snmp::{Auth, Client, Oid, VarBind};

use super::{Row, SnmpTransport};
use crate::config::{Credentials, SnmpConfig};
use crate::error::{Error, Result};

/// Transport that sends real SNMP requests over UDP.
pub struct ClientTransport {
    client: Client,
    target: SocketAddr,
}

impl ClientTransport {
    /// Resolve the target and open a client session for it.
    ///
    /// No request is sent yet; for SNMPv3 engine discovery happens with
    /// the first request.
    pub async fn connect(config: &SnmpConfig) -> Result<Self> {
        let target = config.target_addr()?;

        tracing::debug!(target: "nelmon::transport", { snmp.target = %target, snmp.version = %config.version(), snmp.timeout = ?config.timeout, snmp.retries = config.retries }, "connecting");

        let client = Client::builder(target.to_string(), auth(&config.credentials))
            .timeout(config.timeout)
            .retry(Retry::fixed(config.retries, Duration::ZERO))
            .connect()
            .await
            .map_err(Error::transport)?;

        Ok(Self { client, target })
    }

    /// Address the requests are sent to.
    pub fn target(&self) -> SocketAddr {
        self.target
    }
}

impl SnmpTransport for ClientTransport {
    async fn get(&self, oids: &[Oid]) -> Result<Vec<VarBind>> {
        tracing::debug!(target: "nelmon::transport", { snmp.target = %self.target, snmp.oid_count = oids.len() }, "GET");
        self.client.get_many(oids).await.map_err(Error::transport)
    }

    async fn get_next_table(&self, columns: &[Oid]) -> Result<Vec<Row>> {
        // (column position, last OID seen) for every column still inside its prefix
        let mut cursors: Vec<(usize, Oid)> = columns.iter().cloned().enumerate().collect();
        let mut rows = Vec::new();

        while !cursors.is_empty() {
            let request: Vec<Oid> = cursors.iter().map(|(_, oid)| oid.clone()).collect();
            let response = self
                .client
                .get_next_many(&request)
                .await
                .map_err(Error::transport)?;

            if response.len() != request.len() {
                return Err(Error::transport(format!(
                    "malformed response from {}: {} varbinds for {} requested",
                    self.target,
                    response.len(),
                    request.len()
                )));
            }

            let mut row = Vec::with_capacity(response.len());
            let mut advanced = Vec::with_capacity(cursors.len());

            for ((column, previous), vb) in cursors.into_iter().zip(response) {
                if vb.value.is_exception() || !vb.oid.starts_with(&columns[column]) {
                    continue;
                }
                if vb.oid <= previous {
                    return Err(Error::transport(format!(
                        "walk aborted for {}: non-increasing OID {} after {}",
                        self.target, vb.oid, previous
                    )));
                }
                advanced.push((column, vb.oid.clone()));
                row.push(vb);
            }

            if !row.is_empty() {
                tracing::trace!(target: "nelmon::transport", { snmp.target = %self.target, snmp.columns = row.len() }, "table row");
                rows.push(row);
            }
            cursors = advanced;
        }

        tracing::debug!(target: "nelmon::transport", { snmp.target = %self.target, snmp.rows = rows.len() }, "table walk complete");
        Ok(rows)
    }
}

fn auth(credentials: &Credentials) -> Auth {
    match credentials {
        Credentials::Community(community) => Auth::v2c(community.as_str()),
        Credentials::Usm {
            username,
            auth: (auth_protocol, auth_password),
            privacy,
        } => {
            let mut builder =
                Auth::usm(username.as_str()).auth((*auth_protocol).into(), auth_password.as_str());
            if let Some((priv_protocol, priv_password)) = privacy {
                builder = builder.privacy((*priv_protocol).into(), priv_password.as_str());
            }
            builder.into()
        }
    }
}
