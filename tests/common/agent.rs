//! In-process SNMP agent.
//!
//! Binds an ephemeral localhost port, answers v2c requests for community
//! `public` and shuts down when dropped.

use crate::common::handler::TestHandler;

use async_snmp::{Agent, Oid, Value, oid};
use nelmon::SnmpConfig;
use nelmon::config::Credentials;
use std::collections::BTreeMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

pub const COMMUNITY: &str = "public";

pub struct TestAgent {
    addr: SocketAddr,
    handler: Arc<TestHandler>,
    cancel: CancellationToken,
    _task: JoinHandle<()>,
}

impl TestAgent {
    pub async fn with_data(initial: BTreeMap<Oid, Value>) -> Self {
        let handler = Arc::new(TestHandler::new(initial));
        let cancel = CancellationToken::new();

        let agent = Agent::builder()
            .bind("127.0.0.1:0")
            .community(COMMUNITY.as_bytes())
            .cancel(cancel.clone())
            .handler(oid!(1, 3, 6), handler.clone())
            .build()
            .await
            .expect("failed to build test agent");

        let addr = agent.local_addr();

        let task = tokio::spawn(async move {
            if let Err(e) = agent.run().await
                && !e.to_string().contains("cancelled")
            {
                eprintln!("TestAgent error: {}", e);
            }
        });

        Self {
            addr,
            handler,
            cancel,
            _task: task,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn handler(&self) -> &TestHandler {
        &self.handler
    }

    /// Session settings pointing at this agent.
    pub fn config(&self, community: &str) -> SnmpConfig {
        SnmpConfig {
            host: self.addr.ip().to_string(),
            port: self.addr.port(),
            credentials: Credentials::Community(community.to_string()),
            timeout: Duration::from_millis(500),
            retries: 0,
        }
    }
}

impl Drop for TestAgent {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
