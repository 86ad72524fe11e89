//! Shared test infrastructure for nelmon.
//!
//! Provides an in-memory [`MockTransport`], an in-process SNMP agent
//! ([`TestAgent`]) and MIB fixtures.

// Not every test file uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod agent;
pub mod fixtures;
pub mod handler;
pub mod mock;

pub use agent::TestAgent;
pub use fixtures::{Interface, interface_table, system_mib};
pub use handler::TestHandler;
pub use mock::MockTransport;
