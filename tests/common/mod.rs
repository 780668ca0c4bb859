//! Common test infrastructure
//!
//! This module provides a fake Wafrn API server and the fixture pages it
//! serves. Tests should only import from this module, not from internal
//! submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::{FakeWafrn, TestServer};
//!
//! #[tokio::test]
//! async fn test_scroll() {
//!     let server = TestServer::spawn(FakeWafrn::with_fixtures()).await;
//!     let client = server.client();
//! }
//! ```

mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use constants::*;
pub use server::{FakeWafrn, RecordedRequest, TestServer, V3Behavior};
