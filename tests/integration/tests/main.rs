//! End-to-End Integration Tests
//!
//! These tests drive the service binding, token conversion and token
//! exchange request crates together, the way an application wires them.

mod common;
mod concurrency;
mod conversion;
mod exchange_request;
