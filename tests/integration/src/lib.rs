//! End-to-end tests for the XSUAA token conversion crates live under `tests/`.
