//! Common test utilities for book-query integration tests

#[allow(dead_code)]
pub mod logs;

#[allow(unused_imports)]
pub use logs::*;
