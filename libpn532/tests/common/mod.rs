// Shared fixtures for the integration tests. Leaf test modules include
// this file via `#[path = "../common/mod.rs"]`, so every aggregator crate
// sees the same canned wire data.
#![allow(dead_code)]

pub mod fixtures;
