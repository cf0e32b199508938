// src/core/mod.rs

// The `mod.rs` file acts as the root of the `core` module, exposing its
// sub-modules to the crate.

/// Contains the data structures shared by the checkers, such as `Report`,
/// `Finding`, `Status` and certificate metadata.
pub mod models;

/// The static, read-only security-header policy table and its lookup
/// helper.
pub mod policy;

/// Houses the checking logic: the TLS certificate probe, the HTTP
/// security-header check and the orchestrator that assembles the report.
pub mod checker;
