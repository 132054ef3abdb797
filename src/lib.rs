//! Dialact - Dialog action script parser
//!
//! This crate re-exports all layers of the Dialact system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: dialact_runtime    — Session, REPL, CLI, serialization
//! Layer 1: dialact_parser     — Gobblers, Action, line parser
//! Layer 0: dialact_foundation — Core types (Value, Kind, Error)
//! ```

pub use dialact_foundation as foundation;
pub use dialact_parser as parser;
pub use dialact_runtime as runtime;
