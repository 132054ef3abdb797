//! Dialog action script parser.
//!
//! This crate turns a blob of line-oriented script text into a sequence
//! of [`Action`]s: one per line, each a command name plus ordered typed
//! arguments.
//!
//! # Architecture
//!
//! ```text
//! "let a = 81"
//!       │
//!       ▼
//! ┌─────────────────┐
//! │ LINE SPLITTER   │  → one line at a time, in source order
//! └─────────────────┘
//!       │
//!       ▼
//! ┌─────────────────┐
//! │ GOBBLERS        │  → bool → number → identifier → string → operator
//! └─────────────────┘
//!       │
//!       ▼
//! ┌─────────────────┐
//! │ ACTION          │  → Action { name: "let", args: [<i a> <o => <n 81>] }
//! └─────────────────┘
//! ```
//!
//! Each gobbler attempts to consume a maximal valid prefix of the
//! remaining line and reports how many characters it took; zero (or
//! `None`) means "no match, try the next alternative". The dispatch
//! order is fixed, so `true` is always a bool and `81` is always a
//! number, never identifiers.
//!
//! # Modules
//!
//! - [`gobble`] - Primitive prefix scanners
//! - [`action`] - Parsed command representation
//! - [`parser`] - Line splitting and action assembly

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod gobble;
pub mod parser;

pub use action::Action;
pub use parser::parse;
