//! REPL, CLI, and session state for Dialact.
//!
//! This crate provides:
//! - [`Session`] - Symbol table built from `let` actions
//! - [`Repl`] - Interactive read-parse-print loop
//! - [`serialize`] - Binding persistence via `MessagePack`
//!
//! The session is the parser's external collaborator: it consumes parsed
//! actions and interprets the `let` binding shape, but is not part of
//! the grammar itself.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod repl;
pub mod serialize;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
