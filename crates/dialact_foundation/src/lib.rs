//! Core types for Dialact.
//!
//! This crate provides:
//! - [`Value`] - The tagged token value produced by the parser
//! - [`Kind`] - Tag descriptors for the five token variants
//! - [`Error`] - Error types with source context
//!
//! Everything here is an immutable value object; there is no shared or
//! global state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use types::Kind;
pub use value::Value;
