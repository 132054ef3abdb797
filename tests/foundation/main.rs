//! Integration tests for Layer 0: Foundation
//!
//! Tests for token values, kinds, and error types.

mod values;
