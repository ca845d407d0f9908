//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `blocking.rs` - Ray blocking and captures for every piece kind
//! - `edge_cases.rs` - Board edges, pawns and unusual positions
//! - `apply.rs` - Executing validated moves
//! - `proptest.rs` - Property-based tests

mod apply;
