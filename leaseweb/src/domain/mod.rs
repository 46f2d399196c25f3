//! Domain model
//!
//! Entities here are built fresh for each operation, either from a wire record
//! or from a configuration model, and every constructor enforces its invariants.

pub mod public_cloud;
