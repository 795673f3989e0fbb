//! Workflow integration tests
//!
//! One module per tool, driving the real binaries end to end.

pub mod dump;
