//! Command implementations for the `ntime` binary.

pub mod commands;
