//! Command implementations behind the `gn` binary.

pub mod commands;
