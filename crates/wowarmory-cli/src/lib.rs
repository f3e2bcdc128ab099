//! wowarmory-cli — command implementations, configuration and output for
//! the `wowarmory` binary. Exposed as a library for integration testing.

pub mod commands;
pub mod config;
pub mod output;
