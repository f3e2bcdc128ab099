//! Command implementations for the `wowarmory` binary.

pub mod character;
pub mod status;
