//! CLI command implementations.

pub mod verify;

pub use verify::VerifyCommand;
