//! What PRC needs from the host system.
//!
//! # Modules
//!
//! - [`catalog`] - Fixed tables of Python packages and external tools
//! - [`version`] - Python version parsing and comparison

pub mod catalog;
pub mod version;

pub use catalog::{
    PackageDescriptor, ToolDescriptor, EXTERNAL_TOOLS, OPTIONAL_PACKAGES, REQUIRED_PACKAGES,
};
pub use version::PythonVersion;
