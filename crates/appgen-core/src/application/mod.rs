//! Application layer for appgen.
//!
//! - **Scaffolder**: the single use case, "generate an app's boilerplate"
//! - **Ports**: traits for the filesystem and the template renderer

pub mod ports;
pub mod scaffolder;

pub use ports::{Filesystem, TemplateRenderer};
pub use scaffolder::{DEFAULT_OUTPUT_DIR, Scaffolder};
