//! Infrastructure adapters for appgen.
//!
//! This crate implements the ports defined in `appgen-core::application::ports`.
//! It contains all I/O and the built-in LVGL app templates.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use builtin_templates::lvgl_app;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
