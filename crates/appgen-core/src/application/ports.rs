//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the scaffolder needs from the outside world.
//! The `appgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{CaseVariants, Template};
use crate::error::AppgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `appgen_adapters::filesystem::LocalFilesystem` (production)
/// - `appgen_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Succeeds if it exists.
    fn create_dir_all(&self, path: &Path) -> AppgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> AppgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for template rendering.
///
/// Implemented by `appgen_adapters::renderer::SimpleRenderer`.
pub trait TemplateRenderer: Send + Sync {
    /// Fill a template's placeholders with the given case variants.
    fn render(&self, template: &Template, variants: &CaseVariants) -> AppgenResult<String>;
}
