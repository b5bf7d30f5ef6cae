//! Domain layer: names, templates and generation plans.
//!
//! Pure data and pure functions. Nothing here touches the filesystem.

pub mod app_name;
pub mod plan;
pub mod template;

pub use app_name::{
    AppName, CaseVariants, PLACEHOLDER_CAPITALIZED, PLACEHOLDER_LOWER, PLACEHOLDER_UPPER,
    capitalize_first,
};
pub use plan::{ASSETS_DIR, GenerationPlan, GenerationReport, OutputArtifact};
pub use template::{ArtifactKind, Template, TemplateSet};
