//! Appgen Core - ports and adapters for app boilerplate generation.
//!
//! This crate provides the domain and application layers for the `appgen`
//! tool, which writes a header/source pair for a new watch UI app.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            appgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application (Scaffolder)         │
//! │        plan → apply → report            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     Ports (Filesystem, Renderer)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    appgen-adapters (Infrastructure)     │
//! │  LocalFilesystem, SimpleRenderer, ...   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use appgen_core::prelude::*;
//!
//! # fn wire(templates: TemplateSet, renderer: Box<dyn TemplateRenderer>, fs: Box<dyn Filesystem>) -> AppgenResult<()> {
//! let scaffolder = Scaffolder::new(templates, renderer, fs);
//! let report = scaffolder.generate(&AppName::new("blink"), DEFAULT_OUTPUT_DIR)?;
//! println!("wrote {}", report.written.len());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        DEFAULT_OUTPUT_DIR, Scaffolder,
        ports::{Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        AppName, ArtifactKind, CaseVariants, GenerationPlan, GenerationReport, OutputArtifact,
        Template, TemplateSet,
    };
    pub use crate::error::{AppgenError, AppgenResult};
}
