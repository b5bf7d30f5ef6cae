//! Scaffolder - the app generation use case.
//!
//! Workflow:
//! 1. Plan: derive case variants, render both templates, compute paths
//! 2. Apply: create the app folder and its `assets` folder, write header
//!    then source
//!
//! There is no rollback. If the source write fails the header stays on disk.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{AppName, ArtifactKind, GenerationPlan, GenerationReport, TemplateSet},
    error::AppgenResult,
};

/// Base directory used when the caller does not pick one.
pub const DEFAULT_OUTPUT_DIR: &str = "src/apps";

/// Main scaffolding service.
pub struct Scaffolder {
    templates: TemplateSet,
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl Scaffolder {
    /// Create a new scaffolder with the given templates and adapters.
    pub fn new(
        templates: TemplateSet,
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            templates,
            renderer,
            filesystem,
        }
    }

    /// Generate the header/source pair for `app_name` under `output_dir`.
    #[instrument(
        skip_all,
        fields(app = %app_name, output_dir = %output_dir.as_ref().display())
    )]
    pub fn generate(
        &self,
        app_name: &AppName,
        output_dir: impl AsRef<Path>,
    ) -> AppgenResult<GenerationReport> {
        let plan = self.plan(app_name, output_dir)?;
        self.apply(&plan)
    }

    /// Compute folders and rendered files without touching the filesystem.
    pub fn plan(
        &self,
        app_name: &AppName,
        output_dir: impl AsRef<Path>,
    ) -> AppgenResult<GenerationPlan> {
        let variants = app_name.variants();
        debug!(
            lower = %variants.lower,
            upper = %variants.upper,
            capitalized = %variants.capitalized,
            "Case variants derived"
        );

        let mut plan = GenerationPlan::new(app_name.clone(), output_dir);
        for kind in ArtifactKind::ALL {
            let content = self.renderer.render(self.templates.get(kind), &variants)?;
            plan.add_artifact(kind, &variants.lower, content);
        }

        Ok(plan)
    }

    /// Materialise a plan: directories first, then files in plan order.
    #[instrument(skip_all, fields(folder = %plan.folder.display()))]
    pub fn apply(&self, plan: &GenerationPlan) -> AppgenResult<GenerationReport> {
        let mut report = GenerationReport {
            app_name: plan.app_name.to_string(),
            ..GenerationReport::default()
        };

        for dir in plan.directories() {
            self.filesystem.create_dir_all(dir)?;
            debug!(path = %dir.display(), "Directory ready");
            report.directories.push(dir.to_path_buf());
        }

        for artifact in &plan.artifacts {
            if self.filesystem.exists(&artifact.path) {
                debug!(path = %artifact.path.display(), "Overwriting existing file");
                report.overwritten.push(artifact.path.clone());
            }
            self.filesystem.write_file(&artifact.path, &artifact.content)?;
            debug!(
                kind = %artifact.kind,
                path = %artifact.path.display(),
                bytes = artifact.bytes,
                "File written"
            );
            report.written.push(artifact.path.clone());
        }

        info!(files = report.written.len(), "App generated");
        Ok(report)
    }
}
