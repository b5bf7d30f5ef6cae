use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{app_name::AppName, template::ArtifactKind};

/// Name of the empty folder created next to the generated files.
pub const ASSETS_DIR: &str = "assets";

/// One generated file, ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    #[serde(skip)]
    pub content: String,
    pub bytes: usize,
}

impl OutputArtifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, content: String) -> Self {
        let bytes = content.len();
        Self {
            kind,
            path: path.into(),
            content,
            bytes,
        }
    }
}

/// Everything one invocation will create, computed before touching disk.
///
/// Pure data: the same name and base directory always produce an equal plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPlan {
    pub app_name: AppName,
    pub folder: PathBuf,
    pub assets: PathBuf,
    pub artifacts: Vec<OutputArtifact>,
}

impl GenerationPlan {
    /// Empty plan for `output_dir/app_name`; the folder keeps the name as typed.
    pub fn new(app_name: AppName, output_dir: impl AsRef<Path>) -> Self {
        let folder = output_dir.as_ref().join(app_name.as_str());
        let assets = folder.join(ASSETS_DIR);
        Self {
            app_name,
            folder,
            assets,
            artifacts: Vec::new(),
        }
    }

    /// Add a file named `<stem>.<ext>` inside the folder.
    pub fn add_artifact(&mut self, kind: ArtifactKind, stem: &str, content: String) {
        let path = self.folder.join(kind.file_name(stem));
        self.artifacts.push(OutputArtifact::new(kind, path, content));
    }

    /// Directories to create, parents first.
    pub fn directories(&self) -> [&Path; 2] {
        [self.folder.as_path(), self.assets.as_path()]
    }

    pub fn artifact(&self, kind: ArtifactKind) -> Option<&OutputArtifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }
}

/// What a successful `apply` did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub app_name: String,
    pub directories: Vec<PathBuf>,
    pub written: Vec<PathBuf>,
    /// Files that already existed and were replaced.
    pub overwritten: Vec<PathBuf>,
}

impl GenerationReport {
    /// `Generated <header> and <source>`
    pub fn summary(&self) -> String {
        let paths: Vec<String> = self
            .written
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        format!("Generated {}", paths.join(" and "))
    }
}
