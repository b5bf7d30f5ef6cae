//! Generating an app: the only thing `appgen` does.
//!
//! Responsibility: wire the adapters into a `Scaffolder`, pick the output
//! directory and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use appgen_adapters::{LocalFilesystem, SimpleRenderer, lvgl_app};
use appgen_core::{
    application::Scaffolder,
    domain::{AppName, GenerationPlan, GenerationReport},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

/// Execute generation for `app_name`.
///
/// 1. Resolve the base directory (flag, then config)
/// 2. Early-exit with the plan if `--dry-run`
/// 3. Generate via `Scaffolder`
/// 4. Print the confirmation (or JSON report)
#[instrument(skip_all, fields(app = %app_name))]
pub fn execute(
    app_name: AppName,
    args: GenerateArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let output_dir = resolve_output_dir(args.output_dir, &config);
    debug!(output_dir = %output_dir.display(), "Output directory resolved");

    let scaffolder = Scaffolder::new(
        lvgl_app(),
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
    );

    if args.dry_run {
        let plan = scaffolder.plan(&app_name, &output_dir)?;
        return show_plan(&plan, &output);
    }

    let report = scaffolder.generate(&app_name, &output_dir)?;
    for path in &report.overwritten {
        info!(path = %path.display(), "Replaced existing file");
    }

    show_report(&report, &output)
}

/// `--output-dir` wins over the configured directory.
fn resolve_output_dir(flag: Option<PathBuf>, config: &AppConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.generator.output_dir.clone())
}

fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(report);
    }
    output
        .success(&report.summary())
        .with_cli_context(|| "writing confirmation")
}

fn show_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        return output.json(plan);
    }

    output.info(&format!(
        "Dry run: would generate '{}' in {}",
        plan.app_name,
        plan.folder.display()
    ))?;
    for dir in plan.directories() {
        output.info(&format!("  dir   {}", dir.display()))?;
    }
    for artifact in &plan.artifacts {
        output.info(&format!(
            "  file  {} ({} bytes)",
            artifact.path.display(),
            artifact.bytes
        ))?;
    }
    Ok(())
}
