//! Generate a project from a named template.
//!
//! Responsibility: resolve the template, hand the descriptor to the core
//! scaffold service, and display results. No generation logic lives here.

use tracing::{info, instrument};

use jsforge_adapters::{JsonTemplateLoader, LocalFilesystem};
use jsforge_core::{
    application::{ApplicationError, ScaffoldService, ScaffoldSummary, ports::TemplateLoader},
    error::JsforgeError,
};

use crate::{
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    reporter::ConsoleReporter,
};

pub const MISSING_TEMPLATE: &str = "Need template as first and only argument!";
pub const NEXT_STEPS: &str = "Next, copy your project to your development directory. \
                              Then run \"npm install\" and \"jspm install\".";

/// Execute one generation run.
///
/// 1. Reject an empty template name
/// 2. Check `templates/<name>.json` exists, then parse it
/// 3. Scaffold into `generated/<projectName>/`, printing progress
/// 4. Print the completion banner and next steps
#[instrument(skip_all, fields(template = %template))]
pub fn execute(
    template: &str,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<ScaffoldSummary> {
    if template.is_empty() {
        return Err(CliError::Usage {
            message: MISSING_TEMPLATE.into(),
        });
    }
    if template.contains(['/', '\\']) {
        return Err(CliError::Usage {
            message: format!("Template name \"{template}\" must not contain path separators"),
        });
    }

    let loader = JsonTemplateLoader::new(&config.paths.templates_dir);
    if !loader.exists(template) {
        return Err(JsforgeError::from(ApplicationError::TemplateNotFound {
            name: template.into(),
            path: loader.template_path(template),
        })
        .into());
    }
    let descriptor = loader.load(template)?;

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let reporter = ConsoleReporter::new(output);
    let summary = service.scaffold(&descriptor, &config.scaffold_options(), &reporter)?;

    info!(
        run_id = %summary.run_id,
        started_at = %summary.started_at,
        classes = summary.classes,
        style_includes = summary.style_includes,
        assets = summary.assets_copied,
        "Project generated"
    );

    output.banner("Done!")?;
    output.banner(NEXT_STEPS)?;
    output.success(&format!(
        "{} ({} classes, {} style includes)",
        summary.project_root.display(),
        summary.classes,
        summary.style_includes
    ))?;

    Ok(summary)
}
