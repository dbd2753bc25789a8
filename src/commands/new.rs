use std::path::PathBuf;

use console::style;
use inquire::validator::Validation;
use miette::Result;
use stencil::error::StencilError;
use stencil::plan::{validate_identifier, ScaffoldRequest};
use stencil::registry::{loader, Registry};
use stencil::write::WriteStatus;
use stencil::{plan_scaffold, ScaffoldOptions};

#[allow(clippy::too_many_arguments)]
pub fn run(
    service: Option<String>,
    domain: Option<String>,
    port: Option<u16>,
    template: String,
    output: String,
    overwrite: bool,
    registry: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let registry = load(registry)?;

    let service = match service {
        Some(s) => s,
        None => prompt_identifier("Service name:")?,
    };
    let domain = match domain {
        Some(d) => d,
        None => prompt_identifier("Domain label:")?,
    };

    let options = ScaffoldOptions {
        request: ScaffoldRequest {
            service,
            domain,
            port,
            template_set: template,
        },
        target_dir: PathBuf::from(output),
        overwrite,
    };

    let plan = plan_scaffold(&registry, options)?;

    if dry_run {
        println!(
            "\n{} Dry run \u{2014} files that would be created in {}:",
            style("==>").cyan().bold(),
            style(plan.target_dir.display()).cyan()
        );
        for file in &plan.render_plan.files {
            println!(
                "  {} {}",
                style("create").green(),
                file.relative_path.display()
            );
        }
        println!(
            "\n{} Dry run \u{2014} no files written.",
            style("\u{2139}").blue().bold()
        );
        return Ok(());
    }

    let manifest = stencil::execute_scaffold(&plan);

    for entry in &manifest.entries {
        match &entry.status {
            WriteStatus::Written => {
                println!("  {} {}", style("create").green(), entry.path.display());
            }
            WriteStatus::SkippedExisting => {
                println!(
                    "  {} {} (already exists)",
                    style("skip  ").yellow(),
                    entry.path.display()
                );
            }
            WriteStatus::Failed(reason) => {
                println!(
                    "  {} {}: {}",
                    style("failed").red().bold(),
                    entry.path.display(),
                    reason
                );
            }
        }
    }

    println!(
        "\n{} written, {} skipped, {} failed",
        manifest.written(),
        manifest.skipped(),
        manifest.failed()
    );

    if manifest.is_clean() {
        println!(
            "{} Service scaffolded at {}",
            style("\u{2713}").green().bold(),
            style(plan.target_dir.display()).cyan()
        );
        Ok(())
    } else {
        // Partial output stays on disk; the manifest above names each path.
        std::process::exit(1);
    }
}

fn load(registry: Option<String>) -> Result<Registry> {
    match registry {
        Some(path) => Ok(loader::load_registry(PathBuf::from(path).as_path())?),
        None => Ok(Registry::builtin()),
    }
}

fn prompt_identifier(label: &str) -> Result<String> {
    let answer = inquire::Text::new(label)
        .with_validator(|input: &str| {
            if validate_identifier(input).is_ok() {
                Ok(Validation::Valid)
            } else {
                Ok(Validation::Invalid(
                    "must start with a letter and contain only letters, digits, '-' and '_'"
                        .into(),
                ))
            }
        })
        .prompt()
        .map_err(|_| StencilError::PromptCancelled)?;
    Ok(answer)
}
