use std::path::Path;

use console::style;
use miette::Result;
use stencil::registry::{loader, Registry};

/// Validate a registry manifest by loading it into an empty registry, so the
/// same token-vocabulary and collision checks run that `new` would apply.
pub fn run(manifest: String) -> Result<()> {
    let mut registry = Registry::new();
    loader::load_into(&mut registry, Path::new(&manifest))?;

    let set_count = registry.ids().count();
    let file_count: usize = registry
        .ids()
        .filter_map(|id| registry.get(id))
        .map(|set| set.files.len())
        .sum();

    println!(
        "{} {} is valid: {} template sets, {} files",
        style("\u{2713}").green().bold(),
        style(&manifest).cyan(),
        set_count,
        file_count
    );

    Ok(())
}
