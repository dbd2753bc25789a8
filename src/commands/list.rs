use std::path::PathBuf;

use console::style;
use miette::Result;
use stencil::registry::{loader, Registry};

pub fn run(registry: Option<String>) -> Result<()> {
    let registry = match registry {
        Some(path) => loader::load_registry(PathBuf::from(path).as_path())?,
        None => Registry::builtin(),
    };

    println!("{}", style("Registered template sets:").bold());
    for id in registry.ids() {
        let set = registry.get(id).expect("id came from the registry");
        println!(
            "  {} {} ({} files)",
            style("\u{2022}").dim(),
            style(id).cyan(),
            set.files.len()
        );
    }

    Ok(())
}
