mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::New {
            service,
            domain,
            port,
            template,
            output,
            overwrite,
            registry,
            dry_run,
        } => commands::new::run(
            service, domain, port, template, output, overwrite, registry, dry_run,
        ),
        Commands::List { registry } => commands::list::run(registry),
        Commands::Check { manifest } => commands::check::run(manifest),
    }
}
