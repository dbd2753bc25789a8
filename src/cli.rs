use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stencil",
    about = "Scaffold runnable microservice skeletons from template sets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new service
    New {
        /// Service name (prompted for when omitted)
        #[arg(short, long)]
        service: Option<String>,

        /// Domain label the service lives under (prompted for when omitted)
        #[arg(short, long)]
        domain: Option<String>,

        /// Port the generated service listens on (default: 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Template set to scaffold from
        #[arg(short, long, default_value = "minimal")]
        template: String,

        /// Target directory
        #[arg(short, long, default_value = ".")]
        output: String,

        /// Replace files that already exist in the target directory
        #[arg(long)]
        overwrite: bool,

        /// Registry manifest with additional template sets
        #[arg(short, long)]
        registry: Option<String>,

        /// Show the render plan without writing anything
        #[arg(long)]
        dry_run: bool,
    },

    /// List registered template sets
    List {
        /// Registry manifest with additional template sets
        #[arg(short, long)]
        registry: Option<String>,
    },

    /// Validate a registry manifest
    Check {
        /// Path to the manifest to check
        manifest: String,
    },
}
