use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum StencilError {
    #[error("Invalid service identifier: '{name}'")]
    #[diagnostic(help(
        "Identifiers must start with a letter and contain only letters, digits, '-' and '_'"
    ))]
    InvalidIdentifier { name: String },

    #[error("Invalid port: {port}")]
    #[diagnostic(help("Ports must be in the range 1..=65535"))]
    InvalidPort { port: i64 },

    #[error("Template set not found: '{id}'")]
    #[diagnostic(help("Run `stencil list` to see the registered template sets"))]
    TemplateSetNotFound { id: String },

    #[error("Template set '{id}' is already registered")]
    DuplicateTemplateSet { id: String },

    #[error("Unresolved placeholder '{token}' in {context}")]
    #[diagnostic(help(
        "Recognized placeholders: ServiceName, serviceName, service-name, service_name, domain, port"
    ))]
    UnresolvedPlaceholder { token: String, context: String },

    #[error("Two template files resolve to the same output path: {path}")]
    #[diagnostic(help("Rename one of the colliding entries in the template set"))]
    PathCollision { path: PathBuf },

    #[error("Output path escapes the target directory: {path}")]
    #[diagnostic(help("Template paths must be relative and must not contain '..' segments"))]
    UnsafePath { path: PathBuf },

    #[error("Registry manifest not found at {path}")]
    RegistryNotFound { path: PathBuf },

    #[error("Failed to parse registry manifest at {path}")]
    #[diagnostic(help("Check the JSON syntax of the manifest"))]
    RegistryParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Referenced template file is not text: {path}")]
    #[diagnostic(help("TEMPLATE_REF entries must point at UTF-8 text files"))]
    BinaryTemplate { path: PathBuf },

    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StencilError>;
