use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use regex_lite::Regex;

use crate::casing::CaseVariants;
use crate::error::{Result, StencilError};
use crate::registry::Registry;
use crate::render::{render, VariableMapping};

/// Service and domain labels must start with a letter; the rest is the
/// identifier-safe class the case transformer understands.
const IDENTIFIER_PATTERN: &str = "^[a-zA-Z][a-zA-Z0-9_-]*$";

/// One scaffold invocation's parameters, owned by the CLI layer.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub service: String,
    pub domain: String,
    pub port: Option<u16>,
    pub template_set: String,
}

/// A file that would be created during scaffolding: fully resolved path,
/// fully rendered content.
#[derive(Debug, Clone)]
pub struct PlannedFile {
    pub relative_path: PathBuf,
    pub content: String,
}

/// The fully resolved, pre-write representation of one scaffold operation.
#[derive(Debug, Clone)]
pub struct RenderPlan {
    pub files: Vec<PlannedFile>,
}

/// Validate the request, resolve its template set, and render every path and
/// body into a [`RenderPlan`].
///
/// Planning is pure: it never touches the filesystem, and identical requests
/// against the same registry always produce identical plans. Any validation
/// or rendering failure aborts the whole plan.
pub fn plan(registry: &Registry, request: &ScaffoldRequest) -> Result<RenderPlan> {
    validate_identifier(&request.service)?;
    validate_identifier(&request.domain)?;
    if request.port == Some(0) {
        return Err(StencilError::InvalidPort { port: 0 });
    }

    let variants = CaseVariants::derive(&request.service)?;
    let vars = VariableMapping::build(&variants, &request.domain, request.port);

    let set = registry.lookup(&request.template_set)?;

    let mut files = Vec::with_capacity(set.files.len());
    let mut resolved_paths = BTreeSet::new();

    for file in &set.files {
        let path_context = format!("{}:{} (path)", set.id, file.path);
        let resolved = render(&file.path, &vars, &path_context)?;
        let relative_path = checked_relative(&resolved)?;

        if !resolved_paths.insert(relative_path.clone()) {
            return Err(StencilError::PathCollision {
                path: relative_path,
            });
        }

        let body_context = format!("{}:{}", set.id, file.path);
        let content = render(&file.body, &vars, &body_context)?;

        files.push(PlannedFile {
            relative_path,
            content,
        });
    }

    Ok(RenderPlan { files })
}

/// Check a service or domain label against the identifier-safe class.
pub fn validate_identifier(name: &str) -> Result<()> {
    let pattern = Regex::new(IDENTIFIER_PATTERN).expect("identifier pattern is valid");
    if pattern.is_match(name) {
        Ok(())
    } else {
        Err(StencilError::InvalidIdentifier {
            name: name.to_string(),
        })
    }
}

/// Reject resolved paths that are absolute or could escape the target
/// directory, and normalize away `.` segments so that paths naming the same
/// output file compare equal in the collision check.
fn checked_relative(resolved: &str) -> Result<PathBuf> {
    let path = Path::new(resolved);
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(StencilError::UnsafePath {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(StencilError::UnsafePath {
            path: path.to_path_buf(),
        });
    }
    Ok(normalized)
}
