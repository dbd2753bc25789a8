use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, StencilError};
use crate::registry::{Registry, TemplateFile, TemplateSet};

const TEMPLATE_REF: &str = "TEMPLATE_REF::";

/// On-disk registry manifest: a JSON map of set ids to their output files.
///
/// A file value is either an inline template body or a `TEMPLATE_REF::<path>`
/// pointer to a template file next to the manifest.
#[derive(Debug, Deserialize)]
pub struct RegistryManifest {
    pub sets: BTreeMap<String, SetManifest>,
}

#[derive(Debug, Deserialize)]
pub struct SetManifest {
    pub files: BTreeMap<String, String>,
}

/// Load a manifest and register every set it declares.
///
/// Registration-time validation applies to loaded sets exactly as it does to
/// the embedded ones: unknown tokens and duplicate ids or paths are rejected
/// before the registry becomes visible to any planner.
pub fn load_into(registry: &mut Registry, manifest_path: &Path) -> Result<()> {
    let manifest = parse_manifest(manifest_path)?;
    let base_dir = manifest_path.parent().unwrap_or(Path::new("."));

    for (id, set) in manifest.sets {
        let mut files = Vec::with_capacity(set.files.len());
        for (path, value) in set.files {
            let body = match value.strip_prefix(TEMPLATE_REF) {
                Some(rel) => read_template_file(&base_dir.join(rel))?,
                None => value,
            };
            files.push(TemplateFile { path, body });
        }
        registry.register(TemplateSet::new(id, files))?;
    }

    Ok(())
}

/// Load a manifest into a fresh registry alongside the embedded sets.
pub fn load_registry(manifest_path: &Path) -> Result<Registry> {
    let mut registry = Registry::builtin();
    load_into(&mut registry, manifest_path)?;
    Ok(registry)
}

fn parse_manifest(path: &Path) -> Result<RegistryManifest> {
    if !path.exists() {
        return Err(StencilError::RegistryNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = std::fs::read_to_string(path).map_err(|e| StencilError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| StencilError::RegistryParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a referenced template body, rejecting binary content.
fn read_template_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| StencilError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })?;

    if !content_inspector::inspect(&bytes[..bytes.len().min(8192)]).is_text() {
        return Err(StencilError::BinaryTemplate {
            path: path.to_path_buf(),
        });
    }

    String::from_utf8(bytes).map_err(|_| StencilError::BinaryTemplate {
        path: path.to_path_buf(),
    })
}
