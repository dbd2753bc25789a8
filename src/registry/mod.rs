pub mod loader;

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use crate::error::{Result, StencilError};
use crate::render::{collect_tokens, VOCABULARY};

/// One output file of a template set: a relative path (which may itself
/// contain placeholder tokens) and the template body.
#[derive(Debug, Clone)]
pub struct TemplateFile {
    pub path: String,
    pub body: String,
}

/// A named, ordered collection of template files representing one scaffold
/// variant.
#[derive(Debug, Clone)]
pub struct TemplateSet {
    pub id: String,
    pub files: Vec<TemplateFile>,
}

impl TemplateSet {
    pub fn new(id: impl Into<String>, files: Vec<TemplateFile>) -> Self {
        Self {
            id: id.into(),
            files,
        }
    }

    /// Check the set's structural invariants: every token in every path and
    /// body belongs to the recognized vocabulary, and no two entries share a
    /// pre-substitution output path.
    fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for file in &self.files {
            if !seen.insert(file.path.clone()) {
                return Err(StencilError::PathCollision {
                    path: PathBuf::from(&file.path),
                });
            }

            let path_context = format!("{}:{} (path)", self.id, file.path);
            let body_context = format!("{}:{}", self.id, file.path);
            for token in collect_tokens(&file.path, &path_context)? {
                check_vocabulary(&token, &path_context)?;
            }
            for token in collect_tokens(&file.body, &body_context)? {
                check_vocabulary(&token, &body_context)?;
            }
        }
        Ok(())
    }
}

fn check_vocabulary(token: &str, context: &str) -> Result<()> {
    if VOCABULARY.contains(&token) {
        Ok(())
    } else {
        Err(StencilError::UnresolvedPlaceholder {
            token: token.to_string(),
            context: context.to_string(),
        })
    }
}

/// The template set registry. Populated during startup, read-only once
/// scaffolding begins; planners only ever take `&Registry`.
#[derive(Debug, Default)]
pub struct Registry {
    sets: BTreeMap<String, TemplateSet>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with the embedded template sets.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for set in builtin_sets() {
            registry
                .register(set)
                .expect("embedded template sets must be valid");
        }
        registry
    }

    pub fn register(&mut self, set: TemplateSet) -> Result<()> {
        set.validate()?;
        if self.sets.contains_key(&set.id) {
            return Err(StencilError::DuplicateTemplateSet { id: set.id });
        }
        self.sets.insert(set.id.clone(), set);
        Ok(())
    }

    pub fn lookup(&self, id: &str) -> Result<&TemplateSet> {
        self.sets
            .get(id)
            .ok_or_else(|| StencilError::TemplateSetNotFound { id: id.to_string() })
    }

    /// Registered set ids, in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn get(&self, id: &str) -> Option<&TemplateSet> {
        self.sets.get(id)
    }
}

fn tf(path: &str, body: &str) -> TemplateFile {
    TemplateFile {
        path: path.to_string(),
        body: body.to_string(),
    }
}

/// The three embedded scaffold variants. Bodies are opaque payloads; the
/// engine only ever substitutes into them.
fn builtin_sets() -> Vec<TemplateSet> {
    vec![
        TemplateSet::new(
            "health-only",
            vec![tf(
                "{{domain}}/{{service-name}}/src/index.mjs",
                include_str!("../../templates/health-only/index.mjs"),
            )],
        ),
        TemplateSet::new(
            "minimal",
            vec![
                tf(
                    "{{domain}}/{{service-name}}/src/index.mjs",
                    include_str!("../../templates/minimal/index.mjs"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/package.json",
                    include_str!("../../templates/minimal/package.json"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/Dockerfile",
                    include_str!("../../templates/minimal/Dockerfile"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/.gitignore",
                    include_str!("../../templates/minimal/gitignore"),
                ),
            ],
        ),
        TemplateSet::new(
            "production",
            vec![
                tf(
                    "{{domain}}/{{service-name}}/src/index.mjs",
                    include_str!("../../templates/production/index.mjs"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/package.json",
                    include_str!("../../templates/production/package.json"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/Dockerfile",
                    include_str!("../../templates/production/Dockerfile"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/.gitignore",
                    include_str!("../../templates/minimal/gitignore"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/.env.example",
                    include_str!("../../templates/production/env.example"),
                ),
                tf(
                    "{{domain}}/{{service-name}}/README.md",
                    include_str!("../../templates/production/README.md"),
                ),
            ],
        ),
    ]
}
