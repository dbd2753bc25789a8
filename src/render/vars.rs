use std::collections::BTreeMap;

use crate::casing::CaseVariants;

/// Port substituted when the request leaves it unset.
pub const DEFAULT_PORT: u16 = 8000;

/// The fixed, closed placeholder vocabulary. Tokens outside this set are a
/// configuration error in a template, never a pass-through.
pub const VOCABULARY: &[&str] = &[
    "ServiceName",
    "serviceName",
    "service-name",
    "service_name",
    "domain",
    "port",
];

/// Resolved placeholder values for one scaffold request, immutable once built.
#[derive(Debug, Clone)]
pub struct VariableMapping {
    values: BTreeMap<String, String>,
}

impl VariableMapping {
    /// Build the mapping from the derived case variants, the verbatim domain
    /// label, and the (defaulted) port.
    pub fn build(variants: &CaseVariants, domain: &str, port: Option<u16>) -> Self {
        let port = port.unwrap_or(DEFAULT_PORT);

        let mut values = BTreeMap::new();
        values.insert("ServiceName".to_string(), variants.pascal.clone());
        values.insert("serviceName".to_string(), variants.camel.clone());
        values.insert("service-name".to_string(), variants.kebab.clone());
        values.insert("service_name".to_string(), variants.snake.clone());
        values.insert("domain".to_string(), domain.to_string());
        values.insert("port".to_string(), port.to_string());

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}
