use crate::spec::{PropertySpec, Spec, Status};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    pub allow_experimental: bool,
    /// Accepted and passed along; no check is enforced yet.
    pub strict: bool,
}

/// Filters properties by status and canonicalizes names and keyword sets.
///
/// Deprecated properties are always dropped, experimental ones unless
/// `allow_experimental` is set. Malformed entries are coerced, never rejected.
pub fn normalize(spec: &Spec, options: NormalizeOptions) -> Spec {
    if options.strict {
        tracing::debug!("strict mode requested; no syntax checks are enforced");
    }

    let mut properties = spec
        .properties
        .iter()
        .filter(|property| is_included(&property.status, options.allow_experimental))
        .map(normalize_property)
        .collect::<Vec<_>>();
    properties.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!(
        kept = properties.len(),
        dropped = spec.properties.len() - properties.len(),
        "normalized spec"
    );

    Spec {
        version: spec.version.clone(),
        properties,
    }
}

fn is_included(status: &Status, allow_experimental: bool) -> bool {
    match status {
        Status::Deprecated => false,
        Status::Experimental => allow_experimental,
        Status::Standard | Status::Other(_) => true,
    }
}

fn normalize_property(property: &PropertySpec) -> PropertySpec {
    PropertySpec {
        name: normalize_name(&property.name),
        keywords: normalize_keywords(&property.keywords),
        syntax: property.syntax.clone(),
        status: property.status.clone(),
    }
}

pub fn normalize_name(name: &str) -> String {
    name.to_lowercase().replace('_', "-")
}

pub fn normalize_keywords(keywords: &[String]) -> Vec<String> {
    keywords
        .iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
