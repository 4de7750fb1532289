use crate::error::LoadError;
use crate::extractor::extract_keywords;
use crate::mdn::{self, MdnData};
use crate::spec::{PropertySpec, Spec, Status};
use std::fs;
use std::path::Path;

pub const MDN_VERSION: &str = "mdn-latest";

const SPEC_FILE: &str = "spec.json";

/// Loads a spec from a canonical JSON file, a directory holding `spec.json`,
/// or an MDN data directory holding `properties.json`.
pub fn load_spec(path: &Path) -> Result<Spec, LoadError> {
    let metadata = fs::metadata(path).map_err(|source| LoadError::Access {
        path: path.to_path_buf(),
        source,
    })?;

    if metadata.is_dir() {
        if mdn::is_mdn_dir(path) {
            return load_spec_from_mdn(path);
        }
        return load_spec_file(&path.join(SPEC_FILE));
    }

    load_spec_file(path)
}

pub fn load_spec_file(path: &Path) -> Result<Spec, LoadError> {
    let spec: Spec = mdn::read_json(path)?;
    tracing::debug!(
        properties = spec.properties.len(),
        version = %spec.version,
        "loaded spec {}",
        path.display()
    );
    Ok(spec)
}

pub fn load_spec_from_mdn(dir: &Path) -> Result<Spec, LoadError> {
    let data = MdnData::load(dir)?;
    Ok(spec_from_mdn(&data))
}

/// Converts MDN data into a spec. Vendor-prefixed (`-webkit-*`) and custom
/// (`--*`) properties are skipped.
pub fn spec_from_mdn(data: &MdnData) -> Spec {
    let mut properties = data
        .properties
        .iter()
        .filter(|(name, _)| !name.starts_with('-'))
        .map(|(name, property)| PropertySpec {
            name: name.clone(),
            keywords: extract_keywords(&property.syntax, &data.syntaxes),
            syntax: property.syntax.clone(),
            status: Status::from(property.status.as_str()),
        })
        .collect::<Vec<_>>();
    properties.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::info!(
        properties = properties.len(),
        skipped = data.properties.len() - properties.len(),
        "derived spec from MDN data"
    );

    Spec {
        version: MDN_VERSION.to_string(),
        properties,
    }
}
