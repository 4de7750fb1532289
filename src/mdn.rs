use crate::error::LoadError;
use crate::extractor::SyntaxDictionary;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROPERTIES_FILE: &str = "properties.json";
pub const SYNTAXES_FILE: &str = "syntaxes.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MdnProperty {
    #[serde(default)]
    pub syntax: String,
    #[serde(default)]
    pub status: String,
    /// `inherited`, `initial`, `groups`, `appliesto` and friends; their shapes
    /// vary between strings, arrays and booleans and nothing reads them.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MdnSyntax {
    #[serde(default)]
    pub syntax: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MdnData {
    pub properties: BTreeMap<String, MdnProperty>,
    pub syntaxes: SyntaxDictionary,
}

impl MdnData {
    pub fn load(dir: &Path) -> Result<Self, LoadError> {
        let properties: BTreeMap<String, MdnProperty> = read_json(&dir.join(PROPERTIES_FILE))?;
        let syntaxes = load_syntaxes(&dir.join(SYNTAXES_FILE));

        tracing::debug!(
            properties = properties.len(),
            syntaxes = syntaxes.len(),
            dir = %dir.display(),
            "loaded MDN data"
        );

        Ok(Self {
            properties,
            syntaxes,
        })
    }
}

pub fn is_mdn_dir(dir: &Path) -> bool {
    dir.join(PROPERTIES_FILE).is_file()
}

/// Locates the MDN data inside `root`: either `root/css` (the layout of the
/// `mdn-data` package) or `root` itself.
pub fn resolve_dir(root: &Path) -> PathBuf {
    let nested = root.join("css");
    if is_mdn_dir(&nested) {
        nested
    } else {
        root.to_path_buf()
    }
}

fn load_syntaxes(path: &Path) -> SyntaxDictionary {
    let Ok(text) = fs::read_to_string(path) else {
        return SyntaxDictionary::new();
    };

    match serde_json::from_str::<BTreeMap<String, MdnSyntax>>(&text) {
        Ok(syntaxes) => syntaxes
            .into_iter()
            .map(|(name, entry)| (name, entry.syntax))
            .collect(),
        Err(err) => {
            tracing::warn!("cannot parse {}: {}", path.display(), err);
            SyntaxDictionary::new()
        }
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{MdnData, resolve_dir};
    use crate::error::LoadError;
    use std::fs;

    #[test]
    fn ignores_metadata_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("properties.json"),
            r#"{
                "display": {
                    "syntax": "block | inline",
                    "status": "standard",
                    "inherited": false,
                    "initial": ["inline"],
                    "groups": ["CSS Display"],
                    "mdn_url": "https://developer.mozilla.org/docs/Web/CSS/display"
                }
            }"#,
        )
        .expect("write properties");

        let data = MdnData::load(dir.path()).expect("MDN data should load");
        let display = &data.properties["display"];
        assert_eq!(display.syntax, "block | inline");
        assert_eq!(display.status, "standard");
        assert!(display.metadata.contains_key("groups"));
        assert!(data.syntaxes.is_empty());
    }

    #[test]
    fn loads_syntax_dictionary() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("properties.json"), "{}").expect("write properties");
        fs::write(
            dir.path().join("syntaxes.json"),
            r#"{"display-box": {"syntax": "contents | none"}}"#,
        )
        .expect("write syntaxes");

        let data = MdnData::load(dir.path()).expect("MDN data should load");
        assert_eq!(data.syntaxes["display-box"], "contents | none");
    }

    #[test]
    fn broken_syntaxes_fall_back_to_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("properties.json"), "{}").expect("write properties");
        fs::write(dir.path().join("syntaxes.json"), "{ not json").expect("write syntaxes");

        let data = MdnData::load(dir.path()).expect("MDN data should load");
        assert!(data.syntaxes.is_empty());
    }

    #[test]
    fn broken_properties_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("properties.json"), "[1, 2]").expect("write properties");

        let err = MdnData::load(dir.path()).expect_err("array is not a property map");
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn prefers_nested_css_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(resolve_dir(dir.path()), dir.path());

        fs::create_dir_all(dir.path().join("css")).expect("create css dir");
        fs::write(dir.path().join("css/properties.json"), "{}").expect("write properties");
        assert_eq!(resolve_dir(dir.path()), dir.path().join("css"));
    }
}
