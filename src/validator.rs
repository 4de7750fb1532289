use crate::error::ValidateError;
use crate::extractor::extract_keywords;
use crate::loader::load_spec_file;
use crate::mdn::{self, MdnData};
use crate::spec::{Spec, Status};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub const NOT_FOUND_IN_MDN: &str = "NOT_FOUND_IN_MDN";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub property: String,
    pub status: String,
    pub exists: bool,
    pub mdn_keywords: Vec<String>,
    pub spec_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub extra_keywords: Vec<String>,
    /// Whether the MDN syntax contains the spec keywords joined by ` | `.
    pub syntax_match: bool,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.exists && self.missing_keywords.is_empty() && self.extra_keywords.is_empty()
    }
}

pub struct Validator {
    mdn: MdnData,
    spec: Spec,
}

impl Validator {
    pub fn new(mdn: MdnData, spec: Spec) -> Self {
        Self { mdn, spec }
    }

    pub fn load(mdn_root: &Path, spec_path: &Path) -> Result<Self, ValidateError> {
        let mdn = MdnData::load(&mdn::resolve_dir(mdn_root))?;
        tracing::info!(
            "loaded {} properties and {} syntax definitions from MDN",
            mdn.properties.len(),
            mdn.syntaxes.len()
        );

        let spec = load_spec_file(spec_path)?;
        tracing::info!("loaded spec with {} properties", spec.properties.len());

        Ok(Self::new(mdn, spec))
    }

    pub fn validate(&self) -> Vec<ValidationResult> {
        self.spec
            .properties
            .iter()
            .map(|property| {
                let Some(mdn_property) = self.mdn.properties.get(&property.name) else {
                    return ValidationResult {
                        property: property.name.clone(),
                        status: NOT_FOUND_IN_MDN.to_string(),
                        exists: false,
                        mdn_keywords: Vec::new(),
                        spec_keywords: property.keywords.clone(),
                        missing_keywords: Vec::new(),
                        extra_keywords: Vec::new(),
                        syntax_match: false,
                    };
                };

                let mdn_keywords = extract_keywords(&mdn_property.syntax, &self.mdn.syntaxes);
                ValidationResult {
                    property: property.name.clone(),
                    status: mdn_property.status.clone(),
                    exists: true,
                    missing_keywords: difference(&mdn_keywords, &property.keywords),
                    extra_keywords: difference(&property.keywords, &mdn_keywords),
                    syntax_match: mdn_property
                        .syntax
                        .contains(&property.keywords.join(" | ")),
                    mdn_keywords,
                    spec_keywords: property.keywords.clone(),
                }
            })
            .collect()
    }

    /// Copy of the spec where every property found in MDN takes its keywords,
    /// syntax and status from MDN. Other properties pass through unchanged.
    pub fn updated_spec(&self) -> Spec {
        let properties = self
            .spec
            .properties
            .iter()
            .map(|property| {
                let mut updated = property.clone();
                if let Some(mdn_property) = self.mdn.properties.get(&property.name) {
                    updated.keywords = extract_keywords(&mdn_property.syntax, &self.mdn.syntaxes);
                    updated.syntax = mdn_property.syntax.clone();
                    updated.status = Status::from(mdn_property.status.as_str());
                }
                updated
            })
            .collect();

        Spec {
            version: self.spec.version.clone(),
            properties,
        }
    }
}

fn difference(a: &[String], b: &[String]) -> Vec<String> {
    let b = b.iter().collect::<BTreeSet<_>>();
    a.iter().filter(|item| !b.contains(item)).cloned().collect()
}

pub fn render_report(results: &[ValidationResult], verbose: bool) -> String {
    let mut out = String::new();
    out.push_str("=== MDN Validation Results ===\n\n");

    for result in results {
        let _ = writeln!(out, "Property: {}", result.property);
        let _ = writeln!(out, "  Exists in MDN: {}", result.exists);

        if result.exists {
            let _ = writeln!(out, "  Status: {}", result.status);
            let _ = writeln!(
                out,
                "  Spec keywords ({}): {}",
                result.spec_keywords.len(),
                format_list(&result.spec_keywords)
            );
            let _ = writeln!(
                out,
                "  MDN keywords ({}): {}",
                result.mdn_keywords.len(),
                format_list(&result.mdn_keywords)
            );
            if verbose {
                let _ = writeln!(out, "  Syntax match: {}", result.syntax_match);
            }
            if !result.missing_keywords.is_empty() {
                let _ = writeln!(
                    out,
                    "  ⚠️  Missing keywords: {}",
                    format_list(&result.missing_keywords)
                );
            }
            if !result.extra_keywords.is_empty() {
                let _ = writeln!(
                    out,
                    "  ⚠️  Extra keywords: {}",
                    format_list(&result.extra_keywords)
                );
            }
            if result.is_clean() {
                out.push_str("  ✅ Keywords match MDN\n");
            }
        } else {
            out.push_str("  ❌ Property not found in MDN data\n");
        }

        out.push('\n');
    }

    let clean = results.iter().filter(|result| result.is_clean()).count();
    let _ = writeln!(
        out,
        "{} of {} properties match MDN",
        clean,
        results.len()
    );

    out
}

fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}

pub fn write_spec(spec: &Spec, path: &Path) -> Result<(), ValidateError> {
    let mut json = serde_json::to_string_pretty(spec).map_err(ValidateError::Serialize)?;
    json.push('\n');
    fs::write(path, json).map_err(|source| ValidateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{NOT_FOUND_IN_MDN, Validator, render_report, write_spec};
    use crate::error::ValidateError;
    use crate::loader::load_spec_file;
    use crate::mdn::{MdnData, MdnProperty};
    use crate::spec::{PropertySpec, Spec, Status};
    use serde_json::Map;
    use std::fs;

    fn mdn_property(syntax: &str, status: &str) -> MdnProperty {
        MdnProperty {
            syntax: syntax.to_string(),
            status: status.to_string(),
            metadata: Map::new(),
        }
    }

    fn property(name: &str, keywords: &[&str]) -> PropertySpec {
        PropertySpec {
            name: name.to_string(),
            keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
            syntax: keywords.join(" | "),
            status: Status::Standard,
        }
    }

    fn validator() -> Validator {
        let mut mdn = MdnData::default();
        mdn.properties.insert(
            "background-repeat".to_string(),
            mdn_property("repeat | no-repeat", "standard"),
        );
        mdn.properties.insert(
            "display".to_string(),
            mdn_property("<display-box> | block", "standard"),
        );
        mdn.properties
            .insert("zoom".to_string(), mdn_property("normal | reset", "nonstandard"));
        mdn.syntaxes
            .insert("display-box".to_string(), "contents | none".to_string());

        let spec = Spec {
            version: "1.0".to_string(),
            properties: vec![
                property("background-repeat", &["repeat"]),
                property("display", &["block", "contents", "none"]),
                property("made-up", &["foo"]),
                property("zoom", &["normal", "reset", "legacy"]),
            ],
        };

        Validator::new(mdn, spec)
    }

    #[test]
    fn reports_missing_keywords() {
        let results = validator().validate();
        let repeat = &results[0];
        assert!(repeat.exists);
        assert_eq!(repeat.missing_keywords, vec!["no-repeat"]);
        assert!(repeat.extra_keywords.is_empty());
        assert!(repeat.syntax_match);
    }

    #[test]
    fn expanded_syntax_matches() {
        let results = validator().validate();
        assert!(results[1].is_clean());
        assert_eq!(results[1].mdn_keywords, vec!["block", "contents", "none"]);
    }

    #[test]
    fn flags_unknown_properties() {
        let results = validator().validate();
        let made_up = &results[2];
        assert!(!made_up.exists);
        assert_eq!(made_up.status, NOT_FOUND_IN_MDN);
    }

    #[test]
    fn reports_extra_keywords() {
        let results = validator().validate();
        assert_eq!(results[3].extra_keywords, vec!["legacy"]);
        assert_eq!(results[3].status, "nonstandard");
    }

    #[test]
    fn report_text() {
        let report = render_report(&validator().validate(), false);
        assert!(report.starts_with("=== MDN Validation Results ===\n"));
        assert!(report.contains("Property: background-repeat\n"));
        assert!(report.contains("  ⚠️  Missing keywords: [no-repeat]\n"));
        assert!(report.contains("  ❌ Property not found in MDN data\n"));
        assert!(report.contains("  ✅ Keywords match MDN\n"));
        assert!(report.contains("1 of 4 properties match MDN"));
        assert!(!report.contains("Syntax match"));
    }

    #[test]
    fn update_overwrites_matched_properties() {
        let updated = validator().updated_spec();
        assert_eq!(updated.version, "1.0");
        assert_eq!(
            updated.properties[0].keywords,
            vec!["no-repeat", "repeat"]
        );
        assert_eq!(updated.properties[0].syntax, "repeat | no-repeat");
        assert_eq!(updated.properties[2], property("made-up", &["foo"]));
        assert_eq!(
            updated.properties[3].status,
            Status::Other("nonstandard".to_string())
        );
    }

    #[test]
    fn writes_and_reloads_updated_spec() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("spec.json");
        let updated = validator().updated_spec();

        write_spec(&updated, &path).expect("spec should be written");
        let text = fs::read_to_string(&path).expect("spec exists");
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"version\": \"1.0\""));

        let reloaded = load_spec_file(&path).expect("spec should reload");
        assert_eq!(reloaded, updated);
    }

    #[test]
    fn load_reads_nested_css_dir() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(dir.path().join("css")).expect("create css dir");
        fs::write(
            dir.path().join("css/properties.json"),
            r#"{"background-repeat": {"syntax": "repeat | no-repeat", "status": "standard"}}"#,
        )
        .expect("write properties");
        let spec_path = dir.path().join("spec.json");
        fs::write(
            &spec_path,
            r#"{"version": "1", "properties": [{"name": "background-repeat", "keywords": ["repeat"], "syntax": "repeat", "status": "standard"}]}"#,
        )
        .expect("write spec");

        let validator = Validator::load(dir.path(), &spec_path).expect("inputs should load");
        let results = validator.validate();
        assert_eq!(results[0].missing_keywords, vec!["no-repeat"]);
        assert!(results[0].extra_keywords.is_empty());
    }

    #[test]
    fn missing_mdn_data_is_fatal() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec_path = dir.path().join("spec.json");
        fs::write(&spec_path, r#"{"version": "1", "properties": []}"#).expect("write spec");

        let err = Validator::load(&dir.path().join("absent"), &spec_path)
            .err()
            .expect("MDN data is missing");
        assert!(matches!(err, ValidateError::Load(_)));
    }
}
