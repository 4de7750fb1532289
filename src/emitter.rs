use crate::error::CodegenError;
use crate::naming::{keyword_const_name, keyword_type_name, property_const_name, setter_name};
use crate::spec::{PropertySpec, Spec};
use std::collections::HashSet;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

pub const PROPERTIES_FILE: &str = "properties_gen.rs";
pub const KEYWORDS_FILE: &str = "keywords_gen.rs";
pub const SETTERS_FILE: &str = "setters_gen.rs";

const RUNTIME_MODULE: &str = "css";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitOptions {
    pub out_dir: PathBuf,
    /// Module the artifacts belong to; `css` means inside the runtime crate.
    pub module: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitSummary {
    pub out_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub properties: usize,
    pub keyword_types: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArtifactKind {
    Properties,
    Keywords,
    Setters,
}

impl ArtifactKind {
    const ALL: [ArtifactKind; 3] = [
        ArtifactKind::Properties,
        ArtifactKind::Keywords,
        ArtifactKind::Setters,
    ];

    fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Properties => PROPERTIES_FILE,
            ArtifactKind::Keywords => KEYWORDS_FILE,
            ArtifactKind::Setters => SETTERS_FILE,
        }
    }

    fn label(self) -> &'static str {
        match self {
            ArtifactKind::Properties => "properties",
            ArtifactKind::Keywords => "keywords",
            ArtifactKind::Setters => "setters",
        }
    }

    fn render(self, spec: &Spec, module: &str, generated_at: &str) -> String {
        match self {
            ArtifactKind::Properties => render_properties(spec, module, generated_at),
            ArtifactKind::Keywords => render_keywords(spec, module, generated_at),
            ArtifactKind::Setters => render_setters(spec, module, generated_at),
        }
    }
}

/// Writes all three artifacts into `options.out_dir`, in order.
///
/// A failure on one artifact leaves those written before it in place.
pub fn emit(spec: &Spec, options: &EmitOptions) -> Result<EmitSummary, CodegenError> {
    validate_module_name(&options.module)?;

    fs::create_dir_all(&options.out_dir).map_err(|source| CodegenError::CreateDir {
        path: options.out_dir.clone(),
        source,
    })?;

    let generated_at = generation_timestamp();
    let mut files = Vec::with_capacity(ArtifactKind::ALL.len());

    for kind in ArtifactKind::ALL {
        let source = kind.render(spec, &options.module, &generated_at);
        check_source(kind, &source)?;
        let path = options.out_dir.join(kind.file_name());
        write_artifact(&path, &source)?;
        tracing::debug!("wrote {}", path.display());
        files.push(path);
    }

    Ok(EmitSummary {
        out_dir: options.out_dir.clone(),
        files,
        properties: spec.properties.len(),
        keyword_types: keyword_properties(spec).count(),
    })
}

pub fn render_properties(spec: &Spec, module: &str, generated_at: &str) -> String {
    let mut out = header(&spec.version, generated_at);
    let _ = writeln!(out, "//! Property constants for CSS properties in `{}`.\n", module);
    out.push_str("#![allow(non_upper_case_globals)]\n\n");
    let _ = writeln!(out, "use {}::Property;\n", runtime_path(module));

    for property in &spec.properties {
        let _ = writeln!(
            out,
            "pub const {}: Property = Property::new({:?});",
            property_const_name(&property.name),
            property.name
        );
    }

    out
}

pub fn render_keywords(spec: &Spec, module: &str, generated_at: &str) -> String {
    let mut out = header(&spec.version, generated_at);
    let _ = writeln!(
        out,
        "//! Keyword types and constants for CSS property values in `{}`.\n",
        module
    );
    out.push_str("#![allow(non_upper_case_globals)]\n");

    for property in keyword_properties(spec) {
        let type_name = keyword_type_name(&property.name);
        out.push('\n');
        let _ = writeln!(
            out,
            "/// {} represents values for the {} property.",
            type_name, property.name
        );
        out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]\n");
        let _ = writeln!(out, "pub struct {}(&'static str);\n", type_name);
        let _ = writeln!(out, "impl {} {{", type_name);
        out.push_str("    pub const fn as_str(self) -> &'static str {\n");
        out.push_str("        self.0\n");
        out.push_str("    }\n");
        out.push_str("}\n\n");
        let _ = writeln!(out, "impl std::fmt::Display for {} {{", type_name);
        out.push_str("    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {\n");
        out.push_str("        f.write_str(self.0)\n");
        out.push_str("    }\n");
        out.push_str("}\n\n");

        for keyword in &property.keywords {
            let _ = writeln!(
                out,
                "pub const {}: {} = {}({:?});",
                keyword_const_name(&property.name, keyword),
                type_name,
                type_name,
                keyword
            );
        }
    }

    out
}

pub fn render_setters(spec: &Spec, module: &str, generated_at: &str) -> String {
    let mut out = header(&spec.version, generated_at);
    let _ = writeln!(out, "//! Type-safe setter functions for CSS properties in `{}`.\n", module);
    out.push_str("#![allow(non_snake_case)]\n\n");
    let _ = writeln!(out, "use super::{}::*;", module_stem(KEYWORDS_FILE));
    let _ = writeln!(out, "use super::{}::*;", module_stem(PROPERTIES_FILE));
    let _ = writeln!(out, "use {}::{{Decl, Keyword, set}};", runtime_path(module));

    for property in keyword_properties(spec) {
        let setter = setter_name(&property.name);
        out.push('\n');
        let _ = writeln!(
            out,
            "/// {} creates a declaration for the {} property.",
            setter, property.name
        );
        let _ = writeln!(
            out,
            "pub fn {}(v: {}) -> Decl {{",
            setter,
            keyword_type_name(&property.name)
        );
        let _ = writeln!(
            out,
            "    set({}, Keyword::new(v.as_str()))",
            property_const_name(&property.name)
        );
        out.push_str("}\n");
    }

    out
}

fn keyword_properties(spec: &Spec) -> impl Iterator<Item = &PropertySpec> {
    spec.properties
        .iter()
        .filter(|property| !property.keywords.is_empty())
}

fn header(version: &str, generated_at: &str) -> String {
    let version = version.replace(['\r', '\n'], " ");
    format!(
        "// Code generated by cssgen; DO NOT EDIT.\n// Source: spec version {} at {}\n\n",
        version, generated_at
    )
}

fn runtime_path(module: &str) -> &'static str {
    if module == RUNTIME_MODULE {
        "crate"
    } else {
        RUNTIME_MODULE
    }
}

fn module_stem(file_name: &str) -> &str {
    file_name.strip_suffix(".rs").unwrap_or(file_name)
}

fn generation_timestamp() -> String {
    chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
}

fn validate_module_name(module: &str) -> Result<(), CodegenError> {
    syn::parse_str::<syn::Ident>(module)
        .map(|_| ())
        .map_err(|_| CodegenError::InvalidModule(module.to_string()))
}

fn check_source(kind: ArtifactKind, source: &str) -> Result<(), CodegenError> {
    let file = syn::parse_file(source).map_err(|source| CodegenError::Format {
        artifact: kind.label(),
        source,
    })?;

    let mut seen = HashSet::new();
    for item in &file.items {
        let ident = match item {
            syn::Item::Const(item) => &item.ident,
            syn::Item::Struct(item) => &item.ident,
            syn::Item::Fn(item) => &item.sig.ident,
            _ => continue,
        };
        let name = ident.to_string();
        if !seen.insert(name.clone()) {
            return Err(CodegenError::DuplicateItem {
                artifact: kind.label(),
                name,
            });
        }
    }
    Ok(())
}

fn write_artifact(path: &Path, source: &str) -> Result<(), CodegenError> {
    fs::write(path, source).map_err(|source| CodegenError::Write {
        path: path.to_path_buf(),
        source,
    })
}
