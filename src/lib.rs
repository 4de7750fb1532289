pub mod config;
pub mod emitter;
pub mod error;
pub mod extractor;
pub mod loader;
pub mod mdn;
pub mod naming;
pub mod normalize;
pub mod spec;
pub mod validator;

use crate::emitter::{EmitOptions, EmitSummary};
use crate::error::{CliError, ValidateError};
use crate::normalize::NormalizeOptions;
use crate::validator::{Validator, render_report, write_spec};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const GENERATE_FLAGS: [&str; 6] = ["in", "out", "pkg", "strict", "allow-experimental", "config"];
const VALIDATE_FLAGS: [&str; 5] = ["mdn", "spec", "out", "update", "verbose"];

/// Generate type-safe CSS property, keyword and setter definitions.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "cssgen", version)]
pub struct GenerateArgs {
    /// Path to spec.json, a directory containing it, or an MDN data directory
    #[arg(long = "in", value_name = "PATH")]
    pub input: PathBuf,

    /// Output directory for generated files [default: ./cssgen]
    #[arg(long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Module name of the generated files [default: css]
    #[arg(long, value_name = "NAME")]
    pub pkg: Option<String>,

    /// Fail on unsupported syntax segments (accepted, not enforced yet)
    #[arg(long)]
    pub strict: bool,

    /// Include experimental properties
    #[arg(long)]
    pub allow_experimental: bool,

    /// TOML file with [generator] defaults
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Compare a CSS spec against MDN data.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "mdnvalidate", version)]
pub struct ValidateArgs {
    /// MDN data directory (holding properties.json, directly or under css/)
    #[arg(long, value_name = "DIR")]
    pub mdn: PathBuf,

    /// Canonical spec.json to check
    #[arg(long, value_name = "PATH")]
    pub spec: PathBuf,

    /// Where to write the updated spec [default: the --spec path]
    #[arg(long, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Verbose output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Rewrite the spec with keywords, syntax and status from MDN
    #[arg(long)]
    pub update: bool,
}

/// The report is kept even when writing the updated spec fails.
#[derive(Debug)]
pub struct ValidateOutcome {
    pub report: String,
    pub update: Option<Result<PathBuf, ValidateError>>,
}

pub fn parse_generate_args<I>(args: I) -> Result<GenerateArgs, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    GenerateArgs::try_parse_from(expand_go_style_flags(args, &GENERATE_FLAGS))
}

pub fn parse_validate_args<I>(args: I) -> Result<ValidateArgs, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    ValidateArgs::try_parse_from(expand_go_style_flags(args, &VALIDATE_FLAGS))
}

/// Rewrites `-name` and `-name=value` to `--name` forms for known long flags.
fn expand_go_style_flags<I>(args: I, long_flags: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    args.into_iter()
        .map(|arg| {
            if arg.starts_with("--") {
                return arg;
            }
            let Some(rest) = arg.strip_prefix('-') else {
                return arg;
            };
            let name = rest.split_once('=').map_or(rest, |(name, _)| name);
            if long_flags.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}

pub fn run_generate(args: &GenerateArgs) -> Result<EmitSummary, CliError> {
    let config = match &args.config {
        Some(path) => config::load(path)?,
        None => config::Config::default(),
    };
    let settings = config::resolve_generator(
        &config,
        args.out.clone(),
        args.pkg.clone(),
        args.strict,
        args.allow_experimental,
    );

    let spec = loader::load_spec(&args.input)?;
    let normalized = normalize::normalize(
        &spec,
        NormalizeOptions {
            allow_experimental: settings.allow_experimental,
            strict: settings.strict,
        },
    );
    tracing::info!(
        loaded = spec.properties.len(),
        kept = normalized.properties.len(),
        version = %normalized.version,
        "normalized spec"
    );

    let summary = emitter::emit(
        &normalized,
        &EmitOptions {
            out_dir: settings.out,
            module: settings.pkg,
        },
    )?;
    Ok(summary)
}

/// Validate and, with `update`, write the corrected spec.
///
/// Failing to read the inputs is an error; failing to write the update is
/// reported in [`ValidateOutcome::update`] next to the finished report.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidateOutcome, CliError> {
    let validator = Validator::load(&args.mdn, &args.spec)?;
    let results = validator.validate();
    let report = render_report(&results, args.verbose);

    let update = args.update.then(|| {
        let path = args.out.clone().unwrap_or_else(|| args.spec.clone());
        write_spec(&validator.updated_spec(), &path).map(|()| path)
    });

    Ok(ValidateOutcome { report, update })
}

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::{
        GenerateArgs, ValidateArgs, parse_generate_args, parse_validate_args, run_generate,
        run_validate,
    };
    use crate::error::{CliError, ValidateError};
    use crate::loader::load_spec_file;
    use std::fs;
    use std::path::PathBuf;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn parses_go_style_generator_flags() {
        let parsed = parse_generate_args(args(&[
            "cssgen",
            "-in",
            "spec.json",
            "-out=gen",
            "-pkg",
            "styles",
            "-allow-experimental",
            "-strict",
        ]))
        .expect("generator args should parse");

        assert_eq!(
            parsed,
            GenerateArgs {
                input: PathBuf::from("spec.json"),
                out: Some(PathBuf::from("gen")),
                pkg: Some("styles".to_string()),
                strict: true,
                allow_experimental: true,
                config: None,
                verbose: false,
            }
        );
    }

    #[test]
    fn parses_double_dash_flags() {
        let parsed = parse_generate_args(args(&["cssgen", "--in", "data", "-v"]))
            .expect("generator args should parse");
        assert_eq!(parsed.input, PathBuf::from("data"));
        assert_eq!(parsed.out, None);
        assert!(parsed.verbose);
    }

    #[test]
    fn generator_requires_input() {
        assert!(parse_generate_args(args(&["cssgen", "-out", "gen"])).is_err());
    }

    #[test]
    fn parses_validator_flags() {
        let parsed = parse_validate_args(args(&[
            "mdnvalidate",
            "-mdn",
            "/tmp/data",
            "-spec",
            "spec.json",
            "-v",
            "-update",
        ]))
        .expect("validator args should parse");

        assert_eq!(
            parsed,
            ValidateArgs {
                mdn: PathBuf::from("/tmp/data"),
                spec: PathBuf::from("spec.json"),
                out: None,
                verbose: true,
                update: true,
            }
        );
        assert!(parse_validate_args(args(&["mdnvalidate", "-mdn", "/tmp/data"])).is_err());
    }

    #[test]
    fn generates_background_repeat_from_mdn() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mdn_dir = dir.path().join("mdn");
        fs::create_dir_all(&mdn_dir).expect("create mdn dir");
        fs::write(
            mdn_dir.join("properties.json"),
            r#"{"background-repeat": {"syntax": "repeat-x | repeat-y | repeat | space | round | no-repeat", "status": "standard"}}"#,
        )
        .expect("write properties");
        let out_dir = dir.path().join("gen");

        let summary = run_generate(&GenerateArgs {
            input: mdn_dir,
            out: Some(out_dir.clone()),
            pkg: Some("styles".to_string()),
            strict: false,
            allow_experimental: false,
            config: None,
            verbose: false,
        })
        .expect("generation should succeed");
        assert_eq!(summary.keyword_types, 1);

        let keywords = fs::read_to_string(out_dir.join("keywords_gen.rs")).expect("keywords");
        assert!(keywords.contains("// Source: spec version mdn-latest at "));
        assert!(keywords.contains("pub struct BackgroundRepeatVal(&'static str);"));
        assert_eq!(keywords.matches("pub const BackgroundRepeatVal").count(), 6);

        let setters = fs::read_to_string(out_dir.join("setters_gen.rs")).expect("setters");
        assert!(setters.contains("pub fn SetBackgroundRepeat(v: BackgroundRepeatVal) -> Decl {"));
    }

    #[test]
    fn generates_bundled_sample_spec() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("spec/spec.json");

        let summary = run_generate(&GenerateArgs {
            input,
            out: Some(dir.path().to_path_buf()),
            pkg: None,
            strict: false,
            allow_experimental: false,
            config: None,
            verbose: false,
        })
        .expect("sample spec should generate");
        assert_eq!(summary.properties, 9);
        assert_eq!(summary.keyword_types, 8);

        let properties =
            fs::read_to_string(dir.path().join("properties_gen.rs")).expect("properties");
        assert!(properties.contains("pub const BackgroundColor: Property"));
        assert!(!properties.contains("BoxAlign"));
        assert!(!properties.contains("Zoom"));

        let keywords = fs::read_to_string(dir.path().join("keywords_gen.rs")).expect("keywords");
        assert!(keywords.contains("pub const FontWeightVal700: FontWeightVal"));
        assert!(!keywords.contains("BackgroundColorVal"));
    }

    #[test]
    fn config_file_supplies_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let spec_path = dir.path().join("spec.json");
        fs::write(
            &spec_path,
            r#"{"version": "1", "properties": [
                {"name": "zoom", "keywords": ["normal"], "syntax": "normal", "status": "experimental"}
            ]}"#,
        )
        .expect("write spec");
        let out_dir = dir.path().join("from-config");
        let config_path = dir.path().join("cssgen.toml");
        fs::write(
            &config_path,
            format!(
                "[generator]\nout = {:?}\nallow_experimental = true\n",
                out_dir.display().to_string()
            ),
        )
        .expect("write config");

        let summary = run_generate(&GenerateArgs {
            input: spec_path,
            out: None,
            pkg: None,
            strict: false,
            allow_experimental: false,
            config: Some(config_path),
            verbose: false,
        })
        .expect("generation should succeed");

        assert_eq!(summary.properties, 1);
        let properties =
            fs::read_to_string(out_dir.join("properties_gen.rs")).expect("properties");
        assert!(properties.contains("use crate::Property;"));
        assert!(properties.contains("pub const Zoom: Property = Property::new(\"zoom\");"));
    }

    #[test]
    fn load_failure_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out_dir = dir.path().join("gen");
        let err = run_generate(&GenerateArgs {
            input: dir.path().join("missing.json"),
            out: Some(out_dir.clone()),
            pkg: None,
            strict: false,
            allow_experimental: false,
            config: None,
            verbose: false,
        })
        .expect_err("input is missing");

        assert!(matches!(err, CliError::Load(_)));
        assert!(err.to_string().starts_with("loading spec: "));
        assert!(!out_dir.exists());
    }

    #[test]
    fn validates_and_updates_spec() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mdn_dir = dir.path().join("mdn");
        fs::create_dir_all(&mdn_dir).expect("create mdn dir");
        fs::write(
            mdn_dir.join("properties.json"),
            r#"{"background-repeat": {"syntax": "<repeat-style>", "status": "standard"}}"#,
        )
        .expect("write properties");
        fs::write(
            mdn_dir.join("syntaxes.json"),
            r#"{"repeat-style": {"syntax": "repeat | no-repeat"}}"#,
        )
        .expect("write syntaxes");
        let spec_path = dir.path().join("spec.json");
        fs::write(
            &spec_path,
            r#"{"version": "1", "properties": [{"name": "background-repeat", "keywords": ["repeat"], "syntax": "repeat", "status": "standard"}]}"#,
        )
        .expect("write spec");

        let outcome = run_validate(&ValidateArgs {
            mdn: mdn_dir,
            spec: spec_path.clone(),
            out: None,
            verbose: false,
            update: true,
        })
        .expect("validation should run");

        assert!(outcome.report.contains("Missing keywords: [no-repeat]"));
        assert!(!outcome.report.contains("Extra keywords"));
        let written = outcome
            .update
            .expect("update requested")
            .expect("spec should be written");
        assert_eq!(written, spec_path);

        let updated = load_spec_file(&spec_path).expect("updated spec");
        assert_eq!(updated.properties[0].keywords, vec!["no-repeat", "repeat"]);
        assert_eq!(updated.properties[0].syntax, "<repeat-style>");
    }

    #[test]
    fn keeps_report_when_update_write_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(
            dir.path().join("properties.json"),
            r#"{"display": {"syntax": "block | none", "status": "standard"}}"#,
        )
        .expect("write properties");
        let spec_path = dir.path().join("spec.json");
        fs::write(
            &spec_path,
            r#"{"version": "1", "properties": [{"name": "display", "keywords": ["block"], "syntax": "block", "status": "standard"}]}"#,
        )
        .expect("write spec");
        let blocked = dir.path().join("blocked");
        fs::create_dir(&blocked).expect("create blocking dir");

        let outcome = run_validate(&ValidateArgs {
            mdn: dir.path().to_path_buf(),
            spec: spec_path.clone(),
            out: Some(blocked),
            verbose: false,
            update: true,
        })
        .expect("inputs load");

        assert!(outcome.report.contains("Missing keywords: [none]"));
        assert!(matches!(
            outcome.update,
            Some(Err(ValidateError::Write { .. }))
        ));
        let unchanged = load_spec_file(&spec_path).expect("spec still readable");
        assert_eq!(unchanged.properties[0].keywords, vec!["block"]);
    }
}
