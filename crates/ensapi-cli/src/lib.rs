//! # ensapi-cli: Build-Time OpenAPI Generator
//!
//! Renders the ENSApi OpenAPI document straight from the route registry.
//! No listener is opened and no handler runs, so the document can be
//! produced in CI or at build time.
//!
//! ```text
//! generate-openapi                          # pretty JSON on stdout
//! generate-openapi --compact                # single-line JSON
//! generate-openapi --format yaml -o api.yaml
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use ensapi_routes::openapi::{self, Format};
use ensapi_routes::{ApiDocumentation, RouteRegistry};

/// Generate the ENSApi OpenAPI document.
#[derive(Parser, Debug)]
#[command(name = "generate-openapi", version, about)]
pub struct GenerateArgs {
    /// Write the document to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output encoding.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Emit JSON without indentation. Has no effect on YAML.
    #[arg(long)]
    pub compact: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
}

impl GenerateArgs {
    pub fn render_format(&self) -> Format {
        match (self.format, self.compact) {
            (OutputFormat::Json, false) => Format::PrettyJson,
            (OutputFormat::Json, true) => Format::CompactJson,
            (OutputFormat::Yaml, _) => Format::Yaml,
        }
    }
}

/// Generate and render the published document for `registry`.
pub fn render_document(registry: &RouteRegistry, format: Format) -> anyhow::Result<String> {
    let document = openapi::generate(registry, &ApiDocumentation::published())
        .context("failed to generate the OpenAPI document")?;
    openapi::render(&document, format).context("failed to render the OpenAPI document")
}

/// Run the generator. The output file is only written once the whole
/// document has rendered, so a failed run never leaves a partial file.
pub fn run(args: &GenerateArgs, stdout: &mut impl Write) -> anyhow::Result<()> {
    if args.compact && args.format == OutputFormat::Yaml {
        tracing::warn!("--compact has no effect on YAML output");
    }

    let registry = RouteRegistry::new();
    let rendered = render_document(&registry, args.render_format())?;
    tracing::debug!(
        endpoints = registry.endpoints().len(),
        bytes = rendered.len(),
        "rendered OpenAPI document"
    );

    match &args.output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote OpenAPI document");
        }
        None => {
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> GenerateArgs {
        GenerateArgs::try_parse_from(std::iter::once("generate-openapi").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_to_pretty_json_on_stdout() {
        let args = parse(&[]);
        assert!(args.output.is_none());
        assert_eq!(args.render_format(), Format::PrettyJson);
    }

    #[test]
    fn format_flags_map_to_render_formats() {
        assert_eq!(parse(&["--compact"]).render_format(), Format::CompactJson);
        assert_eq!(parse(&["--format", "yaml"]).render_format(), Format::Yaml);
        assert_eq!(
            parse(&["--format", "yaml", "--compact"]).render_format(),
            Format::Yaml
        );
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(GenerateArgs::try_parse_from(["generate-openapi", "--format", "toml"]).is_err());
    }

    #[test]
    fn stdout_receives_the_document() {
        let mut out = Vec::new();
        run(&parse(&[]), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["info"]["title"], "ENSApi APIs");
        assert!(doc["paths"]["/api/resolve/records/{name}"]["get"].is_object());
    }

    #[test]
    fn compact_json_is_one_line() {
        let mut out = Vec::new();
        run(&parse(&["--compact"]), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.trim_end().lines().count(), 1);
    }

    #[test]
    fn output_file_gets_yaml_and_stdout_stays_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("openapi.yaml");
        let path_arg = path.to_str().unwrap();

        let mut out = Vec::new();
        run(&parse(&["--format", "yaml", "--output", path_arg]), &mut out).unwrap();
        assert!(out.is_empty());

        let doc: serde_yaml::Value =
            serde_yaml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["info"]["title"].as_str(), Some("ENSApi APIs"));
    }

    #[test]
    fn unwritable_output_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("openapi.json");
        let err = run(&parse(&["-o", path.to_str().unwrap()]), &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("failed to write"));
        assert!(!path.exists());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let registry = RouteRegistry::new();
        assert_eq!(
            render_document(&registry, Format::PrettyJson).unwrap(),
            render_document(&registry, Format::PrettyJson).unwrap()
        );
    }
}
