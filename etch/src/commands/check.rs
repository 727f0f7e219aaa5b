use std::path::{Path, PathBuf};

use clap::Args;
use etch_codegen::pipeline::Scanner;
use etch_codegen_java::StructuredBuilder;
use etch_ir::GenerationRequest;
use etch_manifest::{EtchToml, Manifest, RoundsFile};
use eyre::{Result, bail};

use super::OrExit;
use crate::reports::{CheckReport, Report, RoundsInfo, TerminalOutput};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to etch.toml (defaults to ./etch.toml)
    #[arg(short, long, default_value = "etch.toml")]
    pub config: PathBuf,

    /// Also check a declaration feed
    #[arg(short, long)]
    pub rounds: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let etch_toml = EtchToml::open(&self.config).or_exit();
        let manifest = etch_toml.manifest();

        let mut report = check_manifest(&self.config, manifest);
        if let Some(path) = &self.rounds {
            let file = RoundsFile::open(path).or_exit();
            report.rounds = Some(summarize_rounds(&file, path, &manifest.generator.marker));
        }
        report.render(&mut TerminalOutput);

        if !report.is_valid() {
            bail!("{} is not valid", self.config.display());
        }
        Ok(())
    }
}

/// Build the structured class model once so identifier errors surface
/// before any round runs.
fn check_manifest(path: &Path, manifest: &Manifest) -> CheckReport {
    let template = &manifest.template;
    let request = GenerationRequest::new("", &template.class_name);
    let errors = match StructuredBuilder::new(template.clone()).build_class(&request) {
        Ok(_) => Vec::new(),
        Err(e) => vec![e.to_string()],
    };

    CheckReport {
        config_path: path.to_path_buf(),
        marker: manifest.generator.marker.clone(),
        strategy: manifest.generator.strategy,
        class_name: template.class_name.clone(),
        field_count: template.fields.len(),
        method_count: template.methods.len(),
        errors,
        rounds: None,
    }
}

fn summarize_rounds(file: &RoundsFile, path: &Path, marker: &str) -> RoundsInfo {
    let scanner = Scanner::new(marker);
    RoundsInfo {
        path: path.to_path_buf(),
        rounds: file.rounds.len(),
        declarations: file.declaration_count(),
        matching: file.rounds.iter().map(|round| scanner.scan(round).len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_default_template_is_valid() {
        let manifest = Manifest::from_str("[generator]\nmarker = \"a.Marker\"\n").unwrap();
        let report = check_manifest(Path::new("etch.toml"), &manifest);

        assert!(report.is_valid());
        assert_eq!(report.class_name, "AutoClazz");
        assert_eq!(report.field_count, 1);
        assert_eq!(report.method_count, 1);
    }

    #[test]
    fn test_reserved_field_name_is_reported() {
        let manifest = Manifest::from_str(
            r#"
[generator]
marker = "a.Marker"

[template]
class_name = "Generated"
fields = [{ name = "class", type = "int" }]
"#,
        )
        .unwrap();
        let report = check_manifest(Path::new("etch.toml"), &manifest);

        assert!(!report.is_valid());
        assert!(report.errors[0].contains("invalid field name 'class'"));
    }

    #[test]
    fn test_summarize_rounds() {
        let file = RoundsFile::from_str(
            r#"
[[rounds]]
declarations = [
  { marker = "a.Marker", namespace = "x" },
  { marker = "b.Marker", namespace = "y" },
]

[[rounds]]
declarations = []
"#,
        )
        .unwrap();
        let info = summarize_rounds(&file, Path::new("rounds.toml"), "a.Marker");

        assert_eq!(info.rounds, 2);
        assert_eq!(info.declarations, 2);
        assert_eq!(info.matching, 1);
    }
}
