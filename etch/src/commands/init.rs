use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Args;
use etch_manifest::{DEFAULT_CLASS_NAME, DEFAULT_DOC};
use eyre::{Context, Result, bail};

/// Marker written into new configurations.
const STARTER_MARKER: &str = "com.bert.annotations.CusAnnotation";

#[derive(Args)]
pub struct InitCommand {
    /// Directory to write etch.toml and rounds.toml into
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite existing files
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let files = [
            ("etch.toml", starter_etch_toml()),
            ("rounds.toml", starter_rounds_toml()),
        ];

        if !self.force {
            for (name, _) in &files {
                let path = self.output.join(name);
                if path.exists() {
                    bail!(
                        "{} already exists (use --force to overwrite)",
                        path.display()
                    );
                }
            }
        }

        fs::create_dir_all(&self.output)
            .wrap_err_with(|| format!("Failed to create {}", self.output.display()))?;
        for (name, content) in &files {
            write_file(&self.output.join(name), content)?;
            println!("  + {}", name);
        }

        println!();
        println!("Next: etch run -c {}", self.output.join("etch.toml").display());
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).wrap_err_with(|| format!("Failed to write {}", path.display()))
}

fn starter_etch_toml() -> String {
    format!(
        r#"[generator]
marker = "{marker}"
strategy = "structured"

[template]
class_name = "{class_name}"
doc = "{doc}"
modifiers = ["public", "final"]

[[template.fields]]
name = "age"
type = "int"
modifiers = ["private"]

[[template.methods]]
name = "getAge"
returns = "void"
modifiers = ["private"]
body = []
"#,
        marker = STARTER_MARKER,
        class_name = DEFAULT_CLASS_NAME,
        doc = DEFAULT_DOC,
    )
}

fn starter_rounds_toml() -> String {
    format!(
        r#"[[rounds]]
declarations = [
  {{ marker = "{marker}", namespace = "com.example", element = "MainActivity" }},
]
"#,
        marker = STARTER_MARKER,
    )
}
