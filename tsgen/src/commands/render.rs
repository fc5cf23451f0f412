use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Args;
use eyre::{Context, Result};
use tracing::info;
use tsgen_manifest::DocumentFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct RenderCommand {
    /// Path to the document (defaults to ./tsgen.toml)
    #[arg(short, long, default_value = "tsgen.toml")]
    pub config: PathBuf,

    /// Output file (overrides [output].path)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the rendered code instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let file = DocumentFile::open(&self.config).unwrap_or_exit();
        let document = file.document();
        let code = document.render().wrap_err("Failed to render document")?;

        let target = self
            .output
            .as_deref()
            .or(document.output.path.as_deref())
            .map(|path| resolve(file.path(), self.output.is_some(), path));

        match target {
            Some(path) if !self.dry_run => {
                write_output(&path, &code)?;
                info!(path = %path.display(), bytes = code.len(), "wrote rendered code");
                println!("Generated: {}", path.display());
            }
            _ => print!("{code}"),
        }
        Ok(())
    }
}

/// `[output].path` is relative to the document; `--output` to the working directory.
fn resolve(config: &Path, from_flag: bool, path: &Path) -> PathBuf {
    if from_flag || path.is_absolute() {
        return path.to_path_buf();
    }
    match config.parent() {
        Some(dir) => dir.join(path),
        None => path.to_path_buf(),
    }
}

fn write_output(path: &Path, code: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, code).wrap_err_with(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_resolve_relative_to_document() {
        let resolved = resolve(Path::new("api/tsgen.toml"), false, Path::new("out/api.ts"));
        assert_eq!(resolved, PathBuf::from("api/out/api.ts"));
    }

    #[test]
    fn test_resolve_flag_is_kept() {
        let resolved = resolve(Path::new("api/tsgen.toml"), true, Path::new("out/api.ts"));
        assert_eq!(resolved, PathBuf::from("out/api.ts"));
    }

    #[test]
    fn test_resolve_bare_document_name() {
        let resolved = resolve(Path::new("tsgen.toml"), false, Path::new("api.ts"));
        assert_eq!(resolved, PathBuf::from("api.ts"));
    }

    #[test]
    fn test_run_writes_output() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = dir.path().join("tsgen.toml");
        fs::write(
            &config,
            r#"
[output]
path = "src/generated/consts.ts"

[[elements]]
type = "const"
name = "answer"
value = 42
exported = true
"#,
        )
        .expect("Failed to write document");

        RenderCommand {
            config,
            output: None,
            dry_run: false,
        }
        .run()
        .expect("render failed");

        let written = fs::read_to_string(dir.path().join("src/generated/consts.ts"))
            .expect("output not written");
        assert_eq!(written, "export const answer = 42;\n");
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let config = dir.path().join("tsgen.toml");
        fs::write(
            &config,
            "[output]\npath = \"out.ts\"\n\n[[elements]]\ntype = \"type\"\nname = \"Id\"\nvalue = \"string\"\n",
        )
        .expect("Failed to write document");

        RenderCommand {
            config,
            output: None,
            dry_run: true,
        }
        .run()
        .expect("render failed");

        assert!(!dir.path().join("out.ts").exists());
    }
}
