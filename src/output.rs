use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

/// Where a generated calendar goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Stdout,
    File(PathBuf),
}

impl Target {
    /// `-` means stdout, anything else is a path. No argument falls back to `default`.
    pub fn resolve(arg: Option<&str>, default: PathBuf) -> Self {
        match arg {
            Some("-") => Target::Stdout,
            Some(path) => Target::File(PathBuf::from(shellexpand::tilde(path).into_owned())),
            None => Target::File(default),
        }
    }

    /// Write `contents` as-is, creating parent directories for a file target.
    pub fn write(&self, contents: &str) -> Result<()> {
        match self {
            Target::Stdout => {
                let mut stdout = std::io::stdout().lock();
                stdout
                    .write_all(contents.as_bytes())
                    .and_then(|_| stdout.flush())
                    .context("Failed to write to stdout")
            }
            Target::File(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("Failed to create directory {}", parent.display())
                    })?;
                }
                std::fs::write(path, contents)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), bytes = contents.len(), "Wrote file");
                Ok(())
            }
        }
    }
}
