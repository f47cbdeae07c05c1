use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ProvisionError, Result};

/// Source text of the relay-side transform, shipped as a standalone script.
#[derive(Debug, Clone)]
pub struct TransformScript {
    path: PathBuf,
    code: String,
}

impl TransformScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let code = std::fs::read_to_string(&path).map_err(|err| ProvisionError::Artifact {
            path: path.clone(),
            reason: err.to_string(),
        })?;

        debug!("Loaded transform script {} ({} bytes)", path.display(), code.len());
        Self::from_source(path, code)
    }

    /// The relay sandbox evaluates the script as-is and has no module system,
    /// so empty scripts and scripts with export statements are refused.
    pub fn from_source(path: PathBuf, code: String) -> Result<Self> {
        if code.trim().is_empty() {
            return Err(ProvisionError::Artifact {
                path,
                reason: "script is empty".to_string(),
            });
        }

        if let Some((line_no, _)) = code
            .lines()
            .enumerate()
            .find(|(_, line)| line.split(';').any(is_export_statement))
        {
            return Err(ProvisionError::Artifact {
                path,
                reason: format!("export statement on line {}", line_no + 1),
            });
        }

        Ok(Self { path, code })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn code(&self) -> &str {
        &self.code
    }
}

/// `export ...`, `export{`, `export*` or a CommonJS `exports.`/`module.exports`
/// assignment at the start of a statement. Identifiers like `exportCount` pass.
fn is_export_statement(statement: &str) -> bool {
    let statement = statement.trim_start();

    if statement.starts_with("exports.") || statement.starts_with("module.exports") {
        return true;
    }

    match statement.strip_prefix("export") {
        Some(rest) => rest
            .chars()
            .next()
            .map_or(true, |c| c.is_whitespace() || c == '{' || c == '*'),
        None => false,
    }
}
