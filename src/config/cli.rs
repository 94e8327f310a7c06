use crate::utils::error::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Writes rendered schedules to a file, or to stdout when no path is set.
#[derive(Debug, Clone, Default)]
pub struct LocalOutput {
    path: Option<String>,
}

impl LocalOutput {
    pub fn new(path: Option<String>) -> Self {
        Self { path }
    }

    /// Returns where the output went.
    pub fn write(&self, contents: &str) -> Result<String> {
        match &self.path {
            Some(path) => {
                let full_path = Path::new(path);
                if let Some(parent) = full_path.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::write(full_path, contents)?;
                Ok(path.clone())
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", contents)?;
                Ok("stdout".to_string())
            }
        }
    }
}
