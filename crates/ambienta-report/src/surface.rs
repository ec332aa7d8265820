//! Presentation surfaces for the rendered estimate.
//!
//! A [`Surface`] is where a finished document lands. The file-based surface
//! writes atomically (temp file + rename) so an interrupted export never
//! leaves a half-written estimate at the final path.

use std::fs::{self, File};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use crate::error::ReportError;

/// Somewhere a rendered document can be presented. Returns the location the
/// caller can open or share.
pub trait Surface {
    fn present(&self, file_stem: &str, html: &str) -> Result<PathBuf, ReportError>;
}

/// Writes documents as `<stem>.html` files into a target directory, creating
/// it on first use.
#[derive(Debug, Clone)]
pub struct DirectorySurface {
    dir: PathBuf,
}

impl DirectorySurface {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Surface for DirectorySurface {
    fn present(&self, file_stem: &str, html: &str) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.dir).map_err(|source| ReportError::SurfaceUnavailable {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.dir.join(format!("{file_stem}.html"));
        let temp_path = self.dir.join(format!("{file_stem}.html.tmp"));

        let write = |temp_path: &Path| -> std::io::Result<()> {
            let mut file = File::create(temp_path)?;
            file.write_all(html.as_bytes())?;
            file.sync_all()?;
            Ok(())
        };
        write(&temp_path).map_err(|source| ReportError::Write {
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, &path).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "estimate document written");
        Ok(path)
    }
}
