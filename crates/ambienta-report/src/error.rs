//! Error types for estimate rendering and presentation.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReportError {
    /// An estimate cannot be rendered without at least one selection.
    #[error("nothing selected yet, pick at least one room variant first")]
    EmptySelection,

    /// The output surface could not be prepared.
    #[error("output location '{path}' is unavailable: {source}")]
    SurfaceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the rendered document failed.
    #[error("could not write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// XML assembly error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// I/O error while assembling the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// Message suitable for direct display to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptySelection => self.to_string(),
            Self::SurfaceUnavailable { path, .. } => format!(
                "the output folder '{}' could not be opened, check the path and permissions",
                path.display()
            ),
            other => other.to_string(),
        }
    }
}
