use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ComposeError {
    #[error("nothing selected yet, pick at least one room variant first")]
    EmptySelection,

    #[error("failed to encode mosaic: {source}")]
    Encode {
        #[from]
        source: image::ImageError,
    },
}

/// Tile lookup failures. These never leave the engine: the resolver chain
/// falls through to the placeholder, and a chain that still fails only costs
/// that one slot its tile.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("no image found for {key}")]
    NotFound { key: String },

    #[error("image for {key} at {path} could not be decoded: {source}")]
    Unreadable {
        key: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
