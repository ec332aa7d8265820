//! Randomized mosaic previews from room selections.
//!
//! The pipeline per mosaic: permute the selected category keys, plan a
//! near-square grid, resolve each key to a tile image through a fallback
//! chain, composite scaled tiles onto a canvas and encode it as PNG.
//!
//! - **layout**: pure grid/fit geometry, no image data
//! - **shuffle**: the randomness seam (thread RNG or seeded)
//! - **resolve**: directory-convention lookup with placeholder fallback
//! - **glyphs**: embedded pixel face for placeholder labels
//! - **compose**: the batch driver and PNG encoding

pub mod compose;
pub mod error;
pub mod glyphs;
pub mod layout;
pub mod resolve;
pub mod shuffle;

pub use compose::{ComposeOptions, Composer, Composition};
pub use error::{ComposeError, ResolveError};
pub use layout::{FittedRect, MosaicPlan, TileSlot, fit_rect, grid_dims, plan_mosaic};
pub use resolve::{
    DirectoryResolver, EXTENSION_ORDER, PlaceholderResolver, ResolverChain, TileResolver,
    color_for_key, placeholder_tile,
};
pub use shuffle::{SeededShuffle, ShuffleSource, ThreadShuffle};
