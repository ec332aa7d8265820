//! Estimate documents and hand-off text.
//!
//! Turns the current selections into customer-facing output: a printable
//! XHTML estimate and a plain-text summary for messaging. Building and
//! rendering are pure; only [`Surface::present`] touches the filesystem.
//!
//! - [`estimate`]: joins selections with catalog metadata and prices them
//! - [`html`]: the printable document
//! - [`message`]: the chat hand-off text
//! - [`surface`]: where rendered documents land

pub mod error;
pub mod estimate;
pub mod html;
pub mod message;
pub mod surface;

pub use error::ReportError;
pub use estimate::{Estimate, EstimateInput, EstimateSection, build_estimate};
pub use html::render_html;
pub use message::handoff_message;
pub use surface::{DirectorySurface, Surface};
