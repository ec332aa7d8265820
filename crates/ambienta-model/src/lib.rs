pub mod catalog;
pub mod cost;
pub mod selection;

pub use catalog::{MaterialLine, RoomCategory, Variant};
pub use cost::{CostBreakdown, CostItem};
pub use selection::{PaymentState, Selection, SelectionMap};
