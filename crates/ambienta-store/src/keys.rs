//! Record names used in the durable store.
//!
//! Keys double as file stems for the file-backed store, so they stay
//! lowercase ASCII with no separators beyond `_`.

/// JSON map of category key to selection.
pub const SELECTIONS: &str = "selections";

/// JSON `{"unlocked": bool}` export-gate flag.
pub const PAYMENT_UNLOCKED: &str = "payment_unlocked";

/// One-shot marker planted after checkout; consumed on next start.
pub const PAYMENT_PENDING: &str = "payment_pending";
