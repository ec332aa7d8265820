//! Payment gating for exports and hand-offs.
//!
//! The [`ExportGate`] decides whether cost figures may leave the
//! application. It starts locked, unlocks on a confirmed payment, and is
//! persisted so the unlock survives restarts. [`CheckoutClient`] opens the
//! paid checkout session, a one-shot marker record carries the "payment
//! initiated" fact across an application restart, and [`handoff_link`]
//! builds the WhatsApp URL used once the gate is open.

mod client;
mod error;
mod gate;
mod handoff;
mod signal;

pub use client::{CheckoutClient, CheckoutSession, SessionRequest, parse_session};
pub use error::CheckoutError;
pub use gate::{Confirmation, ExportGate, GateState};
pub use handoff::handoff_link;
pub use signal::{consume_payment_signal, plant_payment_signal};
