//! The export gate.
//!
//! Two states, locked initially. Every export and hand-off call site passes
//! through [`ExportGate::authorize`]; the only way to open the gate is an
//! observed payment confirmation, and observing it twice unlocks once.

use ambienta_model::PaymentState;
use ambienta_store::{StateStore, keys};

use crate::error::CheckoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// Outcome of observing a payment confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// This observation performed the unlock; notify the user once.
    Unlocked,
    /// The gate was already open; nothing changed.
    AlreadyUnlocked,
}

#[derive(Debug)]
pub struct ExportGate {
    state: GateState,
}

impl ExportGate {
    /// Restore the gate from the durable store. Absent or corrupt flags
    /// mean locked; that is the safe default either way.
    pub fn load(store: &dyn StateStore) -> Self {
        let state = match store.get(keys::PAYMENT_UNLOCKED) {
            Ok(Some(raw)) => match serde_json::from_str::<PaymentState>(&raw) {
                Ok(payment) if payment.unlocked => GateState::Unlocked,
                Ok(_) => GateState::Locked,
                Err(err) => {
                    tracing::warn!("stored payment flag is corrupt, staying locked: {err}");
                    GateState::Locked
                }
            },
            Ok(None) => GateState::Locked,
            Err(err) => {
                tracing::warn!("could not read payment flag, staying locked: {err}");
                GateState::Locked
            }
        };
        Self { state }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    /// Gate check for export and hand-off operations.
    pub fn authorize(&self) -> Result<(), CheckoutError> {
        match self.state {
            GateState::Unlocked => Ok(()),
            GateState::Locked => Err(CheckoutError::PaymentRequired),
        }
    }

    /// Observe a payment confirmation. Idempotent: only the first
    /// observation transitions the gate and persists the flag.
    pub fn confirm_payment(&mut self, store: &mut dyn StateStore) -> Confirmation {
        if self.state == GateState::Unlocked {
            return Confirmation::AlreadyUnlocked;
        }
        self.state = GateState::Unlocked;
        self.persist(store);
        tracing::info!("export gate unlocked");
        Confirmation::Unlocked
    }

    /// Force the gate shut and drop the persisted flag.
    pub fn reset(&mut self, store: &mut dyn StateStore) {
        self.state = GateState::Locked;
        if let Err(err) = store.delete(keys::PAYMENT_UNLOCKED) {
            tracing::warn!("could not delete payment flag: {err}");
        }
    }

    fn persist(&self, store: &mut dyn StateStore) {
        let payment = PaymentState {
            unlocked: self.is_unlocked(),
        };
        let raw = match serde_json::to_string(&payment) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!("could not serialize payment flag: {err}");
                return;
            }
        };
        if let Err(err) = store.set(keys::PAYMENT_UNLOCKED, &raw) {
            tracing::warn!("could not persist payment flag, continuing in memory: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambienta_store::MemoryStore;

    #[test]
    fn starts_locked_and_rejects_exports() {
        let backing = MemoryStore::new();
        let gate = ExportGate::load(&backing);
        assert_eq!(gate.state(), GateState::Locked);
        assert!(matches!(
            gate.authorize().unwrap_err(),
            CheckoutError::PaymentRequired
        ));
    }

    #[test]
    fn double_confirmation_unlocks_once() {
        let mut backing = MemoryStore::new();
        let mut gate = ExportGate::load(&backing);

        assert_eq!(gate.confirm_payment(&mut backing), Confirmation::Unlocked);
        assert_eq!(
            gate.confirm_payment(&mut backing),
            Confirmation::AlreadyUnlocked
        );
        assert!(gate.is_unlocked());
        assert!(gate.authorize().is_ok());
    }

    #[test]
    fn unlock_survives_a_reload() {
        let mut backing = MemoryStore::new();
        let mut gate = ExportGate::load(&backing);
        gate.confirm_payment(&mut backing);

        let reloaded = ExportGate::load(&backing);
        assert!(reloaded.is_unlocked());
    }

    #[test]
    fn reset_relocks_and_clears_the_record() {
        let mut backing = MemoryStore::new();
        let mut gate = ExportGate::load(&backing);
        gate.confirm_payment(&mut backing);

        gate.reset(&mut backing);
        assert_eq!(gate.state(), GateState::Locked);
        assert_eq!(backing.get(keys::PAYMENT_UNLOCKED).unwrap(), None);

        let reloaded = ExportGate::load(&backing);
        assert!(!reloaded.is_unlocked());
    }

    #[test]
    fn corrupt_flag_loads_locked() {
        let mut backing = MemoryStore::new();
        backing.set(keys::PAYMENT_UNLOCKED, "{broken").unwrap();
        let gate = ExportGate::load(&backing);
        assert_eq!(gate.state(), GateState::Locked);
    }
}
