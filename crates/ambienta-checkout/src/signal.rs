//! One-shot payment confirmation marker.
//!
//! The checkout flow plants a marker record; the next application start
//! consumes it (read and delete in one step) and feeds the gate. A consumed
//! marker is gone, so the confirmation can fire at most once per planting.

use ambienta_store::{StateStore, keys};

/// Plant the marker after a checkout session was opened.
pub fn plant_payment_signal(store: &mut dyn StateStore) {
    if let Err(err) = store.set(keys::PAYMENT_PENDING, "true") {
        tracing::warn!("could not plant payment marker: {err}");
    }
}

/// Observe and clear the marker. Returns whether it was present.
pub fn consume_payment_signal(store: &mut dyn StateStore) -> bool {
    match store.get(keys::PAYMENT_PENDING) {
        Ok(Some(_)) => {
            if let Err(err) = store.delete(keys::PAYMENT_PENDING) {
                tracing::warn!("could not clear payment marker: {err}");
            }
            true
        }
        Ok(None) => false,
        Err(err) => {
            tracing::warn!("could not read payment marker: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ambienta_store::MemoryStore;

    #[test]
    fn absent_marker_observes_nothing() {
        let mut backing = MemoryStore::new();
        assert!(!consume_payment_signal(&mut backing));
    }

    #[test]
    fn marker_is_consumed_exactly_once() {
        let mut backing = MemoryStore::new();
        plant_payment_signal(&mut backing);

        assert!(consume_payment_signal(&mut backing));
        assert!(!consume_payment_signal(&mut backing), "second observation is empty");
        assert_eq!(backing.get(keys::PAYMENT_PENDING).unwrap(), None);
    }
}
