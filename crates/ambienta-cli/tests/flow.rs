//! End-to-end state journey over a real on-disk store.
//!
//! Each block opens its own `JsonFileStore` to model separate process runs;
//! everything that must survive between commands has to round-trip through
//! the state directory.

use ambienta_catalog::Catalog;
use ambienta_checkout::{Confirmation, ExportGate, consume_payment_signal, plant_payment_signal};
use ambienta_report::{
    DirectorySurface, EstimateInput, Surface, build_estimate, handoff_message, render_html,
};
use ambienta_store::{JsonFileStore, SelectionStore};
use chrono::{TimeZone, Utc};
use tempfile::tempdir;

#[test]
fn select_unlock_export_journey() {
    let dir = tempdir().unwrap();
    let state_dir = dir.path().join("state");
    let catalog = Catalog::builtin().unwrap();

    // Run 1: pick two rooms.
    {
        let mut store = JsonFileStore::new(&state_dir);
        let mut selections = SelectionStore::load(&store);
        let sala = catalog.find_variant("sala", "sala-nordica").unwrap();
        let cocina = catalog.find_variant("cocina", "cocina-isla").unwrap();
        selections.select(&mut store, "sala", sala, 1);
        selections.select(&mut store, "cocina", cocina, 2);
    }

    // Run 2: checkout plants the pending marker.
    {
        let mut store = JsonFileStore::new(&state_dir);
        plant_payment_signal(&mut store);
    }

    // Run 3: confirm consumes the marker and unlocks the gate.
    {
        let mut store = JsonFileStore::new(&state_dir);
        assert!(consume_payment_signal(&mut store));
        let mut gate = ExportGate::load(&store);
        assert_eq!(gate.confirm_payment(&mut store), Confirmation::Unlocked);
    }

    // Run 4: everything survived, the export renders and lands on disk.
    {
        let store = JsonFileStore::new(&state_dir);
        let gate = ExportGate::load(&store);
        assert!(gate.authorize().is_ok());

        let selections = SelectionStore::load(&store);
        assert_eq!(selections.len(), 2);
        assert_eq!(selections.current("cocina").unwrap().image_index, 2);

        let estimate = build_estimate(&EstimateInput {
            categories: catalog.categories(),
            selections: selections.all(),
            generated_at: Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap(),
        });
        assert_eq!(estimate.sections.len(), 2);
        assert!(estimate.grand_total > 0.0);

        let html = render_html(&estimate).unwrap();
        let surface = DirectorySurface::new(dir.path().join("out"));
        let path = surface.present("cotizacion", &html).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("Total general"));
        assert!(written.contains("Sala Nórdica"));

        let message = handoff_message(&estimate);
        assert!(message.starts_with("Cotización Ambienta"));
        assert!(message.contains("Sala:"));
    }
}

#[test]
fn reset_relocks_and_clears_everything() {
    let dir = tempdir().unwrap();
    let state_dir = dir.path().join("state");
    let catalog = Catalog::builtin().unwrap();

    {
        let mut store = JsonFileStore::new(&state_dir);
        let mut selections = SelectionStore::load(&store);
        let bano = catalog.find_variant("bano", "bano-spa").unwrap();
        selections.select(&mut store, "bano", bano, 1);
        plant_payment_signal(&mut store);
        let mut gate = ExportGate::load(&store);
        gate.confirm_payment(&mut store);
    }

    // The reset command clears selections, relocks and drops the marker.
    {
        let mut store = JsonFileStore::new(&state_dir);
        let mut selections = SelectionStore::load(&store);
        selections.reset(&mut store);
        let mut gate = ExportGate::load(&store);
        gate.reset(&mut store);
        consume_payment_signal(&mut store);
    }

    {
        let mut store = JsonFileStore::new(&state_dir);
        assert!(SelectionStore::load(&store).is_empty());
        assert!(!ExportGate::load(&store).is_unlocked());
        assert!(!consume_payment_signal(&mut store), "marker is gone too");
    }
}

#[test]
fn pending_marker_is_single_use_across_runs() {
    let dir = tempdir().unwrap();
    let state_dir = dir.path().join("state");

    {
        let mut store = JsonFileStore::new(&state_dir);
        plant_payment_signal(&mut store);
    }
    {
        let mut store = JsonFileStore::new(&state_dir);
        assert!(consume_payment_signal(&mut store));
    }
    {
        let mut store = JsonFileStore::new(&state_dir);
        assert!(
            !consume_payment_signal(&mut store),
            "a second confirm finds nothing to consume"
        );
    }
}
