//! Command implementations.
//!
//! Every command loads its state fresh from the durable store, does its work
//! and exits; nothing is shared between invocations except what the store
//! holds. Errors bubble up as [`anyhow::Error`] and are printed by `main`.

use std::collections::BTreeMap;
use std::fs;

use anyhow::{Context, Result, anyhow, bail, ensure};
use chrono::Utc;
use tracing::info;

use ambienta_catalog::Catalog;
use ambienta_checkout::{
    CheckoutClient, CheckoutError, Confirmation, ExportGate, SessionRequest,
    consume_payment_signal, handoff_link, plant_payment_signal,
};
use ambienta_cli::config::AmbientaConfig;
use ambienta_compose::{
    ComposeOptions, Composer, DirectoryResolver, PlaceholderResolver, ResolverChain, SeededShuffle,
    ShuffleSource, ThreadShuffle,
};
use ambienta_cost::{compute_cost, format_amount};
use ambienta_report::{
    DirectorySurface, Estimate, EstimateInput, Surface, build_estimate, handoff_message,
    render_html,
};
use ambienta_store::{JsonFileStore, SelectionStore};

use crate::cli::{CheckoutArgs, ComposeArgs, ExportArgs, SelectArgs};
use crate::tables;

/// Everything a command needs: the resolved config, the room catalog and
/// the durable store under the configured state directory.
struct App {
    config: AmbientaConfig,
    catalog: Catalog,
    store: JsonFileStore,
}

impl App {
    fn open(config: AmbientaConfig) -> Result<Self> {
        let catalog = Catalog::builtin().context("load built-in room catalog")?;
        let store = JsonFileStore::new(&config.state.dir);
        Ok(Self {
            config,
            catalog,
            store,
        })
    }
}

pub fn run_catalog(config: AmbientaConfig) -> Result<()> {
    let app = App::open(config)?;
    tables::print_catalog(&app.catalog);
    Ok(())
}

pub fn run_select(config: AmbientaConfig, args: &SelectArgs) -> Result<()> {
    ensure!(
        args.image_index >= 1,
        "--image-index is 1-based, the first photo is 1"
    );
    let mut app = App::open(config)?;
    let category = app.catalog.require_category(&args.category)?;
    let Some(variant) = category.variant(&args.variant) else {
        let available: Vec<&str> = category
            .variants
            .iter()
            .map(|variant| variant.id.as_str())
            .collect();
        bail!(
            "unknown variant '{}' in category '{}', available: {}",
            args.variant,
            category.key,
            available.join(", ")
        );
    };

    let mut selections = SelectionStore::load(&app.store);
    selections.select(&mut app.store, &category.key, variant, args.image_index);
    info!(category = %category.key, variant = %variant.id, "selection recorded");

    let breakdown = compute_cost(variant);
    println!(
        "{} -> {} (${})",
        category.name,
        variant.title,
        format_amount(breakdown.total)
    );
    println!(
        "{} of {} rooms selected, run `ambienta show` for the estimate",
        selections.len(),
        app.catalog.categories().len()
    );
    Ok(())
}

pub fn run_show(config: AmbientaConfig) -> Result<()> {
    let app = App::open(config)?;
    let selections = SelectionStore::load(&app.store);
    if selections.is_empty() {
        println!("nothing selected yet, run `ambienta catalog` to see the menu");
        return Ok(());
    }
    let estimate = current_estimate(&app, &selections);
    tables::print_estimate_summary(&estimate);
    tables::print_estimate_details(&estimate);
    Ok(())
}

pub fn run_compose(config: AmbientaConfig, args: &ComposeArgs) -> Result<()> {
    let app = App::open(config)?;
    let selections = SelectionStore::load(&app.store);
    let keys = selections.selected_keys();

    let indices: BTreeMap<String, u32> = selections
        .all()
        .iter()
        .map(|(key, selection)| (key.clone(), selection.image_index))
        .collect();
    let labels: BTreeMap<String, String> = app
        .catalog
        .categories()
        .iter()
        .map(|category| (category.key.clone(), category.name.clone()))
        .collect();

    let options = ComposeOptions {
        tile_width: app.config.compose.tile_width,
        tile_height: app.config.compose.tile_height,
        ..ComposeOptions::default()
    };
    let resolver = ResolverChain::new(vec![
        Box::new(DirectoryResolver::new(&app.config.images.base_dir).with_indices(indices)),
        Box::new(
            PlaceholderResolver::new(options.tile_width, options.tile_height).with_labels(labels),
        ),
    ]);
    let shuffle: Box<dyn ShuffleSource> = match args.seed {
        Some(seed) => Box::new(SeededShuffle::new(seed)),
        None => Box::new(ThreadShuffle),
    };
    let mut composer = Composer::new(Box::new(resolver), shuffle).with_options(options);

    let count = args.count.unwrap_or(app.config.compose.count);
    let batch = composer.generate(&keys, count)?;

    fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("create output directory {}", args.output_dir.display()))?;
    for composition in &batch {
        let path = args
            .output_dir
            .join(format!("composicion-{}.png", composition.iteration));
        fs::write(&path, &composition.png)
            .with_context(|| format!("write {}", path.display()))?;
        println!(
            "{} ({}x{}, {} tiles)",
            path.display(),
            composition.width,
            composition.height,
            composition.keys.len()
        );
    }
    info!(count = batch.len(), "compositions written");
    Ok(())
}

pub fn run_checkout(config: AmbientaConfig, args: &CheckoutArgs) -> Result<()> {
    let mut app = App::open(config)?;
    let amount = args.amount.unwrap_or(app.config.payment.amount);
    ensure!(amount > 0.0, "payment amount must be positive, got {amount}");

    let client =
        CheckoutClient::new(app.config.payment.base_url.as_str()).map_err(checkout_error)?;
    let request = SessionRequest {
        amount,
        description: "Desbloqueo de cotización Ambienta".to_string(),
        success_url: app.config.payment.success_url.clone(),
    };
    let session = client.create_session(&request).map_err(checkout_error)?;
    let Some(url) = session.checkout_url() else {
        bail!("payment session carries no checkout URL");
    };

    plant_payment_signal(&mut app.store);
    info!(amount, "payment session created");

    println!("payment session created, open this link to pay:");
    println!("  {url}");
    println!("after paying, run `ambienta confirm` to unlock exports");
    Ok(())
}

pub fn run_confirm(config: AmbientaConfig) -> Result<()> {
    let mut app = App::open(config)?;
    let had_marker = consume_payment_signal(&mut app.store);
    let mut gate = ExportGate::load(&app.store);
    if had_marker {
        match gate.confirm_payment(&mut app.store) {
            Confirmation::Unlocked => println!("payment confirmed, exports are unlocked"),
            Confirmation::AlreadyUnlocked => println!("exports were already unlocked"),
        }
    } else if gate.is_unlocked() {
        println!("exports are already unlocked");
    } else {
        bail!("no payment confirmation pending, run `ambienta checkout` first");
    }
    Ok(())
}

pub fn run_export(config: AmbientaConfig, args: &ExportArgs) -> Result<()> {
    let app = App::open(config)?;
    let gate = ExportGate::load(&app.store);
    gate.authorize()
        .map_err(|err| anyhow!("{}", err.user_message()))?;

    let selections = SelectionStore::load(&app.store);
    let estimate = current_estimate(&app, &selections);
    let html = render_html(&estimate).map_err(|err| anyhow!("{}", err.user_message()))?;

    let surface = DirectorySurface::new(&args.output_dir);
    let path = surface
        .present("cotizacion", &html)
        .map_err(|err| anyhow!("{}", err.user_message()))?;
    println!("estimate exported to {}", path.display());
    Ok(())
}

pub fn run_handoff(config: AmbientaConfig) -> Result<()> {
    let app = App::open(config)?;
    let gate = ExportGate::load(&app.store);
    gate.authorize()
        .map_err(|err| anyhow!("{}", err.user_message()))?;

    let selections = SelectionStore::load(&app.store);
    ensure!(
        !selections.is_empty(),
        "nothing selected yet, pick at least one room variant first"
    );
    let estimate = current_estimate(&app, &selections);
    let message = handoff_message(&estimate);
    let link = handoff_link(&app.config.handoff.phone, &message);

    println!("{message}");
    println!();
    println!("send it via WhatsApp: {link}");
    Ok(())
}

pub fn run_reset(config: AmbientaConfig) -> Result<()> {
    let mut app = App::open(config)?;
    let mut selections = SelectionStore::load(&app.store);
    selections.reset(&mut app.store);
    let mut gate = ExportGate::load(&app.store);
    gate.reset(&mut app.store);
    consume_payment_signal(&mut app.store);
    println!("selections cleared, exports locked again");
    Ok(())
}

fn current_estimate(app: &App, selections: &SelectionStore) -> Estimate {
    build_estimate(&EstimateInput {
        categories: app.catalog.categories(),
        selections: selections.all(),
        generated_at: Utc::now(),
    })
}

fn checkout_error(err: CheckoutError) -> anyhow::Error {
    let mut message = err.user_message().to_string();
    if err.is_retryable() {
        message.push_str(" (worth retrying in a moment)");
    }
    anyhow::Error::new(err).context(message)
}
