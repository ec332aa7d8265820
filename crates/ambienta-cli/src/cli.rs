//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ambienta",
    version,
    about = "Ambienta - room furnishing configurator and cost estimator",
    long_about = "Pick a furnishing variant per room, price the whole home, \
                  generate mosaic previews and export a printable estimate.\n\n\
                  Cost figures leave the tool only after the estimate is \
                  unlocked through the checkout flow."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Configuration file (default: ambienta.toml, or $AMBIENTA_CONFIG).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the room menu with per-variant totals.
    Catalog,

    /// Pick a variant for a room category.
    Select(SelectArgs),

    /// Show current selections with itemized costs and the grand total.
    Show,

    /// Generate shuffled mosaic previews from the current selections.
    Compose(ComposeArgs),

    /// Create a payment session to unlock the estimate.
    Checkout(CheckoutArgs),

    /// Confirm a completed payment and unlock the estimate.
    Confirm,

    /// Export the printable estimate document.
    Export(ExportArgs),

    /// Print the WhatsApp hand-off link with the estimate text.
    Handoff,

    /// Clear all selections and re-lock the estimate.
    Reset,
}

#[derive(Parser)]
pub struct SelectArgs {
    /// Room category key (see `ambienta catalog`).
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Variant id within the category.
    #[arg(value_name = "VARIANT")]
    pub variant: String,

    /// Which numbered photo of the variant to use in mosaics (1-based).
    #[arg(long = "image-index", value_name = "N", default_value_t = 1)]
    pub image_index: u32,
}

#[derive(Parser)]
pub struct ComposeArgs {
    /// How many mosaics to generate (default from configuration).
    #[arg(long, value_name = "N")]
    pub count: Option<u32>,

    /// Seed the shuffle for reproducible mosaics.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Directory for the generated PNG files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "composiciones")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct CheckoutArgs {
    /// Override the configured unlock fee.
    #[arg(long, value_name = "AMOUNT")]
    pub amount: Option<f64>,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Directory for the estimate document.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "cotizaciones")]
    pub output_dir: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
