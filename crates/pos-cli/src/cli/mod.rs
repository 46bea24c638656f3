//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "pos",
    bin_name = "pos",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f6d2} Scan a barcode, display the price",
    long_about = "A small point-of-sale flow: each scanned barcode is looked \
                  up in a catalog and answered with exactly one display line.",
    after_help = "EXAMPLES:\n\
        \x20 pos scan 123\n\
        \x20 pos scan 123 321 99999 --catalog shop.toml\n\
        \x20 printf '123\\n321\\n' | pos scan --stdin\n\
        \x20 pos catalog list --format table\n\
        \x20 pos completions bash > /usr/share/bash-completion/completions/pos",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan one or more barcodes against the active catalog.
    #[command(
        visible_alias = "s",
        about = "Scan barcodes and display prices",
        after_help = "EXAMPLES:\n\
            \x20 pos scan 123\n\
            \x20 pos scan 123 321 --catalog shop.toml\n\
            \x20 pos scan \"\"                 # a scan that carried no code\n\
            \x20 printf '123\\n' | pos scan --stdin\n\
            \x20 pos scan --interactive"
    )]
    Scan(ScanArgs),

    /// Inspect the active catalog.
    #[command(
        about = "Catalog inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 pos catalog list\n\
            \x20 pos catalog list --format json\n\
            \x20 pos catalog path"
    )]
    Catalog(CatalogCommands),

    /// Write a starter catalog file.
    #[command(
        about = "Initialise a starter catalog",
        after_help = "EXAMPLES:\n\
            \x20 pos init                    # ./catalog.toml\n\
            \x20 pos init --path shop.toml\n\
            \x20 pos init --with-config      # also write a default config file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 pos completions bash > ~/.local/share/bash-completion/completions/pos\n\
            \x20 pos completions zsh  > ~/.zfunc/_pos\n\
            \x20 pos completions fish > ~/.config/fish/completions/pos.fish"
    )]
    Completions(CompletionsArgs),
}

// ── scan ──────────────────────────────────────────────────────────────────────

/// Arguments for `pos scan`.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Barcodes to scan, in order.  Pass `""` for a scan that carried no
    /// code at all.
    #[arg(value_name = "CODE", help = "Barcodes to scan")]
    pub codes: Vec<String>,

    /// Read barcodes from stdin, one per line.
    ///
    /// A blank line is a scan with no code.  Lines are taken exactly as
    /// written; nothing is trimmed.
    #[arg(
        long = "stdin",
        conflicts_with = "codes",
        help = "Read barcodes from stdin, one per line"
    )]
    pub stdin: bool,

    /// Prompt for barcodes interactively until Ctrl-C / Ctrl-D.
    #[arg(
        short = 'i',
        long = "interactive",
        conflicts_with_all = ["codes", "stdin"],
        help = "Prompt for barcodes interactively"
    )]
    pub interactive: bool,
}

// ── catalog ───────────────────────────────────────────────────────────────────

/// Subcommands for `pos catalog`.
#[derive(Debug, Subcommand)]
pub enum CatalogCommands {
    /// Print every entry of the active catalog.
    List {
        /// Output format.
        #[arg(
            long = "format",
            value_enum,
            default_value = "table",
            help = "Output format"
        )]
        format: ListFormat,
    },
    /// Print which catalog the commands would run against.
    Path,
}

/// Output format for `pos catalog list`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One barcode per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `pos init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Where to write the starter catalog.
    #[arg(
        long = "path",
        value_name = "FILE",
        default_value = "catalog.toml",
        help = "Target path for the starter catalog"
    )]
    pub path: PathBuf,

    /// Also write a default configuration file.
    #[arg(long = "with-config", help = "Also create a default config file")]
    pub with_config: bool,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `pos completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
