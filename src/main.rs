//! json-to-mse - generate Magic Set Editor set files from MTG JSON

use anyhow::Context;
use clap::{Parser, ValueEnum};
use mtg_mse::{
    core::CardName,
    import::{import_cards, ImportOptions},
    loader::{CatalogContext, CatalogSource},
    mse::{BorderColor, Output, SetFileOptions},
    MseError,
};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Border color argument
#[derive(Debug, Clone, Copy, ValueEnum)]
enum BorderArg {
    Black,
    #[value(alias = "w")]
    White,
    #[value(alias = "s")]
    Silver,
    #[value(alias = "g")]
    Gold,
    #[value(alias = "b")]
    Bronze,
}

impl From<BorderArg> for BorderColor {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Black => BorderColor::Black,
            BorderArg::White => BorderColor::White,
            BorderArg::Silver => BorderColor::Silver,
            BorderArg::Gold => BorderColor::Gold,
            BorderArg::Bronze => BorderColor::Bronze,
        }
    }
}

#[derive(Parser)]
#[command(name = "json-to-mse")]
#[command(about = "Generate Magic Set Editor set files from MTG JSON card data", long_about = None)]
struct Cli {
    /// Card names to include
    #[arg(value_name = "CARDS")]
    cards: Vec<String>,

    /// Read card names from a file, one per line (lines starting with # are ignored)
    #[arg(short, long, value_name = "FILE")]
    input: Vec<PathBuf>,

    /// Write the set file here instead of stdout ("=" means stdout)
    #[arg(short, long, value_name = "PATH", default_value = "=")]
    output: Output,

    /// Abort with a detailed error on the first card that fails
    #[arg(short, long)]
    verbose: bool,

    /// Read the catalog from a local MTG JSON file instead of downloading it
    #[arg(long, value_name = "FILE")]
    catalog: Option<PathBuf>,

    /// Use the extended MTG JSON dataset
    #[arg(long)]
    extras: bool,

    /// Copyright line of the set
    #[arg(long, default_value = "NOT FOR SALE")]
    copyright: String,

    /// Set code of the set
    #[arg(long, default_value = "PROXY")]
    set_code: String,

    /// Let MSE number the cards automatically
    #[arg(long)]
    auto_card_numbers: bool,

    /// Border color of the cards
    #[arg(short, long, value_enum, default_value = "black")]
    border: BorderArg,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut names = BTreeSet::new();
    names.extend(cli.cards.iter().filter_map(|name| CardName::normalize(name)));
    for path in &cli.input {
        read_names(&mut names, path)?;
    }
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        read_card_lines(&mut names, stdin.lock()).context("failed to read card names from stdin")?;
    }
    if names.is_empty() {
        return Err(MseError::NoCardNames.into());
    }

    let source = match cli.catalog {
        Some(path) => CatalogSource::File(path),
        None => CatalogSource::Download,
    };
    let mut context = CatalogContext::new(source);
    let catalog = context.catalog(cli.extras).await?;

    let options = ImportOptions {
        verbose: cli.verbose,
        set_file: SetFileOptions {
            copyright: cli.copyright,
            set_code: cli.set_code,
            auto_card_numbers: cli.auto_card_numbers,
            border_color: cli.border.into(),
        },
    };
    let report = import_cards(&catalog, &names, &options)?;
    for name in &report.failed {
        eprintln!("[ !! ] Failed to add card {name}");
    }
    if report.failed_count() > 0 {
        eprintln!(
            "[ ** ] {} cards failed. Run again with --verbose for a detailed error message",
            report.failed_count()
        );
    }
    tracing::info!(cards = report.added.len(), "adding cards to set file done");

    cli.output
        .write_set_file(&report.set_file)
        .with_context(|| format!("failed to write set file to {:?}", cli.output))?;
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn read_names(names: &mut BTreeSet<CardName>, path: &Path) -> anyhow::Result<()> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    read_card_lines(names, BufReader::new(file))
        .with_context(|| format!("failed to read card names from {}", path.display()))
}

/// One card name per line; blank lines and `#` comments are skipped
fn read_card_lines(names: &mut BTreeSet<CardName>, reader: impl BufRead) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        names.extend(CardName::normalize(&line));
    }
    Ok(())
}
