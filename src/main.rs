use clap::{Parser, ValueEnum};
use giftcart::application::engine::CartSession;
use giftcart::config::ShopConfig;
use giftcart::interfaces::csv::command_reader::CommandReader;
use giftcart::interfaces::csv::receipt_writer::ReceiptWriter;
use giftcart::interfaces::json;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input cart actions CSV file (`action, product, delta`)
    input: PathBuf,

    /// Shop configuration JSON (catalog, free gift, threshold). Uses the built-in shop if omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format of the final receipt
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Append the free gift progress table to CSV output
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let config = match cli.catalog {
        Some(path) => ShopConfig::load(path).into_diagnostic()?,
        None => ShopConfig::default(),
    };
    let (catalog, rule) = config.into_parts().into_diagnostic()?;
    let mut session = CartSession::new(catalog, rule);

    // Replay actions in input order
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = CommandReader::new(file);
    for command in reader.commands() {
        match command {
            Ok(command) => {
                if let Err(e) = session.apply(command) {
                    tracing::warn!("Error applying command: {}", e);
                }
            }
            Err(e) => {
                tracing::warn!("Error reading command: {}", e);
            }
        }
    }

    let receipt = session.receipt();
    let stdout = io::stdout();
    match cli.format {
        OutputFormat::Csv => {
            let mut writer = ReceiptWriter::new(stdout.lock());
            writer
                .write_receipt(&receipt, cli.summary)
                .into_diagnostic()?;
        }
        OutputFormat::Json => json::write_receipt(stdout.lock(), &receipt).into_diagnostic()?,
    }

    Ok(())
}
