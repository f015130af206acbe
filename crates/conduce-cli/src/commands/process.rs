//! Process command - extract delivery data from a single invoice PDF.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use conduce_core::{
    ConduceConfig, DeliveryNote, HeuristicNoteParser, NoteParser, PdfTextExtractor, TextSource,
};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Report fields that could not be detected
    #[arg(long)]
    validate: bool,

    /// Show processing time
    #[arg(long)]
    timing: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output (one row per item)
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    pb.set_message("Loading PDF...");
    pb.set_position(10);
    let data = fs::read(&args.input)?;

    pb.set_message("Converting to text...");
    pb.set_position(40);
    let text = PdfTextExtractor::new().convert(&data)?;
    if text.trim().is_empty() {
        pb.finish_and_clear();
        anyhow::bail!("No text could be extracted from the PDF");
    }

    pb.set_message("Extracting delivery data...");
    pb.set_position(70);
    let parser = HeuristicNoteParser::with_config(&config);
    let report = parser.parse(&text);

    pb.set_position(100);
    pb.finish_with_message("Done");

    if args.validate && !report.warnings.is_empty() {
        eprintln!("{}", style("Detection warnings:").yellow());
        for warning in &report.warnings {
            eprintln!("  - {}", warning);
        }
    }

    let output = format_note(&report.note, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.timing {
        println!(
            "{} Extraction time: {}ms",
            style("ℹ").blue(),
            report.processing_time_ms
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ConduceConfig> {
    match config_path {
        Some(path) => Ok(ConduceConfig::from_file(std::path::Path::new(path))?),
        None => Ok(ConduceConfig::default()),
    }
}

pub fn format_note(note: &DeliveryNote, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(note)?),
        OutputFormat::Csv => format_csv(note),
        OutputFormat::Text => Ok(format_text(note)),
    }
}

fn format_csv(note: &DeliveryNote) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["customer", "invoice_number", "quantity", "label"])?;

    if note.items.is_empty() {
        wtr.write_record([note.customer.as_str(), note.invoice_number.as_str(), "", ""])?;
    }
    for item in &note.items {
        let quantity = item.quantity.to_string();
        wtr.write_record([
            note.customer.as_str(),
            note.invoice_number.as_str(),
            quantity.as_str(),
            item.label.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(note: &DeliveryNote) -> String {
    let mut output = String::new();

    output.push_str(&format!("Customer: {}\n", note.customer));
    output.push_str(&format!("Invoice:  {}\n", note.invoice_number));
    output.push('\n');

    output.push_str("Items:\n");
    if note.items.is_empty() {
        output.push_str("  (none detected)\n");
    }
    for item in &note.items {
        output.push_str(&format!("  {:>4} x {}\n", item.quantity, item.label));
    }

    output
}
