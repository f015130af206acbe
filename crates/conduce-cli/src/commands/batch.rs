//! Batch command - process multiple invoice PDFs.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, warn};

use conduce_core::{ConduceExtractor, ExtractionResult};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory for per-file JSON results
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue processing after a file fails
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = super::process::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No files matched pattern: {}", args.input);
    }

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let extractor = ConduceExtractor::new().with_config(&config);
    let mut results: Vec<(PathBuf, ExtractionResult)> = Vec::with_capacity(files.len());
    let mut failed = 0usize;

    for file in &files {
        pb.set_message(file.display().to_string());

        let result = match fs::read(file) {
            Ok(data) => extractor.extract(&data),
            Err(e) => ExtractionResult::failure(e.to_string()),
        };

        if !result.success {
            failed += 1;
            let message = result.error.as_deref().unwrap_or("unknown error");
            if args.continue_on_error {
                warn!("Failed to process {}: {}", file.display(), message);
            } else {
                error!("Failed to process {}: {}", file.display(), message);
                pb.abandon();
                anyhow::bail!("{}: {}", file.display(), message);
            }
        }

        if let Some(dir) = &args.output_dir {
            let name = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("result");
            let path = dir.join(format!("{}.json", name));
            fs::write(&path, serde_json::to_string_pretty(&result)?)?;
            debug!("Wrote {}", path.display());
        }

        results.push((file.clone(), result));
        pb.inc(1);
    }

    pb.finish_with_message("Done");

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let processed = results.len() - failed;
    println!(
        "{} Processed {} of {} files in {:.1}s",
        style("✓").green(),
        processed,
        files.len(),
        start.elapsed().as_secs_f64()
    );
    if failed > 0 {
        println!("{} {} files failed", style("!").yellow(), failed);
    }

    Ok(())
}

fn write_summary(path: &PathBuf, results: &[(PathBuf, ExtractionResult)]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["file", "success", "customer", "invoice_number", "item_count", "error"])?;

    for (file, result) in results {
        let file_name = file.display().to_string();
        let success = result.success.to_string();
        let item_count = result.items.len().to_string();
        wtr.write_record([
            file_name.as_str(),
            success.as_str(),
            result.customer.as_str(),
            result.invoice_number.as_str(),
            item_count.as_str(),
            result.error.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
