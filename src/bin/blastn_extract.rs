//! Command-line interface for `blastn-extract`.
//!
//! Filters a BLASTn tabular report by a keyword query, then pulls the
//! matching contigs out of an assembly FASTA when one is provided.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use blastn_extract::*;

/// Output name used when `--outfile` is absent; placed beside the report.
const DEFAULT_OUTFILE: &str = "BLASTn_search_output.fasta";

#[derive(Debug, Parser)]
#[command(
    name = "blastn-extract",
    version,
    about = "Pull all hits matching a query string from a BLASTn report, then \
             extract the matching contigs from a FASTA file (if provided). The \
             report should be generated with \
             -outfmt '6 qseqid stitle slen length qstart qend pident score'."
)]
struct Cli {
    /// Path to the BLASTn report to query.
    #[arg(short, long, value_name = "FILE")]
    infile: PathBuf,
    /// Query string to match against; case insensitive.
    #[arg(short, long)]
    query: String,
    /// FASTA contig file to pull matches from.
    #[arg(short, long, value_name = "FILE")]
    contigs: Option<PathBuf>,
    /// Output file; defaults to BLASTn_search_output.fasta next to the report.
    #[arg(short, long, value_name = "FILE")]
    outfile: Option<PathBuf>,
    /// Delimiter used in the report, e.g. {--delimiter ","} for comma
    /// separated files.
    #[arg(short, long, default_value = "\t")]
    delimiter: String,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    if cli.contigs.is_none() {
        info!("No contig FASTA file provided. Only performing query on BLASTn file.");
    }
    let outfile = cli.outfile.unwrap_or_else(|| default_outfile(&cli.infile));

    let query = Query::new(&cli.query);
    let hits = query_hits(&cli.infile, &query)
        .with_context(|| format!("query BLASTn report: {}", cli.infile.display()))?;

    if hits.is_empty() {
        info!("No hits found matching query '{}'. Quitting.", cli.query);
        return Ok(());
    }

    info!("Hits matching query '{}':", cli.query);
    for hit in &hits {
        info!("{}", hit.line());
    }

    if let Some(contigs) = &cli.contigs {
        let nodes = NodeMap::from_hits(&hits, &cli.delimiter);
        info!("Extracting contigs from {}", contigs.display());
        let written = extract_contigs(contigs, &nodes, &outfile, &cli.delimiter)
            .with_context(|| format!("extract contigs from {}", contigs.display()))?;
        info!("Extracted contigs available at {}", written.display());
    }
    Ok(())
}

/// `BLASTn_search_output.fasta` in the report file's directory.
fn default_outfile(infile: &Path) -> PathBuf {
    match infile.parent() {
        Some(dir) => dir.join(DEFAULT_OUTFILE),
        None => PathBuf::from(DEFAULT_OUTFILE),
    }
}
