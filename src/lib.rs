//! # blastn-extract
//!
//! Keyword search over tabular BLASTn reports, with optional contig
//! extraction.
//!
//! A report produced with
//! `-outfmt '6 qseqid stitle slen length qstart qend pident score'` is
//! filtered line by line against a case-insensitive, space-separated keyword
//! [`Query`]; every line containing all keywords is a [`Hit`]. The hits are
//! keyed by their node name (first column) into a [`NodeMap`], which then
//! drives [`extract_contigs`]: records of an assembly FASTA whose header
//! contains a known node are copied to the output under a rewritten header.
//!
//! Both scans are single forward passes; memory stays proportional to the
//! number of hits, not to file size.
//!
//! ### Example
//! ```rust,no_run
//! use std::path::Path;
//! use blastn_extract::{extract_contigs, query_hits, NodeMap, Query};
//!
//! # fn main() -> Result<(), blastn_extract::BlastnExtractError> {
//! let query = Query::new("salmonella enterica");
//! let hits = query_hits(Path::new("report.tsv"), &query)?;
//! if !hits.is_empty() {
//!     let nodes = NodeMap::from_hits(&hits, "\t");
//!     extract_contigs(Path::new("contigs.fasta"), &nodes, Path::new("out.fasta"), "\t")?;
//! }
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod common;
pub mod contigs;
pub mod hits;
pub mod nodes;

pub use common::BlastnExtractError;
pub use contigs::extract_contigs;
pub use hits::{query_hits, Hit, Query};
pub use nodes::NodeMap;
