//! Contig record extraction driven by a [`NodeMap`].
//!
//! Streams a FASTA-like file once. Header lines (starting with `>`) are
//! tested against the map by plain substring containment, in insertion order;
//! the first matching node wins and opens a record, whose body lines are
//! copied until the next header. A matched header is rewritten as `>` plus
//! the node stem and the hit's subject title and length.
//!
//! ### Example
//! ```rust,no_run
//! use std::path::Path;
//! use blastn_extract::{extract_contigs, Hit, NodeMap};
//!
//! # fn main() -> Result<(), blastn_extract::BlastnExtractError> {
//! let hits = [Hit::new("NODE_1_length_1000_cov_5.0\tSalmonella enterica\t1000")];
//! let nodes = NodeMap::from_hits(&hits, "\t");
//! let written = extract_contigs(
//!     Path::new("contigs.fasta"),
//!     &nodes,
//!     Path::new("matches.fasta"),
//!     "\t",
//! )?;
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io;
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::common::{open_input, read_error, BlastnExtractError};
use crate::nodes::NodeMap;

/// Marker starting a record header line in FASTA-like files.
const RECORD_START: char = '>';

/// Per-line scan state: between records, or inside a matched one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    AwaitingHeader,
    Copying,
}

/// Write the records of `contigs` whose header contains one of the mapped
/// nodes to `outfile`, returning the path written.
///
/// The output file is created (truncating any previous content) before any
/// matching happens; a run where nothing matches leaves an empty file behind,
/// which is not an error. Records are not deduplicated: every matching header
/// produces its own output record.
pub fn extract_contigs(
    contigs: &Path,
    nodes: &NodeMap,
    outfile: &Path,
    delimiter: &str,
) -> Result<PathBuf, BlastnExtractError> {
    let write_error = |e: io::Error| BlastnExtractError::OutputWrite {
        path: outfile.to_path_buf(),
        source: e,
    };
    let out = File::create(outfile).map_err(write_error)?;
    let mut writer = BufWriter::new(out);

    let reader = open_input(contigs)?;
    let mut state = ScanState::AwaitingHeader;
    for line in reader.lines() {
        let line = line.map_err(|e| read_error(contigs, e))?;
        state = scan_line(state, &line, nodes, delimiter, &mut writer).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)?;
    Ok(outfile.to_path_buf())
}

/// Fold one line into the scan: headers re-decide the state, body lines are
/// copied verbatim while a matched record is open.
fn scan_line<W: Write>(
    state: ScanState,
    line: &str,
    nodes: &NodeMap,
    delimiter: &str,
    out: &mut W,
) -> io::Result<ScanState> {
    if line.starts_with(RECORD_START) {
        match nodes.iter().find(|&(node, _)| line.contains(node)) {
            Some((node, hit)) => {
                writeln!(out, ">{} {}", node_stem(node), hit.description(delimiter))?;
                Ok(ScanState::Copying)
            }
            None => Ok(ScanState::AwaitingHeader),
        }
    } else if state == ScanState::Copying {
        writeln!(out, "{line}")?;
        Ok(ScanState::Copying)
    } else {
        Ok(ScanState::AwaitingHeader)
    }
}

/// Drop the trailing coverage suffix from a node name: the last two
/// `_`-delimited segments (`NODE_12_length_500_cov_3.2` becomes
/// `NODE_12_length_500`). Names with fewer segments than separators to remove
/// pass through unchanged.
fn node_stem(node: &str) -> &str {
    node.rsplitn(3, '_').last().unwrap_or(node)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hits::Hit;
    use std::fs;

    fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn node_map(lines: &[&str]) -> NodeMap {
        let hits: Vec<Hit> = lines.iter().copied().map(Hit::new).collect();
        NodeMap::from_hits(&hits, "\t")
    }

    #[test]
    fn node_stem_drops_last_two_segments() {
        assert_eq!(node_stem("NODE_12_length_500_cov_3.2"), "NODE_12_length_500");
        assert_eq!(node_stem("a_b_c"), "a");
        assert_eq!(node_stem("a_b"), "a");
        assert_eq!(node_stem("CONTIG1"), "CONTIG1");
    }

    #[test]
    fn matched_record_is_rewritten_and_copied() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(
            &dir,
            "contigs.fasta",
            ">NODE_1_length_1000_cov_5.0_000001\nACGTACGT\nTTGGCCAA\n\
             >NODE_9_length_50_cov_0.1\nAAAA\n",
        );
        let out = dir.path().join("matches.fasta");
        let nodes = node_map(&[
            "NODE_1_length_1000_cov_5.0\tSalmonella enterica\t1000\t990\t1\t990\t99.5\t1800",
        ]);
        let written = extract_contigs(&contigs, &nodes, &out, "\t").unwrap();
        assert_eq!(written, out);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            ">NODE_1_length_1000 Salmonella enterica1000\nACGTACGT\nTTGGCCAA\n"
        );
    }

    #[test]
    fn body_lines_before_any_matched_header_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(
            &dir,
            "contigs.fasta",
            "ACGT\nGGTT\n>NODE_7_length_10_cov_1.0\nGGGG\n",
        );
        let out = dir.path().join("matches.fasta");
        let nodes = node_map(&["NODE_7_length_10_cov_1.0\tEscherichia coli\t10"]);
        extract_contigs(&contigs, &nodes, &out, "\t").unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            ">NODE_7_length_10 Escherichia coli10\nGGGG\n"
        );
    }

    #[test]
    fn every_matching_header_gets_its_own_record() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(
            &dir,
            "contigs.fasta",
            ">NODE_4_length_20_cov_2.0_a\nAAAA\n>NODE_4_length_20_cov_2.0_b\nCCCC\n",
        );
        let out = dir.path().join("matches.fasta");
        let nodes = node_map(&["NODE_4_length_20_cov_2.0\tYersinia pestis\t20"]);
        extract_contigs(&contigs, &nodes, &out, "\t").unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            ">NODE_4_length_20 Yersinia pestis20\nAAAA\n>NODE_4_length_20 Yersinia pestis20\nCCCC\n"
        );
    }

    #[test]
    fn unmatched_records_are_dropped_between_matched_ones() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(
            &dir,
            "contigs.fasta",
            ">NODE_1_length_10_cov_1.0\nAAAA\n>NODE_2_length_10_cov_1.0\nCCCC\n\
             >NODE_3_length_10_cov_1.0\nGGGG\n",
        );
        let out = dir.path().join("matches.fasta");
        let nodes = node_map(&[
            "NODE_1_length_10_cov_1.0\tSalmonella enterica\t10",
            "NODE_3_length_10_cov_1.0\tSalmonella bongori\t10",
        ]);
        extract_contigs(&contigs, &nodes, &out, "\t").unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            ">NODE_1_length_10 Salmonella enterica10\nAAAA\n>NODE_3_length_10 Salmonella bongori10\nGGGG\n"
        );
    }

    #[test]
    fn single_segment_node_is_emitted_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(&dir, "contigs.fasta", ">CONTIG1 assembled\nACGT\n");
        let out = dir.path().join("matches.fasta");
        let nodes = node_map(&["CONTIG1\tVibrio cholerae\t600"]);
        extract_contigs(&contigs, &nodes, &out, "\t").unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            ">CONTIG1 Vibrio cholerae600\nACGT\n"
        );
    }

    #[test]
    fn first_inserted_node_wins_an_ambiguous_header() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(&dir, "contigs.fasta", ">NODE_12_extra\nACGT\n");
        let out = dir.path().join("matches.fasta");
        // "NODE_1" is a substring of ">NODE_12_extra" too; insertion order
        // decides which hit supplies the header.
        let nodes = node_map(&[
            "NODE_1\tSalmonella enterica\t1000",
            "NODE_12\tListeria monocytogenes\t800",
        ]);
        extract_contigs(&contigs, &nodes, &out, "\t").unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            ">NODE Salmonella enterica1000\nACGT\n"
        );
    }

    #[test]
    fn output_is_created_and_truncated_even_when_nothing_matches() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(&dir, "contigs.fasta", ">NODE_9_length_5_cov_1.0\nACGT\n");
        let out = write_file(&dir, "matches.fasta", "stale content\n");
        let nodes = node_map(&["NODE_1_length_10_cov_2.0\tSalmonella enterica\t10"]);
        extract_contigs(&contigs, &nodes, &out, "\t").unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "");
    }

    #[test]
    fn missing_contig_file_is_input_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("matches.fasta");
        let nodes = node_map(&["NODE_1\tSalmonella enterica\t10"]);
        let err = extract_contigs(&dir.path().join("missing.fasta"), &nodes, &out, "\t")
            .unwrap_err();
        assert!(matches!(err, BlastnExtractError::InputNotFound { .. }));
    }

    #[test]
    fn uncreatable_output_is_an_output_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let contigs = write_file(&dir, "contigs.fasta", ">NODE_1\nACGT\n");
        let out = dir.path().join("no_such_dir").join("matches.fasta");
        let nodes = node_map(&["NODE_1\tSalmonella enterica\t10"]);
        let err = extract_contigs(&contigs, &nodes, &out, "\t").unwrap_err();
        assert!(matches!(err, BlastnExtractError::OutputWrite { .. }));
    }
}
