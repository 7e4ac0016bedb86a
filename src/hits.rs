//! Keyword filtering of tabular BLASTn reports.
//!
//! A [`Query`] is the lowercased query string split on single spaces; a report
//! line is a [`Hit`] when every keyword occurs as a substring of the lowercased
//! line. Matching is plain containment, not word-boundary search: `enteric`
//! matches `enterica`.
//!
//! ### Example
//! ```rust
//! use blastn_extract::Query;
//! let q = Query::new("Salmonella enterica");
//! assert!(q.is_match("NODE_1\tSalmonella enterica subsp.\t1000"));
//! assert!(!q.is_match("NODE_2\tListeria monocytogenes\t900"));
//! ```

use std::io::BufRead;
use std::path::Path;

use crate::common::{open_input, read_error, BlastnExtractError};

/// A set of lowercase keywords parsed from the raw query string.
#[derive(Clone, Debug)]
pub struct Query {
    keywords: Vec<String>,
}

impl Query {
    /// Lowercase the raw query and split it on single spaces.
    ///
    /// Empty tokens from repeated spaces are kept: the empty string is a
    /// substring of every line, so they match anything and never change the
    /// result.
    pub fn new(raw: &str) -> Self {
        let keywords = raw.to_lowercase().split(' ').map(str::to_string).collect();
        Self { keywords }
    }

    /// True iff every keyword is a substring of the lowercased line.
    pub fn is_match(&self, line: &str) -> bool {
        let line = line.to_lowercase();
        self.keywords.iter().all(|kw| line.contains(kw.as_str()))
    }

    /// The parsed keywords, in query order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// One report line that matched every keyword of a query.
///
/// The line is kept exactly as it appeared in the file, trailing newline
/// stripped; casing and interior whitespace are untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    line: String,
}

impl Hit {
    pub fn new(line: impl Into<String>) -> Self {
        Self { line: line.into() }
    }

    /// The raw report line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// First delimiter-separated field: the node name joining the report to
    /// the contig file. A line without the delimiter is its own node.
    pub fn node(&self, delimiter: &str) -> &str {
        self.line.split(delimiter).next().unwrap_or(&self.line)
    }

    /// Subject title and length (fields 1 and 2) concatenated with no
    /// separator, as placed on rewritten contig headers. Missing fields
    /// simply shorten the result.
    pub fn description(&self, delimiter: &str) -> String {
        self.line.split(delimiter).skip(1).take(2).collect()
    }
}

/// Scan a report file and return every line matching `query`, in file order.
///
/// No deduplication, no result limit. An empty result is a valid outcome
/// ("no match"), not an error; callers decide whether to carry on to contig
/// extraction.
pub fn query_hits(path: &Path, query: &Query) -> Result<Vec<Hit>, BlastnExtractError> {
    let reader = open_input(path)?;
    let mut hits = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| read_error(path, e))?;
        if query.is_match(&line) {
            hits.push(Hit::new(line));
        }
    }
    Ok(hits)
}
