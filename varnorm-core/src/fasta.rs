//! In-memory FASTA loading.
//!
//! Whole records are read into memory and uppercased; there is no support for
//! `.fai` indexes or random access. This is meant for the reference slices a
//! normalization run needs, not for streaming whole genomes.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, bail};
use fxhash::FxHashMap;
use log::debug;

use crate::utils::get_dynamic_reader;

/// Parse a FASTA header line (without the leading '>') into name and description.
///
/// The sequence ID is the first word (up to first whitespace), and everything
/// after is the description.
///
/// ```
/// use varnorm_core::fasta::parse_fasta_header;
///
/// let (name, desc) = parse_fasta_header("chr1 some description here");
/// assert_eq!(name, "chr1");
/// assert_eq!(desc, Some("some description here".to_string()));
/// ```
pub fn parse_fasta_header(header: &str) -> (String, Option<String>) {
    let header = header.trim();
    match header.split_once(char::is_whitespace) {
        Some((id, desc)) => (id.to_string(), Some(desc.trim().to_string())),
        None => (header.to_string(), None),
    }
}

/// Sequences of a FASTA file keyed by record name.
#[derive(Debug, Default, Clone)]
pub struct FastaIndex {
    names: Vec<String>,
    records: FxHashMap<String, Vec<u8>>,
}

impl FastaIndex {
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.records.get(name).map(|s| s.as_slice())
    }

    /// Record names in file order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn insert(&mut self, name: String, residues: Vec<u8>) -> Result<()> {
        if self.records.contains_key(&name) {
            bail!("Duplicate FASTA record name: {}", name);
        }
        debug!("Loaded FASTA record {} ({} residues)", name, residues.len());
        self.names.push(name.clone());
        self.records.insert(name, residues);
        Ok(())
    }
}

///
/// Read every record of a FASTA reader into memory.
///
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<FastaIndex> {
    let mut index = FastaIndex::default();
    let mut current: Option<(String, Vec<u8>)> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read FASTA line {}", line_no + 1))?;
        let line = line.trim_end();

        if let Some(header) = line.strip_prefix('>') {
            if let Some((name, residues)) = current.take() {
                index.insert(name, residues)?;
            }
            let (name, _) = parse_fasta_header(header);
            if name.is_empty() {
                bail!("Empty FASTA header on line {}", line_no + 1);
            }
            current = Some((name, Vec::new()));
        } else if line.is_empty() || line.starts_with(';') {
            continue;
        } else {
            match current.as_mut() {
                Some((_, residues)) => {
                    residues.extend(line.bytes().map(|b| b.to_ascii_uppercase()));
                }
                None => bail!("Sequence data before the first FASTA header (line {})", line_no + 1),
            }
        }
    }

    if let Some((name, residues)) = current.take() {
        index.insert(name, residues)?;
    }

    Ok(index)
}

///
/// Load a FASTA file (optionally gzip'd) into memory.
///
/// # Arguments
/// - path: path to the `.fa`/`.fasta` file, `.gz` is decompressed on the fly
///
pub fn load_fasta(path: &Path) -> Result<FastaIndex> {
    let reader = get_dynamic_reader(path)?;
    parse_fasta_reader(reader).with_context(|| format!("Failed to parse FASTA file: {:?}", path))
}
