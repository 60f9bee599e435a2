use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use log::{debug, info};
use rayon::prelude::*;

use varnorm_core::utils::get_dynamic_reader_w_stdin;
use varnorm_core::{FastaIndex, Interval, load_fasta};
use varnorm_normalize::{NormalizeOptions, Normalized, normalize};

use crate::normalize::handlers::{build_options, format_normalized, parse_alleles};

/// One row of the variant table.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRecord {
    pub contig: String,
    pub interval: Interval,
    pub alleles: Vec<Option<Vec<u8>>>,
}

///
/// Parse a `contig<TAB>start<TAB>end<TAB>alt[,alt..]` line. Extra columns
/// are ignored.
///
pub fn parse_variant_line(line: &str) -> Result<VariantRecord> {
    let mut fields = line.split('\t');

    let contig = fields
        .next()
        .ok_or_else(|| anyhow!("Missing contig field"))?;
    let start = fields
        .next()
        .ok_or_else(|| anyhow!("Missing start field"))?;
    let end = fields.next().ok_or_else(|| anyhow!("Missing end field"))?;
    let alts = fields
        .next()
        .ok_or_else(|| anyhow!("Missing alleles field"))?;

    let start = start
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid start coordinate: '{}'", start))?;
    let end = end
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid end coordinate: '{}'", end))?;
    if alts.trim().is_empty() {
        bail!("No alternate alleles given");
    }

    Ok(VariantRecord {
        contig: contig.trim().to_string(),
        interval: Interval::new(start, end),
        alleles: parse_alleles(alts),
    })
}

pub fn normalize_line(
    fasta: &FastaIndex,
    line: &str,
    options: &NormalizeOptions,
) -> Result<Normalized> {
    let record = parse_variant_line(line)?;
    let sequence = fasta
        .get(&record.contig)
        .ok_or_else(|| anyhow!("Contig '{}' not found in the reference", record.contig))?;
    let result = normalize(sequence, record.interval, &record.alleles, options)?;
    Ok(result)
}

///
/// Normalize every line in parallel. Results come back in input order.
///
pub fn normalize_lines(
    fasta: &FastaIndex,
    lines: &[String],
    options: &NormalizeOptions,
) -> Vec<Result<Normalized>> {
    lines
        .par_iter()
        .map(|line| normalize_line(fasta, line, options))
        .collect()
}

pub fn format_batch_line(line: &str, result: &Result<Normalized>) -> String {
    match result {
        Ok(normalized) => format!("{}\t{}", line, format_normalized(normalized)),
        Err(e) => {
            let message = format!("{:#}", e).replace(['\t', '\n'], " ");
            format!("{}\tERROR\t{}", line, message)
        }
    }
}

fn read_variant_lines(input: &str) -> Result<Vec<String>> {
    let reader = get_dynamic_reader_w_stdin(input)?;

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        lines.push(line);
    }
    Ok(lines)
}

pub fn run_batch(matches: &ArgMatches) -> Result<()> {
    let options = build_options(matches)?;

    let fasta_path = matches
        .get_one::<String>("fasta")
        .ok_or_else(|| anyhow!("A path to a FASTA file is required."))?;
    let input = matches
        .get_one::<String>("input")
        .ok_or_else(|| anyhow!("A variant table is required."))?;

    let fasta = load_fasta(Path::new(fasta_path))?;
    info!("Loaded {} sequences from {}", fasta.len(), fasta_path);

    let lines = read_variant_lines(input)?;

    let results = match matches.get_one::<usize>("threads") {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(*threads)
                .build()
                .context("Failed to configure thread pool")?;
            pool.install(|| normalize_lines(&fasta, &lines, &options))
        }
        None => normalize_lines(&fasta, &lines, &options),
    };

    let mut writer: BufWriter<Box<dyn Write>> = match matches.get_one::<String>("output") {
        Some(output) => {
            let file = File::create(output)
                .with_context(|| format!("Failed to create output file: {}", output))?;
            BufWriter::new(Box::new(file))
        }
        None => BufWriter::new(Box::new(std::io::stdout())),
    };

    let mut failed = 0;
    for (line, result) in lines.iter().zip(results.iter()) {
        if let Err(e) = result {
            debug!("Failed to normalize '{}': {:#}", line, e);
            failed += 1;
        }
        writeln!(writer, "{}", format_batch_line(line, result))?;
    }
    writer.flush()?;

    info!(
        "Normalized {} of {} variants ({} failed)",
        lines.len() - failed,
        lines.len(),
        failed
    );

    Ok(())
}
