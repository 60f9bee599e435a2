use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use clap::ArgMatches;
use log::debug;

use varnorm_core::{Interval, load_fasta};
use varnorm_normalize::{NormalizeConfig, NormalizeOptions, Normalized, normalize, parse_mode};

/// Placeholder for an empty allele on the command line and in output.
pub const EMPTY_ALLELE: &str = "-";

///
/// Build the normalization options: library defaults, then the config
/// file (if any), then the individual flags.
///
pub fn build_options(matches: &ArgMatches) -> Result<NormalizeOptions> {
    let mut options = NormalizeOptions::default();

    if let Some(config) = matches.get_one::<String>("config") {
        let config = NormalizeConfig::try_from(Path::new(config))
            .with_context(|| format!("Failed to read config file: {}", config))?;
        options = config.apply(options)?;
    }
    if let Some(mode) = matches.get_one::<String>("mode") {
        if parse_mode(mode)?.force_trim && matches.get_flag("no-trim") {
            bail!("--mode {} always trims and cannot be combined with --no-trim", mode);
        }
        options = options.with_mode_name(mode)?;
    }
    if let Some(anchor) = matches.get_one::<usize>("anchor") {
        options = options.with_anchor_length(*anchor);
    }
    if matches.get_flag("no-trim") {
        options = options.with_trim(false);
    }

    debug!("Normalization options: {:?}", options);
    Ok(options)
}

///
/// Parse an interbase interval written as `START,END`.
///
pub fn parse_interval(value: &str) -> Result<Interval> {
    let (start, end) = value
        .split_once(',')
        .ok_or_else(|| anyhow!("Expected START,END but got '{}'", value))?;
    let start = start
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid start coordinate in '{}'", value))?;
    let end = end
        .trim()
        .parse::<usize>()
        .with_context(|| format!("Invalid end coordinate in '{}'", value))?;
    Ok(Interval::new(start, end))
}

///
/// Parse a comma separated list of alternate alleles. The returned list
/// starts with `None`, the slot of the reference allele.
///
pub fn parse_alleles(value: &str) -> Vec<Option<Vec<u8>>> {
    let alternates = value.split(',').map(|allele| {
        let allele = allele.trim();
        if allele == EMPTY_ALLELE {
            Some(Vec::new())
        } else {
            Some(allele.to_ascii_uppercase().into_bytes())
        }
    });
    std::iter::once(None).chain(alternates).collect()
}

///
/// Render a result as `start<TAB>end<TAB>allele,allele..`.
///
pub fn format_normalized(result: &Normalized) -> String {
    let alleles = result
        .alleles_as_strings()
        .into_iter()
        .map(|allele| {
            if allele.is_empty() {
                EMPTY_ALLELE.to_string()
            } else {
                allele
            }
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{}\t{}\t{}",
        result.interval.start, result.interval.end, alleles
    )
}

fn read_reference(matches: &ArgMatches) -> Result<Vec<u8>> {
    if let Some(sequence) = matches.get_one::<String>("sequence") {
        return Ok(sequence.trim().to_ascii_uppercase().into_bytes());
    }

    let fasta = matches
        .get_one::<String>("fasta")
        .ok_or_else(|| anyhow!("Either --sequence or --fasta is required."))?;
    let contig = matches
        .get_one::<String>("contig")
        .ok_or_else(|| anyhow!("A contig name is required with --fasta."))?;

    let index = load_fasta(Path::new(fasta))?;
    let residues = index
        .get(contig)
        .ok_or_else(|| anyhow!("Contig '{}' not found in {}", contig, fasta))?;
    Ok(residues.to_vec())
}

pub fn run_normalize(matches: &ArgMatches) -> Result<()> {
    let mut options = build_options(matches)?;
    if let Some(bounds) = matches.get_one::<String>("bounds") {
        options = options.with_bounds(parse_interval(bounds)?);
    }

    let interval = matches
        .get_one::<String>("interval")
        .ok_or_else(|| anyhow!("An interval is required."))?;
    let interval = parse_interval(interval)?;

    let alleles = matches
        .get_one::<String>("alleles")
        .ok_or_else(|| anyhow!("At least one alternate allele is required."))?;
    let alleles = parse_alleles(alleles);

    let reference = read_reference(matches)?;
    let result = normalize(&reference, interval, &alleles, &options)?;

    println!("{}", format_normalized(&result));

    Ok(())
}
