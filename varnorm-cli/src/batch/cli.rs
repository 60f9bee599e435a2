use clap::{Command, arg, value_parser};

use crate::normalize::cli::option_args;

pub const BATCH_CMD: &str = "batch";

pub fn create_batch_cli() -> Command {
    Command::new(BATCH_CMD)
        .about("Normalize a table of variants against a FASTA reference.")
        .long_about(
            "Normalize a table of variants against a FASTA reference.\n\n\
            Each input line holds CONTIG START END ALT[,ALT..] separated by tabs, \
            with interbase coordinates and - for an empty allele. Lines starting \
            with # are skipped. Output lines repeat the input and append the \
            normalized start, end and alleles, or ERROR and a message.",
        )
        .arg_required_else_help(true)
        .arg(arg!(-f --fasta <fasta> "FASTA file (optionally gzipped) with the reference").required(true))
        .arg(arg!(--input <input> "Variant table, or - for stdin").required(true))
        .arg(arg!(-o --output <output> "Output file (default: stdout)"))
        .arg(
            arg!(-t --threads <threads> "Number of worker threads (default: all cores)")
                .value_parser(value_parser!(usize)),
        )
        .args(option_args())
}
