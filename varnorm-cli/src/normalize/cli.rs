use clap::{Arg, ArgGroup, Command, arg, value_parser};

pub const NORMALIZE_CMD: &str = "normalize";

///
/// Arguments controlling the normalization itself, shared with `batch`.
///
pub fn option_args() -> Vec<Arg> {
    vec![
        arg!(-m --mode <mode> "LEFTSHUFFLE, RIGHTSHUFFLE, EXPAND, VCF, TRIMONLY or none"),
        arg!(-a --anchor <anchor> "Reference residues to add on each side of the result")
            .value_parser(value_parser!(usize)),
        arg!(--"no-trim" "Keep the prefix and suffix shared by all alleles"),
        arg!(-c --config <config> "TOML file with normalization defaults"),
    ]
}

pub fn create_normalize_cli() -> Command {
    Command::new(NORMALIZE_CMD)
        .about("Normalize the alleles of a single variant.")
        .arg_required_else_help(true)
        .arg(arg!(-s --sequence <sequence> "Reference sequence given inline"))
        .arg(arg!(-f --fasta <fasta> "FASTA file (optionally gzipped) with the reference").requires("contig"))
        .arg(arg!(--contig <contig> "Name of the FASTA record to use"))
        .group(
            ArgGroup::new("reference")
                .args(["sequence", "fasta"])
                .required(true),
        )
        .arg(
            arg!(-i --interval <interval> "Interbase interval of the reference allele as START,END")
                .required(true),
        )
        .arg(
            arg!(--alleles <alleles> "Alternate alleles, comma separated; - is the empty allele")
                .required(true),
        )
        .arg(arg!(-b --bounds <bounds> "Interbase limits for shuffling as LOW,HIGH"))
        .args(option_args())
}
