mod batch;
mod normalize;

use anyhow::Result;
use clap::{Command, arg};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "varnorm";
    pub const BIN_NAME: &str = "varnorm";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Normalize sequence variants (trim, shuffle and anchor alleles) on interbase coordinates.")
        .subcommand_required(true)
        .arg(arg!(-v --verbose "Log every normalization step to stderr").global(true))
        .subcommand(normalize::cli::create_normalize_cli())
        .subcommand(batch::cli::create_batch_cli())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        //
        // SINGLE VARIANT
        //
        Some((normalize::cli::NORMALIZE_CMD, matches)) => {
            normalize::handlers::run_normalize(matches)?;
        }

        //
        // BATCH OF VARIANTS AGAINST A FASTA
        //
        Some((batch::cli::BATCH_CMD, matches)) => {
            batch::handlers::run_batch(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }
}
