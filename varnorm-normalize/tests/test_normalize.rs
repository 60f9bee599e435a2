//! Normalization scenarios on a synthetic reference with a dinucleotide and a
//! trinucleotide repeat.
//!
//! ```text
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8
//!   C C C C C C C C A C A C A C A C A C T A G C A G C A G C A
//! ```

use pretty_assertions::assert_eq;
use rstest::*;

use varnorm_core::Interval;
use varnorm_normalize::{NormalizationMode, NormalizeError, NormalizeOptions, normalize};

const SEQUENCE: &str = "CCCCCCCCACACACACACTAGCAGCAGCA";

type Outcome = ((usize, usize), Vec<String>);

fn normalize_seq(
    interval: (usize, usize),
    alleles: &[Option<&str>],
    options: NormalizeOptions,
) -> Result<Outcome, NormalizeError> {
    let result = normalize(SEQUENCE, Interval::from(interval), alleles, &options)?;
    Ok((result.interval.into(), result.alleles_as_strings()))
}

fn expected(interval: (usize, usize), alleles: &[&str]) -> Outcome {
    (interval, alleles.iter().map(|a| a.to_string()).collect())
}

fn trim_only() -> NormalizeOptions {
    NormalizeOptions::default().with_mode_name("TRIMONLY").unwrap()
}

fn trim_no_shuffle() -> NormalizeOptions {
    NormalizeOptions::default().with_mode(None).with_trim(true)
}

fn shuffle(mode: NormalizationMode) -> NormalizeOptions {
    NormalizeOptions::default().with_mode(Some(mode))
}

#[rstest]
#[case::trimonly(trim_only())]
#[case::no_shuffle(trim_no_shuffle())]
fn test_trim(#[case] options: NormalizeOptions) {
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("AGCAC")], options).unwrap(),
        expected((25, 25), &["", "AC"])
    );
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("AG"), Some("AGCAC")], options).unwrap(),
        expected((24, 25), &["C", "", "CAC"])
    );
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("AC"), Some("AGCAC")], options).unwrap(),
        expected((23, 24), &["G", "", "GCA"])
    );
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("GC"), Some("AGCAC")], options).unwrap(),
        expected((22, 24), &["AG", "G", "AGCA"])
    );
}

#[rstest]
#[case::trimonly(trim_only())]
#[case::no_shuffle(trim_no_shuffle())]
fn test_anchor(#[case] options: NormalizeOptions) {
    let anchored = |interval, alleles: &[Option<&str>], anchor| {
        normalize_seq(interval, alleles, options.with_anchor_length(anchor)).unwrap()
    };

    assert_eq!(anchored((22, 25), &[None, Some("A")], 0), expected((23, 25), &["GC", ""]));
    assert_eq!(anchored((22, 25), &[None, Some("A")], 1), expected((22, 26), &["AGCA", "AA"]));
    assert_eq!(anchored((22, 25), &[None, Some("A")], 2), expected((21, 27), &["CAGCAG", "CAAG"]));

    // off the left
    assert_eq!(anchored((1, 1), &[None, Some("C")], 0), expected((1, 1), &["", "C"]));
    assert_eq!(anchored((1, 1), &[None, Some("C")], 1), expected((0, 2), &["CC", "CCC"]));
    assert_eq!(anchored((1, 1), &[None, Some("C")], 2), expected((0, 3), &["CCC", "CCCC"]));

    // off the right
    assert_eq!(anchored((28, 28), &[None, Some("C")], 0), expected((28, 28), &["", "C"]));
    assert_eq!(anchored((28, 28), &[None, Some("C")], 1), expected((27, 29), &["CA", "CCA"]));
    assert_eq!(anchored((28, 28), &[None, Some("C")], 2), expected((26, 29), &["GCA", "GCCA"]));
}

#[rstest]
#[case::left(NormalizationMode::LeftShuffle, expected((19, 19), &["", "AGC"]))]
#[case::right(NormalizationMode::RightShuffle, expected((29, 29), &["", "GCA"]))]
#[case::expand(NormalizationMode::Expand, expected((19, 29), &["AGCAGCAGCA", "AGCAGCAGCAGCA"]))]
fn test_trinuc(#[case] mode: NormalizationMode, #[case] outcome: Outcome) {
    assert_eq!(
        normalize_seq((22, 22), &[None, Some("AGC")], shuffle(mode)).unwrap(),
        outcome
    );
}

#[rstest]
fn test_bounds() {
    let options = shuffle(NormalizationMode::Expand).with_bounds(Interval::new(20, 24));
    assert_eq!(
        normalize_seq((22, 22), &[None, Some("AGC")], options).unwrap(),
        expected((20, 24), &["GCAG", "GCAGCAG"])
    );
}

#[rstest]
fn test_no_trim_no_shuffle() {
    let options = NormalizeOptions::default().with_mode(None).with_trim(false);
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("AGC")], options).unwrap(),
        expected((22, 25), &["AGC", "AGC"])
    );
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("AGCT")], options).unwrap(),
        expected((22, 25), &["AGC", "AGCT"])
    );
}

#[rstest]
#[case::left(NormalizationMode::LeftShuffle, expected((19, 22), &["AGC", "AGC"]))]
#[case::right(NormalizationMode::RightShuffle, expected((26, 29), &["GCA", "GCA"]))]
#[case::expand(NormalizationMode::Expand, expected((19, 29), &["AGCAGCAGCA", "AGCAGCAGCA"]))]
fn test_shuffle_no_trim(#[case] mode: NormalizationMode, #[case] outcome: Outcome) {
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("AGC")], shuffle(mode).with_trim(false)).unwrap(),
        outcome
    );
}

#[rstest]
fn test_multiallelic_left_shuffle() {
    // one and two extra copies of the dinucleotide unit
    assert_eq!(
        normalize_seq(
            (16, 16),
            &[None, Some("AC"), Some("ACAC")],
            shuffle(NormalizationMode::LeftShuffle)
        )
        .unwrap(),
        expected((7, 7), &["", "CA", "CACA"])
    );
}

#[rstest]
fn test_mode_string() {
    let vcf_out = expected((26, 27), &["G", "GC"]);

    let default = normalize_seq((28, 28), &[None, Some("C")], NormalizeOptions::default()).unwrap();
    assert_ne!(default, vcf_out, "not VCF output by default");

    let options = NormalizeOptions::default().with_mode_name("VCF").unwrap();
    assert_eq!(
        normalize_seq((28, 28), &[None, Some("C")], options).unwrap(),
        vcf_out,
        "mode as string recognized"
    );
}

#[rstest]
fn test_vcf_deletion_in_homopolymer() {
    let sequence = "TAAAAG";
    let options = shuffle(NormalizationMode::Vcf);
    // delete one A written at the right edge of the run
    let result = normalize(sequence, Interval::new(4, 5), &[None, Some("")], &options).unwrap();
    assert_eq!(result.interval, Interval::new(0, 2));
    assert_eq!(result.alleles_as_strings(), vec!["TA", "T"]);
}

#[rstest]
fn test_input_alleles_not_modified() {
    let alleles = vec![None, Some("AGCAC".to_string())];
    let before = alleles.clone();
    normalize_seq((22, 25), &[None, Some("AGCAC")], trim_only()).unwrap();
    normalize(SEQUENCE, Interval::new(22, 25), &alleles, &trim_only()).unwrap();
    assert_eq!(alleles, before);
}

#[rstest]
#[case::trimonly(trim_only())]
#[case::no_shuffle(trim_no_shuffle())]
fn test_error_distinct(#[case] options: NormalizeOptions) {
    assert_eq!(
        normalize_seq((22, 25), &[None, Some("AGC")], options),
        Err(NormalizeError::InsufficientDistinctAlleles)
    );
}

#[rstest]
fn test_error_ref_allele() {
    assert_eq!(
        normalize_seq((22, 25), &[Some("foo"), Some("AGC")], trim_only()),
        Err(NormalizeError::InvalidReferenceAllele)
    );
}

#[rstest]
fn test_error_vcf_mode_no_trim() {
    let options = shuffle(NormalizationMode::Vcf).with_trim(false);
    let err = normalize_seq((22, 25), &[None, Some("AGC")], options).unwrap_err();
    assert_eq!(err, NormalizeError::VcfTrimDisabled);
    assert_eq!(err.to_string(), "May not disable trimming with VCF normalization mode");
}

#[rstest]
fn test_error_unknown_mode_name() {
    assert_eq!(
        NormalizeOptions::default().with_mode_name("DIAGONAL"),
        Err(NormalizeError::UnknownMode("DIAGONAL".to_string()))
    );
}
