//! The normalizer: trimming, shuffling and anchoring composed by mode.

use std::cmp::{max, min};

use fxhash::FxHashSet;
use log::{Level, debug, log_enabled};

use varnorm_core::{Interval, ReferenceSequence};

use crate::errors::NormalizeError;
use crate::mode::{NormalizationMode, parse_mode};
use crate::roll::{roll_left, roll_right};
use crate::trim::{trim_left, trim_right};

/// How [`normalize`] should treat a set of alleles.
///
/// The defaults match the most common use: expand through repeats, trim,
/// no anchoring, bounds spanning the whole reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Shuffling mode; `None` skips shuffling.
    pub mode: Option<NormalizationMode>,
    /// Maximal extent of normalization. Defaults to `[0, len(sequence))`.
    pub bounds: Option<Interval>,
    /// Flanking residues added on both sides. Must be 0 in VCF mode.
    pub anchor_length: usize,
    /// Trim the common prefix and suffix of the alleles.
    pub trim: bool,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            mode: Some(NormalizationMode::Expand),
            bounds: None,
            anchor_length: 0,
            trim: true,
        }
    }
}

impl NormalizeOptions {
    pub fn with_mode(mut self, mode: Option<NormalizationMode>) -> Self {
        self.mode = mode;
        self
    }

    ///
    /// Select the mode by name. The legacy `TRIMONLY` name disables shuffling
    /// and turns trimming on.
    ///
    pub fn with_mode_name(mut self, name: &str) -> Result<Self, NormalizeError> {
        let selection = parse_mode(name)?;
        self.mode = selection.mode;
        if selection.force_trim {
            self.trim = true;
        }
        Ok(self)
    }

    pub fn with_bounds(mut self, bounds: Interval) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn with_anchor_length(mut self, anchor_length: usize) -> Self {
        self.anchor_length = anchor_length;
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

/// Result of normalizing a set of alleles against a reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub interval: Interval,
    /// Normalized alleles; the first one is the reference at `interval`.
    pub alleles: Vec<Vec<u8>>,
}

impl Normalized {
    pub fn reference(&self) -> &[u8] {
        self.alleles.first().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn alleles_as_strings(&self) -> Vec<String> {
        self.alleles
            .iter()
            .map(|a| String::from_utf8_lossy(a).into_owned())
            .collect()
    }

    ///
    /// Turn the result back into normalizer input: same interval, reference
    /// allele replaced by the placeholder. Normalizing this again with the
    /// same shuffling mode gives back the same result.
    ///
    pub fn to_input(&self) -> (Interval, Vec<Option<Vec<u8>>>) {
        let alleles = self
            .alleles
            .iter()
            .enumerate()
            .map(|(i, a)| if i == 0 { None } else { Some(a.clone()) })
            .collect();
        (self.interval, alleles)
    }

    pub fn into_parts(self) -> (Interval, Vec<Vec<u8>>) {
        (self.interval, self.alleles)
    }
}

/// Shuffling actually performed once VCF has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shuffle {
    Left,
    Right,
    Expand,
}

///
/// Render the normalization state as a one-line diagram: carets mark the
/// interval on a two-columns-per-residue ruler.
///
/// ```text
///         ^-----^ [19,22): ['AGC', 'AGC']   | After mode: LEFTSHUFFLE
/// ```
pub fn render_state<A: AsRef<[u8]>>(interval: Interval, alleles: &[A], comment: &str) -> String {
    let mut line = format!("        {}^", "  ".repeat(interval.start));
    if !interval.is_empty() {
        line.push_str(&"-".repeat((interval.width() - 1) * 2 + 1));
        line.push('^');
    }
    let alleles = alleles
        .iter()
        .map(|a| format!("'{}'", String::from_utf8_lossy(a.as_ref())))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{line} [{},{}): [{alleles}]   | {comment}", interval.start, interval.end)
}

fn log_state(interval: Interval, alleles: &[Vec<u8>], comment: &str) {
    if log_enabled!(Level::Debug) {
        debug!("{}", render_state(interval, alleles, comment));
    }
}

fn pad(alleles: Vec<Vec<u8>>, left: &[u8], right: &[u8]) -> Vec<Vec<u8>> {
    alleles
        .into_iter()
        .map(|a| {
            let mut padded = Vec::with_capacity(left.len() + a.len() + right.len());
            padded.extend_from_slice(left);
            padded.extend_from_slice(&a);
            padded.extend_from_slice(right);
            padded
        })
        .collect()
}

fn resolve_bounds<S>(sequence: &S, bounds: Option<Interval>) -> Result<Interval, NormalizeError>
where
    S: ReferenceSequence + ?Sized,
{
    let bounds = match bounds {
        Some(bounds) => bounds,
        None => Interval::new(
            0,
            sequence
                .length()
                .ok_or(NormalizeError::UnknownSequenceLength)?,
        ),
    };
    if !bounds.is_ordered() {
        return Err(NormalizeError::InvalidBounds(bounds));
    }
    if let Some(len) = sequence.length() {
        if bounds.end > len {
            return Err(NormalizeError::BoundsExceedSequence { bounds, len });
        }
    }
    Ok(bounds)
}

///
/// Normalize the alleles that co-occur on `sequence` at `interval`, ensuring
/// comparable representations.
///
/// # Arguments
/// * `sequence` - The reference sequence
/// * `interval` - Location of the alleles on the reference, interbase
/// * `alleles` - The alleles to normalize. The first one stands for the
///   unchanged reference and must be `None`; it is filled in from `sequence`.
/// * `options` - Mode, bounds, anchor length and trimming
///
/// # Returns
/// The normalized interval and alleles, reference first. `alleles` itself is
/// never modified.
///
/// # Errors
/// Fails before doing any work if the interval is reversed, the first allele
/// is not `None`, VCF mode is combined with an anchor length or with trimming
/// disabled, or (when trimming) fewer than two distinct alleles remain once
/// the reference is filled in.
pub fn normalize<S, A>(
    sequence: &S,
    interval: Interval,
    alleles: &[Option<A>],
    options: &NormalizeOptions,
) -> Result<Normalized, NormalizeError>
where
    S: ReferenceSequence + ?Sized,
    A: AsRef<[u8]>,
{
    if !interval.is_ordered() {
        return Err(NormalizeError::InvalidInterval(interval));
    }

    let bounds = resolve_bounds(sequence, options.bounds)?;
    if !bounds.contains(&interval) {
        return Err(NormalizeError::IntervalOutsideBounds { interval, bounds });
    }

    let (shuffle, left_anchor, right_anchor) = match options.mode {
        Some(NormalizationMode::Vcf) => {
            if options.anchor_length != 0 {
                return Err(NormalizeError::VcfAnchorLength);
            }
            if !options.trim {
                return Err(NormalizeError::VcfTrimDisabled);
            }
            (Some(Shuffle::Left), 1, 0)
        }
        mode => {
            let shuffle = mode.map(|m| match m {
                NormalizationMode::LeftShuffle | NormalizationMode::Vcf => Shuffle::Left,
                NormalizationMode::RightShuffle => Shuffle::Right,
                NormalizationMode::Expand => Shuffle::Expand,
            });
            (shuffle, options.anchor_length, options.anchor_length)
        }
    };

    let (reference, others) = alleles
        .split_first()
        .ok_or(NormalizeError::InvalidReferenceAllele)?;
    if reference.is_some() {
        return Err(NormalizeError::InvalidReferenceAllele);
    }

    // working copy; the caller's alleles are only ever read
    let mut alleles: Vec<Vec<u8>> = Vec::with_capacity(others.len() + 1);
    alleles.push(sequence.slice(interval.start, interval.end)?.into_owned());
    for (i, allele) in others.iter().enumerate() {
        let allele = allele.as_ref().ok_or(NormalizeError::MissingAllele(i + 1))?;
        alleles.push(allele.as_ref().to_vec());
    }

    let mut interval = interval;
    log_state(interval, &alleles, "Starting state");

    if options.trim {
        let distinct: FxHashSet<&[u8]> = alleles.iter().map(Vec::as_slice).collect();
        if distinct.len() < 2 {
            return Err(NormalizeError::InsufficientDistinctAlleles);
        }

        // remove common prefix and suffix, and adjust interval to match
        let (l_trimmed, trimmed) = trim_left(&alleles);
        interval.start += l_trimmed;
        let (r_trimmed, trimmed) = trim_right(&trimmed);
        interval.end -= r_trimmed;
        alleles = trimmed;
        log_state(interval, &alleles, "After trimming");
    }

    match shuffle {
        None => {}
        Some(Shuffle::Left) => {
            let dist = roll_left(sequence, &alleles, interval.start, bounds.start)?;
            for allele in alleles.iter_mut().filter(|a| !a.is_empty()) {
                let len = allele.len();
                allele.rotate_right(dist % len);
            }
            interval.start -= dist;
            interval.end -= dist;
        }
        Some(Shuffle::Right) => {
            let dist = roll_right(sequence, &alleles, interval.end, bounds.end)?;
            for allele in alleles.iter_mut().filter(|a| !a.is_empty()) {
                let len = allele.len();
                allele.rotate_left(dist % len);
            }
            interval.start += dist;
            interval.end += dist;
        }
        Some(Shuffle::Expand) => {
            let ldist = roll_left(sequence, &alleles, interval.start, bounds.start)?;
            let rdist = roll_right(sequence, &alleles, interval.end, bounds.end)?;

            let lseq = sequence.slice(interval.start - ldist, interval.start)?;
            let rseq = sequence.slice(interval.end, interval.end + rdist)?;
            alleles = pad(alleles, &lseq, &rseq);

            interval.start -= ldist;
            interval.end += rdist;
        }
    }
    if shuffle.is_some() {
        let mode = options.mode.map(|m| m.name()).unwrap_or_default();
        log_state(interval, &alleles, &format!("After mode: {mode}"));
    }

    // add left and/or right flanking sequence
    if left_anchor > 0 || right_anchor > 0 {
        let anchor_left = max(bounds.start, interval.start.saturating_sub(left_anchor));
        let anchor_right = min(bounds.end, interval.end.saturating_add(right_anchor));
        let left_anchor_seq = sequence.slice(anchor_left, interval.start)?;
        let right_anchor_seq = sequence.slice(interval.end, anchor_right)?;
        alleles = pad(alleles, &left_anchor_seq, &right_anchor_seq);
        interval = Interval::new(anchor_left, anchor_right);
        log_state(interval, &alleles, "After anchoring");
    }

    Ok(Normalized { interval, alleles })
}
