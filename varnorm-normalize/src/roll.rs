//! Rolling: how far a set of alleles can be circularly permuted along the
//! reference without changing the sequence they produce.
//!
//! Both functions step one residue at a time away from the interval and
//! compare the reference residue they walk onto with the residue every
//! (non-empty) allele would shift out at that distance. Empty alleles
//! impose no constraint, so a set of empty alleles rolls all the way to the
//! bound.

use varnorm_core::{ReferenceSequence, SequenceError};

fn non_empty<A: AsRef<[u8]>>(alleles: &[A]) -> Vec<&[u8]> {
    alleles
        .iter()
        .map(|a| a.as_ref())
        .filter(|a| !a.is_empty())
        .collect()
}

/// Roll left: find how far alleles can be circularly shifted left in the reference.
///
/// `start` is the current left edge of the interval (interbase), `bound` is
/// the leftmost allowed position. The first residue examined is
/// `start - 1`; the last possible one is `bound`.
pub fn roll_left<S, A>(
    sequence: &S,
    alleles: &[A],
    start: usize,
    bound: usize,
) -> Result<usize, SequenceError>
where
    S: ReferenceSequence + ?Sized,
    A: AsRef<[u8]>,
{
    let alleles = non_empty(alleles);
    if start <= bound {
        return Ok(0);
    }

    let max_d = start - bound;
    let mut d = 0;
    while d < max_d {
        let residue = sequence.residue(start - 1 - d)?;
        let mismatched = alleles.iter().any(|allele| {
            let len = allele.len();
            // circular index counted from the end of the allele
            allele[(len - (d + 1) % len) % len] != residue
        });
        if mismatched {
            break;
        }
        d += 1;
    }
    Ok(d)
}

/// Roll right: find how far alleles can be circularly shifted right in the reference.
///
/// `end` is the current right edge of the interval (interbase), `bound` is
/// the rightmost allowed position (exclusive). The first residue examined is
/// `end`; the last possible one is `bound - 1`.
pub fn roll_right<S, A>(
    sequence: &S,
    alleles: &[A],
    end: usize,
    bound: usize,
) -> Result<usize, SequenceError>
where
    S: ReferenceSequence + ?Sized,
    A: AsRef<[u8]>,
{
    let alleles = non_empty(alleles);
    if end >= bound {
        return Ok(0);
    }

    let max_d = bound - end;
    let mut d = 0;
    while d < max_d {
        let residue = sequence.residue(end + d)?;
        if alleles.iter().any(|allele| allele[d % allele.len()] != residue) {
            break;
        }
        d += 1;
    }
    Ok(d)
}
