//! Removal of the prefix and suffix shared by a set of alleles.

/// Which end of the alleles a trim works from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum End {
    Head,
    Tail,
}

/// Number of residues every allele shares at `end`.
fn common_affix<A: AsRef<[u8]>>(alleles: &[A], end: End) -> usize {
    let Some(first) = alleles.first().map(|a| a.as_ref()) else {
        return 0;
    };
    let at = |allele: &[u8], k: usize| match end {
        End::Head => allele[k],
        End::Tail => allele[allele.len() - 1 - k],
    };
    let min_len = alleles.iter().map(|a| a.as_ref().len()).min().unwrap_or(0);

    (0..min_len)
        .take_while(|&k| {
            let residue = at(first, k);
            alleles.iter().all(|a| at(a.as_ref(), k) == residue)
        })
        .count()
}

/// Trim common prefix from a set of alleles (including the reference).
///
/// Returns `(trimmed_count, trimmed_alleles)`. Stops at the first position
/// where the alleles disagree or one of them runs out.
///
/// ```rust
/// use varnorm_normalize::trim_left;
///
/// assert_eq!(trim_left(&["CAG", "CG"]), (1, vec![b"AG".to_vec(), b"G".to_vec()]));
/// ```
pub fn trim_left<A: AsRef<[u8]>>(alleles: &[A]) -> (usize, Vec<Vec<u8>>) {
    let trimmed = common_affix(alleles, End::Head);
    let result = alleles.iter().map(|a| a.as_ref()[trimmed..].to_vec()).collect();
    (trimmed, result)
}

/// Trim common suffix from a set of alleles (including the reference).
///
/// Returns `(trimmed_count, trimmed_alleles)`.
///
/// ```rust
/// use varnorm_normalize::trim_right;
///
/// assert_eq!(trim_right(&["CAG", "CG"]), (1, vec![b"CA".to_vec(), b"C".to_vec()]));
/// ```
pub fn trim_right<A: AsRef<[u8]>>(alleles: &[A]) -> (usize, Vec<Vec<u8>>) {
    let trimmed = common_affix(alleles, End::Tail);
    let result = alleles
        .iter()
        .map(|a| {
            let a = a.as_ref();
            a[..a.len() - trimmed].to_vec()
        })
        .collect();
    (trimmed, result)
}
