//! Small nucleotide sequence helpers.

use log::debug;

use crate::errors::SequenceError;

#[inline]
fn complement_base(b: u8) -> u8 {
    match b {
        b'A' => b'T',
        b'C' => b'G',
        b'G' => b'C',
        b'T' => b'A',
        b'a' => b't',
        b'c' => b'g',
        b'g' => b'c',
        b't' => b'a',
        other => other,
    }
}

///
/// Complement of a nucleotide sequence. A, C, G and T (either case) are
/// swapped with their partners; every other byte is kept as is.
///
pub fn complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().map(|&b| complement_base(b)).collect()
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement_base(b)).collect()
}

pub fn replace_t_to_u(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| match b {
            b'T' => b'U',
            b't' => b'u',
            other => other,
        })
        .collect()
}

pub fn replace_u_to_t(seq: &[u8]) -> Vec<u8> {
    seq.iter()
        .map(|&b| match b {
            b'U' => b'T',
            b'u' => b't',
            other => other,
        })
        .collect()
}

///
/// Replace the middle of a sequence with `elision`, keeping `flank`
/// characters on either side. Sequences that would not get shorter are
/// returned unchanged.
///
/// ```rust
/// use varnorm_core::sequences::elide_sequence;
///
/// assert_eq!(elide_sequence("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 5, "..."), "ABCDE...VWXYZ");
/// assert_eq!(elide_sequence("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 12, "..."), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
/// ```
pub fn elide_sequence(s: &str, flank: usize, elision: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= flank + flank + elision.chars().count() {
        return s.to_string();
    }
    let head: String = chars[..flank].iter().collect();
    let tail: String = chars[chars.len() - flank..].iter().collect();
    format!("{head}{elision}{tail}")
}

///
/// Convert a sequence to its normalized representation: whitespace and `*`
/// removed, uppercased. Anything left that is not A-Z is an error.
///
pub fn normalize_sequence(seq: &str) -> Result<String, SequenceError> {
    let nseq: String = seq
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '*')
        .map(|c| c.to_ascii_uppercase())
        .collect();

    if let Some(position) = nseq.chars().position(|c| !c.is_ascii_uppercase()) {
        debug!("Input sequence: {seq}");
        debug!("Normalized sequence: {nseq}");
        debug!("First non-[A-Z] at {position}");
        return Err(SequenceError::NonAlphabetic { position });
    }
    Ok(nseq)
}
