//! Interconversion between HGVS ("human") and interbase coordinates.
//!
//! ```text
//!                   : A : C : G : T : A : C :
//!   human/hgvs  h   :-3 :-2 :-1 : 1 : 2 : 3 :
//!   interbase   i  -3  -2  -1   0   1   2   3
//! ```
//!
//! Human coordinates are 1-based, inclusive and have no 0. Interbase
//! coordinates name the junctions between residues and are always handled as
//! `start, end` pairs. Positions upstream of a feature are negative in both
//! systems, so these functions work on signed values.

use crate::errors::CoordinateError;

fn human_to_continuous(c: i64) -> Result<i64, CoordinateError> {
    match c {
        0 => Err(CoordinateError::ZeroHumanCoordinate),
        c if c > 0 => Ok(c - 1),
        c => Ok(c),
    }
}

fn continuous_to_human(c: i64) -> i64 {
    if c >= 0 { c + 1 } else { c }
}

///
/// Convert a start,end interval in inclusive, discontinuous HGVS coordinates
/// (..,-2,-1,1,2,..) to continuous interbase (right-open) coordinates
/// (..,-2,-1,0,1,..).
///
/// # Arguments
/// - start: first residue, human coordinates
/// - end: last residue, human coordinates (optional)
///
pub fn human_to_interbase(
    start: i64,
    end: Option<i64>,
) -> Result<(i64, Option<i64>), CoordinateError> {
    let start_i = human_to_continuous(start)?;
    let end_i = end.map(|e| human_to_continuous(e).map(|c| c + 1)).transpose()?;
    Ok((start_i, end_i))
}

///
/// Convert a start,end interval in continuous interbase (right-open)
/// coordinates to discontinuous HGVS coordinates. The end is converted
/// through the last covered residue, so an interval ending at junction 0
/// ends at human -1.
///
pub fn interbase_to_human(start: i64, end: Option<i64>) -> (i64, Option<i64>) {
    (
        continuous_to_human(start),
        end.map(|e| continuous_to_human(e - 1)),
    )
}
