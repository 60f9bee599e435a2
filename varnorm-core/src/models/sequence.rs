//! Read access to reference residues.
//!
//! The normalizer never owns the reference; it only asks for residues by
//! interbase position through [`ReferenceSequence`]. Plain strings and byte
//! buffers implement it directly, and [`SequenceWindow`] covers the common
//! case where only a region of a much larger sequence has been loaded.

use std::borrow::Cow;

use crate::errors::SequenceError;

/// A reference sequence that can be sliced by interbase coordinates.
pub trait ReferenceSequence {
    /// Total length, when known. Sources that can't report a length force
    /// callers to supply explicit bounds.
    fn length(&self) -> Option<usize>;

    /// Residues in `[start, end)`.
    fn slice(&self, start: usize, end: usize) -> Result<Cow<'_, [u8]>, SequenceError>;

    /// The residue at `pos`.
    fn residue(&self, pos: usize) -> Result<u8, SequenceError> {
        let residues = self.slice(pos, pos + 1)?;
        residues.first().copied().ok_or(SequenceError::OutOfRange {
            start: pos,
            end: pos + 1,
            len: self.length().unwrap_or(pos),
        })
    }
}

impl ReferenceSequence for [u8] {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }

    fn slice(&self, start: usize, end: usize) -> Result<Cow<'_, [u8]>, SequenceError> {
        if start > end || end > self.len() {
            return Err(SequenceError::OutOfRange {
                start,
                end,
                len: self.len(),
            });
        }
        Ok(Cow::Borrowed(&self[start..end]))
    }

    fn residue(&self, pos: usize) -> Result<u8, SequenceError> {
        self.get(pos).copied().ok_or(SequenceError::OutOfRange {
            start: pos,
            end: pos + 1,
            len: self.len(),
        })
    }
}

impl ReferenceSequence for str {
    fn length(&self) -> Option<usize> {
        self.as_bytes().length()
    }

    fn slice(&self, start: usize, end: usize) -> Result<Cow<'_, [u8]>, SequenceError> {
        self.as_bytes().slice(start, end)
    }

    fn residue(&self, pos: usize) -> Result<u8, SequenceError> {
        self.as_bytes().residue(pos)
    }
}

impl ReferenceSequence for Vec<u8> {
    fn length(&self) -> Option<usize> {
        self.as_slice().length()
    }

    fn slice(&self, start: usize, end: usize) -> Result<Cow<'_, [u8]>, SequenceError> {
        self.as_slice().slice(start, end)
    }

    fn residue(&self, pos: usize) -> Result<u8, SequenceError> {
        self.as_slice().residue(pos)
    }
}

impl ReferenceSequence for String {
    fn length(&self) -> Option<usize> {
        self.as_str().length()
    }

    fn slice(&self, start: usize, end: usize) -> Result<Cow<'_, [u8]>, SequenceError> {
        self.as_str().slice(start, end)
    }

    fn residue(&self, pos: usize) -> Result<u8, SequenceError> {
        self.as_str().residue(pos)
    }
}

impl<T: ReferenceSequence + ?Sized> ReferenceSequence for &T {
    fn length(&self) -> Option<usize> {
        (**self).length()
    }

    fn slice(&self, start: usize, end: usize) -> Result<Cow<'_, [u8]>, SequenceError> {
        (**self).slice(start, end)
    }

    fn residue(&self, pos: usize) -> Result<u8, SequenceError> {
        (**self).residue(pos)
    }
}

///
/// A loaded region of a larger sequence, addressed with the coordinates of
/// the full sequence. Its total length is unknown, so normalizing against a
/// window needs explicit bounds that fall inside [`SequenceWindow::extent`].
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceWindow<'a> {
    offset: usize,
    residues: &'a [u8],
}

impl<'a> SequenceWindow<'a> {
    pub fn new(offset: usize, residues: &'a [u8]) -> Self {
        SequenceWindow { offset, residues }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Absolute `(start, end)` covered by the window.
    pub fn extent(&self) -> (usize, usize) {
        (self.offset, self.offset + self.residues.len())
    }

    fn out_of_range(&self, start: usize, end: usize) -> SequenceError {
        SequenceError::OutOfRange {
            start,
            end,
            len: self.offset + self.residues.len(),
        }
    }
}

impl ReferenceSequence for SequenceWindow<'_> {
    fn length(&self) -> Option<usize> {
        None
    }

    fn slice(&self, start: usize, end: usize) -> Result<Cow<'_, [u8]>, SequenceError> {
        let (low, high) = self.extent();
        if start > end || start < low || end > high {
            return Err(self.out_of_range(start, end));
        }
        Ok(Cow::Borrowed(&self.residues[start - low..end - low]))
    }

    fn residue(&self, pos: usize) -> Result<u8, SequenceError> {
        pos.checked_sub(self.offset)
            .and_then(|i| self.residues.get(i).copied())
            .ok_or_else(|| self.out_of_range(pos, pos + 1))
    }
}
