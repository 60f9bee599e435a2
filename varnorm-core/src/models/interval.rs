use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represent a range from [start, end) in interbase coordinates.
/// Inclusive start, exclusive of end; `start == end` is a zero-width
/// junction between two residues (the site of an insertion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Interval {
    pub start: usize,
    pub end: usize,
}

impl Interval {
    pub fn new(start: usize, end: usize) -> Self {
        Interval { start, end }
    }

    ///
    /// Number of residues covered by the interval
    ///
    #[inline]
    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// `start <= end`
    #[inline]
    pub fn is_ordered(&self) -> bool {
        self.start <= self.end
    }

    /// Check whether `other` lies entirely within this interval
    #[inline]
    pub fn contains(&self, other: &Interval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl From<(usize, usize)> for Interval {
    fn from((start, end): (usize, usize)) -> Self {
        Interval { start, end }
    }
}

impl From<Interval> for (usize, usize) {
    fn from(interval: Interval) -> Self {
        (interval.start, interval.end)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_width_and_empty() {
        assert_eq!(Interval::new(22, 25).width(), 3);
        assert_eq!(Interval::new(22, 22).width(), 0);
        assert!(Interval::new(22, 22).is_empty());
        assert!(!Interval::new(22, 23).is_empty());
    }

    #[rstest]
    #[case((0, 29), (19, 29), true)]
    #[case((20, 24), (19, 22), false)]
    #[case((20, 24), (24, 24), true)]
    fn test_contains(#[case] outer: (usize, usize), #[case] inner: (usize, usize), #[case] expected: bool) {
        assert_eq!(Interval::from(outer).contains(&Interval::from(inner)), expected);
    }

    #[rstest]
    fn test_display_and_tuple() {
        let interval = Interval::new(19, 29);
        assert_eq!(interval.to_string(), "[19,29)");
        assert_eq!(<(usize, usize)>::from(interval), (19, 29));
        assert!(!Interval::new(5, 4).is_ordered());
    }
}
