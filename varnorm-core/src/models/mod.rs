pub mod interval;
pub mod sequence;
pub mod strand;

// re-export for cleaner imports
pub use self::interval::Interval;
pub use self::sequence::{ReferenceSequence, SequenceWindow};
pub use self::strand::Strand;
