pub mod random;
pub mod time_utils;

pub use random::{FixedSequenceSource, RandomSource, SeededRandomSource, ThreadRandomSource};
