/// Utilities for tests and benchmarks
#[doc(hidden)]
pub mod _test_util;
pub mod traits;

/// Rational numbers and polynomials
pub mod algebra;
/// Input documents with encoded sampling points
pub mod input;
/// Decoding of integers from their digits in bases 2 to 36
pub mod radix;
/// Polynomial reconstruction algorithms
pub mod rec;
mod report;
/// Reconstruction from an input document
pub mod solve;

pub use rug::Integer;
