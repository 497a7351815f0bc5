/// Newton polynomial interpolation
pub mod newton;
/// Sampling points
pub mod point;
