/// Polynomials with integer coefficients and a common denominator
pub mod int_form;
/// Polynomials
pub mod poly;
/// Exact rational numbers
pub mod rat;
