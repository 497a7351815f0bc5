use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, MulAssign, SubAssign},
};

use rug::Integer;

use crate::{
    algebra::rat::Rat,
    traits::{Eval, One, WithVars, Zero},
};

/// Dense univariate polynomial
///
/// Coefficient `i` belongs to `x^i`. Trailing zero coefficients are
/// kept, so the length of the coefficient vector is part of the value.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DensePoly<T> {
    coeff: Vec<T>,
}

impl<T> DensePoly<T> {
    pub fn coeff(&self) -> &[T] {
        &self.coeff
    }

    pub fn into_coeff(self) -> Vec<T> {
        self.coeff
    }

    pub fn len(&self) -> usize {
        self.coeff.len()
    }

    pub fn degree(&self) -> usize {
        self.coeff.len() - 1
    }
}

impl<T: Zero> DensePoly<T> {
    /// Construct from coefficients in ascending order
    ///
    /// An empty vector gives the zero polynomial `[0]`.
    pub fn from_coeff(mut coeff: Vec<T>) -> Self {
        if coeff.is_empty() {
            coeff.push(T::zero());
        }
        Self { coeff }
    }
}

impl<T> DensePoly<T>
where
    T: Zero + for<'a> AddAssign<&'a T> + for<'a> SubAssign<&'a T>,
    for<'a> &'a T: Mul<&'a T, Output = T>,
{
    /// Multiply by the monic linear factor `(x - xi)`
    pub fn mul_linear(&self, xi: &T) -> Self {
        let mut res = Vec::from_iter((0..=self.len()).map(|_| T::zero()));
        for (i, c) in self.coeff.iter().enumerate() {
            res[i + 1] += c;
            res[i] -= &(c * xi);
        }
        Self { coeff: res }
    }
}

impl<T: Zero> Default for DensePoly<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Zero> Zero for DensePoly<T> {
    fn zero() -> Self {
        Self {
            coeff: vec![T::zero()],
        }
    }

    fn is_zero(&self) -> bool {
        self.coeff.iter().all(|c| c.is_zero())
    }
}

impl<T: One + Zero> One for DensePoly<T> {
    fn one() -> Self {
        Self {
            coeff: vec![T::one()],
        }
    }

    fn is_one(&self) -> bool {
        self.coeff
            .split_first()
            .is_some_and(|(c0, rest)| c0.is_one() && rest.iter().all(|c| c.is_zero()))
    }
}

impl<T: Zero> AddAssign<&DensePoly<T>> for DensePoly<T>
where
    for<'a> T: AddAssign<&'a T>,
{
    fn add_assign(&mut self, rhs: &Self) {
        if self.coeff.len() < rhs.coeff.len() {
            self.coeff.resize_with(rhs.coeff.len(), || T::zero())
        }
        for (lhs, rhs) in self.coeff.iter_mut().zip(rhs.coeff.iter()) {
            *lhs += rhs;
        }
    }
}

impl<T: Zero> AddAssign for DensePoly<T>
where
    for<'a> T: AddAssign<&'a T>,
{
    fn add_assign(&mut self, rhs: Self) {
        *self += &rhs;
    }
}

impl<T: Zero> Add<&DensePoly<T>> for DensePoly<T>
where
    for<'a> T: AddAssign<&'a T>,
{
    type Output = Self;

    fn add(mut self, rhs: &Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl<T: Zero> Add for DensePoly<T>
where
    for<'a> T: AddAssign<&'a T>,
{
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += &rhs;
        self
    }
}

impl<T> MulAssign<&T> for DensePoly<T>
where
    for<'a> T: MulAssign<&'a T>,
{
    fn mul_assign(&mut self, rhs: &T) {
        for c in &mut self.coeff {
            *c *= rhs;
        }
    }
}

impl<'a, 'b, T> Mul<&'b T> for &'a DensePoly<T>
where
    for<'c> &'c T: Mul<&'c T, Output = T>,
{
    type Output = DensePoly<T>;

    fn mul(self, rhs: &'b T) -> Self::Output {
        let coeff = self.coeff.iter().map(|c| c * rhs).collect();
        DensePoly { coeff }
    }
}

impl<T> Mul<&T> for DensePoly<T>
where
    for<'a> T: MulAssign<&'a T>,
{
    type Output = DensePoly<T>;

    fn mul(mut self, rhs: &T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl Eval<Rat> for DensePoly<Rat> {
    type Output = Rat;

    fn eval(&self, x: &Rat) -> Self::Output {
        self.coeff
            .iter()
            .rev()
            .fold(Rat::zero(), |acc, c| acc * x + c)
    }
}

impl Eval<Integer> for DensePoly<Rat> {
    type Output = Rat;

    fn eval(&self, x: &Integer) -> Self::Output {
        self.eval(&Rat::from(x))
    }
}

impl<'a, 'b, V: Display + 'b, T: 'a> WithVars<'a, &'b [V; 1]> for DensePoly<T> {
    type Output = FmtDensePoly<'a, 'b, V, T>;

    fn with_vars(&'a self, vars: &'b [V; 1]) -> Self::Output {
        FmtDensePoly { p: self, var: &vars[0] }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FmtDensePoly<'a, 'b, V: Display, T> {
    p: &'a DensePoly<T>,
    var: &'b V,
}

impl<'a, 'b, V: Display, T: Display + Zero> Display for FmtDensePoly<'a, 'b, V, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let var = self.var;
        let mut terms = self
            .p
            .coeff()
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero());
        let Some((pow, c)) = terms.next() else {
            return write!(f, "0");
        };
        write_term(f, c, var, pow)?;
        for (pow, c) in terms {
            write!(f, " + ")?;
            write_term(f, c, var, pow)?;
        }
        Ok(())
    }
}

fn write_term(
    f: &mut fmt::Formatter,
    c: impl Display,
    var: impl Display,
    pow: usize,
) -> fmt::Result {
    match pow {
        0 => write!(f, "{c}"),
        1 => write!(f, "({c})*{var}"),
        _ => write!(f, "({c})*{var}^{pow}"),
    }
}

impl<T: Display + Zero> Display for DensePoly<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.with_vars(&["x"]).fmt(f)
    }
}
