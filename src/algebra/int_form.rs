use std::fmt::{self, Display};

use itertools::Itertools;
use rug::Integer;

use crate::{
    algebra::{
        poly::dense::DensePoly,
        rat::{lcm, Rat},
    },
    traits::{One, WithVars},
};

/// Polynomial with integer coefficients
///
/// Obtained from a polynomial `P` with rational coefficients by
/// multiplying with the smallest positive integer `scale` such that
/// all coefficients of `scale * P` are integers.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IntForm {
    coeff: Vec<Integer>,
    scale: Integer,
}

impl IntForm {
    /// Integer coefficients in ascending order
    pub fn coeff(&self) -> &[Integer] {
        &self.coeff
    }

    /// The common denominator
    pub fn scale(&self) -> &Integer {
        &self.scale
    }

    pub fn into_coeff_scale(self) -> (Vec<Integer>, Integer) {
        (self.coeff, self.scale)
    }
}

impl From<&DensePoly<Rat>> for IntForm {
    fn from(p: &DensePoly<Rat>) -> Self {
        let scale = p
            .coeff()
            .iter()
            .fold(Integer::one(), |l, c| lcm(&l, c.den()));
        let coeff = p
            .coeff()
            .iter()
            .map(|c| {
                let mut factor = Integer::from(scale.div_exact_ref(c.den()));
                factor *= c.num();
                factor
            })
            .collect();
        Self { coeff, scale }
    }
}

impl From<DensePoly<Rat>> for IntForm {
    fn from(p: DensePoly<Rat>) -> Self {
        Self::from(&p)
    }
}

impl<'a, 'b, V: Display + 'b> WithVars<'a, &'b [V; 1]> for IntForm {
    type Output = FmtIntForm<'a, 'b, V>;

    fn with_vars(&'a self, vars: &'b [V; 1]) -> Self::Output {
        FmtIntForm { p: self, var: &vars[0] }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct FmtIntForm<'a, 'b, V: Display> {
    p: &'a IntForm,
    var: &'b V,
}

// every power is written out, including zero coefficients
impl<'a, 'b, V: Display> Display for FmtIntForm<'a, 'b, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let var = self.var;
        let terms = self
            .p
            .coeff()
            .iter()
            .enumerate()
            .map(|(pow, c)| format!("{c}*{var}^{pow}"));
        write!(f, "{}", terms.format(" + "))
    }
}

impl Display for IntForm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.with_vars(&["x"]).fmt(f)
    }
}
