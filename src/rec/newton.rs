use std::fmt::{self, Display};

use log::{debug, trace};
use rug::Integer;
use thiserror::Error;

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::point::Point,
    traits::{Eval, One, TryDiv, Zero},
};

#[derive(Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RecError {
    #[error("Need points for reconstruction")]
    Empty,
    #[error("Division by zero: more than one point with x = {x}")]
    DivisionByZero { x: Integer },
}

/// Polynomial in Newton form
///
/// Represents `c[0] + c[1](x - x[0]) + ... + c[n-1](x - x[0])...(x - x[n-2])`
/// with Newton coefficients `c` and nodes `x`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NewtonPoly {
    coeff: Vec<Rat>,
    val: Vec<Integer>,
}

impl NewtonPoly {
    pub fn coeff(&self) -> &[Rat] {
        &self.coeff
    }

    pub fn nodes(&self) -> &[Integer] {
        &self.val
    }
}

/// Newton coefficients of the polynomial through the given points
///
/// The `x` values of all points must be distinct.
pub fn newton_coeffs(pts: &[Point]) -> Result<NewtonPoly, RecError> {
    debug!("Newton interpolation through {} points", pts.len());
    let Some((_, nodes)) = pts.split_last() else {
        return Err(RecError::Empty);
    };
    // divided differences, level j overwrites entries j.. in place
    let mut col = Vec::from_iter(pts.iter().map(|pt| {
        trace!("Point {pt}");
        Rat::from(&pt.y)
    }));
    for j in 1..pts.len() {
        for i in (j..pts.len()).rev() {
            let dx = Rat::from(Integer::from(&pts[i].x - &pts[i - j].x));
            let dy = &col[i] - &col[i - 1];
            col[i] = dy.try_div(&dx).map_err(|_| RecError::DivisionByZero {
                x: pts[i].x.clone(),
            })?;
        }
        trace!("Newton coefficient {j}: {}", col[j]);
    }
    let val = nodes.iter().map(|pt| pt.x.clone()).collect();
    Ok(NewtonPoly { coeff: col, val })
}

/// Reconstruct the polynomial through the given points
///
/// For `n` points the result has exactly `n` coefficients, even if
/// the leading ones vanish.
pub fn rec_from_pts(pts: &[Point]) -> Result<DensePoly<Rat>, RecError> {
    let newton = newton_coeffs(pts)?;
    let res = DensePoly::from(&newton);
    debug!("Reconstructed {res}");
    Ok(res)
}

impl From<&NewtonPoly> for DensePoly<Rat> {
    fn from(p: &NewtonPoly) -> Self {
        debug_assert_eq!(p.coeff.len(), p.val.len() + 1);
        let mut prod = Self::one();
        let mut res = Self::zero();
        for (a, x) in p.coeff.iter().zip(p.val.iter()) {
            res += &prod * a;
            prod = prod.mul_linear(&Rat::from(x));
        }
        if let Some(last) = p.coeff.last() {
            res += &prod * last;
        }
        res
    }
}

impl From<NewtonPoly> for DensePoly<Rat> {
    fn from(p: NewtonPoly) -> Self {
        Self::from(&p)
    }
}

impl Eval<Rat> for NewtonPoly {
    type Output = Rat;

    fn eval(&self, x: &Rat) -> Self::Output {
        let Some((last, rest)) = self.coeff.split_last() else {
            return Rat::zero();
        };
        rest.iter()
            .zip(self.val.iter())
            .rev()
            .fold(last.clone(), |acc, (c, node)| {
                acc * (x - Rat::from(node)) + c
            })
    }
}

impl Eval<Integer> for NewtonPoly {
    type Output = Rat;

    fn eval(&self, x: &Integer) -> Self::Output {
        self.eval(&Rat::from(x))
    }
}

impl Display for NewtonPoly {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Some((first, rest)) = self.coeff.split_first() else {
            return write!(f, "0");
        };
        write!(f, "{first}")?;
        for (i, c) in rest.iter().enumerate() {
            write!(f, " + ({c})")?;
            for node in &self.val[..=i] {
                write!(f, "*(x - {node})")?;
            }
        }
        Ok(())
    }
}
