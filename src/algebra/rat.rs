use std::{
    fmt::{self, Display},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use num_traits::Signed;
use rug::{ops::NegAssign, Integer};
use thiserror::Error;

use crate::traits::{One, TryDiv, Zero};

/// Attempted division by zero
#[derive(
    Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Error,
)]
#[error("Division by zero")]
pub struct DivisionByZero;

/// Exact rational number in canonical form
///
/// The denominator is always positive and coprime to the numerator,
/// so two `Rat`s are equal iff their numerators and denominators are.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rat {
    num: Integer,
    den: Integer,
}

impl Rat {
    /// Construct `num / den` in canonical form
    pub fn new(
        num: impl Into<Integer>,
        den: impl Into<Integer>,
    ) -> Result<Self, DivisionByZero> {
        let den = den.into();
        if den.is_zero() {
            return Err(DivisionByZero);
        }
        Ok(Self::from_num_den_normalised(num.into(), den))
    }

    fn from_num_den_normalised(mut num: Integer, mut den: Integer) -> Self {
        debug_assert!(!den.is_zero());
        if den.is_negative() {
            num.neg_assign();
            den.neg_assign();
        }
        let gcd = gcd(&num, &den);
        if !gcd.is_one() {
            num.div_exact_mut(&gcd);
            den.div_exact_mut(&gcd);
        }
        Self { num, den }
    }

    pub fn num(&self) -> &Integer {
        &self.num
    }

    pub fn den(&self) -> &Integer {
        &self.den
    }

    pub fn into_num_den(self) -> (Integer, Integer) {
        (self.num, self.den)
    }

    pub fn is_integer(&self) -> bool {
        self.den.is_one()
    }

    pub fn recip(&self) -> Result<Self, DivisionByZero> {
        Self::new(self.den.clone(), self.num.clone())
    }
}

/// Greatest common divisor, always non-negative
///
/// `gcd(a, 0)` is `|a|`.
pub fn gcd(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.gcd_ref(b))
}

/// Least common multiple, always non-negative
pub fn lcm(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.lcm_ref(b))
}

impl Default for Rat {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Rat {
    fn zero() -> Self {
        Self {
            num: Integer::zero(),
            den: Integer::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rat {
    fn one() -> Self {
        Self {
            num: Integer::one(),
            den: Integer::one(),
        }
    }

    fn is_one(&self) -> bool {
        self.num.is_one() && self.den.is_one()
    }
}

impl From<Integer> for Rat {
    fn from(num: Integer) -> Self {
        Self {
            num,
            den: Integer::one(),
        }
    }
}

impl From<&Integer> for Rat {
    fn from(num: &Integer) -> Self {
        Self::from(num.clone())
    }
}

impl From<i64> for Rat {
    fn from(num: i64) -> Self {
        Self::from(Integer::from(num))
    }
}

impl<'a, 'b> Add<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn add(self, rhs: &'b Rat) -> Self::Output {
        let lhs_num = Integer::from(&self.num * &rhs.den);
        let rhs_num = Integer::from(&rhs.num * &self.den);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::from_num_den_normalised(lhs_num + rhs_num, den)
    }
}

impl<'a, 'b> Sub<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn sub(self, rhs: &'b Rat) -> Self::Output {
        let lhs_num = Integer::from(&self.num * &rhs.den);
        let rhs_num = Integer::from(&rhs.num * &self.den);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::from_num_den_normalised(lhs_num - rhs_num, den)
    }
}

impl<'a, 'b> Mul<&'b Rat> for &'a Rat {
    type Output = Rat;

    fn mul(self, rhs: &'b Rat) -> Self::Output {
        let num = Integer::from(&self.num * &rhs.num);
        let den = Integer::from(&self.den * &rhs.den);
        Rat::from_num_den_normalised(num, den)
    }
}

macro_rules! impl_binop_variants {
    ( $( $op:ident, $fn:ident, $op_assign:ident, $fn_assign:ident );* ) => {
        $(
            impl $op<Rat> for Rat {
                type Output = Rat;

                fn $fn(self, rhs: Rat) -> Self::Output {
                    <&Rat as $op<&Rat>>::$fn(&self, &rhs)
                }
            }

            impl $op<&Rat> for Rat {
                type Output = Rat;

                fn $fn(self, rhs: &Rat) -> Self::Output {
                    <&Rat as $op<&Rat>>::$fn(&self, rhs)
                }
            }

            impl $op<Rat> for &Rat {
                type Output = Rat;

                fn $fn(self, rhs: Rat) -> Self::Output {
                    <&Rat as $op<&Rat>>::$fn(self, &rhs)
                }
            }

            impl $op_assign<&Rat> for Rat {
                fn $fn_assign(&mut self, rhs: &Rat) {
                    *self = <&Rat as $op<&Rat>>::$fn(self, rhs);
                }
            }

            impl $op_assign for Rat {
                fn $fn_assign(&mut self, rhs: Rat) {
                    *self = <&Rat as $op<&Rat>>::$fn(self, &rhs);
                }
            }
        )*
    };
}

impl_binop_variants!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign
);

impl Neg for Rat {
    type Output = Rat;

    fn neg(mut self) -> Self::Output {
        self.num.neg_assign();
        self
    }
}

impl Neg for &Rat {
    type Output = Rat;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<'a, 'b> TryDiv<&'b Rat> for &'a Rat {
    type Output = Rat;
    type Error = DivisionByZero;

    fn try_div(self, rhs: &'b Rat) -> Result<Self::Output, Self::Error> {
        if rhs.is_zero() {
            return Err(DivisionByZero);
        }
        let num = Integer::from(&self.num * &rhs.den);
        let den = Integer::from(&self.den * &rhs.num);
        Ok(Rat::from_num_den_normalised(num, den))
    }
}

impl TryDiv<&Rat> for Rat {
    type Output = Rat;
    type Error = DivisionByZero;

    fn try_div(self, rhs: &Rat) -> Result<Self::Output, Self::Error> {
        (&self).try_div(rhs)
    }
}

impl Display for Rat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.den.is_one() {
            write!(f, "{}", self.num)
        } else {
            write!(f, "{}/{}", self.num, self.den)
        }
    }
}

#[cfg(test)]
mod tests {
    use log::debug;
    use rand::Rng;
    use rand_xoshiro::rand_core::SeedableRng;

    use super::*;
    use crate::_test_util::gen_int;

    const NTESTS: u32 = 1000;

    fn log_init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn is_canonical(r: &Rat) -> bool {
        r.den().is_positive() && gcd(r.num(), r.den()).is_one()
    }

    #[test]
    fn normalise() {
        log_init();

        let r = Rat::new(6, -4).unwrap();
        assert_eq!(r.num(), &-3);
        assert_eq!(r.den(), &2);

        let r = Rat::new(-6, -4).unwrap();
        assert_eq!(r, Rat::new(3, 2).unwrap());

        let r = Rat::new(0, -17).unwrap();
        assert!(r.is_zero());
        assert_eq!(r.den(), &1);
        assert_eq!(r, Rat::zero());

        assert_eq!(Rat::new(1, 0), Err(DivisionByZero));
        assert_eq!(Rat::new(0, 0), Err(DivisionByZero));
    }

    #[test]
    fn arithmetic() {
        log_init();

        let half = Rat::new(1, 2).unwrap();
        let third = Rat::new(1, 3).unwrap();
        assert_eq!(&half + &third, Rat::new(5, 6).unwrap());
        assert_eq!(&half - &third, Rat::new(1, 6).unwrap());
        assert_eq!(&third - &half, Rat::new(-1, 6).unwrap());
        assert_eq!(&half * &third, Rat::new(1, 6).unwrap());
        assert_eq!((&half).try_div(&third), Ok(Rat::new(3, 2).unwrap()));
        assert_eq!(-&half, Rat::new(-1, 2).unwrap());
        assert_eq!(&half + &half, Rat::one());
        assert_eq!(&half - &half, Rat::zero());

        let mut acc = Rat::zero();
        acc += &half;
        acc -= third.clone();
        acc *= &Rat::from(6);
        assert_eq!(acc, Rat::one());
    }

    #[test]
    fn divide_by_zero() {
        log_init();

        let one = Rat::one();
        assert_eq!((&one).try_div(&Rat::zero()), Err(DivisionByZero));
        assert_eq!(Rat::zero().recip(), Err(DivisionByZero));
        assert_eq!(Rat::new(-2, 3).unwrap().recip(), Rat::new(-3, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Rat::from(7).to_string(), "7");
        assert_eq!(Rat::from(-7).to_string(), "-7");
        assert_eq!(Rat::zero().to_string(), "0");
        assert_eq!(Rat::new(3, -9).unwrap().to_string(), "-1/3");
        assert_eq!(Rat::new(10, 4).unwrap().to_string(), "5/2");
    }

    #[test]
    fn gcd_lcm() {
        let i = |n: i64| Integer::from(n);
        assert_eq!(gcd(&i(12), &i(18)), 6);
        assert_eq!(gcd(&i(-12), &i(18)), 6);
        assert_eq!(gcd(&i(5), &i(0)), 5);
        assert_eq!(gcd(&i(0), &i(7)), 7);
        assert_eq!(lcm(&i(4), &i(6)), 12);
        assert_eq!(lcm(&i(1), &i(9)), 9);
    }

    #[test]
    fn canonical_form() {
        log_init();

        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
        for _ in 0..NTESTS {
            let a = Rat::new(gen_int(&mut rng), gen_int(&mut rng) + 1u32);
            let b = Rat::new(gen_int(&mut rng), gen_int(&mut rng) - 1u32);
            let (Ok(a), Ok(b)) = (a, b) else {
                continue;
            };
            debug!("{a} {b}");
            assert!(is_canonical(&a));
            assert!(is_canonical(&b));
            let sum = &a + &b;
            let diff = &a - &b;
            let prod = &a * &b;
            assert!(is_canonical(&sum));
            assert!(is_canonical(&diff));
            assert!(is_canonical(&prod));
            assert_eq!(&sum - &b, a);
            assert_eq!(&diff + &b, a);
            if !b.is_zero() {
                let quot = (&a).try_div(&b).unwrap();
                assert!(is_canonical(&quot));
                assert_eq!(&quot * &b, a);
            }
            if rng.gen_bool(0.5) {
                assert_eq!(-(-a.clone()), a);
            }
        }
    }
}
