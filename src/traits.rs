use rug::Integer;

pub trait Eval<T> {
    type Output;

    fn eval(&self, pt: &T) -> Self::Output;
}

// division that can fail, e.g. for a zero divisor
pub trait TryDiv<Rhs = Self> {
    type Output;
    type Error;

    fn try_div(self, rhs: Rhs) -> Result<Self::Output, Self::Error>;
}

// custom Zero trait that doesn't require Add
pub trait Zero {
    fn zero() -> Self;
    fn is_zero(&self) -> bool;
}

impl Zero for Integer {
    fn zero() -> Self {
        Integer::new()
    }

    fn is_zero(&self) -> bool {
        self.cmp0().is_eq()
    }
}

// custom One trait that doesn't require Mul
pub trait One {
    fn one() -> Self;
    fn is_one(&self) -> bool;
}

impl One for Integer {
    fn one() -> Self {
        Integer::from(1)
    }

    fn is_one(&self) -> bool {
        *self == 1
    }
}

pub trait WithVars<'a, V> {
    type Output;

    fn with_vars(&'a self, vars: V) -> Self::Output;
}
