use std::fmt::{self, Display};

use rug::Integer;

/// A sampling point of the polynomial to be reconstructed
#[derive(Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Point {
    /// Function argument
    pub x: Integer,
    /// Function value for the given argument
    pub y: Integer,
}

impl Point {
    pub fn new(x: impl Into<Integer>, y: impl Into<Integer>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
