use std::fmt::{self, Display};

use crate::{solve::Solution, traits::WithVars};

// Plain-text report, one coefficient per line
impl Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Degree m = {}", self.degree())?;
        writeln!(f)?;
        writeln!(f, "Coefficients (a0 + a1 x + ... + am x^m):")?;
        writeln!(f)?;
        for (i, c) in self.poly().coeff().iter().enumerate() {
            writeln!(f, "a{i} = {c}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Equivalent integer-coefficient polynomial Q(x) = D * P(x), with D = {}:",
            self.int_form().scale()
        )?;
        write!(f, "Q(x) = {}", self.int_form().with_vars(&["x"]))
    }
}
