use std::iter::repeat_with;

use rand::Rng;
use rug::{integer::Order, Integer};

use crate::{
    algebra::{poly::dense::DensePoly, rat::Rat},
    rec::point::Point,
    traits::Eval,
};

const MAX_COEFF_U64_POW: usize = 2;

// random integer with up to `MAX_COEFF_U64_POW` 64-bit limbs and random sign
pub fn gen_int(mut rng: impl Rng) -> Integer {
    let len = rng.gen_range(1..=MAX_COEFF_U64_POW);
    let parts = Vec::from_iter((0..len).map(|_| rng.gen::<u64>()));
    let int = Integer::from_digits(&parts, Order::Lsf);
    if rng.gen() {
        int
    } else {
        -int
    }
}

pub fn gen_rat(mut rng: impl Rng) -> Rat {
    let num = gen_int(&mut rng);
    let den = Integer::from(rng.gen_range(1..=u32::MAX));
    // `den` is never zero
    Rat::new(num, den).unwrap_or_default()
}

// random polynomial with exactly `nterms` rational coefficients
pub fn gen_dense_poly(nterms: usize, mut rng: impl Rng) -> DensePoly<Rat> {
    let coeff = repeat_with(|| gen_rat(&mut rng)).take(nterms).collect();
    DensePoly::from_coeff(coeff)
}

// random polynomial with exactly `nterms` integer coefficients
pub fn gen_int_dense_poly(nterms: usize, mut rng: impl Rng) -> DensePoly<Rat> {
    let coeff = repeat_with(|| Rat::from(gen_int(&mut rng)))
        .take(nterms)
        .collect();
    DensePoly::from_coeff(coeff)
}

// `npts` points with pairwise distinct x on the given integer polynomial
pub fn gen_pts(
    poly: &DensePoly<Rat>,
    npts: usize,
    mut rng: impl Rng,
) -> Vec<Point> {
    let mut pts: Vec<Point> = Vec::with_capacity(npts);
    while pts.len() < npts {
        let x = gen_int(&mut rng);
        if pts.iter().any(|pt| pt.x == x) {
            continue;
        }
        let (y, den) = poly.eval(&x).into_num_den();
        debug_assert!(den == 1);
        pts.push(Point::new(x, y));
    }
    pts
}

// random distinct integer points, i.e. with integer function values
pub fn gen_int_pts(npts: usize, mut rng: impl Rng) -> Vec<Point> {
    let mut pts: Vec<Point> = Vec::with_capacity(npts);
    while pts.len() < npts {
        let x = gen_int(&mut rng);
        if pts.iter().any(|pt| pt.x == x) {
            continue;
        }
        pts.push(Point::new(x, gen_int(&mut rng)));
    }
    pts
}
