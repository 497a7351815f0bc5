use log::{debug, info, warn};
use thiserror::Error;

use crate::{
    algebra::{int_form::IntForm, poly::dense::DensePoly, rat::Rat},
    input::{parse_key, InputError, Keys, ShareDoc},
    radix::{decode, DecodeError},
    rec::{
        newton::{rec_from_pts, RecError},
        point::Point,
    },
    traits::Eval,
};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("Failed to decode value of point '{key}'")]
    Decode {
        key: String,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Rec(#[from] RecError),
}

/// Reconstructed polynomial, both with rational and integer coefficients
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Solution {
    pub(crate) poly: DensePoly<Rat>,
    pub(crate) int_form: IntForm,
}

impl Solution {
    pub fn poly(&self) -> &DensePoly<Rat> {
        &self.poly
    }

    pub fn int_form(&self) -> &IntForm {
        &self.int_form
    }

    pub fn degree(&self) -> usize {
        self.poly.degree()
    }
}

/// Decode all points in the document, sorted by their `x` coordinate
pub fn decode_points(doc: &ShareDoc) -> Result<Vec<Point>, Error> {
    let mut pts = Vec::with_capacity(doc.shares.len());
    for (key, share) in &doc.shares {
        let x = parse_key(key)?;
        let base = share.base.resolve(key)?;
        let y = decode(&share.value, base).map_err(|source| Error::Decode {
            key: key.to_owned(),
            source,
        })?;
        pts.push(Point { x, y });
    }
    pts.sort_by(|a, b| a.x.cmp(&b.x));
    Ok(pts)
}

/// Reconstruct the polynomial through the first `keys.k` points
pub fn solve(doc: &ShareDoc) -> Result<Solution, Error> {
    let Keys { n, k } = doc.keys;
    let pts = decode_points(doc)?;
    if pts.len() != n {
        warn!("keys.n ({n}) != actual entries ({})", pts.len());
    }
    if k == 0 {
        return Err(InputError::ZeroThreshold.into());
    }
    if k > pts.len() {
        return Err(InputError::TooFewPoints {
            k,
            found: pts.len(),
        }
        .into());
    }
    let (chosen, unused) = pts.split_at(k);
    debug!("Using {k} of {} points", pts.len());
    let poly = rec_from_pts(chosen)?;
    check_unused(&poly, unused);
    let int_form = IntForm::from(&poly);
    Ok(Solution { poly, int_form })
}

fn check_unused(poly: &DensePoly<Rat>, unused: &[Point]) {
    for pt in unused {
        if poly.eval(&pt.x) == Rat::from(&pt.y) {
            info!("Unused point {pt} lies on the reconstructed polynomial");
        } else {
            info!("Unused point {pt} does not lie on the reconstructed polynomial");
        }
    }
}
