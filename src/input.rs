use std::collections::BTreeMap;

use rug::Integer;
use serde::Deserialize;
use thiserror::Error;

/// Input document with the sampling points
///
/// ```json
/// {
///     "keys": { "n": 3, "k": 2 },
///     "1": { "base": "10", "value": "4" },
///     "2": { "base": 2, "value": "111" },
///     "3": { "base": "16", "value": "a" }
/// }
/// ```
///
/// Every member other than `keys` is one encoded point, with the
/// member name as the decimal `x` coordinate.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct ShareDoc {
    pub keys: Keys,
    #[serde(flatten)]
    pub shares: BTreeMap<String, Share>,
}

#[derive(Copy, Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Keys {
    /// Declared number of points
    pub n: usize,
    /// Number of points to use for the reconstruction
    pub k: usize,
}

/// An encoded function value
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Share {
    pub base: Base,
    pub value: String,
}

/// Base given either as a number or as a decimal string
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
#[serde(untagged)]
pub enum Base {
    Num(u32),
    Str(String),
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Malformed input document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Point key '{0}' is not a decimal integer")]
    BadKey(String),
    #[error("Base '{base}' of point '{key}' is not a number")]
    BadBase { key: String, base: String },
    #[error("keys.k must be at least 1")]
    ZeroThreshold,
    #[error("Need {k} points, but only {found} were given")]
    TooFewPoints { k: usize, found: usize },
}

impl ShareDoc {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Base {
    pub(crate) fn resolve(&self, key: &str) -> Result<u32, InputError> {
        match self {
            Base::Num(base) => Ok(*base),
            Base::Str(base) => {
                base.trim().parse().map_err(|_| InputError::BadBase {
                    key: key.to_owned(),
                    base: base.to_owned(),
                })
            }
        }
    }
}

pub(crate) fn parse_key(key: &str) -> Result<Integer, InputError> {
    let is_decimal = key
        .strip_prefix('-')
        .unwrap_or(key)
        .bytes()
        .all(|b| b.is_ascii_digit());
    if key.is_empty() || !is_decimal {
        return Err(InputError::BadKey(key.to_owned()));
    }
    Integer::from_str_radix(key, 10)
        .map_err(|_| InputError::BadKey(key.to_owned()))
}
