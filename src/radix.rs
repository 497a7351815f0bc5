use rug::Integer;
use thiserror::Error;

/// Smallest supported base
pub const MIN_BASE: u32 = 2;
/// Largest supported base, using digits `0-9` and letters `a-z`
pub const MAX_BASE: u32 = 36;

const NO_DIGIT: u8 = u8::MAX;

// value of each ASCII character as a digit, or `NO_DIGIT`
const DIGIT_VALUE: [u8; 256] = {
    let mut table = [NO_DIGIT; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut i = 0;
    while i < 26 {
        table[b'a' as usize + i] = 10 + i as u8;
        table[b'A' as usize + i] = 10 + i as u8;
        i += 1;
    }
    table
};

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DecodeError {
    #[error("Bad digit '{digit}' for base {base}")]
    BadDigit { digit: char, base: u32 },
    #[error("Unsupported base {0}: must be between 2 and 36")]
    BadBase(u32),
}

/// Decode a non-negative integer from its digits in the given base
///
/// Digits are `0-9` followed by case-insensitive letters `a-z`. The
/// separators `_` and ` ` are ignored. An empty string decodes to zero.
pub fn decode(digits: &str, base: u32) -> Result<Integer, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::BadBase(base));
    }
    let mut value = Integer::new();
    for digit in digits.chars().filter(|&c| c != '_' && c != ' ') {
        let d = digit_value(digit)
            .filter(|&d| d < base)
            .ok_or(DecodeError::BadDigit { digit, base })?;
        value *= base;
        value += d;
    }
    Ok(value)
}

fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    match DIGIT_VALUE[c as usize] {
        NO_DIGIT => None,
        d => Some(d as u32),
    }
}

#[cfg(test)]
mod tests {
    use rand::{seq::SliceRandom, Rng};
    use rand_xoshiro::rand_core::SeedableRng;

    use super::*;
    use crate::_test_util::gen_int;

    const NTESTS: u32 = 1000;

    #[test]
    fn small() {
        for base in MIN_BASE..=MAX_BASE {
            assert_eq!(decode("0", base), Ok(Integer::new()));
            assert_eq!(decode("1", base), Ok(Integer::from(1)));
            assert_eq!(decode("10", base), Ok(Integer::from(base)));
            assert_eq!(decode("", base), Ok(Integer::new()));
        }
        assert_eq!(decode("11", 3), Ok(Integer::from(4)));
        assert_eq!(decode("20", 3), Ok(Integer::from(6)));
        assert_eq!(decode("ff", 16), Ok(Integer::from(255)));
        assert_eq!(decode("FF", 16), Ok(Integer::from(255)));
        assert_eq!(decode("zZ", 36), Ok(Integer::from(36 * 35 + 35)));
        assert_eq!(decode("007", 8), Ok(Integer::from(7)));
    }

    #[test]
    fn separators() {
        assert_eq!(decode("1_000_000", 10), decode("1000000", 10));
        assert_eq!(decode("de ad_be ef", 16), decode("deadbeef", 16));
        assert_eq!(decode("_ _", 2), Ok(Integer::new()));
    }

    #[test]
    fn bad_digit() {
        assert_eq!(
            decode("2", 2),
            Err(DecodeError::BadDigit { digit: '2', base: 2 })
        );
        assert_eq!(
            decode("1Z", 10),
            Err(DecodeError::BadDigit { digit: 'Z', base: 10 })
        );
        assert_eq!(
            decode("12$", 16),
            Err(DecodeError::BadDigit { digit: '$', base: 16 })
        );
        assert_eq!(
            decode("-1", 10),
            Err(DecodeError::BadDigit { digit: '-', base: 10 })
        );
        assert_eq!(
            decode("1ä", 36),
            Err(DecodeError::BadDigit { digit: 'ä', base: 36 })
        );
        assert_eq!(
            decode("1\t2", 10),
            Err(DecodeError::BadDigit { digit: '\t', base: 10 })
        );
        assert_eq!(
            DecodeError::BadDigit { digit: 'Z', base: 10 }.to_string(),
            "Bad digit 'Z' for base 10"
        );
    }

    #[test]
    fn bad_base() {
        assert_eq!(decode("0", 0), Err(DecodeError::BadBase(0)));
        assert_eq!(decode("0", 1), Err(DecodeError::BadBase(1)));
        assert_eq!(decode("0", 37), Err(DecodeError::BadBase(37)));
    }

    #[test]
    fn positional_notation() {
        let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(1);
        for _ in 0..NTESTS {
            let base = rng.gen_range(MIN_BASE..=MAX_BASE);
            let n = gen_int(&mut rng).abs();
            let mut digits = n.to_string_radix(base as i32);
            if rng.gen() {
                digits.make_ascii_uppercase();
            }
            assert_eq!(decode(&digits, base).as_ref(), Ok(&n));

            let mut with_sep: Vec<char> = digits.chars().collect();
            let pos = rng.gen_range(0..=with_sep.len());
            with_sep.insert(pos, *[' ', '_'].choose(&mut rng).unwrap());
            let with_sep: String = with_sep.into_iter().collect();
            assert_eq!(decode(&with_sep, base), Ok(n));
        }
    }
}
